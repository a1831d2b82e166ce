use clap::Parser;

use crate::{calculator::CalculatorInputs, prelude::*, render::build_calculation_table};

#[derive(Parser)]
pub struct ComputeArgs {
    #[clap(flatten)]
    pub inputs: CalculatorInputs,

    /// Print the result as JSON.
    #[clap(long)]
    pub json: bool,
}

impl ComputeArgs {
    pub fn run(&self) -> Result {
        let calculation = self.inputs.calculate();
        if self.json {
            println!("{}", serde_json::to_string(&calculation)?);
        } else {
            println!(
                "{}",
                build_calculation_table(self.inputs.capacity(), self.inputs.voltage(), &calculation),
            );
        }
        Ok(())
    }
}
