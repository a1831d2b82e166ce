use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, stdin};

use crate::{
    app::App,
    calculator::CalculatorInputs,
    cli::CatalogArgs,
    debounce::Debouncer,
    filter::FilterInputs,
    prelude::*,
    render::{Layout, build_calculation_table, render_records},
};

const HELP: &str = "\
Type to search by brand, model, or notes. Commands:
  :search TERM                              search for a term that starts with `:`
  :status [allowed|conditional|forbidden]   filter by carry-on status, empty to reset
  :min [WH]                                 minimal energy, empty to reset
  :max [WH]                                 maximal energy, empty to reset
  :calc MAH VOLTS                           compute Watt-hours
  :clear                                    reset all filters
  :reload                                   reload the catalog
  :quit";

#[derive(Parser)]
pub struct BrowseArgs {
    /// Quiet period before typed search terms and energy bounds take effect.
    #[clap(long, env = "DEBOUNCE", default_value = "300ms")]
    pub debounce: humantime::Duration,

    #[clap(long, value_enum, default_value_t = Layout::Table, env = "LAYOUT")]
    pub layout: Layout,
}

impl BrowseArgs {
    pub async fn run(self, catalog: &CatalogArgs) -> Result {
        let mut session = Session {
            app: catalog.load_app(FilterInputs::default()).await,
            debouncer: Debouncer::new(self.debounce.into()),
            layout: self.layout,
        };
        session.print_view()?;
        println!("{HELP}");
        session.run(BufReader::new(stdin()).lines()).await
    }
}

/// Single line of the interactive session.
#[derive(Debug, Eq, PartialEq)]
enum Line {
    Search(String),
    Status(String),
    MinEnergy(String),
    MaxEnergy(String),
    Calculate(CalculatorInputs),
    Clear,
    Reload,
    Help,
    Quit,
    Unknown(String),
}

impl From<&str> for Line {
    fn from(line: &str) -> Self {
        let Some(command) = line.trim().strip_prefix(':') else {
            return Self::Search(line.to_owned());
        };
        let (name, argument) = command.split_once(char::is_whitespace).unwrap_or((command, ""));
        let argument = argument.trim().to_owned();
        match name {
            "search" => Self::Search(argument),
            "status" => Self::Status(argument),
            "min" => Self::MinEnergy(argument),
            "max" => Self::MaxEnergy(argument),
            "calc" => {
                let mut parts = argument.split_whitespace();
                Self::Calculate(CalculatorInputs {
                    capacity: parts.next().unwrap_or_default().to_owned(),
                    voltage: parts.next().unwrap_or_default().to_owned(),
                })
            }
            "clear" => Self::Clear,
            "reload" => Self::Reload,
            "help" | "?" => Self::Help,
            "quit" | "q" => Self::Quit,
            _ => Self::Unknown(name.to_owned()),
        }
    }
}

struct Session {
    app: App,
    debouncer: Debouncer,
    layout: Layout,
}

impl Session {
    /// Serve the lines until the end of the stream or `:quit`.
    async fn run<R: AsyncBufRead + Unpin>(&mut self, mut lines: Lines<R>) -> Result {
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if !self.handle(Line::from(line.as_str())).await? {
                        break;
                    }
                }
                () = self.debouncer.elapsed() => {
                    self.app.apply();
                    self.print_view()?;
                }
            }
        }

        // Flush the input typed right before the end of the stream:
        if self.debouncer.is_pending() {
            self.refresh()?;
        }
        Ok(())
    }

    /// Returns `false` when the session is over.
    async fn handle(&mut self, line: Line) -> Result<bool> {
        match line {
            Line::Search(term) => {
                self.app.inputs.search = term;
                self.debouncer.trigger();
            }
            Line::MinEnergy(min_energy) => {
                self.app.inputs.min_energy = min_energy;
                self.debouncer.trigger();
            }
            Line::MaxEnergy(max_energy) => {
                self.app.inputs.max_energy = max_energy;
                self.debouncer.trigger();
            }
            Line::Status(status) => {
                self.app.inputs.status = status;
                self.refresh()?;
            }
            Line::Clear => {
                self.app.inputs = FilterInputs::default();
                self.refresh()?;
            }
            Line::Calculate(inputs) => {
                let calculation = inputs.calculate();
                let table =
                    build_calculation_table(inputs.capacity(), inputs.voltage(), &calculation);
                println!("{table}");
            }
            Line::Reload => {
                if self.app.reload_or_report().await {
                    self.debouncer.cancel();
                    self.print_view()?;
                }
            }
            Line::Help => println!("{HELP}"),
            Line::Quit => return Ok(false),
            Line::Unknown(name) => println!("Unknown command `:{name}`, try `:help`."),
        }
        Ok(true)
    }

    /// Apply the inputs right away, superseding a pending debounced refresh.
    fn refresh(&mut self) -> Result {
        self.debouncer.cancel();
        self.app.apply();
        self.print_view()
    }

    fn print_view(&self) -> Result {
        let view = self.app.view();
        println!("{} of {} batteries", view.len(), self.app.catalog().len());
        println!("{}", render_records(view, self.layout)?);
        Ok(())
    }
}
