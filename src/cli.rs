mod browse;
mod compute;
mod list;

use clap::{Parser, Subcommand};

pub use self::{browse::BrowseArgs, compute::ComputeArgs, list::ListArgs};
use crate::{app::App, catalog::source::CatalogSource, filter::FilterInputs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub catalog: CatalogArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Filter the catalog once and print the matches.
    #[clap(name = "list")]
    List(Box<ListArgs>),

    /// Compute Watt-hours from capacity and voltage.
    #[clap(name = "compute")]
    Compute(ComputeArgs),

    /// Filter the catalog interactively, line by line from the standard input.
    #[clap(name = "browse")]
    Browse(BrowseArgs),
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Catalog document: a local path or an HTTP(S) URL.
    #[clap(
        long = "catalog",
        env = "CATALOG",
        default_value = "data/batteries.json",
        global = true
    )]
    pub source: CatalogSource,
}

impl CatalogArgs {
    /// Load the catalog, reporting a failure without bailing out.
    pub async fn load_app(&self, inputs: FilterInputs) -> App {
        let mut app = App::new(Box::new(self.source.clone()), inputs);
        app.reload_or_report().await;
        app
    }
}
