#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod app;
mod calculator;
mod catalog;
mod cli;
mod debounce;
mod filter;
mod fmt;
mod input;
mod prelude;
mod quantity;
mod render;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();

    match args.command {
        Command::List(list) => list.run(&args.catalog).await?,
        Command::Compute(compute) => compute.run()?,
        Command::Browse(browse) => browse.run(&args.catalog).await?,
    }

    Ok(())
}
