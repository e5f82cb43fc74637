#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod map;
mod prelude;
mod tables;

use clap::{Parser, crate_version};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command},
    core::session::Session,
    prelude::*,
    tables::{build_scenarios_table, build_shipments_table},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();

    match args.command {
        Command::Scenarios => {
            println!("{}", build_scenarios_table());
        }
        Command::Shipments(args) => {
            let session = Session::default();
            println!("{}", build_shipments_table(session.filtered_shipments(args.filter), None));
        }
        Command::Simulate(args) => {
            cli::simulate(&args).await?;
        }
        Command::Reroute(args) => {
            cli::reroute(&args).await?;
        }
        Command::Session(args) => {
            cli::session(&args).await?;
        }
    }

    info!("done!");
    Ok(())
}
