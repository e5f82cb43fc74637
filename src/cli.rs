mod gemini;
mod reroute;
mod scenario;
mod session;
mod simulate;
mod weights;

use clap::{Parser, Subcommand};

pub use self::{reroute::reroute, session::session, simulate::simulate};
use crate::{
    cli::{reroute::RerouteArgs, session::SessionArgs, simulate::SimulateArgs},
    core::{notice::Notice, session::Session, shipment::ShipmentFilter},
    map::MapView,
    prelude::*,
    tables::{build_alternative_routes_table, build_disruptions_table, build_notices_table},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the canned disruption scenarios.
    #[clap(name = "scenarios")]
    Scenarios,

    /// Show the shipment watchlist.
    #[clap(name = "shipments")]
    Shipments(ShipmentsArgs),

    /// Predict disruptions for a scenario and flag the affected shipments.
    #[clap(name = "simulate")]
    Simulate(Box<SimulateArgs>),

    /// Simulate a scenario and calculate an optimal route for one shipment.
    #[clap(name = "reroute")]
    Reroute(Box<RerouteArgs>),

    /// Interactive dashboard session.
    #[clap(name = "session")]
    Session(Box<SessionArgs>),
}

#[derive(Parser)]
pub struct ShipmentsArgs {
    #[clap(long, value_enum, default_value_t)]
    pub filter: ShipmentFilter,
}

fn print_notices(notices: &[Notice]) {
    if !notices.is_empty() {
        println!("{}", build_notices_table(notices));
    }
}

fn print_forecast(session: &Session) {
    let Some(forecast) = session.forecast() else {
        return;
    };
    if forecast.disruptions.is_empty() {
        println!("No disruptions expected.");
        return;
    }
    println!("{}", build_disruptions_table(forecast));
    if forecast.disruptions.iter().any(|disruption| !disruption.alternative_routes.is_empty()) {
        println!("{}", build_alternative_routes_table(forecast));
    }
}

fn print_map(session: &Session) -> Result {
    let json = serde_json::to_string_pretty(&MapView::new(session))?;
    println!("{json}");
    Ok(())
}
