use std::{io::Write, ops::ControlFlow};

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    cli::{gemini::GeminiArgs, print_forecast, print_map, print_notices},
    core::{
        advisor::{DisruptionPredictor, RouteOptimizer},
        dashboard::Dashboard,
        scenario::ScenarioKind,
        shipment::{ShipmentFilter, ShipmentId},
        weights::{Priority, PriorityWeights},
    },
    prelude::*,
    tables::{build_reroute_table, build_scenarios_table, build_shipments_table},
};

#[derive(Parser)]
pub struct SessionArgs {
    #[clap(flatten)]
    pub gemini: GeminiArgs,
}

/// Single line typed into the session prompt.
#[derive(Parser)]
#[command(multicall = true)]
struct Line {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand)]
enum SessionCommand {
    /// List the canned scenarios.
    Scenarios,

    /// Run a scenario through the disruption predictor.
    Simulate {
        #[arg(value_enum)]
        scenario: ScenarioKind,
    },

    /// Show the watchlist.
    Shipments {
        #[arg(value_enum, default_value_t)]
        filter: ShipmentFilter,
    },

    /// Select a shipment, at-risk ones open the reroute dialog.
    Select { id: ShipmentId },

    /// Set the cost, time, and sustainability priorities.
    Weights { cost: Priority, time: Priority, sustainability: Priority },

    /// Open the reroute dialog for the selected shipment.
    Open,

    /// Close the reroute dialog.
    Close,

    /// Calculate an optimal route for the selected shipment.
    Reroute,

    /// Hide the reroute result.
    Dismiss,

    /// Print the map view as JSON.
    Map,

    /// Show the session state.
    Status,

    /// Forget the simulation and restore the watchlist.
    Clear,

    #[command(alias = "exit")]
    Quit,
}

#[instrument(skip_all)]
pub async fn session(args: &SessionArgs) -> Result {
    let api = args.gemini.new_client()?;
    let mut dashboard = Dashboard::builder().predictor(api.clone()).optimizer(api).build();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", build_shipments_table(dashboard.session().shipments(), None));
    loop {
        print!("sentinel> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let words = line.split_whitespace().collect::<Vec<_>>();
        if words.is_empty() {
            continue;
        }
        let command = match Line::try_parse_from(words) {
            Ok(line) => line.command,
            Err(error) => {
                error.print()?;
                continue;
            }
        };
        let flow = execute(&mut dashboard, command).await;
        print_notices(&dashboard.drain_notices());
        match flow {
            Ok(ControlFlow::Continue(())) => {}
            Ok(ControlFlow::Break(())) => break,
            Err(error) => warn!("{error:#}"),
        }
    }

    info!("bye");
    Ok(())
}

async fn execute<P: DisruptionPredictor, O: RouteOptimizer>(
    dashboard: &mut Dashboard<P, O>,
    command: SessionCommand,
) -> Result<ControlFlow<()>> {
    match command {
        SessionCommand::Scenarios => {
            println!("{}", build_scenarios_table());
        }
        SessionCommand::Simulate { scenario } => {
            dashboard.run_simulation(&scenario.into()).await?;
            print_forecast(dashboard.session());
            let session = dashboard.session();
            println!("{}", build_shipments_table(session.shipments(), None));
        }
        SessionCommand::Shipments { filter } => {
            let session = dashboard.session();
            let selected = session.selected_shipment().map(|shipment| &shipment.id);
            println!("{}", build_shipments_table(session.filtered_shipments(filter), selected));
        }
        SessionCommand::Select { id } => {
            dashboard.select_shipment(&id)?;
            if dashboard.session().is_reroute_dialog_open() {
                println!("{id} is at risk, type `reroute` to calculate an optimal route.");
            }
        }
        SessionCommand::Weights { cost, time, sustainability } => {
            dashboard.set_weights(
                PriorityWeights::builder()
                    .cost(cost)
                    .time(time)
                    .sustainability(sustainability)
                    .build(),
            );
        }
        SessionCommand::Open => {
            dashboard.open_reroute_dialog()?;
        }
        SessionCommand::Close => {
            dashboard.close_reroute_dialog();
        }
        SessionCommand::Reroute => {
            dashboard.compute_reroute().await?;
            let session = dashboard.session();
            if let Some(result) = session.reroute() {
                println!("{}", build_reroute_table(result, session.weights()));
            }
        }
        SessionCommand::Dismiss => {
            dashboard.dismiss_reroute();
        }
        SessionCommand::Map => {
            print_map(dashboard.session())?;
        }
        SessionCommand::Status => {
            let session = dashboard.session();
            let weights = session.weights();
            println!("Phase: {}", session.phase());
            if let Some(shipment) = session.selected_shipment() {
                println!("Selected: {} ({})", shipment.id, shipment.status);
            }
            println!(
                "Weights: cost {}, time {}, sustainability {}",
                weights.cost, weights.time, weights.sustainability,
            );
            if !session.forecast_context().is_empty() {
                println!("Context: {}", session.forecast_context());
            }
        }
        SessionCommand::Clear => {
            dashboard.clear();
        }
        SessionCommand::Quit => {
            return Ok(ControlFlow::Break(()));
        }
    }
    Ok(ControlFlow::Continue(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<SessionCommand> {
        Ok(Line::try_parse_from(line.split_whitespace())?.command)
    }

    #[test]
    fn parse_ok() -> Result {
        assert!(matches!(
            parse("simulate hurricane")?,
            SessionCommand::Simulate { scenario: ScenarioKind::Hurricane },
        ));
        assert!(matches!(
            parse("shipments")?,
            SessionCommand::Shipments { filter: ShipmentFilter::All },
        ));
        assert!(matches!(
            parse("shipments at-risk")?,
            SessionCommand::Shipments { filter: ShipmentFilter::AtRisk },
        ));
        assert!(matches!(
            parse("select SHP-004")?,
            SessionCommand::Select { id } if id.as_str() == "SHP-004",
        ));
        assert!(matches!(parse("exit")?, SessionCommand::Quit));
        Ok(())
    }

    #[test]
    fn weights_ok() -> Result {
        let SessionCommand::Weights { cost, time, sustainability } = parse("weights 80 20 50")?
        else {
            bail!("not a weights command");
        };
        assert_eq!(u8::from(cost), 80);
        assert_eq!(u8::from(time), 20);
        assert_eq!(sustainability, Priority::NEUTRAL);
        Ok(())
    }

    #[test]
    fn parse_err() {
        assert!(parse("weights 101 0 0").is_err());
        assert!(parse("simulate tornado").is_err());
        assert!(parse("teleport").is_err());
    }
}
