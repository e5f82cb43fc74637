use clap::Parser;

use crate::{
    cli::{gemini::GeminiArgs, print_forecast, print_map, print_notices, scenario::ScenarioArgs},
    core::dashboard::Dashboard,
    prelude::*,
    tables::build_shipments_table,
};

#[derive(Parser)]
pub struct SimulateArgs {
    #[clap(flatten)]
    pub gemini: GeminiArgs,

    #[clap(flatten)]
    pub scenario: ScenarioArgs,

    /// Also print the map view as JSON.
    #[clap(long)]
    pub map: bool,
}

#[instrument(skip_all)]
pub async fn simulate(args: &SimulateArgs) -> Result {
    let api = args.gemini.new_client()?;
    let mut dashboard = Dashboard::builder().predictor(api.clone()).optimizer(api).build();

    let outcome = dashboard.run_simulation(&args.scenario.scenario()).await.map(|_| ());
    print_notices(&dashboard.drain_notices());
    outcome?;

    let session = dashboard.session();
    print_forecast(session);
    println!("{}", build_shipments_table(session.shipments(), None));
    if args.map {
        print_map(session)?;
    }
    Ok(())
}
