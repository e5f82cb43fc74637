use clap::Parser;

use crate::{
    cli::{
        gemini::GeminiArgs,
        print_forecast,
        print_map,
        print_notices,
        scenario::ScenarioArgs,
        weights::WeightsArgs,
    },
    core::{dashboard::Dashboard, shipment::ShipmentId},
    prelude::*,
    tables::{build_reroute_table, build_shipments_table},
};

#[derive(Parser)]
pub struct RerouteArgs {
    #[clap(flatten)]
    pub gemini: GeminiArgs,

    #[clap(flatten)]
    pub scenario: ScenarioArgs,

    /// Shipment to reroute, for example `SHP-004`.
    #[clap(long)]
    pub shipment: ShipmentId,

    #[clap(flatten)]
    pub weights: WeightsArgs,

    /// Also print the map view as JSON.
    #[clap(long)]
    pub map: bool,
}

#[instrument(skip_all, fields(shipment_id = %args.shipment))]
pub async fn reroute(args: &RerouteArgs) -> Result {
    let api = args.gemini.new_client()?;
    let mut dashboard = Dashboard::builder().predictor(api.clone()).optimizer(api).build();

    let outcome = dashboard.run_simulation(&args.scenario.scenario()).await.map(|_| ());
    print_notices(&dashboard.drain_notices());
    outcome?;
    print_forecast(dashboard.session());

    let status = dashboard.select_shipment(&args.shipment)?.status;
    info!(%status, "selected");
    dashboard.set_weights((&args.weights).into());

    let outcome = dashboard.compute_reroute().await.map(|_| ());
    print_notices(&dashboard.drain_notices());
    outcome?;

    let session = dashboard.session();
    println!("{}", build_shipments_table(session.shipments(), Some(&args.shipment)));
    if let Some(result) = session.reroute() {
        println!("{}", build_reroute_table(result, session.weights()));
    }
    if args.map {
        print_map(session)?;
    }
    Ok(())
}
