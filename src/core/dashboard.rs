use crate::{
    core::{
        advisor::{DisruptionPredictor, RouteOptimizer},
        error::DashboardError,
        forecast::Forecast,
        notice::Notice,
        reroute::{RerouteRequest, RerouteResult},
        scenario::Scenario,
        session::{Call, Session},
        shipment::{Shipment, ShipmentId, ShipmentStatus},
        weights::PriorityWeights,
    },
    prelude::*,
};

/// Disruption and reroute workflow over a single session.
///
/// Every operation borrows the dashboard mutably, so a second simulation or
/// reroute cannot start while one is still awaited.
#[derive(bon::Builder)]
pub struct Dashboard<P, O> {
    predictor: P,
    optimizer: O,

    #[builder(default)]
    session: Session,
}

impl<P: DisruptionPredictor, O: RouteOptimizer> Dashboard<P, O> {
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Predict disruptions for the scenario and flag the affected shipments.
    ///
    /// On failure, the shipment statuses stay as they were.
    #[instrument(skip_all, fields(scenario = %scenario.label))]
    pub async fn run_simulation(
        &mut self,
        scenario: &Scenario,
    ) -> Result<&Forecast, DashboardError> {
        let session = &mut self.session;
        session.forecast = None;
        session.selected = None;
        session.reroute = None;
        session.is_reroute_dialog_open = false;
        session.forecast_context = scenario.conditions.context();

        info!("predicting disruptions…");
        session.pending = Some(Call::Prediction);
        let outcome = self.predictor.predict_disruptions(&scenario.conditions).await;
        session.pending = None;

        match outcome {
            Ok(forecast) => {
                let affected_ids = forecast.affected_ids();
                for shipment in &mut session.shipments {
                    shipment.status = if affected_ids.contains(&shipment.id) {
                        ShipmentStatus::AtRisk
                    } else {
                        ShipmentStatus::OnTime
                    };
                }
                info!(
                    n_disruptions = forecast.disruptions.len(),
                    n_affected = affected_ids.len(),
                    "forecast updated",
                );
                session.notices.push(Notice::info(
                    "Disruption Forecast Updated",
                    format!("{} potential disruption(s) identified.", forecast.disruptions.len()),
                ));
                Ok(session.forecast.insert(forecast))
            }
            Err(error) => {
                warn!("simulation failed: {error:#}");
                session.notices.push(Notice::error(
                    "Simulation Failed",
                    "An error occurred while predicting disruptions.",
                ));
                Err(DashboardError::PredictionFailed(error))
            }
        }
    }

    /// Select the shipment and drop its previous reroute.
    ///
    /// An at-risk shipment opens the reroute dialog right away.
    #[instrument(skip_all, fields(shipment_id = %id))]
    pub fn select_shipment(&mut self, id: &ShipmentId) -> Result<&Shipment, DashboardError> {
        let session = &mut self.session;
        let index = session
            .shipments
            .iter()
            .position(|shipment| &shipment.id == id)
            .ok_or_else(|| DashboardError::UnknownShipment(id.clone()))?;
        session.selected = Some(id.clone());
        session.reroute = None;
        let shipment = &session.shipments[index];
        if shipment.status == ShipmentStatus::AtRisk {
            debug!("opening the reroute dialog");
            session.is_reroute_dialog_open = true;
        }
        Ok(shipment)
    }

    pub const fn set_weights(&mut self, weights: PriorityWeights) {
        self.session.weights = weights;
    }

    pub fn open_reroute_dialog(&mut self) -> Result<(), DashboardError> {
        if self.session.selected.is_none() {
            return Err(DashboardError::NoShipmentSelected);
        }
        self.session.is_reroute_dialog_open = true;
        Ok(())
    }

    pub const fn close_reroute_dialog(&mut self) {
        self.session.is_reroute_dialog_open = false;
    }

    /// Hide the reroute card.
    pub fn dismiss_reroute(&mut self) {
        self.session.reroute = None;
    }

    /// Ask the optimizer for a route around the current forecast for the selected shipment.
    ///
    /// On failure, the previous result is kept.
    #[instrument(skip_all)]
    pub async fn compute_reroute(&mut self) -> Result<&RerouteResult, DashboardError> {
        let session = &mut self.session;
        let shipment = session.selected_shipment().ok_or(DashboardError::NoShipmentSelected)?;
        let request = RerouteRequest {
            shipment_details: shipment.describe(),
            disruption_forecast: session.forecast_context.clone(),
            constraints: session.weights,
        };

        info!(
            shipment_id = %shipment.id,
            weights = ?request.constraints,
            "calculating the optimal route…",
        );
        session.pending = Some(Call::Optimization);
        let outcome = self.optimizer.calculate_optimal_rerouting(&request).await;
        session.pending = None;

        match outcome {
            Ok(result) => {
                info!(
                    cost = result.estimated_cost,
                    time = result.estimated_time,
                    co2 = result.estimated_co2_emissions,
                    "route found",
                );
                session.is_reroute_dialog_open = false;
                session.notices.push(Notice::info(
                    "Optimal Route Found",
                    "The best alternative route has been calculated and displayed.",
                ));
                Ok(session.reroute.insert(result))
            }
            Err(error) => {
                warn!("rerouting failed: {error:#}");
                session
                    .notices
                    .push(Notice::error("Error", "Could not calculate an optimal route."));
                Err(DashboardError::OptimizationFailed(error))
            }
        }
    }

    /// Forget the simulation and return every shipment to its seed status.
    #[instrument(skip_all)]
    pub fn clear(&mut self) {
        let session = &mut self.session;
        session.forecast = None;
        session.forecast_context.clear();
        session.selected = None;
        session.reroute = None;
        session.is_reroute_dialog_open = false;
        session.pending = None;
        session.shipments.clone_from(&session.seed);
        debug!("cleared");
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.session.notices)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::VecDeque, sync::Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::core::{
        forecast::{AffectedShipment, Disruption},
        notice::NoticeLevel,
        scenario::{Conditions, ScenarioKind},
        session::Phase,
        weights::Priority,
    };

    /// Replays the queued answers, [`None`] being a failed call.
    struct Scripted<T, R> {
        answers: Mutex<VecDeque<Option<T>>>,
        requests: Mutex<Vec<R>>,
    }

    impl<T, R> Scripted<T, R> {
        fn new(answers: impl IntoIterator<Item = Option<T>>) -> Self {
            Self {
                answers: Mutex::new(answers.into_iter().collect()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn answer(&self, request: R) -> Result<T> {
            self.requests.lock().unwrap().push(request);
            self.answers.lock().unwrap().pop_front().flatten().context("the model is unavailable")
        }
    }

    #[async_trait]
    impl DisruptionPredictor for Scripted<Forecast, Conditions> {
        async fn predict_disruptions(&self, conditions: &Conditions) -> Result<Forecast> {
            self.answer(conditions.clone())
        }
    }

    #[async_trait]
    impl RouteOptimizer for Scripted<RerouteResult, RerouteRequest> {
        async fn calculate_optimal_rerouting(
            &self,
            request: &RerouteRequest,
        ) -> Result<RerouteResult> {
            self.answer(request.clone())
        }
    }

    type TestDashboard =
        Dashboard<Scripted<Forecast, Conditions>, Scripted<RerouteResult, RerouteRequest>>;

    fn dashboard(
        forecasts: impl IntoIterator<Item = Option<Forecast>>,
        routes: impl IntoIterator<Item = Option<RerouteResult>>,
    ) -> TestDashboard {
        Dashboard::builder()
            .predictor(Scripted::new(forecasts))
            .optimizer(Scripted::new(routes))
            .build()
    }

    fn forecast_affecting(ids: &[&str]) -> Forecast {
        Forecast {
            disruptions: vec![Disruption {
                kind: "weather".to_owned(),
                location: "New Orleans, LA".to_owned(),
                start_time: "in 24 hours".to_owned(),
                end_time: "in 60 hours".to_owned(),
                severity: "high".to_owned(),
                affected_shipments: ids
                    .iter()
                    .map(|id| AffectedShipment {
                        shipment_id: (*id).into(),
                        location: "29.9511,-90.0715".to_owned(),
                    })
                    .collect(),
                alternative_routes: Vec::new(),
            }],
        }
    }

    fn route(description: &str) -> RerouteResult {
        RerouteResult {
            optimal_route: description.to_owned(),
            estimated_cost: 4200.0,
            estimated_time: 14.0,
            estimated_co2_emissions: 830.0,
            alternatives: vec!["Barge: too slow".to_owned()],
        }
    }

    fn statuses(dashboard: &TestDashboard) -> Vec<(&str, ShipmentStatus)> {
        dashboard
            .session()
            .shipments()
            .iter()
            .map(|shipment| (shipment.id.as_str(), shipment.status))
            .collect()
    }

    fn owned_statuses(dashboard: &TestDashboard) -> Vec<(String, ShipmentStatus)> {
        statuses(dashboard).into_iter().map(|(id, status)| (id.to_owned(), status)).collect()
    }

    #[tokio::test]
    async fn hurricane_end_to_end() -> Result {
        let mut dashboard = dashboard(
            [Some(forecast_affecting(&["SHP-004"]))],
            [Some(route("Truck 29.9511,-90.0715 to rail at 35.1495,-90.0490"))],
        );
        assert!(statuses(&dashboard).iter().all(|(_, status)| *status == ShipmentStatus::OnTime));

        dashboard.run_simulation(&ScenarioKind::Hurricane.into()).await?;
        assert_eq!(
            statuses(&dashboard),
            [
                ("SHP-001", ShipmentStatus::OnTime),
                ("SHP-002", ShipmentStatus::OnTime),
                ("SHP-003", ShipmentStatus::OnTime),
                ("SHP-004", ShipmentStatus::AtRisk),
            ],
        );
        assert_eq!(dashboard.session().phase(), Phase::ForecastReady);

        dashboard.select_shipment(&"SHP-004".into())?;
        assert!(dashboard.session().is_reroute_dialog_open());
        assert_eq!(dashboard.session().phase(), Phase::RerouteDialogOpen);

        dashboard.compute_reroute().await?;
        assert!(!dashboard.session().is_reroute_dialog_open());
        assert_eq!(dashboard.session().phase(), Phase::RerouteReady);
        assert_eq!(dashboard.session().path_overlay().map(|path| path.len()), Some(2));

        let requests = dashboard.optimizer.requests.lock().unwrap();
        assert_eq!(
            requests[0].shipment_details,
            "Shipment ID: SHP-004, from Port of New Orleans, LA to Processing Facility, Memphis, TN, contents: Agricultural Goods",
        );
        assert_eq!(
            requests[0].disruption_forecast,
            ScenarioKind::Hurricane.conditions().context(),
        );
        Ok(())
    }

    #[tokio::test]
    async fn at_risk_iff_affected() -> Result {
        let mut dashboard = dashboard(
            [
                Some(forecast_affecting(&["SHP-001"])),
                Some(forecast_affecting(&["SHP-002", "SHP-003", "SHP-999"])),
            ],
            [],
        );
        dashboard.run_simulation(&ScenarioKind::Wildfire.into()).await?;
        dashboard.run_simulation(&ScenarioKind::Blizzard.into()).await?;
        assert_eq!(
            statuses(&dashboard),
            [
                ("SHP-001", ShipmentStatus::OnTime),
                ("SHP-002", ShipmentStatus::AtRisk),
                ("SHP-003", ShipmentStatus::AtRisk),
                ("SHP-004", ShipmentStatus::OnTime),
            ],
        );
        Ok(())
    }

    #[tokio::test]
    async fn simulation_passes_the_scenario_conditions() -> Result {
        let mut dashboard = dashboard([Some(Forecast::default())], []);
        let conditions = Conditions::builder()
            .weather("fog")
            .traffic("none")
            .port_congestion("low")
            .infrastructure_health("fine")
            .build();
        dashboard.run_simulation(&Scenario::custom(conditions.clone())).await?;
        assert_eq!(dashboard.predictor.requests.lock().unwrap().as_slice(), [conditions]);
        assert_eq!(dashboard.session().forecast_context(), "fog none low fine");
        Ok(())
    }

    #[tokio::test]
    async fn failed_prediction_keeps_statuses() -> Result {
        let mut dashboard = dashboard([Some(forecast_affecting(&["SHP-004"])), None], []);
        dashboard.run_simulation(&ScenarioKind::Hurricane.into()).await?;
        dashboard.drain_notices();
        let before = owned_statuses(&dashboard);

        let result = dashboard.run_simulation(&ScenarioKind::Wildfire.into()).await;
        assert!(matches!(result, Err(DashboardError::PredictionFailed(_))));

        assert_eq!(owned_statuses(&dashboard), before);
        assert!(dashboard.session().forecast().is_none());

        let notices = dashboard.drain_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].title, "Simulation Failed");
        Ok(())
    }

    #[tokio::test]
    async fn failed_optimization_keeps_previous_result() -> Result {
        let mut dashboard = dashboard(
            [Some(forecast_affecting(&["SHP-004"]))],
            [Some(route("Rail via Baton Rouge")), None],
        );
        dashboard.run_simulation(&ScenarioKind::Hurricane.into()).await?;
        dashboard.select_shipment(&"SHP-004".into())?;
        let previous = dashboard.compute_reroute().await?.clone();

        dashboard.open_reroute_dialog()?;
        let result = dashboard.compute_reroute().await;
        assert!(matches!(result, Err(DashboardError::OptimizationFailed(_))));
        assert_eq!(dashboard.session().reroute(), Some(&previous));
        assert!(dashboard.session().is_reroute_dialog_open());
        Ok(())
    }

    #[tokio::test]
    async fn reroute_uses_current_weights() -> Result {
        let mut dashboard =
            dashboard([Some(forecast_affecting(&["SHP-004"]))], [Some(route("Rail"))]);
        dashboard.run_simulation(&ScenarioKind::Hurricane.into()).await?;
        dashboard.select_shipment(&"SHP-004".into())?;
        let weights = PriorityWeights::builder()
            .cost(Priority::MAX)
            .time(Priority::try_from(0)?)
            .build();
        dashboard.set_weights(weights);
        dashboard.compute_reroute().await?;
        assert_eq!(dashboard.optimizer.requests.lock().unwrap()[0].constraints, weights);
        Ok(())
    }

    #[tokio::test]
    async fn reroute_requires_selection() {
        let mut dashboard = dashboard([], [Some(route("Rail"))]);
        assert!(matches!(
            dashboard.compute_reroute().await,
            Err(DashboardError::NoShipmentSelected),
        ));
        assert!(matches!(dashboard.open_reroute_dialog(), Err(DashboardError::NoShipmentSelected)));
        assert!(dashboard.optimizer.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn on_time_selection_does_not_open_dialog() -> Result {
        let mut dashboard = dashboard([Some(forecast_affecting(&["SHP-004"]))], []);
        dashboard.run_simulation(&ScenarioKind::Hurricane.into()).await?;
        let shipment = dashboard.select_shipment(&"SHP-001".into())?;
        assert_eq!(shipment.status, ShipmentStatus::OnTime);
        assert!(!dashboard.session().is_reroute_dialog_open());
        assert_eq!(
            dashboard.session().selected_shipment().map(|shipment| shipment.id.as_str()),
            Some("SHP-001"),
        );
        Ok(())
    }

    #[test]
    fn unknown_shipment_err() {
        let mut dashboard = dashboard([], []);
        assert!(matches!(
            dashboard.select_shipment(&"SHP-999".into()),
            Err(DashboardError::UnknownShipment(_)),
        ));
        assert!(dashboard.session().selected_shipment().is_none());
    }

    #[tokio::test]
    async fn selection_drops_previous_reroute() -> Result {
        let mut dashboard = dashboard(
            [Some(forecast_affecting(&["SHP-003", "SHP-004"]))],
            [Some(route("Rail"))],
        );
        dashboard.run_simulation(&ScenarioKind::Hurricane.into()).await?;
        dashboard.select_shipment(&"SHP-004".into())?;
        dashboard.compute_reroute().await?;
        dashboard.select_shipment(&"SHP-003".into())?;
        assert!(dashboard.session().reroute().is_none());
        assert!(dashboard.session().is_reroute_dialog_open());
        Ok(())
    }

    #[tokio::test]
    async fn clear_restores_seed_and_is_idempotent() -> Result {
        let mut seed = Shipment::seed();
        seed[1].status = ShipmentStatus::Delayed;
        let mut dashboard = Dashboard::builder()
            .predictor(Scripted::<Forecast, Conditions>::new([Some(forecast_affecting(&[
                "SHP-001", "SHP-002",
            ]))]))
            .optimizer(Scripted::<RerouteResult, RerouteRequest>::new([Some(route("Rail"))]))
            .session(Session::new(seed))
            .build();

        dashboard.run_simulation(&ScenarioKind::Wildfire.into()).await?;
        dashboard.select_shipment(&"SHP-001".into())?;
        dashboard.compute_reroute().await?;
        assert_eq!(dashboard.session().shipments()[1].status, ShipmentStatus::AtRisk);

        for _ in 0..2 {
            dashboard.clear();
            let session = dashboard.session();
            assert!(session.forecast().is_none());
            assert!(session.selected_shipment().is_none());
            assert!(session.reroute().is_none());
            assert!(!session.is_reroute_dialog_open());
            assert_eq!(session.phase(), Phase::Idle);
            assert_eq!(session.shipments()[0].status, ShipmentStatus::OnTime);
            assert_eq!(session.shipments()[1].status, ShipmentStatus::Delayed);
        }
        Ok(())
    }

    #[tokio::test]
    async fn dismiss_hides_reroute() -> Result {
        let mut dashboard =
            dashboard([Some(forecast_affecting(&["SHP-004"]))], [Some(route("Rail"))]);
        dashboard.run_simulation(&ScenarioKind::Hurricane.into()).await?;
        dashboard.select_shipment(&"SHP-004".into())?;
        dashboard.compute_reroute().await?;
        dashboard.dismiss_reroute();
        assert!(dashboard.session().reroute().is_none());
        assert_eq!(dashboard.session().phase(), Phase::ForecastReady);
        Ok(())
    }

    #[tokio::test]
    async fn simulation_success_notice() -> Result {
        let mut dashboard = dashboard([Some(forecast_affecting(&["SHP-004"]))], []);
        dashboard.run_simulation(&ScenarioKind::Hurricane.into()).await?;
        let notices = dashboard.drain_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Info);
        assert_eq!(notices[0].description, "1 potential disruption(s) identified.");
        assert!(dashboard.drain_notices().is_empty());
        Ok(())
    }
}
