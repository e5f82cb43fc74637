use crate::core::{
    forecast::Forecast,
    location::LatLng,
    notice::Notice,
    overlay::derive_path_overlay,
    reroute::RerouteResult,
    shipment::{Shipment, ShipmentFilter, ShipmentId},
    weights::PriorityWeights,
};

/// External call currently awaited by the dashboard.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Call {
    Prediction,
    Optimization,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Phase {
    Idle,
    Simulating,
    ForecastReady,
    RerouteDialogOpen,
    RerouteComputing,
    RerouteReady,
}

/// Everything the dashboard knows about the current session.
///
/// Only the dashboard mutates it outside of tests, presentation reads it by reference.
#[must_use]
#[derive(Clone, Debug)]
pub struct Session {
    pub(crate) seed: Vec<Shipment>,
    pub(crate) shipments: Vec<Shipment>,
    pub(crate) forecast: Option<Forecast>,

    /// Concatenated scenario text of the last simulation.
    pub(crate) forecast_context: String,

    pub(crate) selected: Option<ShipmentId>,
    pub(crate) reroute: Option<RerouteResult>,
    pub(crate) weights: PriorityWeights,
    pub(crate) is_reroute_dialog_open: bool,
    pub(crate) pending: Option<Call>,
    pub(crate) notices: Vec<Notice>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Shipment::seed())
    }
}

impl Session {
    pub fn new(seed: Vec<Shipment>) -> Self {
        Self {
            shipments: seed.clone(),
            seed,
            forecast: None,
            forecast_context: String::new(),
            selected: None,
            reroute: None,
            weights: PriorityWeights::default(),
            is_reroute_dialog_open: false,
            pending: None,
            notices: Vec::new(),
        }
    }

    #[must_use]
    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    pub fn filtered_shipments(&self, filter: ShipmentFilter) -> impl Iterator<Item = &Shipment> {
        self.shipments.iter().filter(move |shipment| filter.matches(shipment))
    }

    #[must_use]
    pub fn shipment(&self, id: &ShipmentId) -> Option<&Shipment> {
        self.shipments.iter().find(|shipment| &shipment.id == id)
    }

    #[must_use]
    pub const fn forecast(&self) -> Option<&Forecast> {
        self.forecast.as_ref()
    }

    #[must_use]
    pub fn forecast_context(&self) -> &str {
        &self.forecast_context
    }

    #[must_use]
    pub fn selected_shipment(&self) -> Option<&Shipment> {
        self.selected.as_ref().and_then(|id| self.shipment(id))
    }

    #[must_use]
    pub const fn reroute(&self) -> Option<&RerouteResult> {
        self.reroute.as_ref()
    }

    pub const fn weights(&self) -> PriorityWeights {
        self.weights
    }

    #[must_use]
    pub const fn is_reroute_dialog_open(&self) -> bool {
        self.is_reroute_dialog_open
    }

    /// Reroute polyline to overlay on the map, only while a shipment is selected.
    #[must_use]
    pub fn path_overlay(&self) -> Option<Vec<LatLng>> {
        self.selected.as_ref()?;
        derive_path_overlay(&self.reroute.as_ref()?.optimal_route)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.pending {
            Some(Call::Prediction) => Phase::Simulating,
            Some(Call::Optimization) => Phase::RerouteComputing,
            None if self.is_reroute_dialog_open => Phase::RerouteDialogOpen,
            None if self.reroute.is_some() => Phase::RerouteReady,
            None if self.forecast.is_some() => Phase::ForecastReady,
            None => Phase::Idle,
        }
    }
}
