use serde::{Deserialize, Serialize};

use crate::core::weights::PriorityWeights;

/// Route optimizer input.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RerouteRequest {
    pub shipment_details: String,
    pub disruption_forecast: String,
    pub constraints: PriorityWeights,
}

/// Route optimizer output.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RerouteResult {
    /// Free text with waypoints and transportation modes, sometimes with coordinates.
    pub optimal_route: String,

    /// USD.
    pub estimated_cost: f64,

    /// Hours.
    pub estimated_time: f64,

    /// Kilograms.
    #[serde(rename = "estimatedCO2Emissions")]
    pub estimated_co2_emissions: f64,

    /// Considered routes and the reasons they were not selected.
    pub alternatives: Vec<String>,
}
