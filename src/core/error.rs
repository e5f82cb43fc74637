use crate::core::shipment::ShipmentId;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("failed to predict disruptions")]
    PredictionFailed(#[source] anyhow::Error),

    #[error("failed to calculate an optimal route")]
    OptimizationFailed(#[source] anyhow::Error),

    #[error("there is no shipment `{0}`")]
    UnknownShipment(ShipmentId),

    #[error("no shipment is selected")]
    NoShipmentSelected,
}
