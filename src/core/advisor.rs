//! Seams to the generative model.
//!
//! Both calls are opaque: any error is a single failure, no retries.

use async_trait::async_trait;

use crate::{
    core::{
        forecast::Forecast,
        reroute::{RerouteRequest, RerouteResult},
        scenario::Conditions,
    },
    prelude::*,
};

#[async_trait]
pub trait DisruptionPredictor: Send + Sync {
    async fn predict_disruptions(&self, conditions: &Conditions) -> Result<Forecast>;
}

#[async_trait]
pub trait RouteOptimizer: Send + Sync {
    async fn calculate_optimal_rerouting(&self, request: &RerouteRequest) -> Result<RerouteResult>;
}
