pub mod advisor;
pub mod corridor;
pub mod dashboard;
pub mod error;
pub mod forecast;
pub mod location;
pub mod notice;
pub mod overlay;
pub mod reroute;
pub mod scenario;
pub mod session;
pub mod shipment;
pub mod weights;
