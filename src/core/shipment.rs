use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::{Deserialize, Serialize};

use crate::core::location::Location;

#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct ShipmentId(String);

impl ShipmentId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ShipmentId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ShipmentStatus {
    #[serde(rename = "On Time")]
    OnTime,

    #[serde(rename = "At Risk")]
    AtRisk,

    /// Only ever present in seed data, simulations never produce it.
    #[serde(rename = "Delayed")]
    Delayed,
}

impl Display for ShipmentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OnTime => write!(f, "On Time"),
            Self::AtRisk => write!(f, "At Risk"),
            Self::Delayed => write!(f, "Delayed"),
        }
    }
}

impl ShipmentStatus {
    pub const fn color(self) -> Color {
        match self {
            Self::OnTime => Color::Green,
            Self::AtRisk => Color::Red,
            Self::Delayed => Color::DarkRed,
        }
    }

    /// Whether the map should draw the shipment in the alarming colour.
    pub const fn is_troubled(self) -> bool {
        matches!(self, Self::AtRisk | Self::Delayed)
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: ShipmentId,
    pub origin: Location,
    pub destination: Location,
    pub contents: String,
    pub status: ShipmentStatus,
}

impl Shipment {
    /// Free-text description handed over to the route optimizer.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "Shipment ID: {}, from {} to {}, contents: {}",
            self.id, self.origin.name, self.destination.name, self.contents,
        )
    }

    /// Seed watchlist the dashboard starts from and returns to on reset.
    pub fn seed() -> Vec<Self> {
        vec![
            Self {
                id: "SHP-001".into(),
                origin: Location::new("Port of Los Angeles, CA", 33.7292, -118.2620),
                destination: Location::new("Warehouse, Chicago, IL", 41.8781, -87.6298),
                contents: "Consumer Electronics".to_owned(),
                status: ShipmentStatus::OnTime,
            },
            Self {
                id: "SHP-002".into(),
                origin: Location::new("Port of Savannah, GA", 32.0809, -81.0912),
                destination: Location::new(
                    "Distribution Center, New York, NY",
                    40.7128,
                    -74.0060,
                ),
                contents: "Apparel & Textiles".to_owned(),
                status: ShipmentStatus::OnTime,
            },
            Self {
                id: "SHP-003".into(),
                origin: Location::new("Manufacturing Plant, Detroit, MI", 42.3314, -83.0458),
                destination: Location::new("Assembly Line, Austin, TX", 30.2672, -97.7431),
                contents: "Automotive Parts".to_owned(),
                status: ShipmentStatus::OnTime,
            },
            Self {
                id: "SHP-004".into(),
                origin: Location::new("Port of New Orleans, LA", 29.9511, -90.0715),
                destination: Location::new(
                    "Processing Facility, Memphis, TN",
                    35.1495,
                    -90.0490,
                ),
                contents: "Agricultural Goods".to_owned(),
                status: ShipmentStatus::OnTime,
            },
        ]
    }
}

/// Watchlist filter.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum ShipmentFilter {
    #[default]
    All,

    AtRisk,
}

impl ShipmentFilter {
    #[must_use]
    pub fn matches(self, shipment: &Shipment) -> bool {
        match self {
            Self::All => true,
            Self::AtRisk => shipment.status == ShipmentStatus::AtRisk,
        }
    }
}
