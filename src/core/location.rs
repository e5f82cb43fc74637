use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Geographic coordinates in decimal degrees.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl Display for LatLng {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4},{:.4}", self.lat, self.lng)
    }
}

/// Parses the literal `latitude,longitude` form the predictor is instructed to emit.
impl FromStr for LatLng {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (lat, lng) =
            s.split_once(',').with_context(|| format!("`{s}` is not a `lat,lng` pair"))?;
        let coordinates = Self::new(
            lat.trim().parse().with_context(|| format!("invalid latitude in `{s}`"))?,
            lng.trim().parse().with_context(|| format!("invalid longitude in `{s}`"))?,
        );
        ensure!(coordinates.is_valid(), "`{s}` is out of range");
        Ok(coordinates)
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,

    #[serde(flatten)]
    pub position: LatLng,
}

impl Location {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self { name: name.into(), position: LatLng::new(lat, lng) }
    }
}
