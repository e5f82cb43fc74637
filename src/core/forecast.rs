use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::{location::LatLng, shipment::ShipmentId};

/// Predictor output: every disruption expected over the next couple of days.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub disruptions: Vec<Disruption>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disruption {
    /// Kind of disruption, for example `weather` or `congestion`.
    #[serde(rename = "type")]
    pub kind: String,

    /// General location, for example `New Orleans, LA`.
    pub location: String,

    pub start_time: String,
    pub end_time: String,
    pub severity: String,
    pub affected_shipments: Vec<AffectedShipment>,
    pub alternative_routes: Vec<AlternativeRoute>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectedShipment {
    pub shipment_id: ShipmentId,

    /// `latitude,longitude` of the affected port or the shipment's origin.
    ///
    /// The model is only asked to follow the format, so this may be anything.
    pub location: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeRoute {
    pub route: String,

    /// Hours.
    pub estimated_time_savings: f64,

    /// USD.
    pub estimated_cost_savings: f64,

    /// Kilograms.
    pub estimated_co2_reduction: f64,
}

/// Disruption point plotted on the map.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisruptionMarker<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,

    pub severity: &'a str,
    pub icon: MarkerIcon,

    #[serde(flatten)]
    pub position: LatLng,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerIcon {
    Wind,
    Alert,
}

impl MarkerIcon {
    fn for_kind(kind: &str) -> Self {
        match kind.to_lowercase().as_str() {
            "weather" | "hurricane" => Self::Wind,
            _ => Self::Alert,
        }
    }
}

impl Forecast {
    /// Union of the affected shipment IDs over all the disruptions.
    #[must_use]
    pub fn affected_ids(&self) -> HashSet<&ShipmentId> {
        self.disruptions
            .iter()
            .flat_map(|disruption| &disruption.affected_shipments)
            .map(|affected| &affected.shipment_id)
            .collect()
    }

    /// Map markers, one per affected shipment, skipping unparsable locations.
    pub fn markers(&self) -> impl Iterator<Item = DisruptionMarker<'_>> {
        self.disruptions.iter().flat_map(|disruption| {
            disruption.affected_shipments.iter().filter_map(|affected| {
                affected.location.parse().ok().map(|position| DisruptionMarker {
                    kind: &disruption.kind,
                    severity: &disruption.severity,
                    icon: MarkerIcon::for_kind(&disruption.kind),
                    position,
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use itertools::Itertools;

    use super::*;
    use crate::prelude::*;

    // language=json
    const RESPONSE: &str = r#"{
        "disruptions": [
            {
                "type": "Hurricane",
                "location": "New Orleans, LA",
                "startTime": "2025-09-01T12:00:00Z",
                "endTime": "2025-09-03T12:00:00Z",
                "severity": "high",
                "affectedShipments": [
                    { "shipmentId": "SHP-004", "location": "29.9511,-90.0715" },
                    { "shipmentId": "SHP-003", "location": "somewhere in Texas" }
                ],
                "alternativeRoutes": [
                    {
                        "route": "Rail via Baton Rouge",
                        "estimatedTimeSavings": 12,
                        "estimatedCostSavings": 1500.5,
                        "estimatedCo2Reduction": 320
                    }
                ]
            },
            {
                "type": "congestion",
                "location": "I-10",
                "startTime": "now",
                "endTime": "later",
                "severity": "medium",
                "affectedShipments": [
                    { "shipmentId": "SHP-004", "location": "30.4515, -91.1871" }
                ],
                "alternativeRoutes": []
            }
        ]
    }"#;

    #[test]
    fn deserialize_ok() -> Result {
        let forecast: Forecast = serde_json::from_str(RESPONSE)?;
        assert_eq!(forecast.disruptions.len(), 2);
        assert_eq!(forecast.disruptions[0].kind, "Hurricane");
        let route = &forecast.disruptions[0].alternative_routes[0];
        assert_abs_diff_eq!(route.estimated_co2_reduction, 320.0);
        Ok(())
    }

    #[test]
    fn deserialize_missing_field_err() {
        let body = r#"{ "disruptions": [{ "type": "weather", "location": "x" }] }"#;
        assert!(serde_json::from_str::<Forecast>(body).is_err());
    }

    #[test]
    fn affected_ids_is_union() -> Result {
        let forecast: Forecast = serde_json::from_str(RESPONSE)?;
        let ids = forecast.affected_ids();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&ShipmentId::from("SHP-003")));
        assert!(ids.contains(&ShipmentId::from("SHP-004")));
        Ok(())
    }

    #[test]
    fn markers_skip_unparsable_locations() -> Result {
        let forecast: Forecast = serde_json::from_str(RESPONSE)?;
        let markers = forecast.markers().collect_vec();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].icon, MarkerIcon::Wind);
        assert_eq!(markers[0].position, LatLng::new(29.9511, -90.0715));
        assert_eq!(markers[1].kind, "congestion");
        assert_eq!(markers[1].icon, MarkerIcon::Alert);
        Ok(())
    }
}
