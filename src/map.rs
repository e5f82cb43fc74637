//! Map read model, exported as JSON for whatever draws the actual map.

use serde::Serialize;

use crate::core::{
    corridor::{CORRIDORS, Corridor},
    forecast::DisruptionMarker,
    location::LatLng,
    session::Session,
    shipment::{Shipment, ShipmentId},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    Warehouse,
    Pin,
}

/// Theme colour of a shipment pin.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    Destructive,
    Accent,
    Primary,
}

impl Tint {
    fn of(shipment: &Shipment, is_selected: bool) -> Self {
        if shipment.status.is_troubled() {
            Self::Destructive
        } else if is_selected {
            Self::Accent
        } else {
            Self::Primary
        }
    }
}

#[must_use]
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentPin<'a> {
    pub shipment_id: &'a ShipmentId,
    pub label: &'a str,
    pub glyph: Glyph,
    pub tint: Tint,

    #[serde(flatten)]
    pub position: LatLng,
}

#[must_use]
#[derive(Debug, PartialEq, Serialize)]
pub struct Directions {
    pub origin: LatLng,
    pub destination: LatLng,
}

#[must_use]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView<'a> {
    pub pins: Vec<ShipmentPin<'a>>,
    pub corridors: &'static [Corridor],
    pub disruptions: Vec<DisruptionMarker<'a>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_overlay: Option<Vec<LatLng>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub directions: Option<Directions>,
}

impl<'a> MapView<'a> {
    pub fn new(session: &'a Session) -> Self {
        let selected = session.selected_shipment();
        let pins = session
            .shipments()
            .iter()
            .flat_map(|shipment| {
                let tint = Tint::of(shipment, selected.is_some_and(|it| it.id == shipment.id));
                [
                    ShipmentPin {
                        shipment_id: &shipment.id,
                        label: &shipment.origin.name,
                        glyph: Glyph::Warehouse,
                        tint,
                        position: shipment.origin.position,
                    },
                    ShipmentPin {
                        shipment_id: &shipment.id,
                        label: &shipment.destination.name,
                        glyph: Glyph::Pin,
                        tint,
                        position: shipment.destination.position,
                    },
                ]
            })
            .collect();
        Self {
            pins,
            corridors: CORRIDORS,
            disruptions: session
                .forecast()
                .map(|forecast| forecast.markers().collect())
                .unwrap_or_default(),
            path_overlay: session.path_overlay(),
            directions: selected.map(|shipment| Directions {
                origin: shipment.origin.position,
                destination: shipment.destination.position,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            forecast::{AffectedShipment, Disruption, Forecast},
            shipment::ShipmentStatus,
        },
        prelude::*,
    };

    #[test]
    fn idle_session_ok() -> Result {
        let session = Session::default();
        let view = MapView::new(&session);
        assert_eq!(view.pins.len(), 8);
        assert!(view.pins.iter().all(|pin| pin.tint == Tint::Primary));
        assert_eq!(view.pins[0].glyph, Glyph::Warehouse);
        assert_eq!(view.pins[1].glyph, Glyph::Pin);
        assert_eq!(view.corridors.len(), 4);
        assert!(view.disruptions.is_empty());
        assert!(view.directions.is_none());

        let json = serde_json::to_value(&view)?;
        assert!(json.get("pathOverlay").is_none());
        assert_eq!(json["pins"][0]["lat"], 33.7292);
        assert_eq!(json["pins"][0]["shipmentId"], "SHP-001");
        assert_eq!(json["corridors"][3]["id"], "I-10");
        Ok(())
    }

    #[test]
    fn selected_and_troubled_pins() {
        let mut session = Session::default();
        session.shipments[1].status = ShipmentStatus::Delayed;
        session.shipments[3].status = ShipmentStatus::AtRisk;
        session.selected = Some("SHP-001".into());
        session.forecast = Some(Forecast {
            disruptions: vec![Disruption {
                kind: "weather".to_owned(),
                location: "New Orleans, LA".to_owned(),
                start_time: String::new(),
                end_time: String::new(),
                severity: "high".to_owned(),
                affected_shipments: vec![AffectedShipment {
                    shipment_id: "SHP-004".into(),
                    location: "29.9511,-90.0715".to_owned(),
                }],
                alternative_routes: Vec::new(),
            }],
        });

        let view = MapView::new(&session);
        let tints: Vec<Tint> = view.pins.iter().step_by(2).map(|pin| pin.tint).collect();
        assert_eq!(tints, [Tint::Accent, Tint::Destructive, Tint::Primary, Tint::Destructive]);
        assert_eq!(view.disruptions.len(), 1);
        assert_eq!(
            view.directions,
            Some(Directions {
                origin: LatLng::new(33.7292, -118.2620),
                destination: LatLng::new(41.8781, -87.6298),
            }),
        );
    }
}
