use serde::Serialize;

use crate::core::location::LatLng;

/// Major freight corridor drawn underneath the shipments.
#[derive(Debug, Serialize)]
pub struct Corridor {
    pub id: &'static str,
    pub name: &'static str,
    pub path: &'static [LatLng],
}

pub const CORRIDORS: &[Corridor] = &[
    Corridor {
        id: "I-95",
        name: "I-95 Corridor (East Coast)",
        path: &[
            LatLng::new(25.7617, -80.1918),
            LatLng::new(40.7128, -74.0060),
            LatLng::new(45.0000, -69.0000),
        ],
    },
    Corridor {
        id: "I-5",
        name: "I-5 Corridor (West Coast)",
        path: &[
            LatLng::new(32.7157, -117.1611),
            LatLng::new(34.0522, -118.2437),
            LatLng::new(47.6062, -122.3321),
        ],
    },
    Corridor {
        id: "I-90",
        name: "I-90 Corridor (North)",
        path: &[
            LatLng::new(47.6062, -122.3321),
            LatLng::new(41.8781, -87.6298),
            LatLng::new(42.3601, -71.0589),
        ],
    },
    Corridor {
        id: "I-10",
        name: "I-10 Corridor (South)",
        path: &[
            LatLng::new(33.7292, -118.2620),
            LatLng::new(30.2672, -97.7431),
            LatLng::new(29.9511, -90.0715),
            LatLng::new(30.4383, -84.2807),
        ],
    },
];
