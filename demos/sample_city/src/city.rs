//! The 11-intersection sample city shown by the dashboard.
//!
//! Coordinates sit around lower Manhattan so the map view has something
//! familiar to centre on.  Every road gets a time table of
//! `base * time_factor(period)`.

use anyhow::Result;

use cr_core::{GeoPoint, TimeOfDay, TimeWeights};
use cr_network::{NodeKind, RoadNetwork, RoadNetworkBuilder};

pub const INTERSECTIONS: [(&str, f32, f32); 11] = [
    ("Downtown",        40.7128, -74.0060),
    ("Market Square",   40.7135, -74.0090),
    ("University",      40.7150, -74.0030),
    ("Hospital",        40.7170, -74.0045),
    ("Shopping Mall",   40.7145, -74.0115),
    ("Airport",         40.7200, -74.0200),
    ("Central Park",    40.7180, -74.0070),
    ("Stadium",         40.7195, -74.0130),
    ("Residential A",   40.7165, -74.0005),
    ("Residential B",   40.7190, -74.0010),
    ("Industrial Zone", 40.7220, -74.0050),
];

/// `(from, to, minutes)`
pub const ROADS: [(&str, &str, f64); 14] = [
    ("Downtown",        "Market Square",   5.0),
    ("Downtown",        "University",      8.0),
    ("Market Square",   "Shopping Mall",   6.0),
    ("University",      "Hospital",        4.0),
    ("Hospital",        "Shopping Mall",   7.0),
    ("Shopping Mall",   "Airport",         15.0),
    ("Downtown",        "Central Park",    10.0),
    ("Central Park",    "Stadium",         5.0),
    ("Stadium",         "Airport",         8.0),
    ("University",      "Residential A",   6.0),
    ("Residential A",   "Residential B",   3.0),
    ("Residential B",   "Industrial Zone", 9.0),
    ("Industrial Zone", "Airport",         7.0),
    ("Central Park",    "Residential B",   12.0),
];

fn time_factor(t: TimeOfDay) -> f64 {
    match t {
        TimeOfDay::Morning   => 1.5,
        TimeOfDay::Afternoon => 1.2,
        TimeOfDay::Evening   => 1.8,
        TimeOfDay::Night     => 0.9,
    }
}

pub fn build_sample_city() -> Result<RoadNetwork> {
    let mut b = RoadNetworkBuilder::with_capacity(INTERSECTIONS.len(), ROADS.len());

    for (name, lat, lon) in INTERSECTIONS {
        b.add_node(name, Some(GeoPoint::new(lat, lon)));
    }
    b.set_node_kind("Residential A", NodeKind::Residential);
    b.set_node_kind("Residential B", NodeKind::Residential);
    b.set_node_kind("Central Park", NodeKind::Recreation);

    for (u, v, w) in ROADS {
        b.add_edge(u, v, w)?;
        let table = TimeWeights::from_fn(|t| w * time_factor(t))?;
        b.set_time_weights(u, v, table.iter())?;
    }

    Ok(b.build())
}
