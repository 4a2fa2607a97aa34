//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical documents and query builders to avoid duplication.

#![doc(hidden)]

use serde_json::{json, Value};

use crate::types::{Leaf, Node, Operator};

/// A place document: title, municipality key, province and coordinates.
pub fn make_place(title: &str, key: &str, province: &str, lat: f64, lon: f64) -> Value {
    json!({
        "title": title,
        "key": key,
        "province": province,
        "location": {"lat": lat, "lon": lon},
    })
}

/// The canonical corpus: three Dutch cities and one far-away control.
///
/// Keys are padded to ten characters, the way the municipality register stores them.
pub fn make_places() -> Vec<Value> {
    vec![
        make_place("Amsterdam", "GM0363    ", "NH", 52.3676, 4.9041),
        make_place("Utrecht", "GM0344    ", "UT", 52.0907, 5.1214),
        make_place("Rotterdam", "GM0599    ", "ZH", 51.9244, 4.4777),
        make_place("New York", "US3651000 ", "NY", 40.7128, -74.0060),
    ]
}

/// `field _eq value`.
pub fn eq(field: &str, value: Value) -> Node {
    Leaf::new(field, Operator::Eq, value).into()
}

/// `location _geo {lat, lon}` with the default horizon.
pub fn near(lat: f64, lon: f64) -> Node {
    Leaf::new("location", Operator::Geo, json!({"lat": lat, "lon": lon})).into()
}

/// `field _sim text`.
pub fn sim(field: &str, text: &str) -> Node {
    Leaf::new(field, Operator::Sim, json!(text)).into()
}
