// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `_geo`: proximity on the globe.
//!
//! Both sides are coerced into coordinates, the great-circle distance between them
//! goes through [`log_score`] against `max_distance`, and the distance itself is
//! reported as auxiliary data so callers can show "3.2 km away".
//!
//! # Accepted shapes
//!
//! | Shape                                             | Order     |
//! |---------------------------------------------------|-----------|
//! | `{"lat": .., "lon": ..}` (also `lng`)             | named     |
//! | `{"latitude": .., "longitude": ..}`               | named     |
//! | `{"type": "Point", "coordinates": [lon, lat]}`    | GeoJSON   |
//! | `[lon, lat]`                                      | GeoJSON   |
//! | `"lat,lon"`                                       | human     |
//!
//! Bare arrays follow GeoJSON (longitude first); strings follow the way people write
//! coordinates (latitude first). Out-of-range values don't coerce.

use serde_json::{Map, Value};

use super::{operand_value, LeafScore};
use crate::error::Result;
use crate::scoring::log_score;
use crate::types::Leaf;

/// Mean earth radius.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Validated constructor: finite, latitude in `[-90, 90]`, longitude in `[-180, 180]`.
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        valid.then_some(Self { lat, lon })
    }
}

/// Coerce a JSON value into coordinates.
pub fn coerce(value: &Value) -> Option<Coordinates> {
    match value {
        Value::Object(map) => from_object(map),
        Value::Array(pair) => from_lon_lat(pair),
        Value::String(text) => {
            let (lat, lon) = text.split_once(',')?;
            Coordinates::new(lat.trim().parse().ok()?, lon.trim().parse().ok()?)
        }
        _ => None,
    }
}

fn from_object(map: &Map<String, Value>) -> Option<Coordinates> {
    if map.get("type").and_then(Value::as_str) == Some("Point") {
        return from_lon_lat(map.get("coordinates")?.as_array()?);
    }
    let lat = ["lat", "latitude"].iter().find_map(|k| map.get(*k))?;
    let lon = ["lon", "lng", "longitude"].iter().find_map(|k| map.get(*k))?;
    Coordinates::new(number(lat)?, number(lon)?)
}

fn from_lon_lat(pair: &[Value]) -> Option<Coordinates> {
    match pair {
        [lon, lat] => Coordinates::new(number(lat)?, number(lon)?),
        _ => None,
    }
}

/// Numbers, or strings holding numbers.
fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Great-circle distance in meters (haversine).
pub fn haversine(a: Coordinates, b: Coordinates) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().min(1.0).asin()
}

pub fn geo(value: Option<&Value>, leaf: &Leaf) -> Result<LeafScore> {
    let operand = operand_value(leaf)?;
    let (Some(here), Some(there)) = (value.and_then(coerce), coerce(operand)) else {
        return Ok(LeafScore::zero());
    };

    let distance = haversine(here, there);
    let mut scored = LeafScore::of(log_score(distance, leaf.modifiers.max_distance));
    if let Some(meters) = serde_json::Number::from_f64(distance) {
        scored.auxiliary.insert("distance".to_string(), Value::Number(meters));
    }
    Ok(scored)
}
