//! Shared test utilities and fixtures.

#![allow(dead_code)]

use serde_json::Value;
use std::fs;
use std::sync::LazyLock;

// Re-export canonical test utilities from docmatch::testing
pub use docmatch::testing::{eq, make_place, make_places, near, sim};

/// The places fixture: Amsterdam, Utrecht, Rotterdam and New York, each with a
/// different coordinate shape.
pub const PLACES_FIXTURE: &str = "tests/fixtures/places.json";

static PLACES: LazyLock<Vec<Value>> = LazyLock::new(|| {
    let text = fs::read_to_string(PLACES_FIXTURE).expect("Failed to read places fixture");
    docmatch::parse_documents(&text).expect("Invalid places fixture")
});

/// The places fixture, parsed once per test binary.
pub fn places() -> &'static [Value] {
    &PLACES
}

/// The fixture document with this title.
pub fn place(title: &str) -> &'static Value {
    places()
        .iter()
        .find(|doc| doc["title"] == title)
        .unwrap_or_else(|| panic!("no place titled {}", title))
}

/// Titles of scored documents, in order.
pub fn titles(scored: &[docmatch::Scored<'_>]) -> Vec<String> {
    scored
        .iter()
        .map(|s| s.document["title"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Float comparison for scores that went through logs and sums.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
