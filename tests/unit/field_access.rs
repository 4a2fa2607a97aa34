//! Field paths against the fixture documents.

use crate::common::place;
use docmatch::field::get;
use docmatch::FieldPath;
use serde_json::json;

#[test]
fn test_top_level_and_nested() {
    let amsterdam = place("Amsterdam");
    assert_eq!(get(amsterdam, &"title".into()), Some(&json!("Amsterdam")));
    assert_eq!(get(amsterdam, &"location.lat".into()), Some(&json!(52.3676)));
}

#[test]
fn test_key_path_equals_dotted_path() {
    let amsterdam = place("Amsterdam");
    let keys: &[&str] = &["location", "lon"];
    assert_eq!(get(amsterdam, &FieldPath::from(keys)), get(amsterdam, &"location.lon".into()));
}

#[test]
fn test_null_is_missing() {
    assert_eq!(get(place("New York"), &"province".into()), None);
}

#[test]
fn test_path_through_string_is_missing() {
    assert_eq!(get(place("New York"), &"location.lat".into()), None);
}

#[test]
fn test_arrays_are_not_indexed() {
    assert_eq!(get(place("Amsterdam"), &"aliases.0".into()), None);
}

#[test]
fn test_root_is_whole_document() {
    let doc = place("Utrecht");
    assert_eq!(get(doc, &FieldPath::root()), Some(doc));
}
