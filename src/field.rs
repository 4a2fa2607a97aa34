// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field lookup in sparse documents.
//!
//! Documents are whatever the caller had lying around, so a lookup never fails: a
//! missing key, a non-object in the middle of the path, or an explicit `null` all
//! come back as `None` and the leaf scores 0.

use serde_json::Value;

use crate::types::FieldPath;

/// Resolve `path` against `document`. The root path returns the document itself.
pub fn get<'a>(document: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    let mut current = document;
    for key in path.keys() {
        current = current.as_object()?.get(key)?;
    }
    // INVARIANT: an explicit null is indistinguishable from a missing key
    match current {
        Value::Null => None,
        value => Some(value),
    }
}
