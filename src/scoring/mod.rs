// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how leaf matches become numbers and how numbers combine.
//!
//! Two layers. `curve` turns a raw leaf degree into a weighted score and holds the
//! log-scaled proximity curve shared by `_geo` and `_time`. `combine` folds sibling
//! results under AND (product), OR (sum) and NOT (sum of inversions), merging their
//! auxiliary metadata with a first-seen-wins rule.

pub mod combine;
mod curve;

pub use curve::*;
