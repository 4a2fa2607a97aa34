// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a query: documents, nodes, leaves and results.
//!
//! A query is a tree. Combinator nodes (`AND`, `OR`, `NOT`) hold children; leaf nodes
//! hold a single `field <operator> operand` predicate plus modifiers. Evaluating the
//! tree against one document produces a [`MatchResult`].
//!
//! | Rust Type      | Role                                                   |
//! |----------------|--------------------------------------------------------|
//! | `Document`     | Borrowed JSON value, never mutated                     |
//! | `FieldPath`    | Keys to walk through nested objects (empty = root)     |
//! | `Operator`     | Leaf operator kind, dispatched exhaustively            |
//! | `Operand`      | Literal JSON value or a pre-compiled regex             |
//! | `Modifiers`    | Weight, binary clamp, distance/time horizons           |
//! | `Node`         | Combinator or leaf                                     |
//! | `Query`        | Top-level parts (implicit AND or OR, caller's choice)  |
//! | `MatchResult`  | Score plus auxiliary metadata                          |
//!
//! # Invariants
//!
//! - Raw leaf scores are in `[0, 1]`. Weighted scores are `>= 0` and may exceed 1.
//! - Trees are immutable once built. Everything here is `Send + Sync`, so one query
//!   can be shared across threads scoring different documents.

use std::fmt;

use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// A document is any JSON value. In practice it's an object.
pub type Document = Value;

/// Operator-specific extras attached to a result (`distance`, regex captures).
pub type Auxiliary = Map<String, Value>;

// =============================================================================
// DEFAULTS
// =============================================================================

/// Default multiplicative weight for a leaf.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Default `_geo` horizon in meters. Distances at or past this score 0.
pub const DEFAULT_MAX_DISTANCE: f64 = 100_000.0;

/// Default `_time` horizon in seconds (one day).
pub const DEFAULT_MAX_TIME: f64 = 86_400.0;

/// Leaf operator tokens, in the order they're documented.
pub const OPERATOR_TOKENS: [&str; 12] = [
    "_eq", "_ne", "_in", "_nin", "_lt", "_lte", "_gt", "_gte", "_regex", "_sim", "_geo", "_time",
];

/// Combinator tokens. These take a list of sub-queries and can never be leaf operators.
pub const RESERVED_COMBINATORS: [&str; 3] = ["_and", "_or", "_not"];

// =============================================================================
// FIELD PATHS
// =============================================================================

/// Keys to follow through nested objects. The empty path addresses the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// The empty path.
    pub fn root() -> Self {
        FieldPath(Vec::new())
    }

    /// Split a dotted reference: `"address.city"` → `["address", "city"]`.
    /// The empty string is the root.
    pub fn parse(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::root();
        }
        FieldPath(dotted.split('.').map(str::to_string).collect())
    }

    pub fn keys(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<document>")
        } else {
            f.write_str(&self.0.join("."))
        }
    }
}

impl From<&str> for FieldPath {
    fn from(dotted: &str) -> Self {
        FieldPath::parse(dotted)
    }
}

impl From<Vec<String>> for FieldPath {
    fn from(keys: Vec<String>) -> Self {
        FieldPath(keys)
    }
}

impl From<&[&str]> for FieldPath {
    fn from(keys: &[&str]) -> Self {
        FieldPath(keys.iter().map(|k| (*k).to_string()).collect())
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

/// Leaf operator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Ne,
    In,
    Nin,
    Lt,
    Lte,
    Gt,
    Gte,
    Regex,
    /// `_regex` with `inverse: true`: the document value is the pattern.
    RegexInverse,
    Sim,
    Geo,
    Time,
}

impl Operator {
    /// Look up a leaf operator token. Combinator tokens are not operators and return `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        let op = match token {
            "_eq" => Operator::Eq,
            "_ne" => Operator::Ne,
            "_in" => Operator::In,
            "_nin" => Operator::Nin,
            "_lt" => Operator::Lt,
            "_lte" => Operator::Lte,
            "_gt" => Operator::Gt,
            "_gte" => Operator::Gte,
            "_regex" => Operator::Regex,
            "_sim" => Operator::Sim,
            "_geo" => Operator::Geo,
            "_time" => Operator::Time,
            _ => return None,
        };
        Some(op)
    }

    pub fn token(self) -> &'static str {
        match self {
            Operator::Eq => "_eq",
            Operator::Ne => "_ne",
            Operator::In => "_in",
            Operator::Nin => "_nin",
            Operator::Lt => "_lt",
            Operator::Lte => "_lte",
            Operator::Gt => "_gt",
            Operator::Gte => "_gte",
            Operator::Regex | Operator::RegexInverse => "_regex",
            Operator::Sim => "_sim",
            Operator::Geo => "_geo",
            Operator::Time => "_time",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::RegexInverse => f.write_str("_regex(inverse)"),
            other => f.write_str(other.token()),
        }
    }
}

/// Combinator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    And,
    Or,
    Not,
}

impl Combinator {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "_and" => Some(Combinator::And),
            "_or" => Some(Combinator::Or),
            "_not" => Some(Combinator::Not),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Combinator::And => "_and",
            Combinator::Or => "_or",
            Combinator::Not => "_not",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Combinator::And => "AND",
            Combinator::Or => "OR",
            Combinator::Not => "NOT",
        })
    }
}

// =============================================================================
// LEAVES
// =============================================================================

/// Right-hand side of a leaf predicate.
#[derive(Debug, Clone)]
pub enum Operand {
    Value(Value),
    /// Compiled once when the query is built, reused for every document.
    Pattern(Regex),
}

impl Operand {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Operand::Value(v) => Some(v),
            Operand::Pattern(_) => None,
        }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Value(value)
    }
}

impl From<Regex> for Operand {
    fn from(pattern: Regex) -> Self {
        Operand::Pattern(pattern)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Value(v) => write!(f, "{}", v),
            Operand::Pattern(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

/// Per-leaf knobs. Defaults match the query syntax defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modifiers {
    /// `w`: multiplies a non-zero score. Not clamped, so `w > 1` is a boost.
    pub weight: f64,
    /// `b`: any positive raw score becomes exactly 1 before weighting.
    pub binary: bool,
    /// `max_distance` in meters, for `_geo`.
    pub max_distance: f64,
    /// `max_time` in seconds, for `_time`.
    pub max_time: f64,
    /// `inverse`, for `_regex`.
    pub inverse: bool,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            weight: DEFAULT_WEIGHT,
            binary: false,
            max_distance: DEFAULT_MAX_DISTANCE,
            max_time: DEFAULT_MAX_TIME,
            inverse: false,
        }
    }
}

/// A single `field <operator> operand` predicate.
#[derive(Debug, Clone)]
pub struct Leaf {
    pub field: FieldPath,
    pub operator: Operator,
    pub operand: Operand,
    pub modifiers: Modifiers,
}

impl Leaf {
    pub fn new(field: impl Into<FieldPath>, operator: Operator, operand: impl Into<Operand>) -> Self {
        Self {
            field: field.into(),
            operator,
            operand: operand.into(),
            modifiers: Modifiers {
                inverse: operator == Operator::RegexInverse,
                ..Modifiers::default()
            },
        }
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.modifiers.weight = weight;
        self
    }

    pub fn binary(mut self) -> Self {
        self.modifiers.binary = true;
        self
    }

    pub fn max_distance(mut self, meters: f64) -> Self {
        self.modifiers.max_distance = meters;
        self
    }

    pub fn max_time(mut self, seconds: f64) -> Self {
        self.modifiers.max_time = seconds;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

// =============================================================================
// NODES
// =============================================================================

/// A query-tree node.
#[derive(Debug, Clone)]
pub enum Node {
    Combinator { kind: Combinator, children: Vec<Node> },
    Leaf(Leaf),
}

impl Node {
    pub fn and(children: Vec<Node>) -> Self {
        Node::Combinator {
            kind: Combinator::And,
            children,
        }
    }

    pub fn or(children: Vec<Node>) -> Self {
        Node::Combinator {
            kind: Combinator::Or,
            children,
        }
    }

    pub fn not(children: Vec<Node>) -> Self {
        Node::Combinator {
            kind: Combinator::Not,
            children,
        }
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, prefix: &str, last: bool, top: bool) -> fmt::Result {
        let (branch, extend) = match (top, last) {
            (true, _) => ("", ""),
            (false, true) => ("└─ ", "   "),
            (false, false) => ("├─ ", "│  "),
        };
        match self {
            Node::Leaf(leaf) => {
                write!(f, "{}{}{} {} {}", prefix, branch, leaf.field, leaf.operator, leaf.operand)?;
                let m = &leaf.modifiers;
                if m.weight != DEFAULT_WEIGHT {
                    write!(f, " w={}", m.weight)?;
                }
                if m.binary {
                    f.write_str(" b")?;
                }
                match leaf.operator {
                    Operator::Geo if m.max_distance != DEFAULT_MAX_DISTANCE => {
                        write!(f, " max_distance={}", m.max_distance)?
                    }
                    Operator::Time if m.max_time != DEFAULT_MAX_TIME => {
                        write!(f, " max_time={}", m.max_time)?
                    }
                    _ => {}
                }
                writeln!(f)
            }
            Node::Combinator { kind, children } => {
                writeln!(f, "{}{}{}", prefix, branch, kind)?;
                let child_prefix = format!("{}{}", prefix, extend);
                for (i, child) in children.iter().enumerate() {
                    child.write_tree(f, &child_prefix, i + 1 == children.len(), false)?;
                }
                Ok(())
            }
        }
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, "", true, true)
    }
}

/// The top-level parts of a query.
///
/// Whether the parts are ANDed or ORed is decided at scoring time: `filter_score`
/// reads them as AND, `match_score` as OR.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub parts: Vec<Node>,
}

impl Query {
    pub fn new(parts: Vec<Node>) -> Self {
        Self { parts }
    }
}

impl From<Node> for Query {
    fn from(node: Node) -> Self {
        Query { parts: vec![node] }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// Score plus auxiliary metadata for one (node, document) evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub score: f64,
    pub auxiliary: Auxiliary,
}

impl MatchResult {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            auxiliary: Auxiliary::new(),
        }
    }

    pub fn with_auxiliary(score: f64, auxiliary: Auxiliary) -> Self {
        Self { score, auxiliary }
    }

    /// Strictly positive score.
    pub fn is_match(&self) -> bool {
        self.score > 0.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.auxiliary.get(key)
    }

    /// The flat `match` record: auxiliary keys plus `score`. `score` wins on collision.
    pub fn to_record(&self) -> Value {
        let mut record = self.auxiliary.clone();
        record.insert("score".to_string(), score_value(self.score));
        Value::Object(record)
    }
}

impl Serialize for MatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = self.auxiliary.keys().filter(|k| k.as_str() != "score").count();
        let mut map = serializer.serialize_map(Some(extra + 1))?;
        map.serialize_entry("score", &self.score)?;
        for (key, value) in &self.auxiliary {
            if key != "score" {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

/// JSON numbers can't hold NaN or infinity; those become null.
fn score_value(score: f64) -> Value {
    serde_json::Number::from_f64(score).map_or(Value::Null, Value::Number)
}
