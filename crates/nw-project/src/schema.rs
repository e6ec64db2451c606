//! Network description schema.

use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

/// A network description: node count, storage choice, edges, and the
/// reachability queries to evaluate against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkDef {
    pub version: u32,
    pub name: String,
    pub nodes: i64,
    #[serde(default)]
    pub representation: Representation,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
    #[serde(default)]
    pub queries: Vec<QueryDef>,
}

/// Storage backend for the compiled network.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// N×N boolean matrix.
    #[default]
    Dense,
    /// Ordered neighbor set per node.
    Sparse,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EdgeDef {
    pub source: i64,
    pub target: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryDef {
    pub source: i64,
    pub target: i64,
    /// Expected answer, if the file asserts one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect: Option<bool>,
}
