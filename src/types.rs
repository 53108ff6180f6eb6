//! Graph-type labels and label sets.
//!
//! The registry recognizes exactly four graph types. [`GraphType`] is the
//! closed enumeration of those types; every user-facing label maps to one
//! variant and back via [`GraphType::label`] and [`GraphType::from_label`].

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// An ordered, deduplicated set of graph types.
///
/// Backed by a `BTreeSet` so iteration order is deterministic and repeated
/// labels collapse to a single entry.
pub type GraphTypeSet = BTreeSet<GraphType>;

/// The four graph types a function can be registered for.
///
/// The set is closed: any label outside these four is rejected with
/// [`RegistryError::InvalidGraphTypes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphType {
    /// Undirected graph without parallel edges
    Graph,
    /// Directed graph without parallel edges
    DiGraph,
    /// Undirected graph with parallel edges
    MultiGraph,
    /// Directed graph with parallel edges
    MultiDiGraph,
}

impl GraphType {
    /// All four graph types, in declaration order.
    pub const ALL: [GraphType; 4] = [
        GraphType::Graph,
        GraphType::DiGraph,
        GraphType::MultiGraph,
        GraphType::MultiDiGraph,
    ];

    /// The lowercase label for this graph type.
    pub fn label(self) -> &'static str {
        match self {
            GraphType::Graph => "graph",
            GraphType::DiGraph => "digraph",
            GraphType::MultiGraph => "multigraph",
            GraphType::MultiDiGraph => "multidigraph",
        }
    }

    /// Parse a label into a graph type, returning `None` for unknown labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "graph" => Some(GraphType::Graph),
            "digraph" => Some(GraphType::DiGraph),
            "multigraph" => Some(GraphType::MultiGraph),
            "multidigraph" => Some(GraphType::MultiDiGraph),
            _ => None,
        }
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for GraphType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GraphType::from_label(s).ok_or_else(|| RegistryError::invalid_graph_types([s]))
    }
}
