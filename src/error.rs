//! Error types for registry operations.
//!
//! The registry has a single failure mode: a caller asked for graph-type
//! labels outside the fixed allowed set. Everything else is well-formed by
//! construction.

use std::collections::BTreeSet;

use thiserror::Error;

/// A specialized Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur during registration.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// One or more requested labels are outside the fixed graph-type set
    #[error("Invalid graph types: {labels:?}")]
    InvalidGraphTypes {
        /// The unrecognized labels, sorted and deduplicated
        labels: Vec<String>,
    },
}

impl RegistryError {
    /// Create an [`InvalidGraphTypes`](RegistryError::InvalidGraphTypes) error.
    ///
    /// Labels are sorted and deduplicated so the message is deterministic
    /// regardless of the order they were requested in.
    pub fn invalid_graph_types<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: BTreeSet<String> = labels.into_iter().map(Into::into).collect();
        RegistryError::InvalidGraphTypes {
            labels: labels.into_iter().collect(),
        }
    }
}
