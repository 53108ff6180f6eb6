//! # graphapi
//!
//! A registry for graph-library functions partitioned by the graph types they support.
//!
//! ## Core Principles
//!
//! - **Validate First**: unknown graph-type labels are rejected before anything is mirrored
//! - **Lazy Mirrors**: namespace nodes exist only along registered module paths
//! - **Build Once**: populate during startup, share read-only afterwards
//! - **Zero Magic**: module paths are declared explicitly, never scanned
//!
//! ## Architecture
//!
//! graphapi is organized in layers:
//!
//! ```text
//! Export (tree text, JSON)
//!     ↓
//! Registry (validation, per-type views)
//!     ↓
//! Namespace Mirrors (lazy module trees)
//!     ↓
//! Function Records (name, module path, handler)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use graphapi::{ApiFunction, ApiRegistry};
//!
//! type Handler = fn(usize) -> usize;
//!
//! # fn main() -> graphapi::Result<()> {
//! let mut registry: ApiRegistry<Handler> = ApiRegistry::new();
//! registry.declare_module("mylib.algorithms");
//!
//! // Register a function for the graph types it supports
//! registry
//!     .register(["graph", "digraph"])?
//!     .apply(ApiFunction::new("double", "mylib.algorithms", |x| x * 2));
//!
//! // Each view mirrors only the functions registered for it
//! assert!(registry.graph_only().function("algorithms.double").is_some());
//! assert!(registry.multigraph_only().function("algorithms.double").is_none());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod function;
pub mod namespace;
pub mod registry;
pub mod types;

// Re-export main types
pub use error::{RegistryError, Result};
pub use function::ApiFunction;
pub use namespace::{Namespace, NamespaceEntry};
pub use registry::{ApiRegistry, Registration};
pub use types::{GraphType, GraphTypeSet};
