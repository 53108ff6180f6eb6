//! Function records carried through registration.
//!
//! An [`ApiFunction`] bundles a function's name, its dotted module path, and
//! an arbitrary handler payload. Registration stamps the record with the set
//! of graph types it supports and hands it back, so the caller keeps using
//! the same value it constructed.

use std::fmt;

use crate::types::{GraphType, GraphTypeSet};

/// Normalize a module path to dotted form.
///
/// Accepts both `mylib::algorithms::paths` and `mylib.algorithms.paths`.
pub(crate) fn normalize_path(path: &str) -> String {
    path.replace("::", ".")
}

/// A function known to the registry.
///
/// The handler payload `F` is opaque to the registry; it is cloned into each
/// per-type namespace the function is registered under.
#[derive(Clone)]
pub struct ApiFunction<F> {
    /// Bare function name, without any module prefix
    name: String,
    /// Dotted module path, starting with the library segment
    module_path: String,
    /// Graph types this function has been registered for
    graph_types: GraphTypeSet,
    /// Opaque handler payload
    handler: F,
}

impl<F> ApiFunction<F> {
    /// Create an unregistered function record.
    ///
    /// `module_path` may use either `::` or `.` separators; it is stored in
    /// dotted form. The graph-type set starts empty and is filled in by
    /// registration.
    pub fn new(name: impl Into<String>, module_path: impl Into<String>, handler: F) -> Self {
        Self {
            name: name.into(),
            module_path: normalize_path(&module_path.into()),
            graph_types: GraphTypeSet::new(),
            handler,
        }
    }

    /// The bare function name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The dotted module path, including the library segment.
    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    /// The graph types this function has been registered for.
    ///
    /// Empty until the record passes through registration.
    pub fn graph_types(&self) -> &GraphTypeSet {
        &self.graph_types
    }

    /// Whether this function was registered for the given graph type.
    pub fn supports(&self, graph_type: GraphType) -> bool {
        self.graph_types.contains(&graph_type)
    }

    /// Borrow the handler payload.
    pub fn handler(&self) -> &F {
        &self.handler
    }

    /// Consume the record, returning the handler payload.
    pub fn into_handler(self) -> F {
        self.handler
    }

    pub(crate) fn set_graph_types(&mut self, graph_types: GraphTypeSet) {
        self.graph_types = graph_types;
    }

    /// Module path segments below the library, in order.
    ///
    /// The leading library segment is dropped: mirror trees are rooted per
    /// graph type, not per library.
    pub(crate) fn mirror_segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.module_path
            .split('.')
            .skip(1)
            .filter(|segment| !segment.is_empty())
    }

    /// The leading library segment of the module path.
    pub(crate) fn library_segment(&self) -> &str {
        self.module_path.split('.').next().unwrap_or("")
    }
}

impl<F> fmt::Debug for ApiFunction<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiFunction")
            .field("name", &self.name)
            .field("module_path", &self.module_path)
            .field("graph_types", &self.graph_types)
            .finish_non_exhaustive()
    }
}
