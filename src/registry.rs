//! The per-process function registry and its registration handle.
//!
//! An [`ApiRegistry`] owns four namespace mirrors, one per graph type, plus
//! the index of declared module paths. Functions enter the registry through
//! [`ApiRegistry::register`], which validates the requested labels up front
//! and returns a [`Registration`] handle; applying the handle stamps each
//! function record and mirrors it into every requested tree.

use std::fmt;

use log::debug;

use crate::error::{RegistryError, Result};
use crate::function::{normalize_path, ApiFunction};
use crate::namespace::{ModuleIndex, Namespace};
use crate::types::{GraphType, GraphTypeSet};

/// A registry of functions partitioned by the graph types they support.
///
/// The registry is built once during startup and read afterwards. It is
/// `Send + Sync` whenever the handler payload is, so a fully built registry
/// can be shared behind a `OnceLock` or `LazyLock` static.
pub struct ApiRegistry<F> {
    /// Module paths declared as real, consulted when nodes are created
    modules: ModuleIndex,
    /// Functions usable on undirected simple graphs
    graph_only: Namespace<F>,
    /// Functions usable on directed simple graphs
    digraph_only: Namespace<F>,
    /// Functions usable on undirected multigraphs
    multigraph_only: Namespace<F>,
    /// Functions usable on directed multigraphs
    multidigraph_only: Namespace<F>,
}

impl<F> ApiRegistry<F> {
    /// Create an empty registry with its four per-type roots.
    ///
    /// Roots are named by their graph-type label. They exist before any
    /// module can be declared, and a node's placeholder/wrapping form is
    /// fixed at creation, so roots are always placeholders.
    pub fn new() -> Self {
        let modules = ModuleIndex::default();
        let root = |graph_type: GraphType| Namespace::new(graph_type.label(), &modules);
        Self {
            graph_only: root(GraphType::Graph),
            digraph_only: root(GraphType::DiGraph),
            multigraph_only: root(GraphType::MultiGraph),
            multidigraph_only: root(GraphType::MultiDiGraph),
            modules,
        }
    }

    /// Declare a module path as wrapping a real module.
    ///
    /// Namespace nodes created afterwards for this exact path display in
    /// wrapping form instead of as placeholders. Declarations only affect
    /// nodes created later, so modules should be declared before the
    /// registrations that mirror them. Returns `false` if the path was
    /// already declared.
    pub fn declare_module(&mut self, path: impl Into<String>) -> bool {
        let path = normalize_path(&path.into());
        debug!("Declaring module: {path}");
        self.modules.declare(path)
    }

    /// Declare several module paths at once.
    pub fn declare_modules<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for path in paths {
            self.declare_module(path);
        }
    }

    /// Number of distinct module paths declared so far.
    pub fn declared_module_count(&self) -> usize {
        self.modules.len()
    }

    /// The namespace of functions registered for undirected simple graphs.
    pub fn graph_only(&self) -> &Namespace<F> {
        &self.graph_only
    }

    /// The namespace of functions registered for directed simple graphs.
    pub fn digraph_only(&self) -> &Namespace<F> {
        &self.digraph_only
    }

    /// The namespace of functions registered for undirected multigraphs.
    pub fn multigraph_only(&self) -> &Namespace<F> {
        &self.multigraph_only
    }

    /// The namespace of functions registered for directed multigraphs.
    pub fn multidigraph_only(&self) -> &Namespace<F> {
        &self.multidigraph_only
    }

    /// The namespace for the given graph type.
    pub fn view(&self, graph_type: GraphType) -> &Namespace<F> {
        match graph_type {
            GraphType::Graph => &self.graph_only,
            GraphType::DiGraph => &self.digraph_only,
            GraphType::MultiGraph => &self.multigraph_only,
            GraphType::MultiDiGraph => &self.multidigraph_only,
        }
    }

    /// Begin a registration for the given graph-type labels.
    ///
    /// Labels are validated as a whole before anything is touched, and
    /// duplicate labels collapse to one entry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidGraphTypes`] if any label is outside
    /// the fixed set, naming exactly the unrecognized labels; no function is
    /// mirrored in that case.
    pub fn register<I, S>(&mut self, graph_types: I) -> Result<Registration<'_, F>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted = GraphTypeSet::new();
        let mut unknown: Vec<String> = Vec::new();
        for label in graph_types {
            let label = label.as_ref();
            match GraphType::from_label(label) {
                Some(graph_type) => {
                    accepted.insert(graph_type);
                }
                None => unknown.push(label.to_string()),
            }
        }
        if !unknown.is_empty() {
            return Err(RegistryError::invalid_graph_types(unknown));
        }
        Ok(Registration {
            registry: self,
            graph_types: accepted,
        })
    }

    /// Begin a registration for graph types known at compile time.
    ///
    /// The typed counterpart of [`register`](ApiRegistry::register); it
    /// cannot fail because [`GraphType`] values are valid by construction.
    pub fn register_types<I>(&mut self, graph_types: I) -> Registration<'_, F>
    where
        I: IntoIterator<Item = GraphType>,
    {
        Registration {
            graph_types: graph_types.into_iter().collect(),
            registry: self,
        }
    }

    pub(crate) fn insert_into(&mut self, graph_type: GraphType, func: ApiFunction<F>) {
        let modules = &self.modules;
        match graph_type {
            GraphType::Graph => self.graph_only.insert(func, modules),
            GraphType::DiGraph => self.digraph_only.insert(func, modules),
            GraphType::MultiGraph => self.multigraph_only.insert(func, modules),
            GraphType::MultiDiGraph => self.multidigraph_only.insert(func, modules),
        }
    }
}

impl<F> Default for ApiRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> fmt::Debug for ApiRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRegistry")
            .field("declared_modules", &self.modules.len())
            .field("graph_only", &self.graph_only)
            .field("digraph_only", &self.digraph_only)
            .field("multigraph_only", &self.multigraph_only)
            .field("multidigraph_only", &self.multidigraph_only)
            .finish()
    }
}

/// A validated registration, ready to apply to functions.
///
/// The handle borrows the registry mutably, so registrations are applied one
/// at a time. Its graph-type set is fixed at creation; each
/// [`apply`](Registration::apply) call mirrors one function into every tree
/// in the set.
pub struct Registration<'a, F> {
    registry: &'a mut ApiRegistry<F>,
    graph_types: GraphTypeSet,
}

impl<F> Registration<'_, F> {
    /// The graph types this registration targets.
    pub fn graph_types(&self) -> &GraphTypeSet {
        &self.graph_types
    }

    /// Register one function, returning the stamped record.
    ///
    /// The record's graph-type set is overwritten with this registration's
    /// set, one clone is mirrored into each targeted namespace, and the
    /// stamped record is handed back for the caller to keep using.
    pub fn apply(&mut self, mut func: ApiFunction<F>) -> ApiFunction<F>
    where
        F: Clone,
    {
        func.set_graph_types(self.graph_types.clone());
        debug!(
            "Registering function: {}.{} for {:?}",
            func.module_path(),
            func.name(),
            self.graph_types
        );
        for &graph_type in &self.graph_types {
            self.registry.insert_into(graph_type, func.clone());
        }
        func
    }
}

impl<F> fmt::Debug for Registration<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("graph_types", &self.graph_types)
            .finish_non_exhaustive()
    }
}
