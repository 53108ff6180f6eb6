//! Per-graph-type namespace mirror trees.
//!
//! Each graph type owns a [`Namespace`] tree that mirrors the module layout
//! of every function registered for it. Interior nodes are created lazily as
//! registrations walk their module paths; leaves hold the function records
//! themselves. Nodes are named by the full dotted path they mirror, library
//! segment included, while the trees are rooted per graph type.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use log::trace;

use crate::function::ApiFunction;

/// The set of module paths known to wrap real modules.
///
/// Namespace nodes consult this index at creation time to decide between
/// the placeholder and wrapping display forms.
#[derive(Debug, Clone, Default)]
pub(crate) struct ModuleIndex {
    paths: BTreeSet<String>,
}

impl ModuleIndex {
    /// Record a module path, returning `false` if it was already declared.
    pub(crate) fn declare(&mut self, path: String) -> bool {
        self.paths.insert(path)
    }

    pub(crate) fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub(crate) fn len(&self) -> usize {
        self.paths.len()
    }
}

/// One child of a namespace node: a nested module or a function leaf.
#[derive(Clone)]
pub enum NamespaceEntry<F> {
    /// A nested namespace mirroring a submodule
    Module(Namespace<F>),
    /// A registered function
    Function(ApiFunction<F>),
}

impl<F> NamespaceEntry<F> {
    /// The nested namespace, if this entry is a module.
    pub fn as_module(&self) -> Option<&Namespace<F>> {
        match self {
            NamespaceEntry::Module(namespace) => Some(namespace),
            NamespaceEntry::Function(_) => None,
        }
    }

    /// The function record, if this entry is a function leaf.
    pub fn as_function(&self) -> Option<&ApiFunction<F>> {
        match self {
            NamespaceEntry::Module(_) => None,
            NamespaceEntry::Function(func) => Some(func),
        }
    }

    /// Whether this entry is a nested module.
    pub fn is_module(&self) -> bool {
        matches!(self, NamespaceEntry::Module(_))
    }

    /// Whether this entry is a function leaf.
    pub fn is_function(&self) -> bool {
        matches!(self, NamespaceEntry::Function(_))
    }
}

impl<F> fmt::Debug for NamespaceEntry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamespaceEntry::Module(namespace) => f.debug_tuple("Module").field(namespace).finish(),
            NamespaceEntry::Function(func) => f.debug_tuple("Function").field(func).finish(),
        }
    }
}

/// A node in a graph type's namespace mirror.
///
/// A node either wraps a declared module or stands in as a placeholder for a
/// path segment no declared module matches. The distinction is fixed when the
/// node is created and shows up in the [`Display`](fmt::Display) form:
/// `<Namespace for mylib.algorithms>` for a wrapping node versus
/// `<Namespace mylib.generators>` for a placeholder.
#[derive(Clone)]
pub struct Namespace<F> {
    /// Full dotted node name, library segment included
    name: String,
    /// Whether the name matched a declared module at creation time
    wraps_module: bool,
    /// Child modules and function leaves, keyed by path segment
    children: BTreeMap<String, NamespaceEntry<F>>,
}

impl<F> Namespace<F> {
    pub(crate) fn new(name: impl Into<String>, modules: &ModuleIndex) -> Self {
        let name = name.into();
        let wraps_module = modules.contains(&name);
        trace!("Creating namespace node: {name} (wraps_module={wraps_module})");
        Self {
            name,
            wraps_module,
            children: BTreeMap::new(),
        }
    }

    /// Full dotted name of the path this node mirrors.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this node wraps a declared module.
    pub fn wraps_module(&self) -> bool {
        self.wraps_module
    }

    /// Whether this node is a placeholder for an undeclared path.
    pub fn is_placeholder(&self) -> bool {
        !self.wraps_module
    }

    /// Look up a direct child by path segment.
    pub fn get(&self, segment: &str) -> Option<&NamespaceEntry<F>> {
        self.children.get(segment)
    }

    /// Look up an entry by dotted path relative to this node.
    ///
    /// Returns `None` if any intermediate segment is missing or resolves to
    /// a function instead of a module.
    pub fn lookup(&self, path: &str) -> Option<&NamespaceEntry<F>> {
        let mut segments = path.split('.');
        let mut entry = self.get(segments.next()?)?;
        for segment in segments {
            entry = entry.as_module()?.get(segment)?;
        }
        Some(entry)
    }

    /// Look up a function by dotted path relative to this node.
    pub fn function(&self, path: &str) -> Option<&ApiFunction<F>> {
        self.lookup(path)?.as_function()
    }

    /// Look up a nested module by dotted path relative to this node.
    pub fn module(&self, path: &str) -> Option<&Namespace<F>> {
        self.lookup(path)?.as_module()
    }

    /// Iterate over direct children in segment order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &NamespaceEntry<F>)> {
        self.children
            .iter()
            .map(|(segment, entry)| (segment.as_str(), entry))
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether this node has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// All functions in this subtree, as path/record pairs.
    ///
    /// Paths are dotted and relative to this node, in tree order.
    pub fn functions(&self) -> Vec<(String, &ApiFunction<F>)> {
        let mut out = Vec::new();
        self.collect_functions(None, &mut out);
        out
    }

    fn collect_functions<'a>(
        &'a self,
        prefix: Option<&str>,
        out: &mut Vec<(String, &'a ApiFunction<F>)>,
    ) {
        for (segment, entry) in &self.children {
            let path = match prefix {
                Some(prefix) => format!("{prefix}.{segment}"),
                None => segment.clone(),
            };
            match entry {
                NamespaceEntry::Module(child) => child.collect_functions(Some(&path), out),
                NamespaceEntry::Function(func) => out.push((path, func)),
            }
        }
    }

    /// Number of function leaves in this subtree.
    pub fn function_count(&self) -> usize {
        self.children
            .values()
            .map(|entry| match entry {
                NamespaceEntry::Module(child) => child.function_count(),
                NamespaceEntry::Function(_) => 1,
            })
            .sum()
    }

    /// Number of module nodes in this subtree, not counting this node.
    pub fn module_count(&self) -> usize {
        self.children
            .values()
            .map(|entry| match entry {
                NamespaceEntry::Module(child) => 1 + child.module_count(),
                NamespaceEntry::Function(_) => 0,
            })
            .sum()
    }

    /// Insert a function under this node, creating interior nodes as needed.
    ///
    /// Interior nodes take the full dotted path they mirror as their name. A
    /// function leaf occupying a segment a later registration needs as a
    /// module is replaced by a fresh module node, and a function inserted at
    /// an occupied path replaces whatever was there.
    pub(crate) fn insert(&mut self, func: ApiFunction<F>, modules: &ModuleIndex) {
        let segments: Vec<String> = func.mirror_segments().map(str::to_string).collect();
        let mut full_name = func.library_segment().to_string();
        let mut current = self;
        for segment in segments {
            full_name.push('.');
            full_name.push_str(&segment);
            let entry = current
                .children
                .entry(segment)
                .and_modify(|entry| {
                    if !entry.is_module() {
                        *entry =
                            NamespaceEntry::Module(Namespace::new(full_name.as_str(), modules));
                    }
                })
                .or_insert_with(|| {
                    NamespaceEntry::Module(Namespace::new(full_name.as_str(), modules))
                });
            current = match entry {
                NamespaceEntry::Module(child) => child,
                NamespaceEntry::Function(_) => unreachable!("entry above always stores a module"),
            };
        }
        current
            .children
            .insert(func.name().to_string(), NamespaceEntry::Function(func));
    }
}

impl<F> fmt::Debug for Namespace<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Namespace")
            .field("name", &self.name)
            .field("wraps_module", &self.wraps_module)
            .field("children", &self.children)
            .finish()
    }
}

impl<F> fmt::Display for Namespace<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.wraps_module {
            write!(f, "<Namespace for {}>", self.name)
        } else {
            write!(f, "<Namespace {}>", self.name)
        }
    }
}
