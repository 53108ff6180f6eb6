//! JSON export of namespace mirrors for web-based inspection tools.
//!
//! Generates nested objects mirroring the tree: each node carries its full
//! name, its placeholder/wrapping flag, and a map of children keyed by path
//! segment. Function leaves carry their graph-type labels.

use serde_json::{json, Value};

use crate::namespace::{Namespace, NamespaceEntry};
use crate::registry::ApiRegistry;

/// Export one namespace tree as pretty-printed JSON.
pub fn export_json<F>(namespace: &Namespace<F>) -> String {
    let value = namespace_to_json(namespace);
    // serde_json::to_string_pretty should never fail for our data structures
    serde_json::to_string_pretty(&value).expect("Failed to serialize JSON")
}

/// Export all four views of a registry as pretty-printed JSON.
///
/// The result is one object keyed by view name, `graph_only` through
/// `multidigraph_only`.
pub fn export_registry_json<F>(registry: &ApiRegistry<F>) -> String {
    let value = json!({
        "graph_only": namespace_to_json(registry.graph_only()),
        "digraph_only": namespace_to_json(registry.digraph_only()),
        "multigraph_only": namespace_to_json(registry.multigraph_only()),
        "multidigraph_only": namespace_to_json(registry.multidigraph_only()),
    });
    // serde_json::to_string_pretty should never fail for our data structures
    serde_json::to_string_pretty(&value).expect("Failed to serialize JSON")
}

/// Convert a namespace node to a JSON object.
fn namespace_to_json<F>(namespace: &Namespace<F>) -> Value {
    let mut children = serde_json::Map::new();
    for (segment, entry) in namespace.entries() {
        let value = match entry {
            NamespaceEntry::Module(child) => namespace_to_json(child),
            NamespaceEntry::Function(func) => json!({
                "function": func.name(),
                "module": func.module_path(),
                "graph_types": func.graph_types(),
            }),
        };
        children.insert(segment.to_string(), value);
    }

    json!({
        "name": namespace.name(),
        "wraps_module": namespace.wraps_module(),
        "children": Value::Object(children),
    })
}
