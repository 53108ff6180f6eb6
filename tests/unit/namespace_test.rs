//! Unit tests for namespace tree structure and lookups.

use graphapi::{ApiFunction, ApiRegistry, GraphType, NamespaceEntry};

fn sample_registry() -> ApiRegistry<u32> {
    let mut registry = ApiRegistry::new();
    registry.declare_modules(["mylib.algorithms", "mylib.algorithms.flow"]);

    let mut registration = registry.register_types([GraphType::Graph]);
    registration.apply(ApiFunction::new("shortest_path", "mylib.algorithms.paths", 1));
    registration.apply(ApiFunction::new("max_flow", "mylib.algorithms.flow", 2));
    registration.apply(ApiFunction::new("density", "mylib.measures", 3));
    registry
}

#[test]
fn test_node_names_include_the_library_segment() {
    let registry = sample_registry();
    let root = registry.graph_only();

    assert_eq!(root.name(), "graph");
    assert_eq!(root.module("algorithms").unwrap().name(), "mylib.algorithms");
    assert_eq!(
        root.module("algorithms.paths").unwrap().name(),
        "mylib.algorithms.paths"
    );
}

#[test]
fn test_declared_modules_wrap_and_others_are_placeholders() {
    let registry = sample_registry();
    let root = registry.graph_only();

    assert!(root.module("algorithms").unwrap().wraps_module());
    assert!(root.module("algorithms.flow").unwrap().wraps_module());
    assert!(root.module("algorithms.paths").unwrap().is_placeholder());
    assert!(root.module("measures").unwrap().is_placeholder());
    assert!(root.is_placeholder());
}

#[test]
fn test_display_forms_for_both_node_kinds() {
    let registry = sample_registry();
    let root = registry.graph_only();

    assert_eq!(
        root.module("algorithms").unwrap().to_string(),
        "<Namespace for mylib.algorithms>"
    );
    assert_eq!(
        root.module("measures").unwrap().to_string(),
        "<Namespace mylib.measures>"
    );
    assert_eq!(root.to_string(), "<Namespace graph>");
}

#[test]
fn test_dotted_lookup_walks_the_tree() {
    let registry = sample_registry();
    let root = registry.graph_only();

    let func = root.function("algorithms.paths.shortest_path").unwrap();
    assert_eq!(*func.handler(), 1);

    assert!(root.lookup("algorithms").unwrap().is_module());
    assert!(root.lookup("algorithms.flow.max_flow").unwrap().is_function());
    assert!(root.lookup("algorithms.missing").is_none());
    assert!(root.lookup("measures.density.extra").is_none());
}

#[test]
fn test_entries_iterate_children_in_segment_order() {
    let registry = sample_registry();
    let root = registry.graph_only();

    let segments: Vec<&str> = root.entries().map(|(segment, _)| segment).collect();
    assert_eq!(segments, vec!["algorithms", "measures"]);

    for (_, entry) in root.entries() {
        assert!(matches!(entry, NamespaceEntry::Module(_)));
    }
}

#[test]
fn test_functions_enumerates_the_whole_subtree() {
    let registry = sample_registry();
    let root = registry.graph_only();

    let paths: Vec<String> = root.functions().into_iter().map(|(path, _)| path).collect();
    assert_eq!(
        paths,
        vec![
            "algorithms.flow.max_flow",
            "algorithms.paths.shortest_path",
            "measures.density"
        ]
    );
    assert_eq!(root.function_count(), 3);
    assert_eq!(root.module_count(), 4);
    assert_eq!(root.len(), 2);
    assert!(!root.is_empty());
}

#[test]
fn test_untouched_views_stay_empty() {
    let registry = sample_registry();
    assert!(registry.digraph_only().is_empty());
    assert!(registry.multigraph_only().is_empty());
    assert!(registry.multidigraph_only().is_empty());
    assert_eq!(registry.digraph_only().function_count(), 0);
}
