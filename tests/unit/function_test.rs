//! Unit tests for `ApiFunction` records and their metadata.

use graphapi::{ApiFunction, ApiRegistry, GraphType};

#[test]
fn test_record_exposes_its_metadata() {
    let func = ApiFunction::new("shortest_path", "mylib.algorithms.paths", ());
    assert_eq!(func.name(), "shortest_path");
    assert_eq!(func.module_path(), "mylib.algorithms.paths");
    assert!(func.graph_types().is_empty());
}

#[test]
fn test_rust_style_paths_are_normalized() {
    let func = ApiFunction::new("shortest_path", "mylib::algorithms::paths", ());
    assert_eq!(func.module_path(), "mylib.algorithms.paths");
}

#[test]
fn test_supports_reflects_registration() {
    let mut registry = ApiRegistry::new();
    let func = registry
        .register_types([GraphType::Graph, GraphType::MultiGraph])
        .apply(ApiFunction::new("degree", "mylib.measures", ()));

    assert!(func.supports(GraphType::Graph));
    assert!(func.supports(GraphType::MultiGraph));
    assert!(!func.supports(GraphType::DiGraph));
    assert!(!func.supports(GraphType::MultiDiGraph));
}

#[test]
fn test_handler_is_callable_through_the_record() {
    let func = ApiFunction::new("double", "mylib.util", |x: usize| x * 2);
    assert_eq!((func.handler())(21), 42);
    assert_eq!((func.into_handler())(5), 10);
}

#[test]
fn test_debug_output_redacts_the_handler() {
    let func = ApiFunction::new("double", "mylib.util", |x: usize| x * 2);
    let repr = format!("{func:?}");
    assert!(repr.contains("double"));
    assert!(repr.contains("mylib.util"));
    assert!(repr.ends_with(".. }"));
}
