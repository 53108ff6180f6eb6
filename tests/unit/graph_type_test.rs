//! Unit tests for `GraphType` labels, parsing, and ordering.

use graphapi::{GraphType, GraphTypeSet};

#[test]
fn test_all_lists_four_distinct_types() {
    let set: GraphTypeSet = GraphType::ALL.into_iter().collect();
    assert_eq!(set.len(), 4);
}

#[test]
fn test_labels_parse_back_to_their_type() {
    for graph_type in GraphType::ALL {
        assert_eq!(GraphType::from_label(graph_type.label()), Some(graph_type));
        assert_eq!(
            graph_type.label().parse::<GraphType>().unwrap(),
            graph_type
        );
    }
}

#[test]
fn test_labels_are_case_sensitive() {
    assert_eq!(GraphType::from_label("Graph"), None);
    assert_eq!(GraphType::from_label("DIGRAPH"), None);
    assert_eq!(GraphType::from_label("multi_graph"), None);
}

#[test]
fn test_display_writes_label() {
    assert_eq!(format!("{}", GraphType::Graph), "graph");
    assert_eq!(format!("{}", GraphType::MultiDiGraph), "multidigraph");
}

#[test]
fn test_set_iteration_is_deterministic() {
    let forward: GraphTypeSet = GraphType::ALL.into_iter().collect();
    let backward: GraphTypeSet = GraphType::ALL.into_iter().rev().collect();
    let forward_labels: Vec<&str> = forward.iter().map(|t| t.label()).collect();
    let backward_labels: Vec<&str> = backward.iter().map(|t| t.label()).collect();
    assert_eq!(forward_labels, backward_labels);
}

#[test]
fn test_serialization_round_trips_as_labels() {
    let set: GraphTypeSet = [GraphType::DiGraph, GraphType::Graph].into_iter().collect();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"["graph","digraph"]"#);

    let parsed: GraphTypeSet = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, set);
}
