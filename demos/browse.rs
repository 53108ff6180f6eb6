//! Browsing example demonstrating per-graph-type function views
//!
//! This example shows a host graph library registering its functions for the
//! graph types they support, then browsing the resulting views the way an
//! interactive session would.

use std::sync::LazyLock;

use graphapi::export::{export_json, render_tree};
use graphapi::{ApiFunction, ApiRegistry, GraphType};

/// Handlers in this demo take a node count and return a result code.
type Handler = fn(usize) -> usize;

static REGISTRY: LazyLock<ApiRegistry<Handler>> = LazyLock::new(build_registry);

fn build_registry() -> ApiRegistry<Handler> {
    let mut registry: ApiRegistry<Handler> = ApiRegistry::new();

    // The host library declares its real modules up front
    registry.declare_modules([
        "mylib.algorithms",
        "mylib.algorithms.paths",
        "mylib.generators",
    ]);

    // Functions usable on every graph type
    registry
        .register_types(GraphType::ALL)
        .apply(ApiFunction::new("node_count", "mylib.measures", |n| n));

    // Simple-graph algorithms
    registry
        .register_types([GraphType::Graph, GraphType::DiGraph])
        .apply(ApiFunction::new(
            "shortest_path",
            "mylib.algorithms.paths",
            |n| n / 2,
        ));

    // Multigraph generators
    registry
        .register_types([GraphType::MultiGraph, GraphType::MultiDiGraph])
        .apply(ApiFunction::new(
            "ladder",
            "mylib.generators.classic",
            |n| n * 2,
        ));

    registry
}

fn main() -> graphapi::Result<()> {
    println!("Browsing per-graph-type function views...\n");

    // String labels go through validation; a typo is caught here
    let mut scratch: ApiRegistry<Handler> = ApiRegistry::new();
    if let Err(err) = scratch.register(["graph", "hypergraph"]) {
        println!("✗ Rejected registration: {err}");
    }
    scratch
        .register(["digraph"])?
        .apply(ApiFunction::new("in_degree", "mylib.measures", |n| n));
    println!("✓ Registered in_degree for digraph\n");

    // The shared registry is built once, on first access
    println!("--- graph view ---");
    print!("{}", render_tree(REGISTRY.graph_only()));
    println!("\n--- multigraph view ---");
    print!("{}", render_tree(REGISTRY.multigraph_only()));

    // Look up a function through its view and call it
    if let Some(func) = REGISTRY.graph_only().function("algorithms.paths.shortest_path") {
        println!("\nshortest_path(10) -> {}", (func.handler())(10));
        println!("supports digraph: {}", func.supports(GraphType::DiGraph));
        println!("supports multigraph: {}", func.supports(GraphType::MultiGraph));
    }

    println!("\n--- Statistics ---");
    for graph_type in GraphType::ALL {
        let view = REGISTRY.view(graph_type);
        println!(
            "{}: {} functions, {} modules",
            graph_type,
            view.function_count(),
            view.module_count()
        );
    }

    // JSON export for external tools
    println!("\n--- JSON export (digraph view) ---");
    println!("{}", export_json(REGISTRY.digraph_only()));

    Ok(())
}
