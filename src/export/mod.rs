//! Export module for inspecting namespace mirrors in external tools.
//!
//! Supports two formats:
//! - **Tree**: indented text for terminals and logs
//! - **JSON**: structured output for web-based tools

pub mod json;
pub mod tree;

pub use json::{export_json, export_registry_json};
pub use tree::render_tree;
