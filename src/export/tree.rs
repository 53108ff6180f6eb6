//! Indented-text export of namespace mirrors.
//!
//! Renders one tree per call, with modules as `segment/` lines and function
//! leaves followed by their graph-type labels. Placeholder modules are marked
//! so gaps in the declared module set stand out.

use crate::namespace::{Namespace, NamespaceEntry};

/// Render a namespace tree as indented text.
///
/// The first line is the root node's display form; each level below indents
/// by two spaces.
pub fn render_tree<F>(namespace: &Namespace<F>) -> String {
    let mut output = String::new();
    output.push_str(&format!("{namespace}\n"));
    render_children(namespace, 1, &mut output);
    output
}

fn render_children<F>(namespace: &Namespace<F>, depth: usize, output: &mut String) {
    let indent = "  ".repeat(depth);
    for (segment, entry) in namespace.entries() {
        match entry {
            NamespaceEntry::Module(child) => {
                if child.is_placeholder() {
                    output.push_str(&format!("{indent}{segment}/ (placeholder)\n"));
                } else {
                    output.push_str(&format!("{indent}{segment}/\n"));
                }
                render_children(child, depth + 1, output);
            }
            NamespaceEntry::Function(func) => {
                let labels = func
                    .graph_types()
                    .iter()
                    .map(|graph_type| graph_type.label())
                    .collect::<Vec<_>>()
                    .join(", ");
                output.push_str(&format!("{indent}{segment} [{labels}]\n"));
            }
        }
    }
}
