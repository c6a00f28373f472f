//! DOT format utilities for graph rendering.

use std::fmt::Write;

use depgraph_core::ModuleName;

/// Sanitize a string to be a valid DOT identifier.
/// Replaces any non-alphanumeric character with underscore.
pub fn sanitize_id(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Escape special characters for DOT labels.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Format a module name as a human label, breaking after each dot so deep
/// names stack vertically in the rendered graph.
pub fn module_label(name: &ModuleName) -> String {
    name.as_str().replace('.', ".\n")
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// A DOT graph builder for constructing valid DOT output.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Create a new DOT digraph with the given name.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph {name} {{");
        Self { output, indent: 1 }
    }

    /// Add a raw graph attribute (unquoted value, e.g. `concentrate=true`).
    pub fn attr_raw(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{key}={value};");
        self
    }

    /// Add a node style default.
    pub fn node_style(&mut self, attrs: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "node [{attrs}];");
        self
    }

    /// Add a blank line for readability.
    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Add a node with full attributes.
    pub fn node_full(&mut self, id: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{id}[");
        for (i, (key, value)) in attrs.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            let _ = write!(self.output, "{}=\"{}\"", key, escape_label(value));
        }
        self.output.push_str("];\n");
        self
    }

    /// Add an edge with attributes.
    pub fn edge_with_attrs(&mut self, from: &str, to: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{from} -> {to} [");
        for (i, (key, value)) in attrs.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            let _ = write!(self.output, "{key}=\"{value}\"");
        }
        self.output.push_str("];\n");
        self
    }

    /// Start a subgraph cluster.
    pub fn start_cluster(&mut self, id: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "subgraph cluster_{id} {{");
        self.indent += 1;
        self
    }

    /// End the current subgraph cluster.
    pub fn end_cluster(&mut self) -> &mut Self {
        self.indent = self.indent.saturating_sub(1).max(1);
        write_indent(&mut self.output, self.indent);
        self.output.push_str("}\n\n");
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sanitize_id() {
        assert_eq!(sanitize_id("pkg.sub-mod"), "pkg_sub_mod");
        assert_eq!(sanitize_id("plain"), "plain");
    }

    #[test]
    fn test_module_label() {
        let name = ModuleName::from_dotted("a.b.c").unwrap();
        assert_eq!(module_label(&name), "a.\nb.\nc");
    }

    #[test]
    fn test_builder_shapes() {
        let mut dot = DotBuilder::new("G");
        dot.attr_raw("concentrate", "true")
            .node_style("style=filled")
            .node_full("n1", &[("label", "a.\nb"), ("fillcolor", "#cc5252")])
            .edge_with_attrs("n1", "n2", &[("weight", "4")]);
        let out = dot.build();
        assert!(out.starts_with("digraph G {\n"));
        assert!(out.contains("concentrate=true;\n"));
        assert!(out.contains("node [style=filled];\n"));
        assert!(out.contains("n1[label=\"a.\\nb\", fillcolor=\"#cc5252\"];\n"));
        assert!(out.contains("n1 -> n2 [weight=\"4\"];\n"));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn test_cluster_scopes() {
        let mut dot = DotBuilder::new("G");
        dot.start_cluster("outer").start_cluster("inner");
        dot.end_cluster().end_cluster();
        let out = dot.build();
        assert_eq!(out.matches("subgraph cluster_").count(), 2);
        assert_eq!(out.lines().filter(|l| l.trim() == "}").count(), 3);
    }
}
