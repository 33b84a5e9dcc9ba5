//! DOT serialization of the abstract graph.

use std::fmt::Write;

use dockmap_common::graph::{Edge, Endpoint, Graph, Node, Record};

/// Escape a string for use inside a double-quoted DOT string.
pub fn escape_quoted(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Escape a record field, the record grammar reserves `{ } | < >` on top of quoting.
pub fn escape_record_field(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '{' | '}' | '|' | '<' | '>' | '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

/// Serializes a record label. Groups are braced so nested groups alternate direction.
pub fn record_label(record: &Record) -> String {
    match record {
        Record::Field { port, text } => match port {
            Some(port) => format!(
                "<{}> {}",
                escape_record_field(port),
                escape_record_field(text)
            ),
            None => escape_record_field(text),
        },
        Record::Group(items) => {
            let inner: Vec<String> = items.iter().map(record_label).collect();
            format!("{{ {} }}", inner.join(" | "))
        }
    }
}

fn quote(id: &str) -> String {
    format!("\"{}\"", escape_quoted(id))
}

fn endpoint(endpoint: &Endpoint) -> String {
    match &endpoint.port {
        Some(port) => format!("{}:{}", quote(&endpoint.node), quote(port)),
        None => quote(&endpoint.node),
    }
}

fn node_attrs(node: &Node) -> Vec<(&'static str, String)> {
    let mut attrs: Vec<(&'static str, String)> = Vec::new();

    // Graphviz only parses record syntax on record shapes.
    match (&node.label, &node.shape) {
        (Some(record), _) => {
            attrs.push(("shape", "record".into()));
            attrs.push(("label", record_label(record)));
        }
        (None, Some(shape)) => attrs.push(("shape", shape.as_str().into())),
        (None, None) => {}
    }

    if let Some(color) = &node.color {
        attrs.push(("color", escape_quoted(color)));
    }
    if let Some(fill) = &node.fill_color {
        attrs.push(("fillcolor", escape_quoted(fill)));
    }
    if let Some(style) = &node.style {
        attrs.push(("style", style.as_str().into()));
    }
    attrs
}

fn edge_attrs(edge: &Edge) -> Vec<(&'static str, String)> {
    let mut attrs: Vec<(&'static str, String)> = vec![("style", edge.style.as_str().into())];
    if let Some(color) = &edge.color {
        attrs.push(("color", escape_quoted(color)));
    }
    attrs
}

/// Attribute values must already be escaped for a quoted string.
fn write_attrs(output: &mut String, attrs: &[(&str, String)]) {
    if attrs.is_empty() {
        return;
    }
    output.push_str(" [");
    for (i, (key, value)) in attrs.iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        let _ = write!(output, "{key}=\"{value}\"");
    }
    output.push(']');
}

/// Writes `graph` as a `digraph`, with `graph_attrs` as graph-level attributes.
pub fn write_graph(graph: &Graph, graph_attrs: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(4096);
    let _ = writeln!(output, "digraph {} {{", quote(graph.name()));

    for (key, value) in graph_attrs {
        let _ = writeln!(output, "  {}=\"{}\";", key, escape_quoted(value));
    }
    if !graph_attrs.is_empty() {
        output.push('\n');
    }

    for node in graph.nodes() {
        output.push_str("  ");
        output.push_str(&quote(&node.id));
        write_attrs(&mut output, &node_attrs(node));
        output.push_str(";\n");
    }

    if !graph.edges().is_empty() {
        output.push('\n');
    }
    for edge in graph.edges() {
        let _ = write!(output, "  {} -> {}", endpoint(&edge.from), endpoint(&edge.to));
        write_attrs(&mut output, &edge_attrs(edge));
        output.push_str(";\n");
    }

    output.push_str("}\n");
    output
}
