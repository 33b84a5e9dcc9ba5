//! # Abstract Graph
//!
//! A renderer-agnostic description of the picture: typed nodes and edges with
//! their visual attributes. Turning it into a concrete syntax is the job of a
//! renderer.

mod label;

use std::collections::HashMap;

use crate::error::GraphError;

pub use label::Record;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Box,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeStyle {
    Rounded,
    Filled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeStyle {
    Solid,
    Dashed,
    Bold,
    Dotted,
}

impl Shape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Box => "box",
        }
    }
}

impl NodeStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStyle::Rounded => "rounded",
            NodeStyle::Filled => "filled",
        }
    }
}

impl EdgeStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeStyle::Solid => "solid",
            EdgeStyle::Dashed => "dashed",
            EdgeStyle::Bold => "bold",
            EdgeStyle::Dotted => "dotted",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub shape: Option<Shape>,
    pub label: Option<Record>,
    pub color: Option<String>,
    pub fill_color: Option<String>,
    pub style: Option<NodeStyle>,
}

impl Node {
    /// A node without attributes, the renderer's defaults apply.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            shape: None,
            label: None,
            color: None,
            fill_color: None,
            style: None,
        }
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn label(mut self, label: Record) -> Self {
        self.label = Some(label);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn fill_color(mut self, color: impl Into<String>) -> Self {
        self.fill_color = Some(color.into());
        self
    }

    pub fn style(mut self, style: NodeStyle) -> Self {
        self.style = Some(style);
        self
    }

    fn has_port(&self, port: &str) -> bool {
        self.label
            .as_ref()
            .is_some_and(|record| record.ports().contains(&port))
    }
}

/// A node, optionally narrowed to one named port of its record label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub node: String,
    pub port: Option<String>,
}

impl Endpoint {
    pub fn node(node: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            port: None,
        }
    }

    pub fn port(node: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            port: Some(port.into()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: Endpoint,
    pub to: Endpoint,
    pub style: EdgeStyle,
    pub color: Option<String>,
}

/// A directed graph. Node identifiers are unique, edges may repeat.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    name: String,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<String, usize>,
}

impl Graph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.index.contains_key(&node.id) {
            return Err(GraphError::DuplicateNode(node.id));
        }
        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    /// Returns the node called `id`, creating a bare one when missing.
    pub fn ensure_node(&mut self, id: &str) -> &Node {
        let idx = match self.index.get(id) {
            Some(idx) => *idx,
            None => {
                self.index.insert(id.to_string(), self.nodes.len());
                self.nodes.push(Node::new(id));
                self.nodes.len() - 1
            }
        };
        &self.nodes[idx]
    }

    /// Adds an edge between two existing nodes. Anchored ports must exist too.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        for endpoint in [&edge.from, &edge.to] {
            let node = self
                .node(&endpoint.node)
                .ok_or_else(|| GraphError::UnknownNode(endpoint.node.clone()))?;

            if let Some(port) = &endpoint.port {
                if !node.has_port(port) {
                    return Err(GraphError::UnknownPort {
                        node: endpoint.node.clone(),
                        port: port.clone(),
                    });
                }
            }
        }
        self.edges.push(edge);
        Ok(())
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|idx| &self.nodes[*idx])
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
