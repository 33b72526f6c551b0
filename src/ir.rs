use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::icons::IconKind;

/// Sub-column of the operator zone a node is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorPosition {
    Ingress,
    Core,
    Egress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    #[default]
    Solid,
    Dashed,
    Double,
}

/// Node type tag. Unknown tags are kept verbatim so they round-trip and
/// render with the fallback icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Known(IconKind),
    Other(String),
}

impl NodeKind {
    pub fn icon(&self) -> Option<IconKind> {
        match self {
            NodeKind::Known(kind) => Some(*kind),
            NodeKind::Other(_) => None,
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            NodeKind::Known(kind) => kind.tag(),
            NodeKind::Other(tag) => tag.as_str(),
        }
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        match IconKind::from_tag(&tag) {
            Some(kind) => NodeKind::Known(kind),
            None => NodeKind::Other(tag),
        }
    }
}

impl From<&str> for NodeKind {
    fn from(tag: &str) -> Self {
        NodeKind::from(tag.to_string())
    }
}

impl From<IconKind> for NodeKind {
    fn from(kind: IconKind) -> Self {
        NodeKind::Known(kind)
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Known(kind) => kind.tag().to_string(),
            NodeKind::Other(tag) => tag,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<OperatorPosition>,
}

impl Node {
    pub fn new(id: &str, kind: impl Into<NodeKind>, label: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: kind.into(),
            label: label.to_string(),
            count: None,
            params: Vec::new(),
            position: None,
        }
    }

    pub fn operator(id: &str, kind: impl Into<NodeKind>, label: &str, position: OperatorPosition) -> Self {
        Self {
            position: Some(position),
            ..Self::new(id, kind, label)
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    /// Label as displayed, with the `(×N)` suffix for grouped sites.
    pub fn display_label(&self) -> String {
        match self.count {
            Some(count) if count > 1 => format!("{} (×{})", self.label, count),
            _ => self.label.clone(),
        }
    }
}

/// Directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub style: EdgeStyle,
}

impl Edge {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            label: None,
            style: EdgeStyle::Solid,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_style(mut self, style: EdgeStyle) -> Self {
        self.style = style;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topology {
    pub solution_title: String,
    pub customer: String,
    pub industry: String,
    #[serde(default)]
    pub customer_nodes: Vec<Node>,
    #[serde(default)]
    pub operator_nodes: Vec<Node>,
    #[serde(default)]
    pub external_nodes: Vec<Node>,
    #[serde(default)]
    pub connections: Vec<Edge>,
}

impl Topology {
    pub fn new(solution_title: &str, customer: &str, industry: &str) -> Self {
        Self {
            solution_title: solution_title.to_string(),
            customer: customer.to_string(),
            industry: industry.to_string(),
            ..Default::default()
        }
    }

    pub fn from_json(input: &str) -> Result<Self, crate::Error> {
        serde_json::from_str(input).map_err(crate::Error::Parse)
    }

    /// All nodes, customer then operator then external, in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.customer_nodes
            .iter()
            .chain(self.operator_nodes.iter())
            .chain(self.external_nodes.iter())
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes().find(|node| node.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.customer_nodes
            .iter_mut()
            .chain(self.operator_nodes.iter_mut())
            .chain(self.external_nodes.iter_mut())
            .find(|node| node.id == id)
    }

    pub fn node_count(&self) -> usize {
        self.customer_nodes.len() + self.operator_nodes.len() + self.external_nodes.len()
    }

    /// Operator nodes at one sub-position, preserving declaration order.
    pub fn operator_nodes_at(&self, position: OperatorPosition) -> impl Iterator<Item = &Node> {
        self.operator_nodes
            .iter()
            .filter(move |node| node.position == Some(position))
    }

    /// Subtitle line shown under the title.
    pub fn subtitle(&self) -> String {
        format!("{} · {}", self.customer, self.industry)
    }
}

/// Per-node drag delta, added on top of the computed base position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

pub type Overrides = BTreeMap<String, Offset>;
