use serde::Serialize;
use std::fmt;

/// Sequential node identifier, assigned in emission order starting at 0.
pub type NodeId = usize;

/// The visible kinds of flowchart node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    StartEnd,
    Process,
    Decision,
}

impl NodeKind {
    /// The Graphviz shape used to draw this kind.
    pub fn shape(&self) -> &'static str {
        match self {
            NodeKind::StartEnd => "ellipse",
            NodeKind::Process => "box",
            NodeKind::Decision => "diamond",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::StartEnd => write!(f, "start/end"),
            NodeKind::Process => write!(f, "process"),
            NodeKind::Decision => write!(f, "decision"),
        }
    }
}

/// A node of a compiled flowchart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub label: String,
    /// Fill colour taken from the palette of the chart's colour scheme.
    pub fill: &'static str,
}
