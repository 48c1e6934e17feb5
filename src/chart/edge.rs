use super::NodeId;
use serde::Serialize;
use std::fmt;

/// Label carried by an edge leaving a decision node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BranchLabel {
    Yes,
    No,
}

impl BranchLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchLabel::Yes => "YES",
            BranchLabel::No => "NO",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            BranchLabel::Yes => "green",
            BranchLabel::No => "red",
        }
    }
}

impl fmt::Display for BranchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed connection between two nodes.
///
/// Only branch edges carry a label and a colour; use [`Edge::sequential`] and
/// [`Edge::branch`] to keep the two in step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<BranchLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

impl Edge {
    pub fn sequential(source: NodeId, target: NodeId) -> Self {
        Self {
            source,
            target,
            label: None,
            color: None,
        }
    }

    pub fn branch(source: NodeId, target: NodeId, label: BranchLabel) -> Self {
        Self {
            source,
            target,
            label: Some(label),
            color: Some(label.color()),
        }
    }
}
