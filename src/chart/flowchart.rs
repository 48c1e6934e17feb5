use super::{BranchLabel, Edge, Node, NodeId, NodeKind, Step};
use crate::theme::ColorScheme;
use ahash::AHashMap;
use serde::Serialize;

/// The result of one compilation: typed nodes, the edges between them, and the
/// steps they were compiled from.
///
/// A `Flowchart` is built fresh for every call to
/// [`Compiler::compile`](crate::compiler::Compiler::compile) and holds no state
/// shared with other compilations.
#[derive(Debug, Clone, Serialize)]
pub struct Flowchart {
    pub(crate) scheme: ColorScheme,
    pub(crate) steps: Vec<Step>,
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
}

impl Flowchart {
    pub(crate) fn new(
        scheme: ColorScheme,
        steps: Vec<Step>,
        nodes: Vec<Node>,
        edges: Vec<Edge>,
    ) -> Self {
        Self {
            scheme,
            steps,
            nodes,
            edges,
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// The ordered steps this chart was compiled from.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Nodes in emission order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn first(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Finds the first node whose label equals `label`.
    pub fn node_by_label(&self, label: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.label == label)
    }

    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.source == id)
    }

    pub fn incoming(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.target == id)
    }

    /// The target of the edge leaving `id` with the given branch label.
    pub fn branch_target(&self, id: NodeId, label: BranchLabel) -> Option<&Node> {
        self.outgoing(id)
            .find(|e| e.label == Some(label))
            .and_then(|e| self.node(e.target))
    }

    pub fn count_kind(&self, kind: NodeKind) -> usize {
        self.nodes.iter().filter(|n| n.kind == kind).count()
    }

    /// Compares two charts up to a consistent relabeling of node ids.
    ///
    /// Nodes are matched by emission position, so two charts are isomorphic when
    /// they have the same kinds, labels and fills in the same order and the same
    /// multiset of (labelled) edges between those positions.
    pub fn is_isomorphic_to(&self, other: &Flowchart) -> bool {
        if self.nodes.len() != other.nodes.len() || self.edges.len() != other.edges.len() {
            return false;
        }
        let same_nodes = self
            .nodes
            .iter()
            .zip(&other.nodes)
            .all(|(a, b)| a.kind == b.kind && a.label == b.label && a.fill == b.fill);
        if !same_nodes {
            return false;
        }
        match (self.positional_edges(), other.positional_edges()) {
            (Some(mut ours), Some(mut theirs)) => {
                ours.sort_unstable();
                theirs.sort_unstable();
                ours == theirs
            }
            _ => false,
        }
    }

    /// Edges rewritten in terms of node positions; `None` when an edge points at
    /// an unknown id.
    fn positional_edges(&self) -> Option<Vec<(usize, usize, Option<&'static str>)>> {
        let positions: AHashMap<NodeId, usize> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(pos, node)| (node.id, pos))
            .collect();
        self.edges
            .iter()
            .map(|e| {
                Some((
                    *positions.get(&e.source)?,
                    *positions.get(&e.target)?,
                    e.label.map(|l| l.as_str()),
                ))
            })
            .collect()
    }
}
