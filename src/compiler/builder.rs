use super::parsing::{ELSE_KEYWORD, StepClass, branch_target_kind, classify};
use crate::chart::{BranchLabel, Edge, Node, NodeId, NodeKind, Step};
use crate::theme::Palette;
use ahash::AHashSet;

/// Where the builder is in its walk over the steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    /// Looking at the step under the cursor.
    Scanning,
    /// A decision node was just emitted for the step under the cursor; its YES
    /// and NO branches are still to be resolved.
    ResolvingBranch { decision: NodeId },
    Finished,
}

/// Everything the walk carries from one transition to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildContext {
    pub cursor: usize,
    /// Node the next sequential edge starts from.
    pub previous: Option<NodeId>,
    pub next_id: NodeId,
    /// Positions already emitted as NO-branch targets; the scan steps over them.
    pub consumed: AHashSet<usize>,
}

impl BuildContext {
    fn allocate(&mut self) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Output of a single [`transition`].
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: BuildState,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub context: BuildContext,
}

/// Advances the builder by one step.
///
/// The function is pure: the same state, steps, context and palette always
/// produce the same transition.
pub fn transition(
    state: BuildState,
    steps: &[Step],
    mut context: BuildContext,
    palette: &Palette,
) -> Transition {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    let next_state = match state {
        BuildState::Finished => BuildState::Finished,
        BuildState::Scanning => match steps.get(context.cursor) {
            None => BuildState::Finished,
            Some(_) if context.consumed.contains(&context.cursor) => {
                context.cursor += 1;
                BuildState::Scanning
            }
            Some(step) => match classify(step) {
                StepClass::BranchMarker => {
                    context.cursor += 1;
                    BuildState::Scanning
                }
                StepClass::Node(NodeKind::Decision) => {
                    let decision = context.allocate();
                    nodes.push(make_node(decision, NodeKind::Decision, step, palette));
                    if let Some(previous) = context.previous {
                        edges.push(Edge::sequential(previous, decision));
                    }
                    BuildState::ResolvingBranch { decision }
                }
                StepClass::Node(kind) => {
                    let id = context.allocate();
                    nodes.push(make_node(id, kind, step, palette));
                    if let Some(previous) = context.previous {
                        edges.push(Edge::sequential(previous, id));
                    }
                    context.previous = Some(id);
                    context.cursor += 1;
                    BuildState::Scanning
                }
            },
        },
        BuildState::ResolvingBranch { decision } => {
            let at = context.cursor;
            match steps.get(at + 1) {
                // A trailing decision keeps zero outgoing edges.
                None => context.cursor = at + 1,
                Some(yes_step) => {
                    let yes = context.allocate();
                    nodes.push(make_node(yes, branch_target_kind(yes_step), yes_step, palette));
                    edges.push(Edge::branch(decision, yes, BranchLabel::Yes));

                    let else_at = steps[at + 1..]
                        .iter()
                        .position(|s| s.mentions(ELSE_KEYWORD))
                        .map(|offset| at + 1 + offset);
                    if let Some(no_at) = else_at.map(|j| j + 1).filter(|&k| k < steps.len()) {
                        let no_step = &steps[no_at];
                        let no = context.allocate();
                        nodes.push(make_node(no, branch_target_kind(no_step), no_step, palette));
                        edges.push(Edge::branch(decision, no, BranchLabel::No));
                        context.consumed.insert(no_at);
                    }

                    context.previous = Some(yes);
                    context.cursor = at + 2;
                }
            }
            BuildState::Scanning
        }
    };

    Transition {
        state: next_state,
        nodes,
        edges,
        context,
    }
}

fn make_node(id: NodeId, kind: NodeKind, step: &Step, palette: &Palette) -> Node {
    Node {
        id,
        kind,
        label: step.as_str().to_string(),
        fill: palette.fill(kind),
    }
}

/// Drives [`transition`] from the initial state until the walk finishes.
pub(super) struct GraphBuilder<'a> {
    steps: &'a [Step],
    palette: &'a Palette,
}

impl<'a> GraphBuilder<'a> {
    pub(super) fn new(steps: &'a [Step], palette: &'a Palette) -> Self {
        Self { steps, palette }
    }

    pub(super) fn build(&self) -> (Vec<Node>, Vec<Edge>) {
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        let mut state = BuildState::Scanning;
        let mut context = BuildContext::default();

        while state != BuildState::Finished {
            let next = transition(state, self.steps, context, self.palette);
            tracing::trace!(
                from = ?state,
                to = ?next.state,
                cursor = next.context.cursor,
                emitted_nodes = next.nodes.len(),
                emitted_edges = next.edges.len(),
                "builder transition"
            );
            nodes.extend(next.nodes);
            edges.extend(next.edges);
            state = next.state;
            context = next.context;
        }

        (nodes, edges)
    }
}
