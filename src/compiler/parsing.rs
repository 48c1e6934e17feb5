use crate::chart::{NodeKind, Step};
use crate::error::CompileError;

/// The only delimiter an instruction string may use between steps.
pub const DELIMITER: &str = "->";

/// Keyword that turns a step into a branch marker.
pub const ELSE_KEYWORD: &str = "else";

/// Splits an instruction on [`DELIMITER`], trimming every segment and dropping
/// the empty ones.
pub fn tokenize(instruction: &str) -> Result<Vec<Step>, CompileError> {
    let steps: Vec<Step> = instruction.split(DELIMITER).filter_map(Step::new).collect();
    if steps.is_empty() {
        return Err(CompileError::EmptyInput {
            delimiter: DELIMITER.to_string(),
        });
    }
    Ok(steps)
}

/// What a single step turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepClass {
    Node(NodeKind),
    /// An "else" step: never a node on its own, only a target for the NO-branch lookahead.
    BranchMarker,
}

/// One classification rule: a step matching any keyword gets `class`.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub class: StepClass,
}

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// An ordered list of rules evaluated first-match-wins.
///
/// Matching is case-insensitive and substring based, so the order of the rules
/// is the precedence: a step reading "Start if ready" hits the start/end rule
/// before the decision rule ever sees it.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub rules: &'static [Rule],
    pub fallback: StepClass,
}

impl RuleSet {
    pub fn classify(&self, step: &Step) -> StepClass {
        let lowered = step.as_str().to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map_or(self.fallback, |rule| rule.class)
    }
}

/// Builds a `RuleSet` constant from `[keywords] => class` lines.
macro_rules! rule_set {
    ( $( [ $($keyword:expr),+ $(,)? ] => $class:expr ),* $(,)? ; otherwise => $fallback:expr ) => {
        RuleSet {
            rules: &[ $( Rule { keywords: &[ $($keyword),+ ], class: $class } ),* ],
            fallback: $fallback,
        }
    };
}

/// Rules used by the graph builder.
pub const GRAPH_RULES: RuleSet = rule_set! {
    ["start", "begin", "end", "finish", "complete"] => StepClass::Node(NodeKind::StartEnd),
    [ELSE_KEYWORD] => StepClass::BranchMarker,
    ["if", "check", "decide", "is", "?"] => StepClass::Node(NodeKind::Decision);
    otherwise => StepClass::Node(NodeKind::Process)
};

/// Rules used by the markup fallback, which draws every step in sequence and
/// therefore has no branch marker.
pub const MARKUP_RULES: RuleSet = rule_set! {
    ["start", "begin", "end", "finish"] => StepClass::Node(NodeKind::StartEnd),
    ["if", "check", "decide"] => StepClass::Node(NodeKind::Decision);
    otherwise => StepClass::Node(NodeKind::Process)
};

/// Classifies a step with [`GRAPH_RULES`].
pub fn classify(step: &Step) -> StepClass {
    GRAPH_RULES.classify(step)
}

/// The kind of node emitted for a step reached through a YES or NO branch.
///
/// Branch targets are drawn as terminals when they read like one and as
/// process boxes otherwise; they are never expanded into a nested decision.
pub fn branch_target_kind(step: &Step) -> NodeKind {
    match classify(step) {
        StepClass::Node(NodeKind::StartEnd) => NodeKind::StartEnd,
        _ => NodeKind::Process,
    }
}
