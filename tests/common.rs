//! Common test utilities for compiling instructions and inspecting charts.
use zushiki::prelude::*;

/// Linear flow: two terminals around two process steps.
#[allow(dead_code)]
pub const LINEAR: &str = "Start->Step1->Step2->End";

/// One decision with both branches.
///
/// `End` is only reachable through the NO branch; the YES branch is where the
/// sequential flow continues.
#[allow(dead_code)]
pub const IF_ELSE: &str = "Start->Check if valid->Yes do X->Else do Y->End";

/// A decision whose NO branch lands in the middle of the flow.
#[allow(dead_code)]
pub const MID_FLOW_ELSE: &str = "Start->Check A->Do B->Else->Do C->Do D->End";

/// Compiles with the default colour scheme, panicking on failure.
#[allow(dead_code)]
pub fn compile(instruction: &str) -> Flowchart {
    Compiler::default()
        .compile(instruction)
        .expect("Failed to compile instruction")
}

/// Looks a node up by its label, panicking if it does not exist.
#[allow(dead_code)]
pub fn node<'a>(chart: &'a Flowchart, label: &str) -> &'a Node {
    chart
        .node_by_label(label)
        .unwrap_or_else(|| panic!("No node labelled '{}'", label))
}

/// `(source label, target label, branch label)` for every edge, in emission order.
#[allow(dead_code)]
pub fn labelled_edges(chart: &Flowchart) -> Vec<(String, String, Option<BranchLabel>)> {
    chart
        .edges()
        .iter()
        .map(|e| {
            let source = chart.node(e.source).expect("dangling edge source");
            let target = chart.node(e.target).expect("dangling edge target");
            (source.label.clone(), target.label.clone(), e.label)
        })
        .collect()
}

/// Number of steps that the graph builder treats as branch markers.
#[allow(dead_code)]
pub fn branch_marker_count(chart: &Flowchart) -> usize {
    chart
        .steps()
        .iter()
        .filter(|s| classify(s) == StepClass::BranchMarker)
        .count()
}
