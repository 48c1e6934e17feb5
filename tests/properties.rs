//! Randomized checks of the graph invariants over generated instructions.
mod common;
use common::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zushiki::prelude::*;

const VOCABULARY: &[&str] = &[
    "Start",
    "Begin intake",
    "Check stock",
    "Is it valid?",
    "Decide route",
    "Do A",
    "Do B",
    "Log result",
    "Ship order",
    "Else",
    "Else retry",
    "Otherwise wait",
    "Finish",
    "End",
];

const CASES: usize = 500;

fn random_instructions(seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..CASES)
        .map(|_| {
            let len = rng.random_range(1..=12);
            (0..len)
                .map(|_| VOCABULARY[rng.random_range(0..VOCABULARY.len())])
                .collect::<Vec<_>>()
                .join("->")
        })
        .collect()
}

#[test]
fn test_every_non_marker_step_yields_a_node() {
    for instruction in random_instructions(7) {
        let chart = compile(&instruction);
        assert!(
            chart.nodes().len() >= chart.steps().len() - branch_marker_count(&chart),
            "too few nodes for '{}'",
            instruction
        );
    }
}

#[test]
fn test_decision_out_degree() {
    for instruction in random_instructions(11) {
        let chart = compile(&instruction);
        for node in chart.nodes() {
            let outgoing: Vec<&Edge> = chart.outgoing(node.id).collect();
            let yes = outgoing.iter().filter(|e| e.label == Some(BranchLabel::Yes)).count();
            let no = outgoing.iter().filter(|e| e.label == Some(BranchLabel::No)).count();

            if node.kind == NodeKind::Decision {
                assert!(outgoing.len() <= 2, "'{}' in '{}'", node.label, instruction);
                assert!(yes <= 1 && no <= 1, "'{}' in '{}'", node.label, instruction);
                assert!(no == 0 || yes == 1, "NO without YES in '{}'", instruction);
            } else {
                assert_eq!(yes + no, 0, "labelled edge from non-decision in '{}'", instruction);
            }
        }
    }
}

#[test]
fn test_only_the_first_node_lacks_an_incoming_edge() {
    for instruction in random_instructions(23) {
        let chart = compile(&instruction);
        for node in chart.nodes().iter().skip(1) {
            assert!(
                chart.incoming(node.id).count() >= 1,
                "'{}' has no incoming edge in '{}'",
                node.label,
                instruction
            );
        }
    }
}

#[test]
fn test_ids_are_sequential_and_edges_resolve() {
    for instruction in random_instructions(31) {
        let chart = compile(&instruction);
        for (i, node) in chart.nodes().iter().enumerate() {
            assert_eq!(node.id, i);
        }
        for edge in chart.edges() {
            assert!(chart.node(edge.source).is_some());
            assert!(chart.node(edge.target).is_some());
        }
    }
}

#[test]
fn test_recompiling_gives_isomorphic_charts() {
    let compiler = Compiler::builder().with_color_scheme("professional").build();
    for instruction in random_instructions(43) {
        let first = compiler.compile(&instruction).expect("Failed to compile");
        let second = compiler.compile(&instruction).expect("Failed to compile");
        assert!(first.is_isomorphic_to(&second), "'{}'", instruction);
    }
}
