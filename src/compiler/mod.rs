use crate::chart::{Flowchart, NodeKind};
use crate::error::CompileError;
use crate::theme::ColorScheme;

mod builder;
pub mod parsing;

pub use builder::{BuildContext, BuildState, Transition, transition};

use builder::GraphBuilder;
use parsing::tokenize;

/// Compiles arrow-delimited instruction strings into [`Flowchart`]s.
///
/// A compiler holds only configuration; every call to [`Compiler::compile`]
/// builds a new chart from scratch.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    scheme: ColorScheme,
}

#[derive(Debug, Clone, Default)]
pub struct CompilerBuilder {
    scheme: ColorScheme,
}

impl CompilerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the colour scheme node fills are taken from. Unknown names resolve
    /// to the default scheme.
    pub fn with_color_scheme(mut self, scheme: impl Into<ColorScheme>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            scheme: self.scheme,
        }
    }
}

impl Compiler {
    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Tokenizes, classifies and builds the graph for one instruction string.
    pub fn compile(&self, instruction: &str) -> Result<Flowchart, CompileError> {
        let steps = tokenize(instruction)?;
        let (nodes, edges) = GraphBuilder::new(&steps, self.scheme.palette()).build();

        tracing::debug!(
            scheme = %self.scheme,
            steps = steps.len(),
            nodes = nodes.len(),
            edges = edges.len(),
            decisions = nodes.iter().filter(|n| n.kind == NodeKind::Decision).count(),
            "compiled flowchart"
        );

        Ok(Flowchart::new(self.scheme, steps, nodes, edges))
    }
}
