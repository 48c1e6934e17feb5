//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the zushiki crate.
//!
//! # Example
//!
//! ```rust
//! use zushiki::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let chart = Compiler::default().compile("Start->Step1->Step2->End")?;
//! assert_eq!(chart.nodes().len(), 4);
//! assert_eq!(chart.count_kind(NodeKind::StartEnd), 2);
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Compilation
pub use crate::compiler::parsing::{DELIMITER, StepClass, classify, tokenize};
pub use crate::compiler::{Compiler, CompilerBuilder};

// Chart model
pub use crate::chart::{BranchLabel, Edge, Flowchart, Node, NodeId, NodeKind, Step};

// Rendering
pub use crate::generator::{Generator, Output};
pub use crate::render::{
    DotGraph, GraphRenderer, MarkupRenderer, RenderFormat, Renderer, RendererChoice, Rendering,
};

// Configuration and export
pub use crate::config::Options;
pub use crate::export::ExportBundle;
pub use crate::theme::{ColorScheme, Palette};

// Error types
pub use crate::error::{CompileError, ConfigError, ExportError, RenderError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
