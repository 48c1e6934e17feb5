//! # Zushiki - Text-to-Flowchart Compiler
//!
//! **Zushiki** compiles a short, arrow-delimited list of instructions such as
//! `Start->Check if valid->Save record->Else show error->End` into a directed
//! graph of typed flowchart nodes, and renders that graph either through
//! Graphviz or as a self-contained HTML fragment.
//!
//! ## Core Workflow
//!
//! 1.  **Tokenize**: The instruction is split on `->`; segments are trimmed and empty ones dropped.
//! 2.  **Classify**: Each step becomes a start/end terminal, a process box, a decision diamond, or an
//!     "else" branch marker, decided by an ordered keyword rule list.
//! 3.  **Build**: A small state machine walks the steps, wiring sequential edges and the YES/NO
//!     branches of every decision into a [`Flowchart`](chart::Flowchart).
//! 4.  **Render**: A [`Renderer`](render::Renderer) turns the chart into SVG (via the `dot`
//!     executable) or into HTML. The [`Generator`](generator::Generator) picks one once and falls
//!     back to HTML whenever graph rendering is not possible.
//!
//! ## Quick Start
//!
//! ```rust
//! use zushiki::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let compiler = Compiler::builder().with_color_scheme("professional").build();
//!     let chart = compiler.compile("Start->Check if valid->Save record->Else show error->End")?;
//!
//!     for node in chart.nodes() {
//!         println!("{} [{}] {}", node.id, node.kind, node.label);
//!     }
//!     for edge in chart.edges() {
//!         match edge.label {
//!             Some(label) => println!("{} -{}-> {}", edge.source, label, edge.target),
//!             None => println!("{} --> {}", edge.source, edge.target),
//!         }
//!     }
//!
//!     // Graphviz description, whether or not Graphviz is installed.
//!     let dot = DotGraph::from_flowchart(&chart).to_source();
//!     assert!(dot.starts_with("// Flowchart"));
//!
//!     // Full pipeline: compile, then render with whatever is available.
//!     let generator = Generator::new(Options::default());
//!     let output = generator.generate("Start->Do the work->End")?;
//!     for warning in &output.warnings {
//!         eprintln!("warning: {}", warning);
//!     }
//!     println!("rendered as {}", output.rendering.format.extension());
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod compiler;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod prelude;
pub mod render;
pub mod theme;
