use super::{RenderFormat, Rendering, Renderer};
use crate::chart::Flowchart;
use crate::error::RenderError;
use itertools::Itertools;
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;

/// Name of the Graphviz layout executable.
pub const DOT_PROGRAM: &str = "dot";

const FONT: &str = "Arial";
const EDGE_COLOR: &str = "#333333";

type Attrs = Vec<(&'static str, String)>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Statement {
    Node { name: String, attrs: Attrs },
    Edge { from: String, to: String, attrs: Attrs },
}

/// A Graphviz directed-graph description of a flowchart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotGraph {
    comment: String,
    graph_attrs: Attrs,
    node_defaults: Attrs,
    edge_defaults: Attrs,
    statements: Vec<Statement>,
}

impl DotGraph {
    pub fn from_flowchart(chart: &Flowchart) -> Self {
        let palette = chart.scheme().palette();

        let nodes = chart.nodes().iter().map(|node| Statement::Node {
            name: node_name(node.id),
            attrs: vec![
                ("label", node.label.clone()),
                ("fillcolor", node.fill.to_string()),
                ("fontcolor", palette.text.to_string()),
                ("shape", node.kind.shape().to_string()),
                ("style", "filled".to_string()),
            ],
        });
        let edges = chart.edges().iter().map(|edge| {
            let mut attrs = Attrs::new();
            if let Some(label) = edge.label {
                attrs.push(("label", label.as_str().to_string()));
            }
            if let Some(color) = edge.color {
                attrs.push(("color", color.to_string()));
            }
            Statement::Edge {
                from: node_name(edge.source),
                to: node_name(edge.target),
                attrs,
            }
        });

        Self {
            comment: "Flowchart".to_string(),
            graph_attrs: vec![
                ("bgcolor", palette.background.to_string()),
                ("rankdir", "TB".to_string()),
            ],
            node_defaults: vec![
                ("fontcolor", palette.text.to_string()),
                ("fontname", FONT.to_string()),
            ],
            edge_defaults: vec![
                ("color", EDGE_COLOR.to_string()),
                ("fontname", FONT.to_string()),
            ],
            statements: nodes.chain(edges).collect(),
        }
    }

    /// The DOT source text.
    pub fn to_source(&self) -> String {
        let mut out = format!("// {}\ndigraph {{\n", self.comment);
        out.push_str(&format!("\t{}\n", format_attrs(&self.graph_attrs)));
        out.push_str(&format!("\tnode [{}]\n", format_attrs(&self.node_defaults)));
        out.push_str(&format!("\tedge [{}]\n", format_attrs(&self.edge_defaults)));
        for statement in &self.statements {
            let line = match statement {
                Statement::Node { name, attrs } => format!("\t{} [{}]\n", name, format_attrs(attrs)),
                Statement::Edge { from, to, attrs } if attrs.is_empty() => {
                    format!("\t{} -> {}\n", from, to)
                }
                Statement::Edge { from, to, attrs } => {
                    format!("\t{} -> {} [{}]\n", from, to, format_attrs(attrs))
                }
            };
            out.push_str(&line);
        }
        out.push_str("}\n");
        out
    }
}

fn node_name(id: usize) -> String {
    format!("node_{}", id)
}

fn format_attrs(attrs: &Attrs) -> String {
    attrs
        .iter()
        .map(|(key, value)| format!("{}={}", key, quote(value)))
        .join(" ")
}

/// Wraps a value in double quotes, escaping the characters DOT treats specially.
fn quote(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{}\"", escaped)
}

/// Renders flowcharts to SVG through the Graphviz `dot` executable.
#[derive(Debug, Clone)]
pub struct GraphRenderer {
    program: String,
}

impl GraphRenderer {
    /// A renderer using `program` without checking that it exists.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Checks that the default `dot` executable can be run.
    pub fn probe() -> Result<Self, RenderError> {
        Self::probe_program(DOT_PROGRAM)
    }

    /// Checks that `program` can be run by asking it for its version.
    pub fn probe_program(program: &str) -> Result<Self, RenderError> {
        let output = Command::new(program)
            .arg("-V")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| unavailable(program, &e))?;
        if !output.status.success() {
            return Err(RenderError::Unavailable {
                program: program.to_string(),
                reason: format!("version check exited with {}", output.status),
            });
        }
        // `dot -V` reports its version on stderr.
        tracing::debug!(
            program,
            version = %String::from_utf8_lossy(&output.stderr).trim(),
            "probed graph renderer"
        );
        Ok(Self::with_program(program))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Pipes DOT source through the renderer and returns the SVG document.
    pub fn render_svg(&self, source: &str) -> Result<String, RenderError> {
        let mut child = Command::new(&self.program)
            .arg("-Tsvg")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| unavailable(&self.program, &e))?;

        // stdin is written from its own thread while stdout and stderr are drained.
        let stdin = child.stdin.take();
        let (output, written) = thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut pipe) => pipe.write_all(source.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            (output, writer.join())
        });

        let output = output.map_err(|e| self.failed(format!("could not collect output: {}", e)))?;
        if !output.status.success() {
            return Err(self.failed(format!(
                "exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        match written {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(self.failed(format!("could not write graph source: {}", e))),
            Err(_) => return Err(self.failed("graph source writer panicked".to_string())),
        }

        String::from_utf8(output.stdout)
            .map_err(|e| self.failed(format!("output is not valid UTF-8: {}", e)))
    }

    fn failed(&self, message: String) -> RenderError {
        RenderError::Failed {
            program: self.program.clone(),
            message,
        }
    }
}

fn unavailable(program: &str, error: &std::io::Error) -> RenderError {
    let reason = match error.kind() {
        ErrorKind::NotFound => "executable not found on PATH".to_string(),
        _ => error.to_string(),
    };
    RenderError::Unavailable {
        program: program.to_string(),
        reason,
    }
}

impl Default for GraphRenderer {
    fn default() -> Self {
        Self::with_program(DOT_PROGRAM)
    }
}

impl Renderer for GraphRenderer {
    fn name(&self) -> &'static str {
        "graphviz"
    }

    fn render(&self, chart: &Flowchart) -> Result<Rendering, RenderError> {
        let source = DotGraph::from_flowchart(chart).to_source();
        let content = self.render_svg(&source)?;
        Ok(Rendering {
            format: RenderFormat::Svg,
            content,
            dot_source: Some(source),
        })
    }
}
