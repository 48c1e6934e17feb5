use crate::chart::Flowchart;
use crate::error::RenderError;
use serde::{Deserialize, Serialize};

pub mod dot;
pub mod markup;

pub use dot::{DotGraph, GraphRenderer};
pub use markup::MarkupRenderer;

/// The format of a rendered flowchart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    Svg,
    Html,
}

impl RenderFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            RenderFormat::Svg => "svg",
            RenderFormat::Html => "html",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            RenderFormat::Svg => "image/svg+xml",
            RenderFormat::Html => "text/html",
        }
    }
}

/// A rendered flowchart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    pub format: RenderFormat,
    pub content: String,
    /// The DOT description the image was produced from, in graph mode.
    pub dot_source: Option<String>,
}

/// A rendering backend for compiled flowcharts.
pub trait Renderer: Send + Sync {
    fn name(&self) -> &'static str;

    fn render(&self, chart: &Flowchart) -> Result<Rendering, RenderError>;
}

/// Which renderer a [`Generator`](crate::generator::Generator) should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererChoice {
    /// Graph mode when Graphviz is installed, markup otherwise.
    #[default]
    Auto,
    /// Graph mode. Still degrades to markup when Graphviz is missing, but the
    /// degradation is logged as an error and named as an unmet request.
    Graph,
    Markup,
}

/// The renderer picked by [`select_renderer`], with the reason graph mode was
/// skipped when it was.
pub struct Selection {
    pub requested: RendererChoice,
    pub renderer: Box<dyn Renderer>,
    pub degraded: Option<RenderError>,
}

impl Selection {
    /// The warning a generation should carry because of this selection.
    pub fn warning(&self) -> Option<String> {
        let error = self.degraded.as_ref()?;
        Some(match self.requested {
            RendererChoice::Graph => {
                format!("Graph mode was requested but is unavailable: {}", error)
            }
            _ => error.to_string(),
        })
    }
}

/// Picks a renderer, probing for the Graphviz executable at most once.
pub fn select_renderer(choice: RendererChoice) -> Selection {
    select_renderer_with(choice, GraphRenderer::probe)
}

/// Like [`select_renderer`], with the Graphviz probe supplied by the caller.
pub fn select_renderer_with<P>(choice: RendererChoice, probe: P) -> Selection
where
    P: FnOnce() -> Result<GraphRenderer, RenderError>,
{
    let (renderer, degraded): (Box<dyn Renderer>, _) = match choice {
        RendererChoice::Markup => (Box::new(MarkupRenderer), None),
        RendererChoice::Auto | RendererChoice::Graph => match probe() {
            Ok(graph) => {
                tracing::info!(renderer = graph.name(), "graph renderer available");
                (Box::new(graph), None)
            }
            Err(e) if choice == RendererChoice::Graph => {
                tracing::error!(
                    error = %e,
                    "graph renderer requested but unavailable, using markup fallback"
                );
                (Box::new(MarkupRenderer), Some(e))
            }
            Err(e) => {
                tracing::warn!(error = %e, "graph renderer unavailable, using markup fallback");
                (Box::new(MarkupRenderer), Some(e))
            }
        },
    };
    Selection {
        requested: choice,
        renderer,
        degraded,
    }
}
