use crate::chart::Flowchart;
use crate::compiler::Compiler;
use crate::config::Options;
use crate::error::CompileError;
use crate::render::{MarkupRenderer, Renderer, Rendering, select_renderer};

/// The outcome of [`Generator::generate`].
#[derive(Debug, Clone)]
pub struct Output {
    pub chart: Flowchart,
    pub rendering: Rendering,
    /// Degradations that happened on the way, such as falling back to markup.
    pub warnings: Vec<String>,
}

/// Compiles instructions and renders them with a renderer chosen once, up front.
///
/// Rendering never aborts a generation: when the chosen renderer fails the
/// chart is drawn with [`MarkupRenderer`] instead and the failure is reported
/// in [`Output::warnings`].
pub struct Generator {
    compiler: Compiler,
    renderer: Box<dyn Renderer>,
    /// Warning carried by every generation when graph mode was skipped.
    degraded: Option<String>,
}

impl Generator {
    /// Builds a generator, probing for Graphviz if the options allow graph mode.
    pub fn new(options: Options) -> Self {
        let selection = select_renderer(options.renderer);
        let degraded = selection.warning();
        Self {
            compiler: Compiler::builder()
                .with_color_scheme(options.color_scheme)
                .build(),
            renderer: selection.renderer,
            degraded,
        }
    }

    /// Builds a generator around an explicit renderer, skipping any probing.
    pub fn with_renderer(compiler: Compiler, renderer: Box<dyn Renderer>) -> Self {
        Self {
            compiler,
            renderer,
            degraded: None,
        }
    }

    pub fn compiler(&self) -> &Compiler {
        &self.compiler
    }

    pub fn renderer_name(&self) -> &'static str {
        self.renderer.name()
    }

    pub fn generate(&self, instruction: &str) -> Result<Output, CompileError> {
        let chart = self.compiler.compile(instruction)?;
        let mut warnings: Vec<String> = self.degraded.iter().cloned().collect();

        let rendering = match self.renderer.render(&chart) {
            Ok(rendering) => rendering,
            Err(e) => {
                tracing::warn!(
                    renderer = self.renderer.name(),
                    error = %e,
                    "rendering failed, using markup fallback"
                );
                warnings.push(e.to_string());
                MarkupRenderer::render_chart(&chart)
            }
        };

        Ok(Output {
            chart,
            rendering,
            warnings,
        })
    }
}
