use super::{RenderFormat, Rendering, Renderer};
use crate::chart::{Flowchart, NodeKind, Step};
use crate::compiler::parsing::{MARKUP_RULES, StepClass};
use crate::error::RenderError;
use crate::theme::ColorScheme;

/// Renders the steps of a chart as a vertical column of coloured HTML blocks.
///
/// Works without any external program, at the cost of branch structure: steps
/// are drawn strictly in order and "else" steps appear as ordinary blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupRenderer;

impl MarkupRenderer {
    /// Infallible counterpart of [`Renderer::render`].
    pub fn render_chart(chart: &Flowchart) -> Rendering {
        Rendering {
            format: RenderFormat::Html,
            content: Self::render_steps(chart.steps(), chart.scheme()),
            dot_source: None,
        }
    }

    /// Builds the HTML fragment for `steps` in `scheme`.
    pub fn render_steps(steps: &[Step], scheme: ColorScheme) -> String {
        let palette = scheme.palette();
        let mut html = String::from(
            "<div style=\"background: white; padding: 20px; font-family: Arial;\">\n\
             <h3 style=\"text-align: center; color: #333;\">Flowchart (HTML Fallback)</h3>\n\
             <p style=\"text-align: center; color: #666; margin-bottom: 20px;\">\
             Install Graphviz (the <code>dot</code> program) for better visualization</p>\n",
        );

        for (i, step) in steps.iter().enumerate() {
            let kind = match MARKUP_RULES.classify(step) {
                StepClass::Node(kind) => kind,
                StepClass::BranchMarker => NodeKind::Process,
            };
            let shape = match kind {
                NodeKind::StartEnd => "border-radius: 25px",
                NodeKind::Decision => "transform: rotate(45deg)",
                NodeKind::Process => "border-radius: 5px",
            };
            let arrow = if i + 1 < steps.len() {
                "\n<div style=\"font-size: 20px; color: #333;\">\u{2193}</div>"
            } else {
                ""
            };
            html.push_str(&format!(
                "<div style=\"text-align: center; margin: 15px 0;\">\n\
                 <div style=\"display: inline-block; padding: 10px 20px; color: white; \
                 font-weight: bold; {}; background: {}\">{}</div>{}\n</div>\n",
                shape,
                palette.fill(kind),
                escape_html(step.as_str()),
                arrow
            ));
        }

        html.push_str("</div>\n");
        html
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

impl Renderer for MarkupRenderer {
    fn name(&self) -> &'static str {
        "html"
    }

    fn render(&self, chart: &Flowchart) -> Result<Rendering, RenderError> {
        Ok(Self::render_chart(chart))
    }
}
