//! Tests for the Graphviz description, the markup fallback and renderer selection.
mod common;
use common::*;
use zushiki::prelude::*;
use zushiki::render::{select_renderer, select_renderer_with};

const MISSING_PROGRAM: &str = "zushiki-test-no-such-renderer";

#[test]
fn test_dot_source_for_linear_chart() {
    let chart = compile("Start->End");
    let source = DotGraph::from_flowchart(&chart).to_source();

    let expected = "// Flowchart\n\
        digraph {\n\
        \tbgcolor=\"white\" rankdir=\"TB\"\n\
        \tnode [fontcolor=\"white\" fontname=\"Arial\"]\n\
        \tedge [color=\"#333333\" fontname=\"Arial\"]\n\
        \tnode_0 [label=\"Start\" fillcolor=\"#4CAF50\" fontcolor=\"white\" shape=\"ellipse\" style=\"filled\"]\n\
        \tnode_1 [label=\"End\" fillcolor=\"#4CAF50\" fontcolor=\"white\" shape=\"ellipse\" style=\"filled\"]\n\
        \tnode_0 -> node_1\n\
        }\n";
    assert_eq!(source, expected);
}

#[test]
fn test_dot_source_shapes_and_branch_edges() {
    let chart = compile(IF_ELSE);
    let source = DotGraph::from_flowchart(&chart).to_source();

    assert!(source.contains(
        "\tnode_1 [label=\"Check if valid\" fillcolor=\"#FF9800\" fontcolor=\"white\" shape=\"diamond\" style=\"filled\"]"
    ));
    assert!(source.contains(
        "\tnode_2 [label=\"Yes do X\" fillcolor=\"#2196F3\" fontcolor=\"white\" shape=\"box\" style=\"filled\"]"
    ));
    assert!(source.contains("\tnode_1 -> node_2 [label=\"YES\" color=\"green\"]\n"));
    assert!(source.contains("\tnode_1 -> node_3 [label=\"NO\" color=\"red\"]\n"));
    assert!(source.contains("\tnode_0 -> node_1\n"));
}

#[test]
fn test_dot_source_uses_scheme_background() {
    let chart = Compiler::builder()
        .with_color_scheme(ColorScheme::Dark)
        .build()
        .compile(LINEAR)
        .expect("Failed to compile");
    let source = DotGraph::from_flowchart(&chart).to_source();
    assert!(source.contains("\tbgcolor=\"#2e2e2e\" rankdir=\"TB\"\n"));
}

#[test]
fn test_dot_source_escapes_labels() {
    let chart = compile(r#"Start->Say "hi" \ wave->End"#);
    let source = DotGraph::from_flowchart(&chart).to_source();
    assert!(source.contains(r#"label="Say \"hi\" \\ wave""#));
}

#[test]
fn test_dot_source_is_identical_for_unknown_scheme() {
    let neon = Compiler::builder()
        .with_color_scheme("neon")
        .build()
        .compile(IF_ELSE)
        .expect("Failed to compile");
    assert_eq!(
        DotGraph::from_flowchart(&neon).to_source(),
        DotGraph::from_flowchart(&compile(IF_ELSE)).to_source()
    );
}

#[test]
fn test_markup_renders_every_step_in_order() {
    let chart = compile(IF_ELSE);
    let rendering = MarkupRenderer.render(&chart).expect("markup never fails");

    assert_eq!(rendering.format, RenderFormat::Html);
    assert_eq!(rendering.dot_source, None);

    let html = &rendering.content;
    assert!(html.contains("Flowchart (HTML Fallback)"));
    assert_eq!(html.matches('\u{2193}').count(), chart.steps().len() - 1);

    let positions: Vec<usize> = chart
        .steps()
        .iter()
        .map(|s| html.find(s.as_str()).expect("step missing from markup"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_markup_block_shapes() {
    let html = MarkupRenderer::render_steps(
        &tokenize("Start->Check if valid->Else do Y->Is it raining?").expect("tokenize"),
        ColorScheme::Default,
    );

    assert!(html.contains("border-radius: 25px; background: #4CAF50\">Start</div>"));
    assert!(html.contains("transform: rotate(45deg); background: #FF9800\">Check if valid</div>"));
    assert!(html.contains("border-radius: 5px; background: #2196F3\">Else do Y</div>"));
    assert!(html.contains("border-radius: 5px; background: #2196F3\">Is it raining?</div>"));
}

#[test]
fn test_markup_escapes_html() {
    let html = MarkupRenderer::render_steps(
        &tokenize("Start-><b>bold</b> & more->End").expect("tokenize"),
        ColorScheme::Default,
    );
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; more"));
    assert!(!html.contains("<b>bold"));
}

#[test]
fn test_markup_is_identical_for_unknown_scheme() {
    let steps = tokenize(IF_ELSE).expect("tokenize");
    assert_eq!(
        MarkupRenderer::render_steps(&steps, ColorScheme::from_name("neon")),
        MarkupRenderer::render_steps(&steps, ColorScheme::Default)
    );
}

#[test]
fn test_missing_graph_renderer_is_unavailable() {
    let probe = GraphRenderer::probe_program(MISSING_PROGRAM);
    assert!(matches!(probe, Err(RenderError::Unavailable { .. })));

    let renderer = GraphRenderer::with_program(MISSING_PROGRAM);
    let result = renderer.render(&compile(LINEAR));
    match result {
        Err(RenderError::Unavailable { program, .. }) => assert_eq!(program, MISSING_PROGRAM),
        other => panic!("Expected Unavailable error, got {:?}", other),
    }
}

#[test]
fn test_select_markup_never_probes() {
    let selection = select_renderer(RendererChoice::Markup);
    assert_eq!(selection.renderer.name(), "html");
    assert!(selection.degraded.is_none());
}

#[test]
fn test_select_auto_picks_graph_or_reports_why_not() {
    let selection = select_renderer(RendererChoice::Auto);
    match selection.degraded {
        Some(RenderError::Unavailable { .. }) => assert_eq!(selection.renderer.name(), "html"),
        Some(other) => panic!("Unexpected selection error: {}", other),
        None => assert_eq!(selection.renderer.name(), "graphviz"),
    }
}

#[test]
fn test_select_graph_names_the_unmet_request() {
    let missing = || GraphRenderer::probe_program(MISSING_PROGRAM);

    let graph = select_renderer_with(RendererChoice::Graph, missing);
    assert_eq!(graph.requested, RendererChoice::Graph);
    assert_eq!(graph.renderer.name(), "html");
    let warning = graph.warning().expect("graph degradation must be reported");
    assert!(warning.starts_with("Graph mode was requested"));
    assert!(warning.contains(MISSING_PROGRAM));

    let auto = select_renderer_with(RendererChoice::Auto, missing);
    assert_eq!(auto.renderer.name(), "html");
    let warning = auto.warning().expect("auto degradation must be reported");
    assert!(!warning.starts_with("Graph mode was requested"));
    assert!(warning.contains(MISSING_PROGRAM));
}

#[test]
fn test_select_graph_keeps_available_renderer() {
    let selection = select_renderer_with(RendererChoice::Graph, || {
        Ok(GraphRenderer::with_program(MISSING_PROGRAM))
    });
    assert_eq!(selection.renderer.name(), "graphviz");
    assert!(selection.warning().is_none());
}

#[cfg(unix)]
#[test]
fn test_graph_renderer_reports_exit_status_for_large_source() {
    // Far more than a pipe buffer; `false` exits without reading any of it.
    let source = format!("digraph {{\n{}}}\n", "\tnode_0 -> node_1\n".repeat(20_000));
    let result = GraphRenderer::with_program("false").render_svg(&source);
    match result {
        Err(RenderError::Failed { message, .. }) => {
            assert!(message.starts_with("exited with"), "unexpected message: {}", message)
        }
        other => panic!("Expected Failed error, got {:?}", other),
    }
}

#[test]
fn test_graph_renderer_produces_svg_when_installed() {
    let Ok(renderer) = GraphRenderer::probe() else {
        eprintln!("Graphviz not installed, skipping SVG rendering check");
        return;
    };

    let rendering = renderer.render(&compile(IF_ELSE)).expect("Failed to render");
    assert_eq!(rendering.format, RenderFormat::Svg);
    assert!(rendering.content.contains("<svg"));
    assert!(rendering
        .dot_source
        .as_deref()
        .is_some_and(|s| s.starts_with("// Flowchart")));
}
