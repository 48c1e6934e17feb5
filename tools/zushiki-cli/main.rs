use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::time::Instant;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use zushiki::prelude::*;

/// CLI-side mirror of `ColorScheme` so clap can list the accepted values.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SchemeCli {
    Default,
    Professional,
    Dark,
    Colorful,
}

impl From<SchemeCli> for ColorScheme {
    fn from(scheme: SchemeCli) -> Self {
        match scheme {
            SchemeCli::Default => ColorScheme::Default,
            SchemeCli::Professional => ColorScheme::Professional,
            SchemeCli::Dark => ColorScheme::Dark,
            SchemeCli::Colorful => ColorScheme::Colorful,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RendererCli {
    Auto,
    Graph,
    Markup,
}

impl From<RendererCli> for RendererChoice {
    fn from(renderer: RendererCli) -> Self {
        match renderer {
            RendererCli::Auto => RendererChoice::Auto,
            RendererCli::Graph => RendererChoice::Graph,
            RendererCli::Markup => RendererChoice::Markup,
        }
    }
}

/// Compile arrow-delimited instructions into flowcharts
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Instruction string, e.g. "Start->Check if valid->Save->Else retry->End".
    /// Read from stdin when neither this nor --file is given.
    instruction: Option<String>,

    /// Read the instruction from a file
    #[arg(short, long, conflicts_with = "instruction")]
    file: Option<String>,

    /// Path to an options JSON file ({"color_scheme": ..., "renderer": ...})
    #[arg(short, long)]
    config: Option<String>,

    /// Colour scheme, overriding the options file
    #[arg(short, long, value_enum)]
    scheme: Option<SchemeCli>,

    /// Renderer, overriding the options file
    #[arg(short, long, value_enum)]
    renderer: Option<RendererCli>,

    /// Write the rendering, steps, DOT and JSON files into this directory
    #[arg(short, long)]
    out_dir: Option<String>,

    /// Print a node/edge summary instead of the rendering
    #[arg(long)]
    summary: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.human {
        run_interactive(cli);
    } else {
        run_non_interactive(cli);
    }
}

fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("zushiki=debug,info")
        } else {
            EnvFilter::new("zushiki=warn")
        }
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(verbose).with_writer(io::stderr))
        .init();
}

fn load_options(cli: &Cli) -> Options {
    let mut options = match &cli.config {
        Some(path) => Options::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load options: {}", e))),
        None => Options::default(),
    };
    if let Some(scheme) = cli.scheme {
        options = options.with_color_scheme(ColorScheme::from(scheme));
    }
    if let Some(renderer) = cli.renderer {
        options = options.with_renderer(renderer.into());
    }
    options
}

fn run_generation(instruction: &str, options: Options, out_dir: Option<&str>, summary: bool) {
    let total_start = Instant::now();

    // --- 1. Renderer selection (probes Graphviz once) ---
    let generator = Generator::new(options);

    // --- 2. Compilation and rendering ---
    let output = generator
        .generate(instruction)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    for warning in &output.warnings {
        eprintln!("Warning: {}", warning);
    }

    // --- 3. Output ---
    if let Some(dir) = out_dir {
        let bundle = ExportBundle::from_output(instruction, &output)
            .unwrap_or_else(|e| exit_with_error(&format!("Export failed: {}", e)));
        let written = bundle
            .write_to(dir)
            .unwrap_or_else(|e| exit_with_error(&format!("Export failed: {}", e)));
        for path in written {
            println!("Wrote {}", path.display());
        }
    } else if summary {
        print_summary(&output.chart);
    } else {
        println!("{}", output.rendering.content);
    }

    eprintln!(
        "Rendered {} nodes with '{}' ({}) in {:?}",
        output.chart.nodes().len(),
        generator.renderer_name(),
        output.chart.scheme(),
        total_start.elapsed()
    );
}

fn print_summary(chart: &Flowchart) {
    println!("--- Steps ({}) ---", chart.steps().len());
    for (i, step) in chart.steps().iter().enumerate() {
        println!("{:>3}: {}", i, step);
    }
    println!("\n--- Nodes ({}) ---", chart.nodes().len());
    for node in chart.nodes() {
        println!("node_{:<3} {:<10} {}", node.id, node.kind.to_string(), node.label);
    }
    println!("\n--- Edges ({}) ---", chart.edges().len());
    for edge in chart.edges() {
        match edge.label {
            Some(label) => println!("node_{} -> node_{} [{}]", edge.source, edge.target, label),
            None => println!("node_{} -> node_{}", edge.source, edge.target),
        }
    }
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let options = load_options(&cli);
    let instruction = match (&cli.instruction, &cli.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read instruction file '{}': {}", path, e))
        }),
        (None, None) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to read stdin: {}", e)));
            buffer
        }
    };

    run_generation(&instruction, options, cli.out_dir.as_deref(), cli.summary);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(cli: Cli) {
    println!("--- Zushiki Interactive Mode ---");

    let instruction = prompt_for_input(
        "Enter instruction",
        Some("Start->Check if payment complete->Show success page->Else show error page->End"),
    );
    let options = load_options(&cli);
    let scheme = prompt_for_input(
        &format!("Enter colour scheme [current: {}]", options.color_scheme),
        None,
    );
    let out_dir = prompt_for_input("Enter output directory (optional)", None);

    let options = apply_scheme_answer(options, &scheme);
    let out_dir = if out_dir.is_empty() {
        None
    } else {
        Some(out_dir)
    };

    run_generation(&instruction, options, out_dir.as_deref(), true);
}

/// Applies the interactive colour scheme answer; an empty answer keeps the
/// scheme from the flags and options file.
fn apply_scheme_answer(options: Options, answer: &str) -> Options {
    if answer.is_empty() {
        options
    } else {
        options.with_color_scheme(answer)
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }

    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scheme_answer_keeps_flag_scheme() {
        let cli = Cli::parse_from(["zushiki-cli", "-i", "--scheme", "dark"]);
        let options = apply_scheme_answer(load_options(&cli), "");
        assert_eq!(options.color_scheme, ColorScheme::Dark);
    }

    #[test]
    fn test_typed_scheme_answer_overrides() {
        let cli = Cli::parse_from(["zushiki-cli", "-i", "--scheme", "dark"]);
        let options = apply_scheme_answer(load_options(&cli), "colorful");
        assert_eq!(options.color_scheme, ColorScheme::Colorful);

        let options = apply_scheme_answer(load_options(&cli), "neon");
        assert_eq!(options.color_scheme, ColorScheme::Default);
    }
}
