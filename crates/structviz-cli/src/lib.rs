//! CLI logic for the Structviz diagram tool.
//!
//! Loads analysed modules from model files and either renders them through
//! Graphviz, writes the DOT document, or prints a dependency summary.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::info;

use structviz::{
    DiagramBuilder, DiagramMode, OutputFormat, StructvizError, graph::Graph, summary,
};

/// File stem of the default output file.
const DEFAULT_OUTPUT_STEM: &str = "diagram";

/// Run the Structviz CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `StructvizError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed model files
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), StructvizError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let builder = DiagramBuilder::new(app_config);

    let modules = builder.load(&args.input, args.recursive)?;

    if args.summary {
        let json = summary::to_json(&builder.dependencies(&modules))?;
        println!("{json}");
        return Ok(());
    }

    let format = OutputFormat::from_svg_flag(args.svg);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(format, args.emit_dot));
    info!(
        input_path = args.input,
        output_path = output;
        "Processing diagram"
    );

    let mode = if args.dependencies {
        DiagramMode::DependenciesOnly
    } else {
        DiagramMode::Full
    };
    let graph = builder.build(&modules, mode);

    render(&builder, &graph, args.emit_dot, format, &output)
}

/// Writes the DOT document or runs the rendering backend.
#[cfg(feature = "graphviz")]
fn render(
    builder: &DiagramBuilder,
    graph: &Graph,
    emit_dot: bool,
    format: OutputFormat,
    output: &str,
) -> Result<(), StructvizError> {
    if emit_dot {
        std::fs::write(output, builder.render_dot(graph))?;
        info!(output_file = output; "DOT document written");
    } else {
        builder.render_image(graph, format, output)?;
    }
    Ok(())
}

#[cfg(not(feature = "graphviz"))]
fn render(
    _builder: &DiagramBuilder,
    _graph: &Graph,
    _emit_dot: bool,
    _format: OutputFormat,
    _output: &str,
) -> Result<(), StructvizError> {
    Err(StructvizError::Render(
        "structviz was built without the `graphviz` feature".to_string(),
    ))
}

fn default_output(format: OutputFormat, emit_dot: bool) -> String {
    if emit_dot {
        format!("{DEFAULT_OUTPUT_STEM}.dot")
    } else {
        format!("{DEFAULT_OUTPUT_STEM}.{format}")
    }
}
