//! Command-line argument definitions for the Structviz CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the model input, the diagram mode and
//! output format, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Structviz diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Model file or directory of model files
    #[arg(help = "Path to the model file or directory")]
    pub input: String,

    /// Output file (defaults to diagram.png, diagram.svg or diagram.dot)
    pub output: Option<String>,

    /// Draw only module-to-module import edges
    #[arg(short, long)]
    pub dependencies: bool,

    /// Search subdirectories of INPUT for model files
    #[arg(short, long)]
    pub recursive: bool,

    /// Render SVG instead of PNG
    #[arg(long)]
    pub svg: bool,

    /// Print the module dependency summary as JSON instead of rendering
    #[arg(long)]
    pub summary: bool,

    /// Write the DOT document instead of running the rendering backend
    #[arg(long)]
    pub emit_dot: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
