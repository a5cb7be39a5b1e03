//! Export of diagram graphs to the rendering backend.
//!
//! - [`dot`] serializes a [`crate::graph::Graph`] as a DOT document.
//! - [`backend`] locates the Graphviz executable and runs it to produce an image.

pub mod backend;
#[cfg(feature = "graphviz")]
pub mod dot;

use std::fmt;

/// Image format produced by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

impl OutputFormat {
    /// Selects SVG when `svg` is set, PNG otherwise.
    pub fn from_svg_flag(svg: bool) -> Self {
        if svg { Self::Svg } else { Self::Png }
    }

    /// Returns the backend format name, also used as file extension.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
