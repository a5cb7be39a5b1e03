//! Configuration types for Structviz diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are styled and which backend renders them. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining style and backend settings.
//! - [`StyleConfig`] - Font settings applied to the graph, its nodes and its edges.
//! - [`BackendConfig`] - Name of the executable that rasterizes the graph.
//!
//! # Example
//!
//! ```
//! # use structviz::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.style().font_name(), "Verdana");
//! assert_eq!(config.style().font_size(), 12);
//! assert_eq!(config.backend().executable(), "dot");
//! ```

use serde::Deserialize;

const DEFAULT_FONT_NAME: &str = "Verdana";
const DEFAULT_FONT_SIZE: u32 = 12;
const DEFAULT_EXECUTABLE: &str = "dot";

/// Top-level application configuration combining style and backend settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Backend configuration section.
    #[serde(default)]
    backend: BackendConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style and backend configurations.
    ///
    /// # Arguments
    ///
    /// * `style` - Font settings.
    /// * `backend` - Rendering backend settings.
    pub fn new(style: StyleConfig, backend: BackendConfig) -> Self {
        Self { style, backend }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the backend configuration.
    pub fn backend(&self) -> &BackendConfig {
        &self.backend
    }
}

/// Font settings applied uniformly to the graph, nodes and edges.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default = "default_font_name")]
    font_name: String,

    #[serde(default = "default_font_size")]
    font_size: u32,
}

impl StyleConfig {
    pub fn new(font_name: impl Into<String>, font_size: u32) -> Self {
        Self {
            font_name: font_name.into(),
            font_size,
        }
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE)
    }
}

/// Rendering backend settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// File name of the executable searched for on the search path.
    #[serde(default = "default_executable")]
    executable: String,
}

impl BackendConfig {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EXECUTABLE)
    }
}

fn default_font_name() -> String {
    DEFAULT_FONT_NAME.to_string()
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

fn default_executable() -> String {
    DEFAULT_EXECUTABLE.to_string()
}
