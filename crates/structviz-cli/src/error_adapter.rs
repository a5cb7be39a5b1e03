//! Error adapter for converting StructvizError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use structviz::StructvizError;

/// Adapter giving every [`StructvizError`] a stable diagnostic code.
pub struct ErrorAdapter<'a>(pub &'a StructvizError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            StructvizError::Io(_) => "structviz::io",
            StructvizError::Model(_) => "structviz::model",
            StructvizError::Load { .. } => "structviz::load",
            StructvizError::Config(_) => "structviz::config",
            // Logged by the loader rather than returned.
            StructvizError::MissingTargetPath(_) => "structviz::input",
            StructvizError::Render(_) => "structviz::render",
            StructvizError::Export(_) => "structviz::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            StructvizError::Render(_) => {
                "install Graphviz and make sure its executable is on the search path"
            }
            StructvizError::Load { .. } => "model files must hold a module object or an array of them",
            StructvizError::Config(_) => "see the [style] and [backend] sections of config.toml",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use structviz::{collection::resolve, element::ElementKind};

    use super::*;

    fn code(err: &StructvizError) -> String {
        ErrorAdapter(err).code().unwrap().to_string()
    }

    #[test]
    fn test_codes() {
        let model = structviz_model_error();
        assert_eq!(code(&model), "structviz::model");
        assert_eq!(
            code(&StructvizError::Io(io::Error::other("boom"))),
            "structviz::io"
        );
        assert_eq!(
            code(&StructvizError::new_load_error("a.json", "bad")),
            "structviz::load"
        );
        assert_eq!(
            code(&StructvizError::Render("exit 1".to_string())),
            "structviz::render"
        );
        assert_eq!(
            code(&StructvizError::Config("bad".to_string())),
            "structviz::config"
        );
    }

    #[test]
    fn test_display_passes_through() {
        let err = StructvizError::Render("exit 1".to_string());
        assert_eq!(ErrorAdapter(&err).to_string(), "Render error: exit 1");
        assert!(ErrorAdapter(&err).help().is_some());
    }

    #[test]
    fn test_report_renders() {
        let err = structviz_model_error();
        let mut writer = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut writer, &ErrorAdapter(&err))
            .unwrap();
        assert!(writer.contains("structviz::model"));
        assert!(writer.contains("not supported in"));
    }

    fn structviz_model_error() -> StructvizError {
        StructvizError::Model(resolve(ElementKind::Method, ElementKind::Class).unwrap_err())
    }
}
