//! Discovery and invocation of the Graphviz executable.
//!
//! On Windows the search path is only checked for a Graphviz entry. Elsewhere
//! each search-path directory is scanned and the first one holding the
//! executable is bound. A failed lookup is a warning: rendering still runs the
//! bare executable name and reports whatever the operating system answers.

use std::{
    env,
    ffi::OsStr,
    io::Write,
    path::{Path, PathBuf},
    process::Command,
};

use log::{debug, info, warn};

use crate::{error::StructvizError, export::OutputFormat};

/// Marker searched for in the Windows search path.
const WINDOWS_MARKER: &str = "Graphviz";

/// A located (or assumed) rendering executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backend {
    executable: String,
    directory: Option<PathBuf>,
}

impl Backend {
    /// Locates `executable` using the process search path.
    pub fn locate(executable: &str) -> Self {
        let search_path = env::var_os("PATH");
        Self::locate_in(executable, search_path.as_deref())
    }

    /// Locates `executable` using an explicit search path value.
    pub fn locate_in(executable: &str, search_path: Option<&OsStr>) -> Self {
        let directory = if cfg!(windows) {
            if !mentions_graphviz(search_path) {
                warn!("Could not find Graphviz in PATH.");
            }
            None
        } else {
            let directory = scan(executable, search_path);
            match &directory {
                Some(dir) => {
                    debug!(directory = dir.display().to_string(); "Found rendering backend")
                }
                None => warn!(executable = executable; "Could not find rendering backend in PATH"),
            }
            directory
        };

        Self {
            executable: executable.to_string(),
            directory,
        }
    }

    /// Returns the directory the executable was found in, if any.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Returns the program to run.
    pub fn program(&self) -> PathBuf {
        match &self.directory {
            Some(dir) => dir.join(&self.executable),
            None => PathBuf::from(&self.executable),
        }
    }

    /// Renders a DOT document into `output`.
    ///
    /// The document is written to a temporary file which is passed to the
    /// backend together with the format and output path.
    ///
    /// # Errors
    ///
    /// Returns [`StructvizError::Io`] if the temporary file cannot be written
    /// and [`StructvizError::Render`] if the backend cannot be started or
    /// exits unsuccessfully.
    pub fn render(
        &self,
        dot: &str,
        format: OutputFormat,
        output: &Path,
    ) -> Result<(), StructvizError> {
        let mut input = tempfile::NamedTempFile::new()?;
        input.write_all(dot.as_bytes())?;
        input.flush()?;

        let program = self.program();
        info!(
            program = program.display().to_string(),
            format = format.as_str(),
            output = output.display().to_string();
            "Running rendering backend"
        );

        let result = Command::new(&program)
            .arg(format!("-T{format}"))
            .arg("-o")
            .arg(output)
            .arg(input.path())
            .output()
            .map_err(|err| {
                StructvizError::Render(format!("failed to run '{}': {err}", program.display()))
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(StructvizError::Render(format!(
                "'{}' exited with {}: {}",
                program.display(),
                result.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}

fn mentions_graphviz(search_path: Option<&OsStr>) -> bool {
    search_path.is_some_and(|value| value.to_string_lossy().contains(WINDOWS_MARKER))
}

/// Returns the first search-path directory containing `executable`.
fn scan(executable: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    let search_path = search_path?;
    env::split_paths(search_path).find(|dir| dir.join(executable).is_file())
}
