use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while compiling an instruction string into a flowchart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("No steps found in the instruction; expected steps separated by '{delimiter}'")]
    EmptyInput { delimiter: String },
}

/// Errors raised by a rendering backend.
///
/// Both variants are recoverable: the [`Generator`](crate::generator::Generator)
/// answers them by falling back to markup rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Graph renderer '{program}' is not available: {reason}")]
    Unavailable { program: String, reason: String },

    #[error("Graph renderer '{program}' failed: {message}")]
    Failed { program: String, message: String },
}

/// Errors that can occur while loading [`Options`](crate::config::Options).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse options JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Could not read options file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while writing an export bundle to disk.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Could not write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
