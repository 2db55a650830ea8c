//! Error types for calibration data selection

use std::io;
use std::path::{Path, PathBuf};

/// Configuration problems detected while building a data list
#[derive(Debug, thiserror::Error)]
pub enum SelectionErrorKind {
    #[error("No dataset path specified; use --dataset or --data-list")]
    NoSource,

    #[error("There are no inputs in {origin}")]
    NoInputs { origin: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl SelectionErrorKind {
    pub fn no_inputs(origin: impl Into<String>) -> Self {
        Self::NoInputs {
            origin: origin.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Main error type for selection operations
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error(transparent)]
    Config(#[from] SelectionErrorKind),

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },
}

impl SelectionError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Config(SelectionErrorKind::configuration(message))
    }

    pub fn io(source: io::Error, path: &Path) -> Self {
        Self::Io {
            message: format!("{}: {}", path.display(), source),
            path: Some(path.to_path_buf()),
            source,
        }
    }

    /// True for the fatal configuration class (missing source, empty result, bad settings)
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Path involved in an IO failure, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => path.as_deref(),
            Self::Config(_) => None,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(SelectionErrorKind::NoSource) => {
                "Please specify the dataset path by --dataset or --data-list".to_string()
            }
            Self::Config(SelectionErrorKind::NoInputs { origin }) => {
                format!("No calibration inputs found in {}", origin)
            }
            Self::Config(kind) => kind.to_string(),
            Self::Io { source, path, .. } => match path {
                Some(path) => format!("Cannot access {}: {}", path.display(), source),
                None => format!("IO error: {}", source),
            },
        }
    }
}

impl From<walkdir::Error> for SelectionError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf);
        let message = err.to_string();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message.clone()));
        Self::Io {
            message,
            path,
            source,
        }
    }
}

/// Result type for selection operations
pub type SelectionResult<T> = Result<T, SelectionError>;
