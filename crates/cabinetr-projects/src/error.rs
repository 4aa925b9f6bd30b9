//! Error types for project storage and exchange.

use cabinetr_cutlist::CutlistError;
use thiserror::Error;

/// Errors that can occur while managing cabinet projects.
#[derive(Error, Debug)]
pub enum ProjectError {
    /// No project with the given id.
    #[error("Project not found: {0}")]
    NotFound(String),

    /// The project has no configuration with the given id.
    #[error("Configuration {configuration} not found in project {project}")]
    ConfigurationNotFound {
        project: String,
        configuration: String,
    },

    /// An import file lacks the envelope fields or is not JSON.
    #[error("Invalid project file format")]
    InvalidFormat,

    /// A configuration cannot be exported as it stands.
    #[error(transparent)]
    Cutlist(#[from] CutlistError),

    /// Store file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store file is not a JSON array of projects.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for project operations.
pub type ProjectResult<T> = Result<T, ProjectError>;
