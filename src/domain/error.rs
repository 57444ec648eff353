use std::io;

use thiserror::Error;

/// Library-wide error type for materialization operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Argument combination rejected before any update was attempted.
    #[error("{0}")]
    InvalidOptions(String),

    /// A scope-specific argument was not supplied.
    #[error("{0}")]
    MissingArgument(String),

    /// A project's parent id does not exist in the project collection.
    #[error("Project '{project}' references unknown parent '{parent_id}'")]
    DanglingParent { project: String, parent_id: String },

    /// The project hierarchy loops back on itself.
    #[error("Project hierarchy contains a cycle through project '{0}'")]
    ProjectCycle(String),

    /// No project matches the requested name or path.
    #[error("Cannot find project: {0}")]
    ProjectNotFound(String),

    /// The site has no workbook with this id.
    #[error("Workbook '{0}' not found in site")]
    WorkbookNotFound(String),

    /// Several projects share the requested name.
    #[error(
        "Project name '{name}' is not unique, use '--project-path <path>'. Possible project paths: {}",
        .paths.join(", ")
    )]
    AmbiguousProject { name: String, paths: Vec<String> },

    /// Workbook and project updates require materialized views on the site.
    #[error("Cannot update workbook/project because site '{0}' is disabled for materialized views")]
    SiteDisabled(String),

    /// The snapshot belongs to a different site than the one requested.
    #[error("Snapshot is for site '{actual}' but site '{expected}' was requested")]
    SiteMismatch { expected: String, actual: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn parse_error<W: Into<String>, D: ToString>(what: W, details: D) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }
}
