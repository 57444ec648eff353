//! Run configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from the file given with `--config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Server and site selection.
    #[serde(default)]
    pub server: ServerConfig,
    /// Site snapshot location.
    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.server.validate()?;
        self.snapshot.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Server address, shown in reports.
    #[serde(default)]
    pub url: Option<Url>,
    /// Content url of the site the snapshot must belong to.
    #[serde(default)]
    pub site: Option<String>,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.site.as_deref().is_some_and(|site| site.trim().is_empty()) {
            return Err(AppError::config_error("server.site must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotConfig {
    /// Snapshot file; relative paths resolve against the config file's directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl SnapshotConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.path.as_ref().is_some_and(|path| path.as_os_str().is_empty()) {
            return Err(AppError::config_error("snapshot.path must not be empty"));
        }
        Ok(())
    }
}

/// Settings for one run after command-line flags are merged over the file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub server_url: Option<Url>,
    pub site: Option<String>,
    pub snapshot_path: PathBuf,
}
