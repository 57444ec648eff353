//! Run configuration loading and merging with command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use url::Url;

use crate::domain::{AppError, ResolvedConfig, RunConfig};

/// Values given on the command line; each one wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub snapshot: Option<PathBuf>,
    pub site: Option<String>,
    pub server: Option<Url>,
}

/// Load and parse the run configuration file.
///
/// A relative `snapshot.path` is resolved against the config file's directory.
pub fn load_config(path: &Path) -> Result<RunConfig, AppError> {
    if !path.is_file() {
        return Err(AppError::config_error(format!("Config file not found: {}", path.display())));
    }

    let content = fs::read_to_string(path)?;
    let mut config = parse_config_content(&content)?;

    if let Some(snapshot) = config.snapshot.path.as_mut()
        && snapshot.is_relative()
        && let Some(dir) = path.parent()
    {
        *snapshot = dir.join(&*snapshot);
    }

    debug!(file = %path.display(), "loaded run config");
    Ok(config)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<RunConfig, AppError> {
    let config: RunConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Merge the optional config file with command-line overrides.
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<ResolvedConfig, AppError> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => RunConfig::default(),
    };

    let snapshot_path = overrides.snapshot.or(config.snapshot.path).ok_or_else(|| {
        AppError::config_error(
            "No site snapshot given. Use '--snapshot <file>' or set [snapshot].path in the config file.",
        )
    })?;

    let site = overrides.site.or(config.server.site);
    if site.as_deref().is_some_and(|site| site.trim().is_empty()) {
        return Err(AppError::config_error("Site content url must not be empty"));
    }

    Ok(ResolvedConfig { server_url: overrides.server.or(config.server.url), site, snapshot_path })
}
