//! Site client backed by an offline site snapshot file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{AppError, MaterializedViewsConfig, Mode, Project, Site, Workbook};
use crate::ports::SiteClient;

/// Serialized image of a site: the site itself, its projects, and its workbooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteSnapshot {
    pub site: Site,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub workbooks: Vec<Workbook>,
}

/// On-disk encoding of a snapshot, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                SnapshotFormat::Yaml
            }
            _ => SnapshotFormat::Json,
        }
    }

    fn parse(&self, content: &str) -> Result<SiteSnapshot, AppError> {
        match self {
            SnapshotFormat::Json => serde_json::from_str(content)
                .map_err(|e| AppError::parse_error("site snapshot (JSON)", e)),
            SnapshotFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| AppError::parse_error("site snapshot (YAML)", e)),
        }
    }

    fn render(&self, snapshot: &SiteSnapshot) -> Result<String, AppError> {
        match self {
            SnapshotFormat::Json => {
                let mut content = serde_json::to_string_pretty(snapshot)?;
                content.push('\n');
                Ok(content)
            }
            SnapshotFormat::Yaml => serde_yaml::to_string(snapshot)
                .map_err(|e| AppError::parse_error("site snapshot (YAML)", e)),
        }
    }
}

/// In-memory site served from a snapshot; updates persist only on [`save`](Self::save).
#[derive(Debug, Clone)]
pub struct SnapshotSiteClient {
    snapshot: SiteSnapshot,
    path: Option<PathBuf>,
    format: SnapshotFormat,
}

impl SnapshotSiteClient {
    /// Wrap an already-built snapshot. [`save`](Self::save) is a no-op.
    pub fn from_snapshot(snapshot: SiteSnapshot) -> Self {
        Self { snapshot, path: None, format: SnapshotFormat::Json }
    }

    /// Load a snapshot file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.is_file() {
            return Err(AppError::config_error(format!(
                "Site snapshot not found: {}",
                path.display()
            )));
        }

        let format = SnapshotFormat::from_path(path);
        let content = fs::read_to_string(path)?;
        let snapshot = format.parse(&content)?;
        debug!(
            file = %path.display(),
            projects = snapshot.projects.len(),
            workbooks = snapshot.workbooks.len(),
            "loaded site snapshot"
        );

        Ok(Self { snapshot, path: Some(path.to_path_buf()), format })
    }

    pub fn snapshot(&self) -> &SiteSnapshot {
        &self.snapshot
    }

    /// Write the snapshot back to the file it was loaded from.
    pub fn save(&self) -> Result<(), AppError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        fs::write(path, self.format.render(&self.snapshot)?)?;
        info!(file = %path.display(), "saved site snapshot");
        Ok(())
    }
}

impl SiteClient for SnapshotSiteClient {
    fn site(&self) -> Result<Site, AppError> {
        Ok(self.snapshot.site.clone())
    }

    fn update_site(&mut self, mode: Mode) -> Result<Site, AppError> {
        self.snapshot.site.materialized_views_mode = mode;
        Ok(self.snapshot.site.clone())
    }

    fn projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.snapshot.projects.clone())
    }

    fn workbooks(&self) -> Result<Vec<Workbook>, AppError> {
        Ok(self.snapshot.workbooks.clone())
    }

    fn update_workbook(
        &mut self,
        workbook_id: &str,
        config: MaterializedViewsConfig,
    ) -> Result<Workbook, AppError> {
        let workbook = self
            .snapshot
            .workbooks
            .iter_mut()
            .find(|workbook| workbook.id == workbook_id)
            .ok_or_else(|| AppError::WorkbookNotFound(workbook_id.to_string()))?;

        workbook.materialized_views_config = config;
        workbook.updated_at = Some(Utc::now());
        Ok(workbook.clone())
    }
}
