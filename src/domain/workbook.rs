use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-workbook materialized views settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterializedViewsConfig {
    pub materialized_views_enabled: bool,
    pub run_materialization_now: bool,
}

/// A workbook as listed by the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    pub id: String,
    pub name: String,
    pub project_id: String,
    #[serde(default)]
    pub materialized_views_config: MaterializedViewsConfig,
    /// Set when this tool last changed the workbook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Workbook {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            project_id: project_id.into(),
            materialized_views_config: MaterializedViewsConfig::default(),
            updated_at: None,
        }
    }
}
