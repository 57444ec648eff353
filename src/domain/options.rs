//! Command arguments, the materialized views config they produce, and the
//! checks run on them before anything is updated.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::domain::{MaterializedViewsConfig, Mode};

/// Kind of content an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum ContentType {
    Site,
    Workbook,
    ProjectName,
    ProjectPath,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Site => "site",
            ContentType::Workbook => "workbook",
            ContentType::ProjectName => "project_name",
            ContentType::ProjectPath => "project_path",
        }
    }

    /// Every type except `site` changes individual workbooks.
    pub fn is_workbook_scoped(&self) -> bool {
        !matches!(self, ContentType::Site)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments controlling a materialization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeArgs {
    pub mode: Option<Mode>,
    pub materialize_now: bool,
    pub content_type: Option<ContentType>,
    pub project_name: Option<String>,
    pub project_path: Option<String>,
    pub path_list: Option<PathBuf>,
    pub name_list: Option<PathBuf>,
}

impl MaterializeArgs {
    pub fn new(content_type: Option<ContentType>, mode: Option<Mode>) -> Self {
        Self { content_type, mode, ..Self::default() }
    }
}

pub fn create_materialized_views_config(args: &MaterializeArgs) -> MaterializedViewsConfig {
    MaterializedViewsConfig {
        materialized_views_enabled: args.mode.is_some_and(|mode| mode.enables()),
        run_materialization_now: args.materialize_now,
    }
}

/// Site updates take a site-wide mode and never materialize immediately.
pub fn assert_site_options_valid(args: &MaterializeArgs) -> bool {
    !args.materialize_now && args.mode.is_some_and(|mode| mode.is_site_wide())
}

/// A mode is required, and workbook-scoped types cannot use site-wide modes.
pub fn assert_options_valid(args: &MaterializeArgs) -> bool {
    let Some(mode) = args.mode else {
        return false;
    };
    let workbook_scoped = args.content_type.is_some_and(|t| t.is_workbook_scoped());
    !(workbook_scoped && mode.is_site_wide())
}

pub fn assert_project_valid<S: AsRef<str>>(project_name: &str, projects: &[S]) -> bool {
    projects.iter().any(|project| project.as_ref() == project_name)
}
