//! Report where materialized views are currently enabled.

use std::fmt;

use crate::app::AppContext;
use crate::domain::{AppError, find_project_path, index_projects};
use crate::ports::SiteClient;

/// Site and workbooks with materialized views enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub site: String,
    /// Whether the site's mode is anything other than `disable`.
    pub site_enabled: bool,
    /// Full paths of enabled workbooks; empty whenever the site is disabled.
    pub workbooks: Vec<String>,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Materialized views is enabled on sites:")?;
        if self.site_enabled {
            writeln!(f, "Site name: {}", self.site)?;
        }
        writeln!(f)?;
        writeln!(f, "Materialized views is enabled on workbooks:")?;
        for workbook in &self.workbooks {
            writeln!(f, "Workbook: {} from site: {}", workbook, self.site)?;
        }
        Ok(())
    }
}

/// Execute the status command.
pub fn execute<C: SiteClient>(ctx: &AppContext<C>) -> Result<StatusReport, AppError> {
    let client = ctx.client();
    let site = client.site()?;
    let site_enabled = site.allows_materialized_views();

    let mut workbooks = Vec::new();
    if site_enabled {
        let all_projects = index_projects(&client.projects()?);
        for workbook in client.workbooks()? {
            if !workbook.materialized_views_config.materialized_views_enabled {
                continue;
            }
            let path = match all_projects.get(&workbook.project_id) {
                Some(project) => find_project_path(project, &all_projects, &workbook.name)?,
                None => workbook.name.clone(),
            };
            workbooks.push(path);
        }
    }

    Ok(StatusReport { site: site.name, site_enabled, workbooks })
}
