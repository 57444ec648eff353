//! Site client port definition.

use crate::domain::{AppError, MaterializedViewsConfig, Mode, Project, Site, Workbook};

/// Port for reading and updating a site's materialized views settings.
pub trait SiteClient {
    /// The site this client is bound to.
    fn site(&self) -> Result<Site, AppError>;

    /// Set the site's materialized views mode and return the updated site.
    fn update_site(&mut self, mode: Mode) -> Result<Site, AppError>;

    /// Every project on the site.
    fn projects(&self) -> Result<Vec<Project>, AppError>;

    /// Every workbook on the site.
    fn workbooks(&self) -> Result<Vec<Workbook>, AppError>;

    /// Workbooks whose name matches exactly.
    fn workbooks_named(&self, name: &str) -> Result<Vec<Workbook>, AppError> {
        Ok(self.workbooks()?.into_iter().filter(|workbook| workbook.name == name).collect())
    }

    /// Replace a workbook's materialized views config and return the updated workbook.
    fn update_workbook(
        &mut self,
        workbook_id: &str,
        config: MaterializedViewsConfig,
    ) -> Result<Workbook, AppError>;
}
