pub mod config;
pub mod error;
pub mod options;
pub mod project;
pub mod site;
pub mod workbook;
pub mod workbook_list;

pub use config::{ResolvedConfig, RunConfig, ServerConfig, SnapshotConfig};
pub use error::AppError;
pub use options::{
    ContentType, MaterializeArgs, assert_options_valid, assert_project_valid,
    assert_site_options_valid, create_materialized_views_config,
};
pub use project::{
    Project, ProjectIndex, find_project_ids_to_update, find_project_path,
    find_projects_to_update, get_project_paths, index_projects,
};
pub use site::{Mode, Site};
pub use workbook::{MaterializedViewsConfig, Workbook};
pub use workbook_list::{WorkbookPathMapping, parse_workbook_names, parse_workbook_path};
