//! Shared fixtures for unit tests.

use crate::adapters::SiteSnapshot;
use crate::domain::{Mode, Project, ProjectIndex, Site, Workbook, index_projects};

/// Five projects: `0` is the root, `1` and `2` are its children, `3` sits
/// under `1` and `4` under `2`.
pub fn sample_projects() -> ProjectIndex {
    index_projects(&[
        Project::new("0", "project0", None),
        Project::new("1", "project1", Some("0")),
        Project::new("2", "project2", Some("0")),
        Project::new("3", "project3", Some("1")),
        Project::new("4", "project4", Some("2")),
    ])
}

/// A site with a default project, a two-level project, and a project name
/// (`Sales`) used at two different paths.
///
/// ```text
/// Default            w1 Book1, w5 Book2
/// Project1           w2 Book2
/// Project1/Project2  w3 Book2, w4 Book3
/// Project1/Sales     w7 Report
/// Sales              w6 Report
/// ```
pub fn sample_snapshot() -> SiteSnapshot {
    SiteSnapshot {
        site: Site {
            name: "Finance".into(),
            content_url: "finance".into(),
            materialized_views_mode: Mode::Enable,
        },
        projects: vec![
            Project::new("0", "Default", None),
            Project::new("1", "Project1", None),
            Project::new("2", "Project2", Some("1")),
            Project::new("3", "Sales", None),
            Project::new("4", "Sales", Some("1")),
        ],
        workbooks: vec![
            Workbook::new("w1", "Book1", "0"),
            Workbook::new("w2", "Book2", "1"),
            Workbook::new("w3", "Book2", "2"),
            Workbook::new("w4", "Book3", "2"),
            Workbook::new("w5", "Book2", "0"),
            Workbook::new("w6", "Report", "3"),
            Workbook::new("w7", "Report", "4"),
        ],
    }
}
