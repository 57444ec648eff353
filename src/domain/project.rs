//! Project hierarchy model and traversal.
//!
//! Projects only know their parent, so every downward walk scans the full
//! project list and every upward walk goes through a [`ProjectIndex`].

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::AppError;

/// A node in the site's project hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Absent for top-level projects.
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>, parent_id: Option<&str>) -> Self {
        Self { id: id.into(), name: name.into(), parent_id: parent_id.map(str::to_string) }
    }
}

/// Projects keyed by id.
pub type ProjectIndex = HashMap<String, Project>;

/// Build a [`ProjectIndex`] from a project listing.
pub fn index_projects(projects: &[Project]) -> ProjectIndex {
    projects.iter().map(|project| (project.id.clone(), project.clone())).collect()
}

/// Resolve the slash-separated path from the hierarchy root down to `project`.
///
/// `path` is prepended with each ancestor's name in turn, so callers normally
/// pass an empty string.
pub fn find_project_path(
    project: &Project,
    all_projects: &ProjectIndex,
    path: &str,
) -> Result<String, AppError> {
    let mut path = prepend_segment(&project.name, path);
    let mut visited: HashSet<&str> = HashSet::from([project.id.as_str()]);
    let mut current = project;

    while let Some(parent_id) = current.parent_id.as_deref() {
        let parent = all_projects.get(parent_id).ok_or_else(|| AppError::DanglingParent {
            project: current.name.clone(),
            parent_id: parent_id.to_string(),
        })?;
        if !visited.insert(parent.id.as_str()) {
            return Err(AppError::ProjectCycle(parent.id.clone()));
        }
        path = prepend_segment(&parent.name, &path);
        current = parent;
    }

    Ok(path)
}

fn prepend_segment(name: &str, path: &str) -> String {
    if path.is_empty() { name.to_string() } else { format!("{}/{}", name, path) }
}

/// Map each candidate's resolved path to the candidate.
pub fn get_project_paths<'a>(
    projects: impl IntoIterator<Item = &'a Project>,
    all_projects: &ProjectIndex,
) -> Result<BTreeMap<String, &'a Project>, AppError> {
    let mut paths = BTreeMap::new();
    for project in projects {
        paths.insert(find_project_path(project, all_projects, "")?, project);
    }
    Ok(paths)
}

/// Append `project` and all of its descendants to `projects_to_update`.
///
/// Order is pre-order: a project precedes its children, and siblings keep the
/// order they have in `all_projects`.
pub fn find_projects_to_update<'a>(
    project: &'a Project,
    all_projects: &'a [Project],
    projects_to_update: &mut Vec<&'a Project>,
) -> Result<(), AppError> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack = vec![project];

    while let Some(current) = stack.pop() {
        if !visited.insert(current.id.as_str()) {
            return Err(AppError::ProjectCycle(current.id.clone()));
        }
        projects_to_update.push(current);

        let children: Vec<&Project> = all_projects
            .iter()
            .filter(|child| child.parent_id.as_deref() == Some(current.id.as_str()))
            .collect();
        debug!(project = %current.name, children = children.len(), "collected project");
        stack.extend(children.into_iter().rev());
    }

    Ok(())
}

/// Ids of `project` and every project beneath it.
pub fn find_project_ids_to_update(
    all_projects: &[Project],
    project: &Project,
) -> Result<HashSet<String>, AppError> {
    let mut projects_to_update = Vec::new();
    find_projects_to_update(project, all_projects, &mut projects_to_update)?;
    Ok(projects_to_update.into_iter().map(|p| p.id.clone()).collect())
}
