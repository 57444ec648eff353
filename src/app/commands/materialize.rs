//! Apply a materialized views mode to a site, a list of workbooks, or a project subtree.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::domain::{
    AppError, ContentType, MaterializeArgs, MaterializedViewsConfig, Project, ProjectIndex,
    Workbook, assert_options_valid, assert_project_valid, assert_site_options_valid,
    create_materialized_views_config, find_project_ids_to_update, find_project_path,
    get_project_paths, index_projects, parse_workbook_names, parse_workbook_path,
};
use crate::ports::SiteClient;

/// What a materialize run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Site whose mode was changed.
    pub site: Option<String>,
    /// Path of the project whose subtree was updated.
    pub project: Option<String>,
    /// Full paths (`project path/workbook name`) of updated workbooks.
    pub workbooks: Vec<String>,
    /// Listed entries that matched nothing on the site.
    pub notices: Vec<String>,
}

impl UpdateReport {
    pub fn is_empty(&self) -> bool {
        self.site.is_none() && self.workbooks.is_empty()
    }
}

impl fmt::Display for UpdateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(site) = &self.site {
            writeln!(f, "Updated materialized views settings for site: {}", site)?;
        }
        for workbook in &self.workbooks {
            writeln!(f, "Updated materialized views settings for workbook: {}", workbook)?;
        }
        if let Some(project) = &self.project {
            writeln!(f, "Updated materialized views settings for project: {}", project)?;
        }
        for notice in &self.notices {
            writeln!(f, "Notice: {}", notice)?;
        }
        Ok(())
    }
}

/// Execute the materialize command.
pub fn execute<C: SiteClient>(
    ctx: &mut AppContext<C>,
    args: &MaterializeArgs,
) -> Result<UpdateReport, AppError> {
    let Some(content_type) = args.content_type else {
        return Err(AppError::InvalidOptions(
            "Use '--type <content type> --mode <mode>' to update materialized views settings."
                .into(),
        ));
    };

    if !assert_options_valid(args) {
        let message = if args.mode.is_none() {
            "Use '--type <content type> --mode <mode>' to update materialized views settings."
        } else {
            "\"enable_all\" and \"disable_all\" do not apply to workbook/project type"
        };
        return Err(AppError::InvalidOptions(message.into()));
    }

    let config = create_materialized_views_config(args);
    debug!(content_type = %content_type, ?config, "materialize");

    let client = ctx.client_mut();
    match content_type {
        ContentType::Site => update_site(client, args),
        ContentType::Workbook => update_workbooks(client, args, config),
        ContentType::ProjectName => update_project_by_name(client, args, config),
        ContentType::ProjectPath => update_project_by_path(client, args, config),
    }
}

fn update_site<C: SiteClient>(
    client: &mut C,
    args: &MaterializeArgs,
) -> Result<UpdateReport, AppError> {
    if !assert_site_options_valid(args) {
        let message = if args.materialize_now {
            "\"--materialize-now\" only applies to workbook/project type"
        } else {
            "For site type please choose from \"enable_all\" or \"disable_all\""
        };
        return Err(AppError::InvalidOptions(message.into()));
    }
    let mode = args.mode.ok_or_else(|| AppError::InvalidOptions("A mode is required".into()))?;

    let site = client.update_site(mode)?;
    info!(site = %site.name, %mode, "updated site");
    Ok(UpdateReport { site: Some(site.name), ..Default::default() })
}

fn ensure_site_enabled<C: SiteClient>(client: &C) -> Result<(), AppError> {
    let site = client.site()?;
    if !site.allows_materialized_views() {
        return Err(AppError::SiteDisabled(site.name));
    }
    Ok(())
}

fn update_workbooks<C: SiteClient>(
    client: &mut C,
    args: &MaterializeArgs,
    config: MaterializedViewsConfig,
) -> Result<UpdateReport, AppError> {
    if args.path_list.is_none() && args.name_list.is_none() {
        return Err(AppError::MissingArgument(
            "Use '--path-list <filename>' or '--name-list <filename>' to specify the path of a list of workbooks"
                .into(),
        ));
    }
    ensure_site_enabled(client)?;

    let all_projects = index_projects(&client.projects()?);
    let mut report = UpdateReport::default();

    if let Some(path_list) = &args.path_list {
        let mapping = parse_workbook_path(path_list)?;
        for (workbook_name, paths) in mapping.iter() {
            let mut unmatched: BTreeSet<&String> = paths.iter().collect();
            for workbook in client.workbooks_named(workbook_name)? {
                let Some(project) = all_projects.get(&workbook.project_id) else {
                    warn!(
                        workbook = %workbook.name,
                        project_id = %workbook.project_id,
                        "workbook belongs to unknown project"
                    );
                    continue;
                };
                let path = find_project_path(project, &all_projects, "")?;
                if !paths.contains(&path) {
                    debug!(workbook = %workbook.name, %path, "path not listed, skipping");
                    continue;
                }
                unmatched.remove(&path);
                apply(client, &workbook, config, &all_projects, &mut report)?;
            }
            for path in unmatched {
                report.notices.push(format!(
                    "Cannot find workbook path: {}/{}, each line should only contain one workbook path",
                    path, workbook_name
                ));
            }
        }
    } else if let Some(name_list) = &args.name_list {
        for workbook_name in parse_workbook_names(name_list)? {
            let workbooks = client.workbooks_named(&workbook_name)?;
            if workbooks.is_empty() {
                report.notices.push(format!("{} is not in site", workbook_name));
                continue;
            }
            for workbook in workbooks {
                apply(client, &workbook, config, &all_projects, &mut report)?;
            }
        }
    }

    Ok(report)
}

fn update_project_by_name<C: SiteClient>(
    client: &mut C,
    args: &MaterializeArgs,
    config: MaterializedViewsConfig,
) -> Result<UpdateReport, AppError> {
    let Some(project_name) = args.project_name.as_deref() else {
        return Err(AppError::MissingArgument(
            "Use '--project-name <project name>' to specify the name of the project".into(),
        ));
    };
    ensure_site_enabled(client)?;

    let projects = client.projects()?;
    let names: Vec<&str> = projects.iter().map(|project| project.name.as_str()).collect();
    if !assert_project_valid(project_name, &names) {
        return Err(AppError::ProjectNotFound(project_name.to_string()));
    }

    let all_projects = index_projects(&projects);
    let candidates: Vec<&Project> =
        projects.iter().filter(|project| project.name == project_name).collect();
    if candidates.len() > 1 {
        let paths = get_project_paths(candidates.iter().copied(), &all_projects)?;
        return Err(AppError::AmbiguousProject {
            name: project_name.to_string(),
            paths: paths.into_keys().collect(),
        });
    }

    update_project(client, candidates[0], &projects, &all_projects, config)
}

fn update_project_by_path<C: SiteClient>(
    client: &mut C,
    args: &MaterializeArgs,
    config: MaterializedViewsConfig,
) -> Result<UpdateReport, AppError> {
    let Some(project_path) = args.project_path.as_deref().map(|path| path.trim().trim_matches('/'))
    else {
        return Err(AppError::MissingArgument(
            "Use '--project-path <project path>' to specify the path of the project".into(),
        ));
    };
    ensure_site_enabled(client)?;

    let project_name = project_path.rsplit('/').next().unwrap_or(project_path);
    let projects = client.projects()?;
    let names: Vec<&str> = projects.iter().map(|project| project.name.as_str()).collect();
    if !assert_project_valid(project_name, &names) {
        return Err(AppError::ProjectNotFound(project_path.to_string()));
    }

    let all_projects = index_projects(&projects);
    let possible_paths = get_project_paths(
        projects.iter().filter(|project| project.name == project_name),
        &all_projects,
    )?;
    let Some(project) = possible_paths.get(project_path) else {
        return Err(AppError::ProjectNotFound(project_path.to_string()));
    };

    update_project(client, project, &projects, &all_projects, config)
}

fn update_project<C: SiteClient>(
    client: &mut C,
    project: &Project,
    projects: &[Project],
    all_projects: &ProjectIndex,
    config: MaterializedViewsConfig,
) -> Result<UpdateReport, AppError> {
    let project_ids = find_project_ids_to_update(projects, project)?;
    let mut report = UpdateReport {
        project: Some(find_project_path(project, all_projects, "")?),
        ..Default::default()
    };

    for workbook in client.workbooks()? {
        if project_ids.contains(&workbook.project_id) {
            apply(client, &workbook, config, all_projects, &mut report)?;
        }
    }

    Ok(report)
}

fn apply<C: SiteClient>(
    client: &mut C,
    workbook: &Workbook,
    config: MaterializedViewsConfig,
    all_projects: &ProjectIndex,
    report: &mut UpdateReport,
) -> Result<(), AppError> {
    let updated = client.update_workbook(&workbook.id, config)?;
    let workbook_path = match all_projects.get(&updated.project_id) {
        Some(project) => find_project_path(project, all_projects, &updated.name)?,
        None => updated.name.clone(),
    };
    info!(
        workbook = %workbook_path,
        enabled = config.materialized_views_enabled,
        "updated workbook"
    );
    report.workbooks.push(workbook_path);
    Ok(())
}
