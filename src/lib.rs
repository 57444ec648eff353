//! materialize-workbooks: manage materialized views settings for a site, its
//! projects, and its workbooks.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use tracing::info;
use url::Url;

use adapters::SnapshotSiteClient;
use app::AppContext;
use app::commands::{materialize, status};
use app::config::{ConfigOverrides, resolve_config};
use ports::SiteClient;

pub use app::commands::materialize::UpdateReport;
pub use app::commands::status::StatusReport;
pub use domain::{
    AppError, ContentType, MaterializeArgs, MaterializedViewsConfig, Mode, Project,
    WorkbookPathMapping, assert_options_valid, assert_project_valid, assert_site_options_valid,
    create_materialized_views_config, find_project_path, find_projects_to_update,
    parse_workbook_names, parse_workbook_path,
};

/// Options for one invocation of the tool.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Optional TOML run configuration.
    pub config: Option<PathBuf>,
    /// Site snapshot; overrides `[snapshot].path`.
    pub snapshot: Option<PathBuf>,
    /// Expected site content url; overrides `[server].site`.
    pub site: Option<String>,
    /// Server address; overrides `[server].url`.
    pub server: Option<Url>,
    /// Update to apply, if any.
    pub args: MaterializeArgs,
    /// Print the status report after any update.
    pub status: bool,
    /// Compute updates without writing the snapshot.
    pub dry_run: bool,
}

/// What a run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    pub update: Option<UpdateReport>,
    pub status: Option<StatusReport>,
}

/// Apply the requested update and/or print the status report.
pub fn run(options: RunOptions) -> Result<RunResult, AppError> {
    let wants_update = options.args.content_type.is_some() || options.args.mode.is_some();
    if !wants_update && !options.status {
        return Err(AppError::InvalidOptions(
            "Use '--type <content type> --mode <mode>' to update materialized views settings, or '--status' to show them."
                .into(),
        ));
    }

    let resolved = resolve_config(
        options.config.as_deref(),
        ConfigOverrides { snapshot: options.snapshot, site: options.site, server: options.server },
    )?;

    let client = SnapshotSiteClient::load(&resolved.snapshot_path)?;
    let site = client.site()?;
    if let Some(expected) = &resolved.site
        && expected != &site.content_url
    {
        return Err(AppError::SiteMismatch {
            expected: expected.clone(),
            actual: site.content_url,
        });
    }

    let mut ctx = AppContext::new(client, resolved.server_url);
    if let Some(server) = ctx.server_url() {
        println!("Server: {} (site: {})", server, site.name);
    }

    let mut result = RunResult::default();

    if wants_update {
        let report = materialize::execute(&mut ctx, &options.args)?;
        print!("{}", report);
        if options.dry_run {
            println!("Dry run: snapshot not written");
        } else if !report.is_empty() {
            ctx.client().save()?;
            info!(file = %resolved.snapshot_path.display(), "applied materialized views settings");
        }
        println!();
        result.update = Some(report);
    }

    if options.status {
        let report = status::execute(&ctx)?;
        print!("{}", report);
        result.status = Some(report);
    }

    Ok(result)
}
