use std::path::PathBuf;

use clap::{ArgAction, Parser};
use materialize_workbooks::{AppError, ContentType, MaterializeArgs, Mode, RunOptions};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser)]
#[command(name = "materialize-workbooks")]
#[command(version)]
#[command(
    about = "Manage materialized views settings for a site, its projects, and its workbooks",
    long_about = None
)]
struct Cli {
    /// Site snapshot file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long, value_name = "FILE")]
    snapshot: Option<PathBuf>,
    /// TOML run configuration
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Content url of the site the snapshot must belong to
    #[arg(long = "site", visible_alias = "site-id", value_name = "CONTENT_URL")]
    site: Option<String>,
    /// Server address shown in reports
    #[arg(short, long, value_name = "URL")]
    server: Option<Url>,
    /// Type of content to update materialized views settings on
    #[arg(short = 't', long = "type", value_enum)]
    content_type: Option<ContentType>,
    /// Enable or disable materialized views
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,
    /// Create materialized views for the updated workbooks immediately
    #[arg(long)]
    materialize_now: bool,
    /// Name of the project (type project_name)
    #[arg(long, value_name = "NAME")]
    project_name: Option<String>,
    /// Path of the project, for example Project1/Project2 (type project_path)
    #[arg(long, value_name = "PATH")]
    project_path: Option<String>,
    /// File of '<workbook name>,<project path>' lines (type workbook)
    #[arg(long, value_name = "FILE")]
    path_list: Option<PathBuf>,
    /// File of workbook names, one per line (type workbook)
    #[arg(long, value_name = "FILE")]
    name_list: Option<PathBuf>,
    /// Show the site and workbooks with materialized views enabled
    #[arg(long)]
    status: bool,
    /// Report the updates without writing the snapshot
    #[arg(long)]
    dry_run: bool,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = RunOptions {
        config: cli.config,
        snapshot: cli.snapshot,
        site: cli.site,
        server: cli.server,
        args: MaterializeArgs {
            mode: cli.mode,
            materialize_now: cli.materialize_now,
            content_type: cli.content_type,
            project_name: cli.project_name,
            project_path: cli.project_path,
            path_list: cli.path_list,
            name_list: cli.name_list,
        },
        status: cli.status,
        dry_run: cli.dry_run,
    };

    let result: Result<_, AppError> = materialize_workbooks::run(options);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
