use clap::Args;
use common::config::loader::{load_configured_tasks, read_config};
use common::error::FFError;
use common::TaskRecord;
use std::path::PathBuf;
use task_table::StringCatalog;
use tracing::info;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Task file to check instead of the one named in foundry-tasks.yml
    #[arg(long, value_name = "FILE")]
    pub tasks: Option<PathBuf>,
}

/// Counts of a successfully validated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    pub tasks: usize,
    pub enabled: usize,
}

pub fn handle_check(args: &CheckArgs, config_path: Option<PathBuf>) -> Result<(), FFError> {
    let summary = check_project(args, config_path)?;
    info!(
        "{} tasks ok ({} enabled, {} disabled)",
        summary.tasks,
        summary.enabled,
        summary.tasks - summary.enabled
    );
    Ok(())
}

fn check_project(args: &CheckArgs, config_path: Option<PathBuf>) -> Result<CheckSummary, FFError> {
    let cfg = read_config(config_path).map_err(FFError::load)?;
    StringCatalog::from_config(&cfg.locale).map_err(FFError::load)?;
    let tasks = load_configured_tasks(&cfg, args.tasks.as_deref()).map_err(FFError::load)?;

    Ok(CheckSummary {
        tasks: tasks.len(),
        enabled: tasks.iter().filter(|t| t.is_enabled()).count(),
    })
}
