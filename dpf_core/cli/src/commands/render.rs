use clap::Args;
use common::config::loader::{load_configured_tasks, read_config};
use common::config::TaskAdminConfig;
use common::error::FFError;
use common::TaskRecord;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use task_table::{
    Clock, Collaborators, SiteUrlBuilder, StringCatalog, SystemClock, TableId, TableIdContext,
    TaskTable, ThemeIconResolver,
};
use tracing::info;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Task file to render instead of the one named in foundry-tasks.yml
    #[arg(long, value_name = "FILE")]
    pub tasks: Option<PathBuf>,

    /// Write the fragment here instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Suffix of the table element id, overriding `table.id`
    #[arg(long, value_name = "SUFFIX")]
    pub table_id: Option<String>,
}

pub fn handle_render(args: &RenderArgs, config_path: Option<PathBuf>) -> Result<(), FFError> {
    let cfg = read_config(config_path).map_err(FFError::load)?;
    let tasks = load_configured_tasks(&cfg, args.tasks.as_deref()).map_err(FFError::load)?;

    let html = render_tasks(&cfg, &tasks, args.table_id.as_deref(), &SystemClock)?;

    match &args.out {
        Some(path) => {
            fs::write(path, &html).map_err(FFError::write)?;
            info!("wrote {} tasks to {}", tasks.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", html).map_err(FFError::write)?;
        }
    }
    Ok(())
}

/// Wires the configured collaborators into a task table and renders `tasks`.
pub(crate) fn render_tasks<T: TaskRecord>(
    cfg: &TaskAdminConfig,
    tasks: &[T],
    table_id: Option<&str>,
    clock: &dyn Clock,
) -> Result<String, FFError> {
    let strings = StringCatalog::from_config(&cfg.locale).map_err(FFError::load)?;
    let icons = ThemeIconResolver::from_site(&cfg.site);
    let urls = SiteUrlBuilder::new(&cfg.site);

    let id = match table_id.or(cfg.table.id.as_deref()) {
        Some(suffix) => TableId::explicit(suffix),
        None => TableIdContext::new().next_id(),
    };

    let table = TaskTable::new(
        id,
        cfg.table.class.clone(),
        Collaborators {
            strings: &strings,
            icons: &icons,
            urls: &urls,
            clock,
        },
    )
    .map_err(FFError::render)?;

    table.render(tasks).map_err(FFError::render)
}
