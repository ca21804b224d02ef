use crate::config::components::global::{resolve_path, TaskAdminConfig, TaskAdminFileConfig};
use crate::config::components::locale::StringOverrides;
use crate::config::error::ConfigError;
use crate::types::task::{EtlTask, TaskFile};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const PROJECT_FILE_NAME: &str = "foundry-tasks.yml";

pub fn load_yaml<V>(path: &Path) -> Result<V, ConfigError>
where
    V: DeserializeOwned,
{
    if !path.exists() {
        return Err(ConfigError::missing_file(path));
    }
    log::debug!("loading {}", path.display());
    let file = fs::File::open(path).map_err(|e| ConfigError::from(e).about(path.display()))?;
    serde_yaml::from_reader(file).map_err(|e| ConfigError::from(e).about(path.display()))
}

/// Reads `foundry-tasks.yml` from `project_config_path`, or from the
/// current directory when no path is given.
pub fn read_config(project_config_path: Option<PathBuf>) -> Result<TaskAdminConfig, ConfigError> {
    let root = match project_config_path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let file: TaskAdminFileConfig = load_yaml(&root.join(PROJECT_FILE_NAME))?;

    Ok(TaskAdminConfig::new(root, file))
}

/// Loads and validates a task file. Ids must be unique and every
/// recurrence must be in range.
pub fn load_tasks(path: &Path) -> Result<Vec<EtlTask>, ConfigError> {
    let file: TaskFile = load_yaml(path)?;

    let mut seen = HashSet::new();
    for task in &file.tasks {
        if !seen.insert(task.id) {
            return Err(ConfigError::invalid_value(format!(
                "task id {} is declared more than once",
                task.id
            ))
            .about(path.display()));
        }
        task.schedule
            .recurrence
            .validate()
            .map_err(|e| e.about(format!("task {}", task.id)))?;
    }
    log::info!("loaded {} tasks from {}", file.tasks.len(), path.display());

    Ok(file.tasks)
}

/// Loads the tasks file named by the config, or `explicit` if given.
/// Relative explicit paths resolve against the config root.
pub fn load_configured_tasks(
    config: &TaskAdminConfig,
    explicit: Option<&Path>,
) -> Result<Vec<EtlTask>, ConfigError> {
    match explicit {
        Some(path) => load_tasks(&resolve_path(&config.root, path)),
        None => load_tasks(&config.tasks_path),
    }
}

pub fn load_string_overrides(path: &Path) -> Result<StringOverrides, ConfigError> {
    load_yaml(path)
}
