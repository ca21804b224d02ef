use crate::config::components::locale::LocaleConfig;
use crate::config::components::site::SiteConfig;
use crate::config::components::table::TableConfig;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_TASKS_FILE: &str = "tasks.yml";

// ---------------- project file ----------------
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TaskAdminFileConfig {
    pub tasks: PathBuf,
    pub table: TableConfig,
    pub site: SiteConfig,
    pub locale: LocaleConfig,
}

impl Default for TaskAdminFileConfig {
    fn default() -> Self {
        Self {
            tasks: PathBuf::from(DEFAULT_TASKS_FILE),
            table: TableConfig::default(),
            site: SiteConfig::default(),
            locale: LocaleConfig::default(),
        }
    }
}

// ---------------- global config ----------------
/// Project configuration with every path resolved against the directory
/// holding `foundry-tasks.yml`.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskAdminConfig {
    pub root: PathBuf,
    pub tasks_path: PathBuf,
    pub table: TableConfig,
    pub site: SiteConfig,
    pub locale: LocaleConfig,
}

impl TaskAdminConfig {
    pub fn new(root: PathBuf, file: TaskAdminFileConfig) -> Self {
        let tasks_path = resolve_path(&root, &file.tasks);
        let mut locale = file.locale;
        locale.strings = locale.strings.map(|p| resolve_path(&root, &p));

        Self {
            root,
            tasks_path,
            table: file.table,
            site: file.site,
            locale,
        }
    }
}

pub(crate) fn resolve_path(root: &std::path::Path, path: &std::path::Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
