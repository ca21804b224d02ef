use serde::Deserialize;

use crate::traits::{Displayable, Scheduled, TaskRecord};
use crate::types::items::{ProcessorConfig, SourceConfig, TargetConfig};
use crate::types::schedule::Schedule;

pub type TaskId = u64;

/// One configured ETL job as stored in a task file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EtlTask {
    pub id: TaskId,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub source: SourceConfig,
    pub target: TargetConfig,
    pub processor: ProcessorConfig,
    pub schedule: Schedule,
}

fn default_enabled() -> bool {
    true
}

impl TaskRecord for EtlTask {
    fn id(&self) -> TaskId {
        self.id
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn source(&self) -> &dyn Displayable {
        &self.source
    }

    fn target(&self) -> &dyn Displayable {
        &self.target
    }

    fn processor(&self) -> &dyn Displayable {
        &self.processor
    }

    fn schedule(&self) -> &dyn Scheduled {
        &self.schedule
    }
}

/// Shape of a task file on disk.
#[derive(Debug, Deserialize)]
pub struct TaskFile {
    #[serde(default)]
    pub tasks: Vec<EtlTask>,
}
