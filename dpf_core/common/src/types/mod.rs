pub mod items;
pub mod schedule;
pub mod task;

pub use items::{ProcessorConfig, SourceConfig, TargetConfig};
pub use schedule::{Recurrence, Schedule, Weekday};
pub use task::{EtlTask, TaskFile, TaskId};
