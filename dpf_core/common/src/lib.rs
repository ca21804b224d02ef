pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use traits::{Displayable, Scheduled, TaskRecord};
pub use types::{EtlTask, TaskId};
