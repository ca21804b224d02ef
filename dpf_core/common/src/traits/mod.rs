use chrono::{DateTime, Utc};
use serde::ser::Error;
use serde::Serialize;
use serde_json::Value;

use crate::types::TaskId;

/// Anything shown in a task row as a name followed by its settings.
pub trait Displayable {
    fn name(&self) -> String;

    /// Settings as `(name, value)` pairs, in declaration order.
    fn settings_for_display(&self) -> Result<Vec<(String, String)>, serde_json::Error>;
}

/// A recurrence plus the next time the scheduler intends to run it.
pub trait Scheduled {
    fn formatted(&self) -> String;
    fn next_run(&self) -> Option<DateTime<Utc>>;
}

/// Read-only view of a configured ETL task.
pub trait TaskRecord {
    fn id(&self) -> TaskId;
    fn is_enabled(&self) -> bool;
    fn source(&self) -> &dyn Displayable;
    fn target(&self) -> &dyn Displayable;
    fn processor(&self) -> &dyn Displayable;
    fn schedule(&self) -> &dyn Scheduled;
}

pub trait ToSerdeMap {
    fn to_json_map(&self) -> Result<serde_json::Map<String, Value>, serde_json::Error>
    where
        Self: Serialize,
    {
        match serde_json::to_value(self)? {
            Value::Object(obj) => Ok(obj),
            _ => Err(serde_json::Error::custom("expecting a settings struct")),
        }
    }

    /// Flattens the serialized settings into display strings. Nulls are
    /// dropped and lists are comma separated.
    fn display_settings(&self) -> Result<Vec<(String, String)>, serde_json::Error>
    where
        Self: Serialize,
    {
        Ok(self
            .to_json_map()?
            .into_iter()
            .filter_map(|(key, value)| display_value(&value).map(|v| (key, v)))
            .collect())
    }
}

fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(display_value)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        other => Some(other.to_string()),
    }
}
