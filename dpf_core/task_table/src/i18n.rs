//! String lookup and date formatting for the task table.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use common::config::loader::load_string_overrides;
use common::config::{ConfigError, LocaleConfig, StringOverrides};
use std::collections::HashMap;
use std::fmt::Write;

use crate::error::RenderError;

/// Domain of the task admin strings. Lookups without a domain use
/// [`CORE_DOMAIN`].
pub const TASKS_DOMAIN: &str = "tasks";
pub const CORE_DOMAIN: &str = "core";

/// Core key whose value is the strftime pattern used for date-times.
pub const DATETIME_FORMAT_KEY: &str = "strftimedatetime";

const CORE_STRINGS: &[(&str, &str)] = &[
    ("actions", "Actions"),
    ("delete", "Delete"),
    ("disable", "Disable"),
    ("edit", "Edit"),
    ("enable", "Enable"),
    ("no", "No"),
    ("yes", "Yes"),
    (DATETIME_FORMAT_KEY, "%A, %-d %B %Y, %-I:%M %p"),
];

const TASKS_STRINGS: &[(&str, &str)] = &[
    ("enabled", "Enabled"),
    ("processor", "Processor"),
    ("schedule", "Schedule"),
    ("source", "Source"),
    ("target", "Target"),
    ("viewhistory", "View history"),
];

pub trait Localizer {
    fn get_string(&self, key: &str, domain: Option<&str>) -> Result<String, RenderError>;

    /// Formats an instant with the viewer's conventions.
    fn format_datetime(&self, at: DateTime<Utc>) -> Result<String, RenderError>;
}

/// In-memory string tables keyed by domain, then by string key.
#[derive(Debug, Clone)]
pub struct StringCatalog {
    strings: HashMap<String, HashMap<String, String>>,
    offset: FixedOffset,
}

impl StringCatalog {
    /// Catalog with no strings at all, rendering dates in UTC.
    pub fn empty() -> Self {
        Self {
            strings: HashMap::new(),
            offset: Utc.fix(),
        }
    }

    pub fn english() -> Self {
        let mut catalog = Self::empty();
        for (key, value) in CORE_STRINGS {
            catalog.set(CORE_DOMAIN, key, value);
        }
        for (key, value) in TASKS_STRINGS {
            catalog.set(TASKS_DOMAIN, key, value);
        }
        catalog
    }

    /// English strings, then any override file, then the configured offset.
    pub fn from_config(locale: &LocaleConfig) -> Result<Self, ConfigError> {
        let mut catalog = Self::english();
        if let Some(path) = &locale.strings {
            catalog.merge(load_string_overrides(path)?);
        }
        catalog.with_utc_offset_minutes(locale.utc_offset_minutes)
    }

    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Result<Self, ConfigError> {
        self.offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                ConfigError::invalid_value(format!("utc offset of {} minutes is out of range", minutes))
            })?;
        Ok(self)
    }

    pub fn set(&mut self, domain: &str, key: &str, value: &str) {
        self.strings
            .entry(domain.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    pub fn merge(&mut self, overrides: StringOverrides) {
        for (domain, strings) in overrides {
            let table = self.strings.entry(domain).or_default();
            table.extend(strings);
        }
    }
}

impl Default for StringCatalog {
    fn default() -> Self {
        Self::english()
    }
}

impl Localizer for StringCatalog {
    fn get_string(&self, key: &str, domain: Option<&str>) -> Result<String, RenderError> {
        self.strings
            .get(domain.unwrap_or(CORE_DOMAIN))
            .and_then(|table| table.get(key))
            .cloned()
            .ok_or_else(|| RenderError::missing_string(key, domain))
    }

    fn format_datetime(&self, at: DateTime<Utc>) -> Result<String, RenderError> {
        let format = self.get_string(DATETIME_FORMAT_KEY, None)?;
        let local = at.with_timezone(&self.offset);

        let mut out = String::new();
        write!(out, "{}", local.format(&format))
            .map_err(|_| RenderError::invalid_date_format(&format))?;
        Ok(out)
    }
}
