use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LocaleConfig {
    /// YAML file of `domain -> key -> string` overrides.
    pub strings: Option<PathBuf>,
    pub utc_offset_minutes: i32,
}

/// Contents of a strings override file.
pub type StringOverrides = HashMap<String, HashMap<String, String>>;
