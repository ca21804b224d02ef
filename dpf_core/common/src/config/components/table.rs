use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    /// Suffix for the table element id. Sequential ids are used when unset.
    pub id: Option<String>,
    pub class: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            id: None,
            class: "generaltable admintable".to_string(),
        }
    }
}
