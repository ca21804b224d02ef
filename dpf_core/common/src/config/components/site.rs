use serde::Deserialize;

/// Which query parameter each action endpoint expects.
///
/// `Legacy` keeps the `taskid` parameter on the history endpoint for sites
/// still serving the older pages.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParamNaming {
    #[default]
    Unified,
    Legacy,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct EndpointPaths {
    pub history: String,
    pub status: String,
    pub edit: String,
    pub delete: String,
}

impl Default for EndpointPaths {
    fn default() -> Self {
        Self {
            history: "/admin/tool/etl/history.php".to_string(),
            status: "/admin/tool/etl/status.php".to_string(),
            edit: "/admin/tool/etl/index.php".to_string(),
            delete: "/admin/tool/etl/delete.php".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub wwwroot: String,
    pub theme: String,
    pub theme_revision: u64,
    pub param_naming: ParamNaming,
    pub endpoints: EndpointPaths,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            wwwroot: "http://localhost".to_string(),
            theme: "boost".to_string(),
            theme_revision: 1,
            param_naming: ParamNaming::default(),
            endpoints: EndpointPaths::default(),
        }
    }
}
