use common::config::{EndpointPaths, ParamNaming, SiteConfig};
use common::TaskId;
use urlencoding::encode;

use crate::error::RenderError;

/// Pages that act on a single task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskEndpoint {
    History,
    Status,
    Edit,
    Delete,
}

pub trait UrlBuilder {
    fn task_url(&self, endpoint: TaskEndpoint, task: TaskId) -> Result<String, RenderError>;
}

/// Builds absolute URLs from the site root and the configured endpoint paths.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteUrlBuilder {
    wwwroot: String,
    endpoints: EndpointPaths,
    naming: ParamNaming,
}

impl SiteUrlBuilder {
    pub fn new(site: &SiteConfig) -> Self {
        Self {
            wwwroot: site.wwwroot.trim_end_matches('/').to_string(),
            endpoints: site.endpoints.clone(),
            naming: site.param_naming,
        }
    }

    pub fn param_name(&self, endpoint: TaskEndpoint) -> &'static str {
        match (self.naming, endpoint) {
            (ParamNaming::Legacy, TaskEndpoint::History) => "taskid",
            _ => "id",
        }
    }

    fn path(&self, endpoint: TaskEndpoint) -> &str {
        match endpoint {
            TaskEndpoint::History => &self.endpoints.history,
            TaskEndpoint::Status => &self.endpoints.status,
            TaskEndpoint::Edit => &self.endpoints.edit,
            TaskEndpoint::Delete => &self.endpoints.delete,
        }
    }
}

impl UrlBuilder for SiteUrlBuilder {
    fn task_url(&self, endpoint: TaskEndpoint, task: TaskId) -> Result<String, RenderError> {
        if !(self.wwwroot.starts_with("http://") || self.wwwroot.starts_with("https://")) {
            return Err(RenderError::invalid_url(format!(
                "site root '{}' is not an http(s) url",
                self.wwwroot
            )));
        }
        let path = self.path(endpoint);
        if !path.starts_with('/') || path.contains('?') {
            return Err(RenderError::invalid_url(format!(
                "endpoint path '{}' must be absolute and carry no query",
                path
            )));
        }

        Ok(format!(
            "{}{}?{}={}",
            self.wwwroot,
            path,
            encode(self.param_name(endpoint)),
            encode(&task.to_string())
        ))
    }
}
