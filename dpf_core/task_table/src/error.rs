use common::error::DiagnosticMessage;
use common::{diag, TaskId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("missing string: {context}")]
    MissingString { context: DiagnosticMessage },
    #[error("malformed task: {context}")]
    MalformedTask { context: DiagnosticMessage },
    #[error("invalid settings: {context}")]
    InvalidSettings {
        context: DiagnosticMessage,
        #[source]
        source: serde_json::Error,
    },
    #[error("unresolvable icon: {context}")]
    UnresolvableIcon { context: DiagnosticMessage },
    #[error("invalid url: {context}")]
    InvalidUrl { context: DiagnosticMessage },
    #[error("invalid date format: {context}")]
    InvalidDateFormat { context: DiagnosticMessage },
    #[error("column mismatch: {context}")]
    ColumnMismatch { context: DiagnosticMessage },
    #[error("template error: {context}")]
    Template {
        context: DiagnosticMessage,
        #[source]
        source: minijinja::Error,
    },
}

impl RenderError {
    #[track_caller]
    pub fn missing_string(key: &str, domain: Option<&str>) -> Self {
        Self::MissingString {
            context: diag!(
                "no string '{}' in domain '{}'",
                key,
                domain.unwrap_or("core")
            ),
        }
    }

    #[track_caller]
    pub fn malformed_task(id: TaskId, field: &str) -> Self {
        Self::MalformedTask {
            context: diag!("required field '{}' is empty", field).about(format!("task {}", id)),
        }
    }

    #[track_caller]
    pub fn invalid_settings(id: TaskId, field: &str, source: serde_json::Error) -> Self {
        Self::InvalidSettings {
            context: diag!("settings of '{}' cannot be displayed: {}", field, source)
                .about(format!("task {}", id)),
            source,
        }
    }

    #[track_caller]
    pub fn unresolvable_icon(icon: &str) -> Self {
        Self::UnresolvableIcon {
            context: diag!("icon name '{}' is not valid", icon),
        }
    }

    #[track_caller]
    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    #[track_caller]
    pub fn invalid_date_format(format: &str) -> Self {
        Self::InvalidDateFormat {
            context: diag!("'{}' is not a usable strftime format", format),
        }
    }

    #[track_caller]
    pub fn column_mismatch(expected: usize, got: usize) -> Self {
        Self::ColumnMismatch {
            context: diag!(
                "row has {} cells but the table defines {} columns",
                got,
                expected
            ),
        }
    }
}

impl From<minijinja::Error> for RenderError {
    #[track_caller]
    fn from(err: minijinja::Error) -> Self {
        RenderError::Template {
            context: DiagnosticMessage::new(err.to_string()),
            source: err,
        }
    }
}
