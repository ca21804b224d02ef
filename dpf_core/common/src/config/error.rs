use crate::error::diagnostics::DiagnosticMessage;
use std::{error::Error as StdError, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse error: {context}")]
    ParseError {
        context: DiagnosticMessage,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
    #[error("filesystem error: {context}")]
    PathError {
        context: DiagnosticMessage,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
    #[error("not found: {context}")]
    NotFound { context: DiagnosticMessage },
    #[error("invalid value: {context}")]
    InvalidValue { context: DiagnosticMessage },
}

impl ConfigError {
    #[track_caller]
    pub fn missing_file(path: impl AsRef<Path>) -> Self {
        let message = format!(
            "Expected file '{}' to exist. Ensure the path is correct and readable.",
            path.as_ref().display()
        );
        Self::NotFound {
            context: DiagnosticMessage::new(message),
        }
    }

    #[track_caller]
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::ParseError {
            context: DiagnosticMessage::new(message.into()),
            source: None,
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    #[track_caller]
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::InvalidValue {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    /// Tags the diagnostic with what was being loaded when it failed.
    pub fn about(self, subject: impl std::fmt::Display) -> Self {
        match self {
            Self::ParseError { context, source } => Self::ParseError {
                context: context.about(subject),
                source,
            },
            Self::PathError { context, source } => Self::PathError {
                context: context.about(subject),
                source,
            },
            Self::NotFound { context } => Self::NotFound {
                context: context.about(subject),
            },
            Self::InvalidValue { context } => Self::InvalidValue {
                context: context.about(subject),
            },
        }
    }
}

impl From<std::io::Error> for ConfigError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        let message = err.to_string();
        ConfigError::PathError {
            context: DiagnosticMessage::new(message),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    #[track_caller]
    fn from(err: serde_yaml::Error) -> Self {
        let message = err.to_string();
        ConfigError::ParseError {
            context: DiagnosticMessage::new(message),
            source: Some(Box::new(err)),
        }
    }
}
