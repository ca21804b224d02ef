pub mod diagnostics;
pub use crate::config::error::ConfigError;
pub use diagnostics::DiagnosticMessage;

use std::{error::Error as StdError, fmt::Debug};
use thiserror::Error;

/// Top level error surfaced by the `foundry-tasks` commands.
#[derive(Debug, Error)]
pub enum FFError {
    #[error("load failed: {context}")]
    Load {
        context: DiagnosticMessage,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
    #[error("render failed: {context}")]
    Render {
        context: DiagnosticMessage,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
    #[error("write failed: {context}")]
    Write {
        context: DiagnosticMessage,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl FFError {
    #[track_caller]
    pub fn load<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        FFError::Load {
            context: DiagnosticMessage::new(err.to_string()),
            source: Some(Box::new(err)),
        }
    }

    #[track_caller]
    pub fn render<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        FFError::Render {
            context: DiagnosticMessage::new(err.to_string()),
            source: Some(Box::new(err)),
        }
    }

    #[track_caller]
    pub fn write<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        FFError::Write {
            context: DiagnosticMessage::new(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}
