use thiserror::Error;

use crate::widget::ControlId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Control not found: {0:?}")]
    ControlNotFound(ControlId),

    #[error("Control is disposed: {0:?}")]
    Disposed(ControlId),

    #[error("{0}")]
    Other(String),
}

/// Failure of a single layout command. The interpreter logs these and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("'{command}': missing parameter {index}")]
    MissingParam { command: String, index: usize },

    #[error("'{command}': parameter {index} is not a number: {value:?}")]
    BadNumber {
        command: String,
        index: usize,
        value: String,
    },

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("'{0}' has no preceding control to annotate")]
    NoAnnotationTarget(String),
}

pub type Result<T> = std::result::Result<T, Error>;
