// src/error.rs
use brickwork_layout::LayoutError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrickworkError>;

/// Every failure the engine reports.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrickworkError {
    #[error("Configuration error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Configuration error: no such animation engine '{0}'")]
    UnknownAnimationEngine(String),

    #[error("Configuration error: no sort data registered for '{0}'")]
    UnknownSortKey(String),

    #[error("Configuration error: invalid options: {0}")]
    InvalidOptions(String),

    #[error("cannot call methods on brickwork prior to initialization; attempted to call '{operation}'")]
    NotInitialized { operation: String },

    #[error("'{0}' is reserved for internal use")]
    ReservedOperation(String),

    #[error("no such method '{0}' for brickwork instance")]
    NoSuchOperation(String),

    #[error("selector '{selector}' matched no elements")]
    EmptySelection { selector: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Precondition,
    ElementQuery,
}

impl BrickworkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BrickworkError::Layout(_)
            | BrickworkError::UnknownAnimationEngine(_)
            | BrickworkError::UnknownSortKey(_)
            | BrickworkError::InvalidOptions(_) => ErrorKind::Configuration,
            BrickworkError::NotInitialized { .. }
            | BrickworkError::ReservedOperation(_)
            | BrickworkError::NoSuchOperation(_) => ErrorKind::Precondition,
            BrickworkError::EmptySelection { .. } => ErrorKind::ElementQuery,
        }
    }

    /// Sends the error to the diagnostics channel and hands it back.
    pub(crate) fn report(self) -> Self {
        match self.kind() {
            ErrorKind::ElementQuery => log::warn!("{}", self),
            _ => log::error!("{}", self),
        }
        self
    }
}

impl From<serde_json::Error> for BrickworkError {
    fn from(e: serde_json::Error) -> Self {
        BrickworkError::InvalidOptions(e.to_string())
    }
}
