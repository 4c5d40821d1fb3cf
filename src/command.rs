//! By-name dispatch for hosts that forward method names as strings.

use crate::completion::Pass;
use crate::controller::{Brickwork, Lifecycle};
use crate::error::{BrickworkError, Result};
use std::str::FromStr;

/// Operations callable without arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Arrange,
    Relayout,
    Shuffle,
    ReloadItems,
    Resize,
    Destroy,
}

impl FromStr for Command {
    type Err = BrickworkError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.starts_with('_') {
            return Err(BrickworkError::ReservedOperation(s.to_string()));
        }
        match s {
            "arrange" => Ok(Command::Arrange),
            "reLayout" | "relayout" => Ok(Command::Relayout),
            "shuffle" => Ok(Command::Shuffle),
            "reloadItems" => Ok(Command::ReloadItems),
            "resize" => Ok(Command::Resize),
            "destroy" => Ok(Command::Destroy),
            _ => Err(BrickworkError::NoSuchOperation(s.to_string())),
        }
    }
}

impl Brickwork {
    /// Runs the operation named `name`. Returns the pass it started, if any.
    pub fn call(&mut self, name: &str) -> Result<Option<Pass>> {
        if self.lifecycle() == Lifecycle::Uninitialized {
            return Err(BrickworkError::NotInitialized {
                operation: name.to_string(),
            }
            .report());
        }
        let command = name.parse::<Command>().map_err(BrickworkError::report)?;
        log::debug!("dispatching {:?}", command);
        match command {
            Command::Arrange => self.arrange(None).map(Some),
            Command::Relayout => self.relayout(None).map(Some),
            Command::Shuffle => self.shuffle(None).map(Some),
            Command::ReloadItems => self.reload_items().map(|_| None),
            Command::Resize => self.resize(),
            Command::Destroy => self.destroy().map(|_| None),
        }
    }
}
