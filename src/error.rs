//! Error Types

use thiserror::Error;

use crate::menu_items::MenuItemId;

/// Why a position could not be resolved. Callers treat every variant as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("drop target {0:?} is not in the menu")]
    TargetNotFound(MenuItemId),
    #[error("drop has no edge")]
    MissingEdge,
    #[error("item {0:?} cannot be moved")]
    NotMovable(MenuItemId),
    #[error("menu has no in-progress page")]
    NoCurrentItem,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// REST command failures
#[derive(Debug, Clone, Error)]
pub enum CommandError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl From<gloo_net::Error> for CommandError {
    fn from(err: gloo_net::Error) -> Self {
        CommandError::Network(err.to_string())
    }
}
