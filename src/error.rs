//! Error types.

use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// A fuel or annealing parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The optimizer was handed no waypoints.
    #[error("empty route: at least one waypoint is required")]
    EmptyRoute,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
