//! Error types for fusedex
//!
//! Every fallible operation in the crate returns [`Result`]. The fusion engine
//! itself only ever produces [`Error::InvalidInput`]; the remaining variants
//! come from the data provider, the favorites store and configuration.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// fusedex error types
#[derive(Error, Debug)]
pub enum Error {
    /// A record or argument is malformed (missing name, no stats, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Creature data provider failure (transport, parse, unknown id)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Creature data provider answered with a non-success status
    #[error("Provider returned HTTP {status} for creature {id}")]
    ProviderStatus {
        /// Requested creature id
        id: u32,
        /// HTTP status code
        status: u16,
    },

    /// Favorites store failure
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration rejected during load or validation
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for [`Error::InvalidInput`].
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// True for errors raised by the creature data provider.
    #[must_use]
    pub const fn is_provider(&self) -> bool {
        matches!(self, Self::Provider(_) | Self::ProviderStatus { .. })
    }
}
