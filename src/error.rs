//! Error taxonomy for invoke calls
//!
//! Transport and JSON errors pass through untouched. Host-reported failures are
//! normalized to a single variant whose message is the reason string alone.

use thiserror::Error;

/// Errors surfaced by an invoke call.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The HTTP request could not be completed (refused, unreachable, bad URL).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The dev server answered with a non-2xx status.
    #[error("{reason}")]
    Host { status: u16, reason: String },

    /// A 2xx response whose body is not JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The result did not decode into the type the caller asked for.
    #[error("failed to decode result of `{command}`: {source}")]
    Decode {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invoke arguments must be a JSON object: {0}")]
    InvalidArgs(String),

    #[error("no invoke bridge installed")]
    NotInstalled,

    /// Reason reported by a native bridge implementation.
    #[error("{0}")]
    Native(String),
}

impl InvokeError {
    /// The human-readable failure reason, for host and native errors.
    pub fn reason(&self) -> Option<&str> {
        match self {
            InvokeError::Host { reason, .. } => Some(reason),
            InvokeError::Native(reason) => Some(reason),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, InvokeError>;
