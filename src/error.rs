// ABOUTME: Application-wide error types for dx.
// ABOUTME: Uses thiserror and maps every failure to a process exit status.

use crate::runtime::{ContainerError, ImageError, RuntimeError, VolumeError};
use thiserror::Error;

/// Exit status for runtime, connection and I/O failures.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for usage errors, including ambiguous lookups.
pub const EXIT_USAGE: i32 = 2;
/// Exit status when `examine` matches nothing.
pub const EXIT_NOT_FOUND: i32 = 3;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("container query failed: {0}")]
    Container(#[from] ContainerError),

    #[error("image query failed: {0}")]
    Image(#[from] ImageError),

    #[error("volume query failed: {0}")]
    Volume(#[from] VolumeError),

    #[error("found multiple volumes with prefix: {0}")]
    Ambiguous(String),

    #[error("found nothing matching: {0}")]
    NothingFound(String),

    #[error("pager {program}: {source}")]
    Pager {
        program: String,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Ambiguous(_) => EXIT_USAGE,
            Error::NothingFound(_) => EXIT_NOT_FOUND,
            _ => EXIT_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
