// ABOUTME: Volume operations trait for container runtimes.
// ABOUTME: Lists named volumes.

use super::sealed::Sealed;
use super::shared_types::VolumeSummary;
use async_trait::async_trait;

/// Read-only volume queries.
#[async_trait]
pub trait VolumeOps: Sealed + Send + Sync {
    /// List all volumes.
    async fn list_volumes(&self) -> Result<Vec<VolumeSummary>, VolumeError>;
}

/// Errors from volume operations.
#[derive(Debug, thiserror::Error)]
pub enum VolumeError {
    #[error("runtime error: {0}")]
    Runtime(String),
}
