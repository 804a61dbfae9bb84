// ABOUTME: Container operations trait for container runtimes.
// ABOUTME: List containers and inspect a single container by ID or name.

use super::sealed::Sealed;
use super::shared_types::{ContainerDetails, ContainerSummary};
use async_trait::async_trait;

/// Read-only container queries.
#[async_trait]
pub trait ContainerOps: Sealed + Send + Sync {
    /// List containers; `all` includes ones that are not running.
    async fn list_containers(&self, all: bool) -> Result<Vec<ContainerSummary>, ContainerError>;

    /// Get detailed information about a container by ID, ID prefix or name.
    async fn inspect_container(&self, reference: &str)
    -> Result<ContainerDetails, ContainerError>;
}

/// Errors from container operations.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("container not found: {0}")]
    NotFound(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
