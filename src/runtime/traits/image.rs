// ABOUTME: Image operations trait for container runtimes.
// ABOUTME: List images and inspect a single image by ID or reference.

use super::sealed::Sealed;
use super::shared_types::{ImageDetails, ImageSummary};
use async_trait::async_trait;

/// Read-only image queries.
#[async_trait]
pub trait ImageOps: Sealed + Send + Sync {
    /// List images; `all` includes intermediate layers.
    async fn list_images(&self, all: bool) -> Result<Vec<ImageSummary>, ImageError>;

    /// Get detailed information about an image.
    async fn inspect_image(&self, reference: &str) -> Result<ImageDetails, ImageError>;
}

/// Errors from image operations.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image not found: {0}")]
    NotFound(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
