// ABOUTME: In-memory runtime used by unit tests.
// ABOUTME: Serves canned containers, images and volumes through the sealed traits.

use super::traits::sealed::Sealed;
use super::traits::{
    ContainerDetails, ContainerError, ContainerOps, ContainerSummary, ImageDetails, ImageError,
    ImageOps, ImageSummary, VolumeError, VolumeOps, VolumeSummary,
};
use async_trait::async_trait;

#[derive(Default)]
pub(crate) struct FakeRuntime {
    pub containers: Vec<(ContainerSummary, ContainerDetails)>,
    pub images: Vec<(ImageSummary, ImageDetails)>,
    pub volumes: Vec<VolumeSummary>,
    /// Makes every list call fail.
    pub unreachable: bool,
}

impl Sealed for FakeRuntime {}

#[async_trait]
impl ContainerOps for FakeRuntime {
    async fn list_containers(&self, _all: bool) -> Result<Vec<ContainerSummary>, ContainerError> {
        if self.unreachable {
            return Err(ContainerError::Runtime("connection refused".to_string()));
        }
        Ok(self.containers.iter().map(|(s, _)| s.clone()).collect())
    }

    async fn inspect_container(
        &self,
        reference: &str,
    ) -> Result<ContainerDetails, ContainerError> {
        self.containers
            .iter()
            .map(|(_, d)| d)
            .find(|d| d.id.as_str().starts_with(reference) || d.name == reference)
            .cloned()
            .ok_or_else(|| ContainerError::NotFound(reference.to_string()))
    }
}

#[async_trait]
impl ImageOps for FakeRuntime {
    async fn list_images(&self, _all: bool) -> Result<Vec<ImageSummary>, ImageError> {
        if self.unreachable {
            return Err(ImageError::Runtime("connection refused".to_string()));
        }
        Ok(self.images.iter().map(|(s, _)| s.clone()).collect())
    }

    async fn inspect_image(&self, reference: &str) -> Result<ImageDetails, ImageError> {
        self.images
            .iter()
            .map(|(_, d)| d)
            .find(|d| d.id.as_str() == reference || d.id.digest().starts_with(reference))
            .cloned()
            .ok_or_else(|| ImageError::NotFound(reference.to_string()))
    }
}

#[async_trait]
impl VolumeOps for FakeRuntime {
    async fn list_volumes(&self) -> Result<Vec<VolumeSummary>, VolumeError> {
        if self.unreachable {
            return Err(VolumeError::Runtime("connection refused".to_string()));
        }
        Ok(self.volumes.clone())
    }
}
