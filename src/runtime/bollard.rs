// ABOUTME: Bollard-based container runtime implementation.
// ABOUTME: Supports both Docker and Podman via Docker-compatible API.

use crate::runtime::error::{ConnectionSnafu, RuntimeError};
use crate::runtime::traits::sealed::Sealed;
use crate::runtime::traits::{
    ContainerDetails, ContainerError, ContainerOps, ContainerStatus, ContainerSummary,
    ImageDetails, ImageError, ImageOps, ImageSummary, PortBinding, Protocol, VolumeError,
    VolumeOps, VolumeSummary, from_unix, parse_timestamp,
};
use crate::runtime::types::Endpoint;
use crate::types::{ContainerId, ImageId};
use async_trait::async_trait;
use bollard::Docker;
use snafu::ResultExt;
use bollard::query_parameters::{
    InspectContainerOptions, ListContainersOptions, ListImagesOptions, ListVolumesOptions,
};

/// Seconds before a request to the daemon gives up.
const CLIENT_TIMEOUT: u64 = 120;

// =============================================================================
// Error Mapping Helpers
// =============================================================================

fn is_not_found(e: &bollard::errors::Error) -> bool {
    matches!(
        e,
        bollard::errors::Error::DockerResponseServerError {
            status_code: 404,
            ..
        }
    )
}

fn map_container_error(e: bollard::errors::Error, reference: &str) -> ContainerError {
    if is_not_found(&e) {
        ContainerError::NotFound(reference.to_string())
    } else {
        ContainerError::Runtime(e.to_string())
    }
}

fn map_image_error(e: bollard::errors::Error, reference: &str) -> ImageError {
    if is_not_found(&e) {
        ImageError::NotFound(reference.to_string())
    } else {
        ImageError::Runtime(format!("failed to inspect {}: {}", reference, e))
    }
}

// =============================================================================
// BollardRuntime
// =============================================================================

/// Container runtime implementation using bollard.
///
/// Supports both Docker and Podman via Docker-compatible API.
pub struct BollardRuntime {
    client: Docker,
    endpoint: Endpoint,
}

impl BollardRuntime {
    /// Create a new BollardRuntime from a Docker client.
    pub fn new(client: Docker, endpoint: Endpoint) -> Self {
        Self { client, endpoint }
    }

    /// Build a client for the endpoint.
    ///
    /// A Unix socket that does not exist fails here; other connection
    /// problems surface on the first query.
    pub fn connect(endpoint: Endpoint) -> Result<Self, RuntimeError> {
        let client = match &endpoint {
            Endpoint::Unix { socket_path, .. } => {
                Docker::connect_with_unix(socket_path, CLIENT_TIMEOUT, bollard::API_DEFAULT_VERSION)
            }
            Endpoint::Http { address } => {
                Docker::connect_with_http(address, CLIENT_TIMEOUT, bollard::API_DEFAULT_VERSION)
            }
        }
        .context(ConnectionSnafu {
            endpoint: endpoint.to_string(),
        })?;

        tracing::debug!("connected client to {}", endpoint);
        Ok(Self::new(client, endpoint))
    }

    /// The endpoint this runtime talks to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

// Implement Sealed trait to allow runtime trait implementations
impl Sealed for BollardRuntime {}

#[async_trait]
impl ContainerOps for BollardRuntime {
    async fn list_containers(&self, all: bool) -> Result<Vec<ContainerSummary>, ContainerError> {
        let opts = ListContainersOptions {
            all,
            size: false,
            ..Default::default()
        };

        let containers = self
            .client
            .list_containers(Some(opts))
            .await
            .map_err(|e| ContainerError::Runtime(e.to_string()))?;

        tracing::debug!("listed {} containers", containers.len());

        Ok(containers
            .into_iter()
            .map(|c| {
                let networks = c
                    .network_settings
                    .and_then(|settings| settings.networks)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(name, endpoint)| (name, endpoint.ip_address.unwrap_or_default()))
                    .collect();

                let ports = c
                    .ports
                    .unwrap_or_default()
                    .into_iter()
                    .map(|p| PortBinding {
                        private_port: p.private_port,
                        public_port: p.public_port,
                        host_ip: p.ip.filter(|ip| !ip.is_empty()),
                        protocol: p
                            .typ
                            .map(|t| Protocol::parse(&t.to_string()))
                            .unwrap_or_default(),
                    })
                    .collect();

                ContainerSummary {
                    id: ContainerId::new(c.id.unwrap_or_default()),
                    image: c.image.unwrap_or_default(),
                    command: c.command.unwrap_or_default(),
                    created: c.created.and_then(from_unix),
                    networks,
                    ports,
                }
            })
            .collect())
    }

    async fn inspect_container(
        &self,
        reference: &str,
    ) -> Result<ContainerDetails, ContainerError> {
        let details = self
            .client
            .inspect_container(reference, None::<InspectContainerOptions>)
            .await
            .map_err(|e| map_container_error(e, reference))?;

        let record = serde_json::to_value(&details)
            .map_err(|e| ContainerError::Runtime(format!("unreadable record: {}", e)))?;

        let status = details
            .state
            .as_ref()
            .map(|s| ContainerStatus {
                running: s.running.unwrap_or(false),
                paused: s.paused.unwrap_or(false),
                restarting: s.restarting.unwrap_or(false),
                dead: s.dead.unwrap_or(false),
                exit_code: s.exit_code.unwrap_or(0),
                started_at: s.started_at.as_deref().and_then(parse_timestamp),
                finished_at: s.finished_at.as_deref().and_then(parse_timestamp),
            })
            .unwrap_or_default();

        Ok(ContainerDetails {
            id: ContainerId::new(details.id.unwrap_or_else(|| reference.to_string())),
            name: details
                .name
                .unwrap_or_default()
                .trim_start_matches('/')
                .to_string(),
            image_id: ImageId::new(details.image.unwrap_or_default()),
            status,
            record,
        })
    }
}

#[async_trait]
impl ImageOps for BollardRuntime {
    async fn list_images(&self, all: bool) -> Result<Vec<ImageSummary>, ImageError> {
        let opts = ListImagesOptions {
            all,
            ..Default::default()
        };

        let images = self
            .client
            .list_images(Some(opts))
            .await
            .map_err(|e| ImageError::Runtime(e.to_string()))?;

        tracing::debug!("listed {} images", images.len());

        Ok(images
            .into_iter()
            .map(|i| ImageSummary {
                id: ImageId::new(i.id),
                created: from_unix(i.created),
                size: u64::try_from(i.size).unwrap_or(0),
                repo_tags: i.repo_tags,
            })
            .collect())
    }

    async fn inspect_image(&self, reference: &str) -> Result<ImageDetails, ImageError> {
        let details = self
            .client
            .inspect_image(reference)
            .await
            .map_err(|e| map_image_error(e, reference))?;

        let record = serde_json::to_value(&details)
            .map_err(|e| ImageError::Runtime(format!("unreadable record: {}", e)))?;

        Ok(ImageDetails {
            id: ImageId::new(details.id.unwrap_or_else(|| reference.to_string())),
            created: details.created.as_deref().and_then(parse_timestamp),
            record,
        })
    }
}

#[async_trait]
impl VolumeOps for BollardRuntime {
    async fn list_volumes(&self) -> Result<Vec<VolumeSummary>, VolumeError> {
        let response = self
            .client
            .list_volumes(None::<ListVolumesOptions>)
            .await
            .map_err(|e| VolumeError::Runtime(e.to_string()))?;

        let volumes = response.volumes.unwrap_or_default();
        tracing::debug!("listed {} volumes", volumes.len());

        volumes
            .into_iter()
            .map(|v| {
                let record = serde_json::to_value(&v)
                    .map_err(|e| VolumeError::Runtime(format!("unreadable record: {}", e)))?;
                Ok(VolumeSummary {
                    created: v.created_at.as_deref().and_then(parse_timestamp),
                    name: v.name,
                    driver: v.driver,
                    record,
                })
            })
            .collect()
    }
}
