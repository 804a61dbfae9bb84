// ABOUTME: Runtime endpoint selection for the local system.
// ABOUTME: Honors a host override, else checks Podman sockets first, then Docker.

use super::types::{Endpoint, RuntimeType};
use std::path::Path;

/// Error during runtime detection.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("no container runtime found (checked Podman and Docker sockets)")]
    NoRuntimeFound,

    #[error("unsupported host scheme: {0}")]
    UnsupportedScheme(String),
}

const ROOTFUL_PODMAN: &str = "/run/podman/podman.sock";
pub(crate) const DOCKER_SOCKET: &str = "/var/run/docker.sock";

/// Pick the endpoint to talk to.
///
/// A host override wins: `unix://` paths are sockets, `tcp://`, `http://` or
/// scheme-less addresses are HTTP. Without one, the local system is probed
/// with [`detect_local`] and the Docker socket is assumed when nothing is found.
pub fn resolve_endpoint(host_override: Option<&str>) -> Result<Endpoint, DetectionError> {
    if let Some(host) = host_override {
        if let Some(path) = host.strip_prefix("unix://") {
            return Ok(Endpoint::Unix {
                runtime_type: RuntimeType::Docker,
                socket_path: path.to_string(),
            });
        }
        let http = host.starts_with("tcp://") || host.starts_with("http://");
        if !http && host.contains("://") {
            return Err(DetectionError::UnsupportedScheme(host.to_string()));
        }
        return Ok(Endpoint::Http {
            address: host.to_string(),
        });
    }

    match detect_local() {
        Ok(endpoint) => Ok(endpoint),
        Err(e) => {
            tracing::debug!("{e}; falling back to {DOCKER_SOCKET}");
            Ok(Endpoint::Unix {
                runtime_type: RuntimeType::Docker,
                socket_path: DOCKER_SOCKET.to_string(),
            })
        }
    }
}

/// Detect container runtime on the local system.
///
/// Detection order:
/// 1. Rootless Podman socket (`/run/user/$UID/podman/podman.sock`)
/// 2. Rootful Podman socket (`/run/podman/podman.sock`)
/// 3. Docker socket (`/var/run/docker.sock`)
pub fn detect_local() -> Result<Endpoint, DetectionError> {
    // 1. Rootless Podman
    if let Some(uid) = get_uid() {
        let rootless_socket = format!("/run/user/{}/podman/podman.sock", uid);
        if Path::new(&rootless_socket).exists() {
            return Ok(Endpoint::Unix {
                runtime_type: RuntimeType::Podman,
                socket_path: rootless_socket,
            });
        }
    }

    // 2. Rootful Podman
    if Path::new(ROOTFUL_PODMAN).exists() {
        return Ok(Endpoint::Unix {
            runtime_type: RuntimeType::Podman,
            socket_path: ROOTFUL_PODMAN.to_string(),
        });
    }

    // 3. Docker
    if Path::new(DOCKER_SOCKET).exists() {
        return Ok(Endpoint::Unix {
            runtime_type: RuntimeType::Docker,
            socket_path: DOCKER_SOCKET.to_string(),
        });
    }

    Err(DetectionError::NoRuntimeFound)
}

fn get_uid() -> Option<String> {
    std::env::var("UID").ok().or_else(|| {
        // Fall back to reading /proc/self/status
        std::fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|s| {
                s.lines()
                    .find(|l| l.starts_with("Uid:"))
                    .and_then(|l| l.split_whitespace().nth(1))
                    .map(|s| s.to_string())
            })
    })
}
