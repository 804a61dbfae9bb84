// ABOUTME: Shared types used across runtime trait definitions.
// ABOUTME: Container, image and volume snapshots plus port bindings.

use crate::types::{ContainerId, ImageId};
use chrono::{DateTime, Datelike, Utc};
use std::collections::BTreeMap;

/// Transport protocol of a port binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Protocol {
    #[default]
    Tcp,
    Udp,
    Sctp,
}

impl Protocol {
    /// Parse the daemon's lowercase protocol name. Unknown or empty is TCP.
    pub fn parse(s: &str) -> Self {
        match s {
            "udp" => Protocol::Udp,
            "sctp" => Protocol::Sctp,
            _ => Protocol::Tcp,
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Protocol::Tcp => write!(f, "tcp"),
            Protocol::Udp => write!(f, "udp"),
            Protocol::Sctp => write!(f, "sctp"),
        }
    }
}

/// A port exposed by a container, optionally published on the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortBinding {
    /// Port inside the container.
    pub private_port: u16,
    /// Host port, when published.
    pub public_port: Option<u16>,
    /// Host address the published port is bound to.
    pub host_ip: Option<String>,
    /// Transport protocol.
    pub protocol: Protocol,
}

/// One row of a container listing.
#[derive(Debug, Clone)]
pub struct ContainerSummary {
    pub id: ContainerId,
    /// Image reference the container was created from.
    pub image: String,
    /// Command line the container runs.
    pub command: String,
    pub created: Option<DateTime<Utc>>,
    /// IP address by network name.
    pub networks: BTreeMap<String, String>,
    pub ports: Vec<PortBinding>,
}

impl ContainerSummary {
    /// Address on the first network, in network-name order.
    pub fn first_ip(&self) -> Option<&str> {
        self.networks
            .values()
            .next()
            .map(String::as_str)
            .filter(|ip| !ip.is_empty())
    }
}

/// Lifecycle state reported by container inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerStatus {
    pub running: bool,
    pub paused: bool,
    pub restarting: bool,
    pub dead: bool,
    pub exit_code: i64,
    /// Absent when the container never started.
    pub started_at: Option<DateTime<Utc>>,
    /// Absent when the container never finished.
    pub finished_at: Option<DateTime<Utc>>,
}

/// Result of inspecting a container.
#[derive(Debug, Clone)]
pub struct ContainerDetails {
    pub id: ContainerId,
    /// Name without the leading slash.
    pub name: String,
    /// ID of the image backing the container.
    pub image_id: ImageId,
    pub status: ContainerStatus,
    /// Full daemon record.
    pub record: serde_json::Value,
}

/// One row of an image listing.
#[derive(Debug, Clone)]
pub struct ImageSummary {
    pub id: ImageId,
    pub created: Option<DateTime<Utc>>,
    /// Size in bytes.
    pub size: u64,
    pub repo_tags: Vec<String>,
}

/// Result of inspecting an image.
#[derive(Debug, Clone)]
pub struct ImageDetails {
    pub id: ImageId,
    pub created: Option<DateTime<Utc>>,
    /// Full daemon record.
    pub record: serde_json::Value,
}

/// A named volume.
#[derive(Debug, Clone)]
pub struct VolumeSummary {
    pub name: String,
    pub driver: String,
    pub created: Option<DateTime<Utc>>,
    /// Full daemon record.
    pub record: serde_json::Value,
}

/// Parse an RFC 3339 daemon timestamp.
///
/// The daemon reports unset times as `0001-01-01T00:00:00Z`; those map to `None`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw).ok()?.with_timezone(&Utc);
    (parsed.year() > 1).then_some(parsed)
}

/// Convert a Unix timestamp in seconds.
pub fn from_unix(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}
