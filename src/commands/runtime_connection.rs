// ABOUTME: Shared helper for connecting to the container runtime.
// ABOUTME: Resolves the endpoint from configuration and builds the client.

use crate::config::Config;
use crate::error::Result;
use crate::runtime::{BollardRuntime, DetectionSnafu, resolve_endpoint};
use snafu::ResultExt;

/// Connect to the container runtime selected by `config`.
///
/// This handles the common pattern of:
/// 1. Honoring the host override or detecting a local socket
/// 2. Building the client for that endpoint
pub fn connect_to_runtime(config: &Config) -> Result<BollardRuntime> {
    let endpoint = resolve_endpoint(config.host.as_deref()).context(DetectionSnafu)?;
    tracing::debug!("using runtime endpoint {}", endpoint);
    Ok(BollardRuntime::connect(endpoint)?)
}
