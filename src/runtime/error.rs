// ABOUTME: Runtime error types with SNAFU pattern.
// ABOUTME: Unifies endpoint detection and client construction failures.

use snafu::Snafu;

use super::detection::DetectionError;

/// Unified runtime error for detection and connection failures.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RuntimeError {
    #[snafu(display("runtime detection failed: {source}"))]
    Detection { source: DetectionError },

    #[snafu(display("runtime connection to {endpoint} failed: {source}"))]
    Connection {
        endpoint: String,
        source: bollard::errors::Error,
    },
}
