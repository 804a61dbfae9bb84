// ABOUTME: Container runtime access for Docker and Podman.
// ABOUTME: Endpoint detection, capability traits and the bollard implementation.

mod bollard;
mod detection;
mod error;
#[cfg(test)]
pub(crate) mod fake;
pub mod traits;
mod types;

pub use self::bollard::BollardRuntime;
pub use detection::{DetectionError, detect_local, resolve_endpoint};
pub use error::{ConnectionSnafu, DetectionSnafu, RuntimeError};
pub use traits::*;
pub use types::{Endpoint, RuntimeType};
