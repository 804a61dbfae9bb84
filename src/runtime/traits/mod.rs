// ABOUTME: Composable capability traits for container runtimes.
// ABOUTME: Defines ContainerOps, ImageOps, VolumeOps and the Runtime umbrella.

mod container;
mod image;
pub(crate) mod sealed;
mod shared_types;
mod volume;

pub use container::{ContainerError, ContainerOps};
pub use image::{ImageError, ImageOps};
pub use shared_types::*;
pub use volume::{VolumeError, VolumeOps};

/// Every capability a listing or lookup needs.
pub trait Runtime: ContainerOps + ImageOps + VolumeOps {}

impl<T: ContainerOps + ImageOps + VolumeOps> Runtime for T {}
