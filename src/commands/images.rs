// ABOUTME: Image listing command.

use crate::error::Result;
use crate::render::{RenderConfig, render_images};
use crate::runtime::ImageOps;

/// Render the image table; `all` includes intermediate images.
pub async fn list_images(runtime: &impl ImageOps, all: bool, cfg: &RenderConfig) -> Result<String> {
    let images = runtime.list_images(all).await?;
    Ok(render_images(images, cfg))
}
