// ABOUTME: Volume listing command.

use crate::error::Result;
use crate::render::{RenderConfig, render_volumes};
use crate::runtime::VolumeOps;

/// Render the volume table.
pub async fn list_volumes(runtime: &impl VolumeOps, cfg: &RenderConfig) -> Result<String> {
    let volumes = runtime.list_volumes().await?;
    Ok(render_volumes(volumes, cfg))
}
