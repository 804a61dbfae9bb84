// ABOUTME: Container listing command.
// ABOUTME: Lists, inspects each container and its image, then renders the table.

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::Result;
use crate::render::{ContainerRow, RenderConfig, render_containers};
use crate::runtime::{ContainerOps, ImageOps};

/// Render the container table.
///
/// A failed list or container inspection aborts. A failed image inspection
/// only costs that row its image age and is recorded in `diag`.
pub async fn list_containers<R>(
    runtime: &R,
    all: bool,
    cfg: &RenderConfig,
    diag: &mut Diagnostics,
) -> Result<String>
where
    R: ContainerOps + ImageOps,
{
    let summaries = runtime.list_containers(all).await?;

    let mut rows = Vec::with_capacity(summaries.len());
    for summary in summaries {
        let details = runtime.inspect_container(summary.id.as_str()).await?;

        let image_created = match runtime.inspect_image(details.image_id.as_str()).await {
            Ok(image) => image.created,
            Err(e) => {
                diag.warn(Warning::image_lookup(format!(
                    "image of container {}: {}",
                    summary.id.short(),
                    e
                )));
                None
            }
        };

        rows.push(ContainerRow {
            summary,
            details,
            image_created,
        });
    }

    Ok(render_containers(rows, cfg))
}
