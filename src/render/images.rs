// ABOUTME: Image table: id, age, size and repository tags.

use super::RenderConfig;
use super::table::layout;
use crate::format::{pretty_size, since};
use crate::runtime::ImageSummary;

/// Render the image table, oldest image first.
pub fn render_images(mut images: Vec<ImageSummary>, cfg: &RenderConfig) -> String {
    images.sort_by_key(|image| image.created);

    let body = images
        .iter()
        .map(|image| {
            vec![
                image.id.short().to_string(),
                image
                    .created
                    .map(|t| since(cfg.now, t))
                    .unwrap_or_else(|| "?".to_string()),
                pretty_size(image.size),
                image.repo_tags.join(","),
            ]
        })
        .collect();
    layout(&["id", "age", "size", "repotags"], body)
}
