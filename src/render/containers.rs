// ABOUTME: Container table: id, name, state, address, ports, command, image.
// ABOUTME: Optional columns appear with width or verbosity.

use super::RenderConfig;
use super::state::state_label;
use super::table::layout;
use crate::format::{format_ports, since};
use crate::runtime::{ContainerDetails, ContainerSummary};
use chrono::{DateTime, Utc};

const NAME_SHARE: f64 = 0.2;
const COMMAND_SHARE: f64 = 0.15;
const IMAGE_SHARE: f64 = 0.2;

/// Placeholder for a value the runtime could not provide.
const UNKNOWN: &str = "?";
/// Placeholder for a container with no address.
const NO_ADDRESS: &str = "-";

/// Everything known about one container before rendering.
#[derive(Debug, Clone)]
pub struct ContainerRow {
    pub summary: ContainerSummary,
    pub details: ContainerDetails,
    /// Creation time of the container's image; `None` when the lookup failed.
    pub image_created: Option<DateTime<Utc>>,
}

/// Render the container table, oldest container first.
pub fn render_containers(mut rows: Vec<ContainerRow>, cfg: &RenderConfig) -> String {
    rows.sort_by_key(|row| row.summary.created);

    let mut header = vec!["id", "name"];
    if cfg.verbose() {
        header.push("age");
    }
    header.extend(["up", "ip", "ports"]);
    if cfg.shows_command() {
        header.push("cmd");
    }
    header.extend(["image", "age"]);

    let body = rows.iter().map(|row| container_cells(row, cfg)).collect();
    layout(&header, body)
}

fn container_cells(row: &ContainerRow, cfg: &RenderConfig) -> Vec<String> {
    let ContainerRow {
        summary,
        details,
        image_created,
    } = row;

    let mut cells = vec![
        summary.id.short().to_string(),
        cfg.fit(&details.name, NAME_SHARE),
    ];
    if cfg.verbose() {
        cells.push(age(summary.created, cfg));
    }
    cells.push(state_label(&details.status, cfg.now));
    cells.push(summary.first_ip().unwrap_or(NO_ADDRESS).to_string());
    cells.push(format_ports(&summary.ports, cfg.verbose()));
    if cfg.shows_command() {
        cells.push(cfg.fit_middle(&summary.command, COMMAND_SHARE));
    }
    cells.push(cfg.fit(&summary.image, IMAGE_SHARE));
    cells.push(age(*image_created, cfg));
    cells
}

fn age(created: Option<DateTime<Utc>>, cfg: &RenderConfig) -> String {
    created
        .map(|t| since(cfg.now, t))
        .unwrap_or_else(|| UNKNOWN.to_string())
}
