// ABOUTME: Derives the short lifecycle label shown in the container table.
// ABOUTME: `2h`, `3dPaused`, `exit(0)5m`, `restart(1)now`, `created`, `dead`.

use crate::format::since;
use crate::runtime::ContainerStatus;
use chrono::{DateTime, Utc};

/// Label for a stopped container whose finish time was never recorded.
pub const FINISHED_WITHOUT_TIMESTAMP: &str = "FinishedAt==0";

/// Lifecycle label for a container.
///
/// Running containers show time since start (suffixed `Paused` when paused).
/// Stopped or restarting ones show `dead`, `created`, or the exit code and
/// time since finish.
pub fn state_label(status: &ContainerStatus, now: DateTime<Utc>) -> String {
    if !status.running || status.restarting {
        if status.dead {
            return "dead".to_string();
        }
        if status.started_at.is_none() {
            return "created".to_string();
        }
        let Some(finished) = status.finished_at else {
            return FINISHED_WITHOUT_TIMESTAMP.to_string();
        };
        let verb = if status.running { "restart" } else { "exit" };
        return format!("{}({}){}", verb, status.exit_code, since(now, finished));
    }

    let mut label = status
        .started_at
        .map(|started| since(now, started))
        .unwrap_or_else(|| "?".to_string());
    if status.paused {
        label.push_str("Paused");
    }
    label
}
