// ABOUTME: Volume table: age, driver and name.

use super::RenderConfig;
use super::table::layout;
use crate::format::since;
use crate::runtime::VolumeSummary;

/// Render the volume table, oldest volume first.
pub fn render_volumes(mut volumes: Vec<VolumeSummary>, cfg: &RenderConfig) -> String {
    volumes.sort_by_key(|volume| volume.created);

    let body = volumes
        .iter()
        .map(|volume| {
            vec![
                volume
                    .created
                    .map(|t| since(cfg.now, t))
                    .unwrap_or_else(|| "?".to_string()),
                volume.driver.clone(),
                volume.name.clone(),
            ]
        })
        .collect();
    layout(&["age", "driver", "name"], body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Verbosity;
    use chrono::{DateTime, TimeDelta, Utc};

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn volume(name: &str, created: Option<DateTime<Utc>>) -> VolumeSummary {
        VolumeSummary {
            name: name.to_string(),
            driver: "local".to_string(),
            created,
            record: serde_json::Value::Null,
        }
    }

    #[test]
    fn renders_age_driver_name_oldest_first() {
        let cfg = RenderConfig::new(120, Verbosity::Normal).with_now(now());
        let out = render_volumes(
            vec![
                volume("pgdata", Some(now() - TimeDelta::minutes(5))),
                volume("cache", Some(now() - TimeDelta::days(400))),
            ],
            &cfg,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "age driver name");
        assert_eq!(lines[1], "13M local  cache");
        assert_eq!(lines[2], "5m  local  pgdata");
    }

    #[test]
    fn unknown_creation_time_is_a_placeholder() {
        let cfg = RenderConfig::new(120, Verbosity::Normal).with_now(now());
        let out = render_volumes(vec![volume("legacy", None)], &cfg);
        assert_eq!(out.lines().nth(1).unwrap(), "?   local  legacy");
    }
}
