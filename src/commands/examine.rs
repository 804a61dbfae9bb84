// ABOUTME: Examine command: find one object by ID or name prefix and dump it.
// ABOUTME: Probes containers, then images, then volumes; pages on a terminal.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::pager::page;
use crate::runtime::{
    ContainerDetails, ContainerError, ImageDetails, ImageError, Runtime, VolumeSummary,
};
use std::io::Write;

/// The object an examine lookup resolved to.
#[derive(Debug, Clone)]
pub enum Found {
    Container(ContainerDetails),
    Image(ImageDetails),
    Volume(VolumeSummary),
}

impl Found {
    pub fn kind(&self) -> &'static str {
        match self {
            Found::Container(_) => "container",
            Found::Image(_) => "image",
            Found::Volume(_) => "volume",
        }
    }

    /// Container or image ID, or volume name.
    pub fn id(&self) -> &str {
        match self {
            Found::Container(c) => c.id.as_str(),
            Found::Image(i) => i.id.as_str(),
            Found::Volume(v) => &v.name,
        }
    }

    /// The full daemon record as indented JSON.
    pub fn to_pretty_json(&self) -> Result<String> {
        let record = match self {
            Found::Container(c) => &c.record,
            Found::Image(i) => &i.record,
            Found::Volume(v) => &v.record,
        };
        Ok(serde_json::to_string_pretty(record)?)
    }
}

/// Resolve `needle` to a single object.
///
/// Order: container by ID or name, image by ID, then volumes whose name
/// starts with `needle`. More than one matching volume is an error, as is
/// no match at all. Any failure other than "not found" aborts the search.
pub async fn locate(runtime: &impl Runtime, needle: &str) -> Result<Found> {
    match runtime.inspect_container(needle).await {
        Ok(container) => return Ok(Found::Container(container)),
        Err(ContainerError::NotFound(_)) => tracing::debug!("no container matches {}", needle),
        Err(e) => return Err(e.into()),
    }

    match runtime.inspect_image(needle).await {
        Ok(image) => return Ok(Found::Image(image)),
        Err(ImageError::NotFound(_)) => tracing::debug!("no image matches {}", needle),
        Err(e) => return Err(e.into()),
    }

    let mut matches = runtime
        .list_volumes()
        .await?
        .into_iter()
        .filter(|v| v.name.starts_with(needle));
    match (matches.next(), matches.next()) {
        (Some(volume), None) => Ok(Found::Volume(volume)),
        (Some(_), Some(_)) => Err(Error::Ambiguous(needle.to_string())),
        (None, _) => Err(Error::NothingFound(needle.to_string())),
    }
}

/// Find `needle` and print its record, through the pager when stdout is a
/// terminal.
pub async fn examine(runtime: &impl Runtime, needle: &str, config: &Config) -> Result<()> {
    let found = locate(runtime, needle).await?;
    let dump = found.to_pretty_json()?;
    eprintln!("Found {}: {}", found.kind(), found.id());

    if console::Term::stdout().is_term() {
        page(&config.pager, &format!("{dump}\n")).await
    } else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{dump}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::fake::FakeRuntime;
    use crate::runtime::{ContainerStatus, ContainerSummary, ImageSummary};
    use crate::types::{ContainerId, ImageId};

    fn volume(name: &str) -> VolumeSummary {
        VolumeSummary {
            name: name.to_string(),
            driver: "local".to_string(),
            created: None,
            record: serde_json::json!({ "Name": name, "Driver": "local" }),
        }
    }

    fn with_container_and_image() -> FakeRuntime {
        let id = ContainerId::new("abc123def456");
        let image_id = ImageId::new("sha256:0a1b2c3d");
        FakeRuntime {
            containers: vec![(
                ContainerSummary {
                    id: id.clone(),
                    image: "nginx".to_string(),
                    command: String::new(),
                    created: None,
                    networks: Default::default(),
                    ports: Vec::new(),
                },
                ContainerDetails {
                    id,
                    name: "web".to_string(),
                    image_id: image_id.clone(),
                    status: ContainerStatus::default(),
                    record: serde_json::json!({ "Name": "/web" }),
                },
            )],
            images: vec![(
                ImageSummary {
                    id: image_id.clone(),
                    created: None,
                    size: 0,
                    repo_tags: Vec::new(),
                },
                ImageDetails {
                    id: image_id,
                    created: None,
                    record: serde_json::json!({ "Id": "sha256:0a1b2c3d" }),
                },
            )],
            volumes: vec![volume("abc-volume")],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn container_wins_over_image_and_volume() {
        let runtime = with_container_and_image();
        let found = locate(&runtime, "abc").await.unwrap();
        assert_eq!(found.kind(), "container");
        assert_eq!(found.id(), "abc123def456");
    }

    #[tokio::test]
    async fn container_found_by_name() {
        let runtime = with_container_and_image();
        let found = locate(&runtime, "web").await.unwrap();
        assert!(matches!(found, Found::Container(_)));
    }

    #[tokio::test]
    async fn image_found_when_no_container_matches() {
        let runtime = with_container_and_image();
        let found = locate(&runtime, "0a1b").await.unwrap();
        assert_eq!(found.kind(), "image");
        assert!(found.to_pretty_json().unwrap().contains("sha256:0a1b2c3d"));
    }

    #[tokio::test]
    async fn single_volume_prefix_match() {
        let runtime = FakeRuntime {
            volumes: vec![volume("pgdata"), volume("redis-cache")],
            ..Default::default()
        };
        let found = locate(&runtime, "pg").await.unwrap();
        assert_eq!(found.kind(), "volume");
        assert_eq!(found.id(), "pgdata");
        let dump = found.to_pretty_json().unwrap();
        assert!(dump.contains("\"Name\": \"pgdata\""));
    }

    #[tokio::test]
    async fn two_volume_matches_are_ambiguous() {
        let runtime = FakeRuntime {
            volumes: vec![volume("data-a"), volume("data-b")],
            ..Default::default()
        };
        let err = locate(&runtime, "data").await.unwrap_err();
        assert!(matches!(err, Error::Ambiguous(ref p) if p == "data"));
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
    }

    #[tokio::test]
    async fn nothing_matching_is_reported_distinctly() {
        let runtime = FakeRuntime {
            volumes: vec![volume("pgdata")],
            ..Default::default()
        };
        let err = locate(&runtime, "zzz").await.unwrap_err();
        assert!(matches!(err, Error::NothingFound(_)));
        assert_eq!(err.exit_code(), crate::error::EXIT_NOT_FOUND);
    }

    #[tokio::test]
    async fn volume_listing_failure_is_fatal() {
        let runtime = FakeRuntime {
            unreachable: true,
            ..Default::default()
        };
        let err = locate(&runtime, "anything").await.unwrap_err();
        assert!(matches!(err, Error::Volume(_)));
    }
}
