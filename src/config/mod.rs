// ABOUTME: Environment-driven configuration for dx.
// ABOUTME: Runtime endpoint override and pager command.

/// Selects the runtime endpoint (`unix:///path`, `tcp://host:port`).
pub const HOST_VAR: &str = "DOCKER_HOST";
/// Pager program and arguments, space separated.
pub const PAGER_VAR: &str = "PAGER";
/// Log filter directives for tracing.
pub const LOG_VAR: &str = "DX_LOG";

const DEFAULT_PAGER: &str = "less";

/// Settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint override; `None` means detect locally.
    pub host: Option<String>,
    /// Pager program followed by its arguments. Never empty.
    pub pager: Vec<String>,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup(HOST_VAR).filter(|h| !h.is_empty());
        let pager = lookup(PAGER_VAR)
            .map(|p| split_command(&p))
            .filter(|argv| !argv.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_PAGER.to_string()]);
        Self { host, pager }
    }
}

fn split_command(raw: &str) -> Vec<String> {
    raw.split(' ')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.host, None);
        assert_eq!(config.pager, vec!["less"]);
    }

    #[test]
    fn pager_is_split_on_spaces() {
        let config = Config::from_lookup(lookup(&[("PAGER", "less  -R -S")]));
        assert_eq!(config.pager, vec!["less", "-R", "-S"]);
    }

    #[test]
    fn blank_values_fall_back() {
        let config = Config::from_lookup(lookup(&[("PAGER", "   "), ("DOCKER_HOST", "")]));
        assert_eq!(config.host, None);
        assert_eq!(config.pager, vec!["less"]);
    }

    #[test]
    fn host_override_is_kept_verbatim() {
        let config = Config::from_lookup(lookup(&[("DOCKER_HOST", "tcp://10.0.0.5:2375")]));
        assert_eq!(config.host.as_deref(), Some("tcp://10.0.0.5:2375"));
    }
}
