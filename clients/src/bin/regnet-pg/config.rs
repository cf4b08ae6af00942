//! Optional TOML configuration for `regnet-pg`.
//!
//! ```toml
//! network = "networks/toggle.json"
//! catalogs = "share/logic"
//! ```
//!
//! Relative paths are resolved against the directory holding the file.
//! Command-line flags take precedence over the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Contents of a configuration file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Network description file.
    pub network: Option<PathBuf>,
    /// Logic resource directory.
    pub catalogs: Option<PathBuf>,
}

impl Config {
    /// Read `path` and resolve its relative paths.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(Self {
            network: config.network.map(|p| base.join(p)),
            catalogs: config.catalogs.map(|p| base.join(p)),
        })
    }
}

/// Paths the graph is built from, after merging flags and configuration.
#[derive(Debug, PartialEq, Eq)]
pub struct Sources {
    /// Network description file.
    pub network: PathBuf,
    /// Logic resource directory.
    pub catalogs: PathBuf,
}

impl Sources {
    /// Prefer `network`/`catalogs` flags, fall back to `config`.
    pub fn resolve(
        network: Option<PathBuf>,
        catalogs: Option<PathBuf>,
        config: Config,
    ) -> Result<Self> {
        let Some(network) = network.or(config.network) else {
            bail!("no network given: pass --network or set `network` in the config file");
        };
        let Some(catalogs) = catalogs.or(config.catalogs) else {
            bail!("no logic resources given: pass --catalogs or set `catalogs` in the config file");
        };
        Ok(Self { network, catalogs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_follow_the_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regnet.toml");
        fs::write(&path, "network = \"net.json\"\ncatalogs = \"/abs/logic\"\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.network, Some(dir.path().join("net.json")));
        assert_eq!(config.catalogs, Some(PathBuf::from("/abs/logic")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regnet.toml");
        fs::write(&path, "netwrok = \"net.json\"\n").unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn flags_override_config() {
        let config = Config {
            network: Some("a.json".into()),
            catalogs: Some("logic".into()),
        };
        let sources = Sources::resolve(Some("b.json".into()), None, config).unwrap();
        assert_eq!(sources.network, PathBuf::from("b.json"));
        assert_eq!(sources.catalogs, PathBuf::from("logic"));
    }

    #[test]
    fn missing_sources_are_errors() {
        assert!(Sources::resolve(None, Some("logic".into()), Config::default()).is_err());
        assert!(Sources::resolve(Some("a.json".into()), None, Config::default()).is_err());
    }
}
