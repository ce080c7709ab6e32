use anyhow::Context;
use log::warn;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::chart::DEFAULT_TITLE;

pub const CONFIG_ENV: &str = "DASHBOARD_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub listen_addr: IpAddr,
    pub listen_port: u16,
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: IpAddr::from([127, 0, 0, 1]),
            listen_port: 5000,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Reads the TOML file at `path`, else the one named by `DASHBOARD_CONFIG`.
    /// A missing or invalid file falls back to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => std::env::var(CONFIG_ENV).ok().map(PathBuf::from),
        };
        let Some(path) = path else {
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).context("parsing config")
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen_addr, self.listen_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = Config::from_toml_str("listen_port = 8080").unwrap();
        assert_eq!(config.listen_port, 8080);
        assert_eq!(config.title, "Business KPI Dashboard");
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn full_config_parses() {
        let config = Config::from_toml_str(
            r#"
listen_addr = "0.0.0.0"
listen_port = 9000
title = "Ops KPIs"
"#,
        )
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:9000");
        assert_eq!(config.title, "Ops KPIs");
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(Config::from_toml_str("listen_prot = 1").is_err());
    }

    #[test]
    fn unreadable_file_falls_back_to_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent/dashboard.toml")));
        assert_eq!(config, Config::default());
    }
}
