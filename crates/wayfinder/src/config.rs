// File: src/config.rs
// Purpose: Router configuration parsing from a [router] TOML table

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

/// Router configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Origin that relative navigation targets resolve against
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Location of the first history entry (default: "/")
    #[serde(default = "default_initial_location", alias = "initialLocation")]
    pub initial_location: String,
}

/// Shape of a config file; everything outside `[router]` is ignored
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    router: RouterConfig,
}

fn default_origin() -> String {
    "http://localhost".to_string()
}

fn default_initial_location() -> String {
    "/".to_string()
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            initial_location: default_initial_location(),
        }
    }
}

impl RouterConfig {
    /// Parse the `[router]` table out of TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let file: ConfigFile =
            toml::from_str(content).context("Failed to parse router configuration")?;
        file.router.validate()?;

        Ok(file.router)
    }

    /// Load configuration from a TOML file
    ///
    /// A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Check that the origin is an http(s) origin and the initial location is absolute
    pub fn validate(&self) -> Result<()> {
        let origin = Url::parse(&self.origin)
            .with_context(|| format!("Invalid router origin: {}", self.origin))?;

        if !matches!(origin.scheme(), "http" | "https") || origin.host_str().is_none() {
            bail!("Router origin must be an http(s) URL with a host: {}", self.origin);
        }

        if !self.initial_location.is_empty() && !self.initial_location.starts_with('/') {
            bail!(
                "Initial location must start with '/': {}",
                self.initial_location
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RouterConfig::default();
        assert_eq!(config.origin, "http://localhost");
        assert_eq!(config.initial_location, "/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config() {
        let config = RouterConfig::from_toml_str("").unwrap();
        assert_eq!(config, RouterConfig::default());
    }

    #[test]
    fn test_partial_table_uses_defaults() {
        let toml = r#"
            [router]
            initial_location = "/dashboard"
        "#;
        let config = RouterConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.origin, "http://localhost");
        assert_eq!(config.initial_location, "/dashboard");
    }

    #[test]
    fn test_other_tables_ignored() {
        let toml = r#"
            [server]
            port = 3000

            [router]
            origin = "https://app.example.com"
        "#;
        let config = RouterConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.origin, "https://app.example.com");
    }

    #[test]
    fn test_rejects_non_http_origin() {
        let toml = r#"
            [router]
            origin = "file:///tmp"
        "#;
        assert!(RouterConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_rejects_relative_initial_location() {
        let config = RouterConfig {
            initial_location: "dashboard".to_string(),
            ..RouterConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let config = RouterConfig::load("/nonexistent/wayfinder.toml").unwrap();
        assert_eq!(config, RouterConfig::default());
    }
}
