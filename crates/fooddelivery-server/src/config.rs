// File: src/config.rs
// Purpose: Configuration parsing from fooddelivery.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "fooddelivery.toml";

/// Environment variable that points at another config file
pub const CONFIG_PATH_ENV: &str = "FOODDELIVERY_CONFIG";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Shown in the navbar and the page title
    #[serde(default = "default_name")]
    pub name: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Search form behavior
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchConfig {
    /// Forward an accepted PLZ to the restaurant catalog.
    ///
    /// Off by default: an accepted submit only clears the form.
    #[serde(default)]
    pub forward_to_lookup: bool,
}

/// Restaurant catalog
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// JSON file with the restaurants to serve. Empty catalog when unset.
    /// A relative path is taken relative to the config file's directory.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

impl CatalogConfig {
    fn resolve_relative_to(&mut self, base: &Path) {
        if base.as_os_str().is_empty() {
            return;
        }
        if let Some(seed) = self.seed_file.as_mut() {
            if seed.is_relative() {
                *seed = base.join(&*seed);
            }
        }
    }
}

fn default_name() -> String {
    "Food Delivery".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl ServerConfig {
    /// `host:port` to bind
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        if let Some(dir) = path.parent() {
            config.catalog.resolve_relative_to(dir);
        }

        Ok(config)
    }

    /// Load from `$FOODDELIVERY_CONFIG`, falling back to ./fooddelivery.toml,
    /// then apply `HOST`/`PORT` from the environment
    pub fn load_default() -> Result<Self> {
        Self::load_from_env(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::load_default`], reading variables through `var`.
    /// A bad override is an error; the file config is never swapped for defaults.
    pub fn load_from_env(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let path = var(CONFIG_PATH_ENV).unwrap_or_else(|| DEFAULT_CONFIG_PATH.into());
        Self::load(&path)?.with_env_overrides(var)
    }

    /// Override server settings from `HOST` and `PORT`
    pub fn with_env_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(host) = var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {:?}", port))?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.addr(), "127.0.0.1:3000");
        assert!(!config.search.forward_to_lookup);
        assert!(config.catalog.seed_file.is_none());
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.project.name, "Food Delivery");
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [search]
            forward_to_lookup = true

            [catalog]
            seed_file = "restaurants.json"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.search.forward_to_lookup);
        assert_eq!(config.catalog.seed_file.as_deref(), Some(Path::new("restaurants.json")));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let config = Config::load("no/such/fooddelivery.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = \"not a number\"").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default()
            .with_env_overrides(|key| match key {
                "HOST" => Some("0.0.0.0".to_string()),
                "PORT" => Some("8080".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.server.addr(), "0.0.0.0:8080");

        let bad = Config::default().with_env_overrides(|key| {
            (key == "PORT").then(|| "eighty".to_string())
        });
        assert!(bad.is_err());
    }

    fn write_config(dir: &Path) -> PathBuf {
        let path = dir.join("fooddelivery.toml");
        fs::write(
            &path,
            r#"
                [project]
                name = "Lieferdienst"

                [search]
                forward_to_lookup = true

                [catalog]
                seed_file = "data/restaurants.json"
            "#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_bad_port_override_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path());

        let result = Config::load_from_env(|key| match key {
            CONFIG_PATH_ENV => Some(path.to_string_lossy().into_owned()),
            "PORT" => Some("eighty".to_string()),
            _ => None,
        });

        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_keep_file_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path());

        let config = Config::load_from_env(|key| match key {
            CONFIG_PATH_ENV => Some(path.to_string_lossy().into_owned()),
            "PORT" => Some("8080".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.project.name, "Lieferdienst");
        assert!(config.search.forward_to_lookup);
        assert_eq!(
            config.catalog.seed_file,
            Some(dir.path().join("data/restaurants.json"))
        );
    }

    #[test]
    fn test_seed_file_relative_to_config_dir() {
        let mut catalog = CatalogConfig {
            seed_file: Some(PathBuf::from("restaurants.json")),
        };
        catalog.resolve_relative_to(Path::new("/etc/fooddelivery"));
        assert_eq!(
            catalog.seed_file,
            Some(PathBuf::from("/etc/fooddelivery/restaurants.json"))
        );

        // Absolute paths and a config in the working directory stay as they are
        let mut absolute = CatalogConfig {
            seed_file: Some(PathBuf::from("/srv/restaurants.json")),
        };
        absolute.resolve_relative_to(Path::new("/etc/fooddelivery"));
        assert_eq!(absolute.seed_file, Some(PathBuf::from("/srv/restaurants.json")));

        let mut local = CatalogConfig {
            seed_file: Some(PathBuf::from("restaurants.json")),
        };
        local.resolve_relative_to(Path::new(""));
        assert_eq!(local.seed_file, Some(PathBuf::from("restaurants.json")));
    }
}
