//! Configuration file handling
//!
//! The configuration supplies the values scenario templates refer to:
//! the cluster domain, the SSH key used for `git push`, and the example
//! application under test. Values come from a TOML file with per-field
//! defaults; CLI flags override them after loading.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::paths::{self, config_path};
use super::{Error, Result};
use crate::template::Context;

/// Main configuration structure
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Domain the cluster answers under (apps are served at
    /// `<app>.<domain>`, the controller at `deis.<domain>`)
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Path to the SSH key used for `git push` deployments
    #[serde(default = "default_auth_key")]
    pub auth_key: String,

    /// Name of the example application repository to deploy
    #[serde(default = "default_example_app")]
    pub example_app: String,

    /// Additional fields made available to scenario templates
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            auth_key: default_auth_key(),
            example_app: default_example_app(),
            extra: BTreeMap::new(),
        }
    }
}

fn default_domain() -> String {
    "local.deisapp.com".to_string()
}

fn default_auth_key() -> String {
    "~/.ssh/deis".to_string()
}

fn default_example_app() -> String {
    "example-ruby-sinatra".to_string()
}

impl Config {
    /// Load configuration from a file
    ///
    /// With an explicit path the file must exist and parse. Without one,
    /// the platform config path is tried and defaults are returned if no
    /// file is present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Build the immutable template context for a run
    ///
    /// The context is constructed once per suite; templates only ever read
    /// from it. `extra` entries are added as-is, so a scenario file can
    /// refer to operator-defined fields.
    pub fn context(&self) -> Context {
        let mut fields = BTreeMap::new();
        fields.insert("Domain".to_string(), self.domain.clone());
        fields.insert("AuthKey".to_string(), expand_home(&self.auth_key));
        fields.insert("ExampleApp".to_string(), self.example_app.clone());
        for (name, value) in &self.extra {
            fields.insert(name.clone(), value.clone());
        }
        Context::new(fields)
    }
}

/// Expand a leading `~/` to the user's home directory
///
/// The key path ends up inside shell command text, where a quoted `~`
/// would not be expanded by the shell itself.
fn expand_home(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = paths::home_dir() {
            return home.join(rest).display().to_string();
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_missing() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.domain, default_domain());
        assert_eq!(config.auth_key, default_auth_key());
        assert_eq!(config.example_app, default_example_app());
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
domain = "example.com"
auth_key = "/tmp/key"
example_app = "example-go"

[extra]
Registry = "registry.example.com"
"#,
        )
        .unwrap();
        assert_eq!(config.domain, "example.com");
        assert_eq!(config.extra["Registry"], "registry.example.com");
    }

    #[test]
    fn test_context_carries_all_fields() {
        let mut config = Config::default();
        config.domain = "example.com".to_string();
        config
            .extra
            .insert("Registry".to_string(), "registry.example.com".to_string());

        let context = config.context();
        assert_eq!(context.get("Domain"), Some("example.com"));
        assert_eq!(context.get("Registry"), Some("registry.example.com"));
        assert!(context.get("ExampleApp").is_some());
    }

    #[test]
    fn test_expand_home_leaves_absolute_paths() {
        assert_eq!(expand_home("/tmp/key"), "/tmp/key");
    }

    #[test]
    fn test_expand_home_rewrites_tilde() {
        let expanded = expand_home("~/.ssh/deis");
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with(".ssh/deis"));
    }
}
