//! Configuration loading.
//!
//! Settings come from a TOML file merged with `TREEBAK_*` environment
//! variables; the access token can also be supplied via `DISK_ACCESS_TOKEN`,
//! which takes precedence over the file. A missing token is a fatal
//! startup error.

use anyhow::{Context, Result, bail};
use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::models::BackupTarget;

pub const TOKEN_ENV: &str = "DISK_ACCESS_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// OAuth access token for the storage account.
    #[serde(default)]
    pub token: String,

    /// Directories to back up.
    #[serde(default)]
    pub items: Vec<ItemConfig>,

    /// External listing command.
    #[serde(default = "default_tree_command")]
    pub tree_command: String,

    /// Seconds to wait at the confirmation prompt before declining.
    #[serde(default)]
    pub confirm_timeout_secs: Option<u64>,

    #[serde(default)]
    pub notify: NotifyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemConfig {
    pub path: PathBuf,
    pub label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifyConfig {
    pub webhook_url: Option<String>,
}

fn default_tree_command() -> String {
    "tree".to_string()
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let mut config: AppConfig = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("TREEBAK_"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        if let Ok(token) = std::env::var(TOKEN_ENV) {
            if !token.is_empty() {
                config.token = token;
            }
        }

        if config.token.is_empty() {
            bail!(
                "no access token: set token in {} or export {}",
                path.display(),
                TOKEN_ENV
            );
        }

        Ok(config)
    }

    pub fn targets(&self) -> Vec<BackupTarget> {
        self.items
            .iter()
            .map(|item| BackupTarget {
                source_path: item.path.clone(),
                label: item.label.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_items_and_token_from_file() {
        let file = write_config(
            r#"
            token = "secret"

            [[items]]
            path = "/data/dropbox"
            label = "dropbox"

            [[items]]
            path = "/data/repos"
            label = "repos"
            "#,
        );

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.token, "secret");
        assert_eq!(config.tree_command, "tree");

        let targets = config.targets();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].label, "dropbox");
        assert_eq!(targets[1].source_path, PathBuf::from("/data/repos"));
    }

    #[test]
    fn missing_token_is_fatal() {
        let file = write_config(
            r#"
            [[items]]
            path = "/data/repos"
            label = "repos"
            "#,
        );

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("no access token"));
    }
}
