//! Run configuration.
//!
//! The snapshot metadata comes from the CI environment. Values may also be
//! supplied through a YAML file (`--config`); environment variables win.
//! Nothing below the CLI reads the process environment: the core receives
//! a fully resolved [`SubmissionConfig`].

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

use crate::shared::error::SubmissionError;
use crate::shared::Result;

pub const ENV_BRANCH: &str = "BRANCH";
pub const ENV_COMMIT: &str = "COMMIT";
pub const ENV_CORRELATOR: &str = "CORRELATOR";
pub const ENV_RUN_ID: &str = "RUN_ID";
pub const ENV_ACTION: &str = "GITHUB_ACTION";
pub const ENV_ACTION_REF: &str = "GITHUB_ACTION_REF";
pub const ENV_ACTION_REPOSITORY: &str = "GITHUB_ACTION_REPOSITORY";
pub const ENV_SERVER_URL: &str = "GITHUB_SERVER_URL";

/// Resolved configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionConfig {
    /// Git ref the snapshot belongs to
    pub branch: String,
    /// Commit sha the snapshot belongs to
    pub commit: String,
    pub correlator: String,
    pub run_id: String,
    /// Raw `GITHUB_ACTION` value the detector name is derived from
    pub action: String,
    /// May be empty
    pub action_ref: String,
    /// May be empty
    pub action_repository: String,
    pub server_url: String,
}

impl SubmissionConfig {
    /// Resolves the configuration from the process environment and an optional config file
    pub fn from_env(file: Option<&ConfigFile>) -> Result<Self> {
        Self::from_lookup(file, |name| std::env::var(name))
    }

    /// Resolves the configuration through `lookup`, falling back to `file` per setting.
    ///
    /// # Errors
    /// Returns [`SubmissionError::IncompleteEnvironment`] naming the first
    /// variable found in neither source, or [`SubmissionError::Validation`]
    /// for a variable that is set but not valid UTF-8.
    pub fn from_lookup<F>(file: Option<&ConfigFile>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let empty = ConfigFile::default();
        let file = file.unwrap_or(&empty);

        let require = |name: &str, fallback: &Option<String>| -> Result<String> {
            match lookup(name) {
                Ok(value) => Ok(value),
                Err(VarError::NotUnicode(_)) => Err(SubmissionError::Validation {
                    message: format!("environment variable {} is not valid UTF-8", name),
                }
                .into()),
                Err(VarError::NotPresent) => fallback.clone().ok_or_else(|| {
                    SubmissionError::IncompleteEnvironment {
                        name: name.to_string(),
                    }
                    .into()
                }),
            }
        };

        Ok(Self {
            branch: require(ENV_BRANCH, &file.branch)?,
            commit: require(ENV_COMMIT, &file.commit)?,
            correlator: require(ENV_CORRELATOR, &file.correlator)?,
            run_id: require(ENV_RUN_ID, &file.run_id)?,
            action: require(ENV_ACTION, &file.action)?,
            action_ref: require(ENV_ACTION_REF, &file.action_ref)?,
            action_repository: require(ENV_ACTION_REPOSITORY, &file.action_repository)?,
            server_url: require(ENV_SERVER_URL, &file.server_url)?,
        })
    }
}

/// Config file schema; every key is optional
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub branch: Option<String>,
    pub commit: Option<String>,
    pub correlator: Option<String>,
    pub run_id: Option<String>,
    pub action: Option<String>,
    pub action_ref: Option<String>,
    pub action_repository: Option<String>,
    pub server_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Settings that must not be blank when given in a file
fn validate_config(config: &ConfigFile) -> Result<()> {
    let required = [
        ("branch", &config.branch),
        ("commit", &config.commit),
        ("correlator", &config.correlator),
        ("run_id", &config.run_id),
        ("action", &config.action),
        ("server_url", &config.server_url),
    ];

    for (key, value) in required {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(SubmissionError::Validation {
                message: format!("config key '{}' must not be empty", key),
            }
            .into());
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
