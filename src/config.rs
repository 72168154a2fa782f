use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_ENV: &str = "JIRA_CONFIG_FILE";
pub const API_TOKEN_ENV: &str = "JIRA_API_TOKEN";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Base URL of the Jira instance, e.g. `https://acme.atlassian.net`.
    pub server: String,
    /// Account email used for basic auth.
    pub login: String,
    /// Default project key for `issue list`.
    pub project: String,
    #[serde(default)]
    pub api_token: Option<String>,
}

impl Config {
    pub fn server(&self) -> &str {
        self.server.trim_end_matches('/')
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("server", &self.server),
            ("login", &self.login),
            ("project", &self.project),
        ] {
            if value.trim().is_empty() {
                bail!("Config key `{name}` must not be empty");
            }
        }
        if self.api_token.as_deref().map_or(true, |t| t.trim().is_empty()) {
            bail!("No API token configured. Set `api_token` in the config file or export {API_TOKEN_ENV}");
        }
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_FILE_ENV) {
        return PathBuf::from(path);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".jira")
        .join("config.toml")
}

pub fn load_config() -> Result<Config> {
    let token = std::env::var(API_TOKEN_ENV).ok();
    load_config_from(&config_path(), token)
}

/// Read the config at `path`. A token passed in `token_override` wins over the file.
pub fn load_config_from(path: &Path, token_override: Option<String>) -> Result<Config> {
    if !path.exists() {
        bail!(
            "Config file not found at {}. Create it with `server`, `login` and `project` keys",
            path.display()
        );
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let mut config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    if let Some(token) = token_override.filter(|t| !t.is_empty()) {
        config.api_token = Some(token);
    }
    config.validate()?;

    tracing::debug!(path = %path.display(), server = %config.server(), "loaded config");
    Ok(config)
}
