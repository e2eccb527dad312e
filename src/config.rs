//! Process-wide relay configuration, loaded once at startup.

use crate::{FetcherConfig, LogConfig, RelayError};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "relayer.toml";
pub const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

#[derive(Clone, Deserialize)]
pub struct RelayConfig {
    /// Bot token used by the chat session and the preview sink.
    pub discord_token: String,

    pub weasyl_api_key: String,

    /// Messages from this user id are never relayed.
    #[serde(default)]
    pub bot_user_id: Option<String>,

    #[serde(default = "default_discord_api_base")]
    pub discord_api_base: String,

    #[serde(default)]
    pub fetcher: FetcherConfig,

    #[serde(default)]
    pub log: LogConfig,
}

fn default_discord_api_base() -> String {
    DISCORD_API_BASE.to_string()
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("discord_token", &"<redacted>")
            .field("weasyl_api_key", &"<redacted>")
            .field("bot_user_id", &self.bot_user_id)
            .field("discord_api_base", &self.discord_api_base)
            .field("fetcher", &self.fetcher)
            .field("log", &self.log)
            .finish()
    }
}

impl RelayConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RelayError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading relay configuration");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, RelayError> {
        let config: RelayConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), RelayError> {
        if self.discord_token.trim().is_empty() {
            return Err(RelayError::Config("discord_token must not be empty".into()));
        }
        if self.fetcher.timeout_secs == 0 {
            return Err(RelayError::Config(
                "fetcher.timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self {
            discord_token: "discord-token".into(),
            weasyl_api_key: "weasyl-key".into(),
            bot_user_id: Some("42".into()),
            discord_api_base: default_discord_api_base(),
            fetcher: FetcherConfig::default(),
            log: LogConfig::default(),
        }
    }
}
