use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_SETTINGS_FILE: &str = "client.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub users_url: String,
    pub request_timeout_secs: Option<u64>,
    pub command_queue_capacity: usize,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            users_url: DEFAULT_USERS_URL.into(),
            request_timeout_secs: None,
            command_queue_capacity: 64,
        }
    }
}

impl ClientSettings {
    pub fn users_url(&self) -> anyhow::Result<Url> {
        Url::parse(self.users_url.trim())
            .with_context(|| format!("invalid users url '{}'", self.users_url))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    users_url: Option<String>,
    request_timeout_secs: Option<u64>,
    command_queue_capacity: Option<usize>,
}

/// Defaults, then `client.toml` in the working directory, then environment.
pub fn load_settings() -> anyhow::Result<ClientSettings> {
    load_settings_from(Path::new(DEFAULT_SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// A missing file is not an error; a malformed one is.
pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ClientSettings> {
    let mut settings = ClientSettings::default();

    if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
        let file_cfg: FileSettings = toml::from_str(&raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
        if let Some(v) = file_cfg.users_url {
            settings.users_url = v;
        }
        if let Some(v) = file_cfg.request_timeout_secs {
            settings.request_timeout_secs = Some(v);
        }
        if let Some(v) = file_cfg.command_queue_capacity {
            settings.command_queue_capacity = v;
        }
    }

    if let Some(v) = env("USERS_URL") {
        settings.users_url = v;
    }
    if let Some(v) = env("APP__USERS_URL") {
        settings.users_url = v;
    }

    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        let parsed = v
            .parse::<u64>()
            .with_context(|| format!("APP__REQUEST_TIMEOUT_SECS must be an integer, got '{v}'"))?;
        settings.request_timeout_secs = Some(parsed);
    }

    if let Some(v) = env("APP__COMMAND_QUEUE_CAPACITY") {
        if let Ok(parsed) = v.parse::<usize>() {
            settings.command_queue_capacity = parsed;
        }
    }

    settings.command_queue_capacity = settings.command_queue_capacity.max(1);
    Ok(settings)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
