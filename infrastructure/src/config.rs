use domain::memory::DEFAULT_WINDOW;
use dotenvy::dotenv;
use std::env;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY not found. Check your .env file.")]
    MissingApiKey,
    #[error("memory window must be at least 1")]
    EmptyMemoryWindow,
}

/// Values the command line may override.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub memory_window: Option<usize>,
}

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub memory_window: usize,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("memory_window", &self.memory_window)
            .finish()
    }
}

impl Config {
    /// Load `.env`, then the process environment, then apply overrides.
    pub fn load(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok(), overrides)
    }

    pub fn from_lookup<F>(lookup: F, overrides: ConfigOverrides) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let model = overrides
            .model
            .or_else(|| lookup("OPENAI_MODEL"))
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = overrides
            .base_url
            .or_else(|| lookup("OPENAI_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let memory_window = overrides.memory_window.unwrap_or(DEFAULT_WINDOW);
        if memory_window == 0 {
            return Err(ConfigError::EmptyMemoryWindow);
        }

        Ok(Self {
            api_key,
            model,
            base_url,
            memory_window,
        })
    }
}
