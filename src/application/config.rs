//! Application configuration

use crate::domain::Language;
use serde::{Deserialize, Serialize};

/// Which variants the composition root binds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Language of the bound greeter
    pub language: Language,
}

impl AppConfig {
    pub fn with_language(language: Language) -> Self {
        Self { language }
    }

    /// Parse a configuration from JSON; absent fields keep their defaults
    ///
    /// The binary always composes from `AppConfig::default()`. This is for
    /// embedders that keep their binding choice in a stored configuration and
    /// pass the result to `build_engine_with`.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }
}
