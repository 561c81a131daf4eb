use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::warn;

use crate::error::WellnessResult;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// sqlx connection string for the local store.
    pub database_url: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://bloom.db".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults overlaid with `BLOOM_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("BLOOM_"))
    }

    pub fn load() -> WellnessResult<Self> {
        Ok(Self::figment().extract()?)
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration; using defaults");
        Config::default()
    })
});
