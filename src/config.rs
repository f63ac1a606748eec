use crate::error::ExchangeError;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;
use url::Url;

/// Prefix for every environment variable read into [`Config`].
pub const ENV_PREFIX: &str = "EXCHANGE_";

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::load().expect("FATAL: invalid EXCHANGE_* configuration"));

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub loglevel: String,
    pub proxy: Option<Url>,
    pub probe_url: Url,
    pub probe_timeout_secs: u64,
    pub user_id: i64,
    pub net_sysfs_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:exchange.db".to_string(),
            loglevel: "info".to_string(),
            proxy: None,
            probe_url: Url::parse("https://www.google.com").expect("static probe url"),
            probe_timeout_secs: 2,
            user_id: 1,
            net_sysfs_root: PathBuf::from("/sys/class/net"),
        }
    }
}

impl Config {
    /// Defaults overlaid with `EXCHANGE_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_figment(figment: &Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }

    pub fn load() -> Result<Self, ExchangeError> {
        Ok(Self::from_figment(&Self::figment())?)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}
