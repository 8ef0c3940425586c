mod basic;

pub use basic::BasicConfig;

use crate::error::DaybookError;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "DAYBOOK_";

impl Config {
    /// Builds a Figment that merges, in increasing priority: defaults, `config.toml` (if present),
    /// `DAYBOOK_*` environment variables (`__` separates nesting levels) and `FRONTEND_ORIGIN`.
    pub fn figment() -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(
                Env::raw()
                    .only(&["FRONTEND_ORIGIN"])
                    .map(|_| "basic.frontend_origin".into()),
            )
    }

    /// Loads configuration from all sources. The caller owns the result; nothing is cached globally.
    pub fn load() -> Result<Self, DaybookError> {
        Self::figment()
            .extract()
            .map_err(|err| DaybookError::Config(err.to_string()))
    }
}
