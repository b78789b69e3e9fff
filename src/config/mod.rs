mod database;
mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP server settings (see `server` table in config.toml).
    #[serde(default)]
    pub server: ServerConfig,

    /// Database settings (see `database` table in config.toml).
    #[serde(default)]
    pub database: DatabaseConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "NUTRI_";

impl Config {
    /// Builds a Figment that merges defaults, an optional config TOML file, and
    /// `NUTRI_`-prefixed environment variables (`__` separates nested keys,
    /// e.g. `NUTRI_SERVER__LISTEN_PORT`).
    pub fn figment() -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads configuration from all sources.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_apply_without_sources() {
        Jail::expect_with(|_jail| {
            let cfg = Config::load()?;
            assert_eq!(cfg.server.listen_port, 8000);
            assert_eq!(cfg.server.loglevel, "info");
            assert_eq!(cfg.server.cors_allow_origins, vec!["*".to_string()]);
            assert_eq!(cfg.database.url, "sqlite://nutri.db");
            assert_eq!(cfg.database.max_connections, 5);
            Ok(())
        });
    }

    #[test]
    fn toml_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [server]
                listen_port = 9000
                context_path = "/api"

                [database]
                url = "sqlite://from-toml.db"
                "#,
            )?;
            jail.set_env("NUTRI_DATABASE__URL", "sqlite://from-env.db");

            let cfg = Config::load()?;
            assert_eq!(cfg.server.listen_port, 9000);
            assert_eq!(cfg.server.context_path, "/api");
            assert_eq!(cfg.database.url, "sqlite://from-env.db");
            // Untouched keys keep their defaults.
            assert_eq!(cfg.database.busy_timeout_secs, 5);
            Ok(())
        });
    }
}
