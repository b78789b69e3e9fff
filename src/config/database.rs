use serde::{Deserialize, Serialize};

/// Database connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database URL for SQLite.
    /// TOML: `database.url`. Default: `sqlite://nutri.db`.
    #[serde(default = "default_url")]
    pub url: String,

    /// Upper bound on pooled connections.
    /// TOML: `database.max_connections`. Default: `5`.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// How long a writer waits on a locked database before failing.
    /// TOML: `database.busy_timeout_secs`. Default: `5`.
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            busy_timeout_secs: default_busy_timeout_secs(),
        }
    }
}

fn default_url() -> String {
    "sqlite://nutri.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_busy_timeout_secs() -> u64 {
    5
}
