use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// HTTP server configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// HTTP server listen address (e.g., "0.0.0.0", "127.0.0.1").
    /// TOML: `server.listen_addr`. Default: `0.0.0.0`.
    #[serde(default = "default_listen_ip")]
    pub listen_addr: IpAddr,

    /// HTTP server listen port.
    /// TOML: `server.listen_port`. Default: `8000`.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Log level for tracing subscriber initialization (e.g., "error", "warn", "info", "debug", "trace").
    /// TOML: `server.loglevel`. Default: `info`.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    /// Path prefix under which every route is mounted (e.g. "/api/v1").
    /// TOML: `server.context_path`. Default: empty (routes served at the root).
    #[serde(default)]
    pub context_path: String,

    /// Origins allowed by CORS. `"*"` mirrors any origin.
    /// TOML: `server.cors_allow_origins`. Default: `["*"]`.
    #[serde(default = "default_cors_allow_origins")]
    pub cors_allow_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_ip(),
            listen_port: default_listen_port(),
            loglevel: default_loglevel(),
            context_path: String::new(),
            cors_allow_origins: default_cors_allow_origins(),
        }
    }
}

impl ServerConfig {
    /// Normalized context path: leading slash, no trailing slash, `None` for the root.
    pub fn normalized_context_path(&self) -> Option<String> {
        let trimmed = self.context_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(format!("/{trimmed}"))
        }
    }
}

/// Default IP address for the HTTP server listen address.
fn default_listen_ip() -> IpAddr {
    Ipv4Addr::new(0, 0, 0, 0).into()
}

/// Default port for the HTTP server.
fn default_listen_port() -> u16 {
    8000
}

fn default_loglevel() -> String {
    "info".to_string()
}

fn default_cors_allow_origins() -> Vec<String> {
    vec!["*".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_path_is_normalized() {
        let mut cfg = ServerConfig::default();
        assert_eq!(cfg.normalized_context_path(), None);

        cfg.context_path = "/".to_string();
        assert_eq!(cfg.normalized_context_path(), None);

        cfg.context_path = "api/v1/".to_string();
        assert_eq!(cfg.normalized_context_path().as_deref(), Some("/api/v1"));
    }

    #[test]
    fn missing_keys_fall_back_to_documented_defaults() {
        let cfg: ServerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.listen_addr, IpAddr::from(Ipv4Addr::UNSPECIFIED));
        assert_eq!(cfg.listen_port, 8000);
        assert_eq!(cfg.loglevel, "info");
        assert_eq!(cfg.context_path, "");
        assert_eq!(cfg.cors_allow_origins, vec!["*".to_string()]);
    }
}
