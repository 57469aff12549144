use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Server configuration, read once at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port (`PORT`)
    #[serde(default = "default_port")]
    pub port: u16,

    /// MongoDB connection string (`DATABASE_URL`)
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Database holding the fruits collection
    #[serde(default = "default_database_name")]
    pub database_name: String,

    /// Directory served statically at the router fallback
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Log level / env-filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            database_url: default_database_url(),
            database_name: default_database_name(),
            static_dir: default_static_dir(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional `server` config file, then
    /// override with environment variables (`PORT`, `DATABASE_URL`, ...).
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("server").required(false))
            .add_source(config::Environment::default());

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_url() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_database_name() -> String {
    "fruits".to_string()
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.database_url, "mongodb://localhost:27017");
        assert_eq!(cfg.database_name, "fruits");
        assert_eq!(cfg.static_dir, "public");
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 3000);
    }
}
