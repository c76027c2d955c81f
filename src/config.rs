//! Server settings from the environment.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::{debug, warn};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `LOCALITY_HOST` and `LOCALITY_PORT`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Explicit values win over the environment.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: load(&lookup, "LOCALITY_HOST", DEFAULT_HOST.to_string()),
            port: load(&lookup, "LOCALITY_PORT", DEFAULT_PORT),
        }
    }
}

fn load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        debug!("{key} not set, using default: {default}");
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value '{raw}': {e}, using default: {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config_from(&[]), ServerConfig::default());
    }

    #[test]
    fn test_env_values() {
        let cfg = config_from(&[("LOCALITY_HOST", "0.0.0.0"), ("LOCALITY_PORT", " 9000 ")]);
        assert_eq!(cfg.addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let cfg = config_from(&[("LOCALITY_PORT", "eighty")]);
        assert_eq!(cfg.port, DEFAULT_PORT);
    }

    #[test]
    fn test_overrides_win() {
        let cfg = config_from(&[("LOCALITY_PORT", "9000")])
            .with_overrides(Some("localhost".into()), Some(3000));
        assert_eq!(cfg.addr(), "localhost:3000");
    }
}
