//! Process configuration from environment (and `.env`, loaded by the binary).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// DSN value that selects the in-process store instead of PostgreSQL.
pub const MEMORY_DSN: &str = "memory:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Storage {
    Postgres(String),
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub storage: Storage,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub max_body_bytes: usize,
}

impl Config {
    /// `DSN` (or `DATABASE_URL`) is required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dsn = get("DSN")
            .or_else(|| get("DATABASE_URL"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("DSN"))?;
        let storage = if dsn == MEMORY_DSN {
            Storage::Memory
        } else {
            Storage::Postgres(dsn)
        };

        Ok(Config {
            storage,
            bind_addr: parse_or(&get, "BIND_ADDR", || DEFAULT_BIND_ADDR.parse().ok())?,
            max_connections: parse_or(&get, "DB_MAX_CONNECTIONS", || Some(DEFAULT_MAX_CONNECTIONS))?,
            max_body_bytes: parse_or(&get, "MAX_BODY_BYTES", || Some(DEFAULT_MAX_BODY_BYTES))?,
        })
    }
}

fn parse_or<T, F, D>(get: &F, var: &'static str, default: D) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
    D: FnOnce() -> Option<T>,
{
    match get(var) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { var, value: raw }),
        None => default().ok_or(ConfigError::Missing(var)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_applied() {
        let cfg = Config::from_lookup(lookup(&[("DSN", "postgres://localhost/ads")])).unwrap();
        assert_eq!(cfg.storage, Storage::Postgres("postgres://localhost/ads".into()));
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(cfg.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(cfg.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn database_url_fallback_and_memory() {
        let cfg = Config::from_lookup(lookup(&[("DATABASE_URL", "memory:")])).unwrap();
        assert_eq!(cfg.storage, Storage::Memory);
    }

    #[test]
    fn missing_dsn_fails() {
        assert!(matches!(Config::from_lookup(lookup(&[])), Err(ConfigError::Missing("DSN"))));
        assert!(matches!(Config::from_lookup(lookup(&[("DSN", "  ")])), Err(ConfigError::Missing("DSN"))));
    }

    #[test]
    fn invalid_values_fail() {
        let err = Config::from_lookup(lookup(&[("DSN", "memory:"), ("BIND_ADDR", "nowhere")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "BIND_ADDR", .. }));
        let err = Config::from_lookup(lookup(&[("DSN", "memory:"), ("DB_MAX_CONNECTIONS", "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "DB_MAX_CONNECTIONS", .. }));
    }
}
