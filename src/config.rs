//! Server configuration.
//!
//! Values come from the process environment, after `main` has loaded an
//! optional `.env` file. Every variable is optional; the defaults listen on
//! all interfaces at port 8082.

use crate::error::{Result, ServiceError};
use std::str::FromStr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8082;
pub const DEFAULT_LOG_FILTER: &str = "garden_service=info,actix_web=info";

pub const HOST_VAR: &str = "GARDEN_HOST";
pub const PORT_VAR: &str = "GARDEN_PORT";
pub const WORKERS_VAR: &str = "GARDEN_WORKERS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Worker thread count; `None` leaves the choice to actix-web.
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let host = get(HOST_VAR).unwrap_or(defaults.host);
        let port = match get(PORT_VAR) {
            Some(raw) => parse_var(PORT_VAR, &raw)?,
            None => defaults.port,
        };
        let workers = match get(WORKERS_VAR) {
            Some(raw) => {
                let workers: usize = parse_var(WORKERS_VAR, &raw)?;
                if workers == 0 {
                    return Err(ServiceError::InvalidConfig {
                        key: WORKERS_VAR,
                        value: raw,
                        reason: "must be at least 1".to_string(),
                    });
                }
                Some(workers)
            }
            None => defaults.workers,
        };

        Ok(Self {
            host,
            port,
            workers,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(key: &'static str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ServiceError::InvalidConfig {
            key,
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8082");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, " 9000 "),
            (WORKERS_VAR, "4"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.workers, Some(4));
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config =
            ServerConfig::from_lookup(lookup(&[(HOST_VAR, ""), (PORT_VAR, "  ")])).unwrap();

        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup(&[(PORT_VAR, "eighty")])).unwrap_err();

        match err {
            ServiceError::InvalidConfig { key, value, .. } => {
                assert_eq!(key, PORT_VAR);
                assert_eq!(value, "eighty");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_port_out_of_range() {
        let result = ServerConfig::from_lookup(lookup(&[(PORT_VAR, "70000")]));
        assert!(matches!(
            result,
            Err(ServiceError::InvalidConfig { key: PORT_VAR, .. })
        ));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let result = ServerConfig::from_lookup(lookup(&[(WORKERS_VAR, "0")]));
        assert!(matches!(
            result,
            Err(ServiceError::InvalidConfig { key: WORKERS_VAR, .. })
        ));
    }
}
