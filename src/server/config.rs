use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
    time::Duration,
};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);
const DEFAULT_LOCK_TTL_SECONDS: u64 = 3;
const DEFAULT_RUN_TTL_SECONDS: u64 = 3600;

pub struct Config {
    pub database_url: String,
    /// Path of the JSON master data file.
    pub catalog_path: String,

    pub bind_addr: SocketAddr,

    pub lock_ttl: Duration,
    pub run_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            catalog_path: std::env::var("CATALOG_PATH")
                .map_err(|_| ConfigError::MissingEnvVar("CATALOG_PATH".to_string()))?,
            bind_addr: parse_or("BIND_ADDR", DEFAULT_BIND_ADDR)?,
            lock_ttl: Duration::from_secs(parse_or("LOCK_TTL_SECONDS", DEFAULT_LOCK_TTL_SECONDS)?),
            run_ttl: Duration::from_secs(parse_or("RUN_TTL_SECONDS", DEFAULT_RUN_TTL_SECONDS)?),
        })
    }
}

/// Parses an optional variable, falling back to `default` when it is unset.
fn parse_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
