use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::{AppError, AppResult};

pub const HOST_VAR: &str = "DASHBOARD_HOST";
pub const PORT_VAR: &str = "DASHBOARD_PORT";
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 8050;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT),
        }
    }
}

impl Config {
    /// Reads the process environment, loading `.env` first outside production.
    pub fn from_env() -> AppResult<Self> {
        if std::env::var("ENV").ok().as_deref() != Some("prod") {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let host = match lookup(HOST_VAR) {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|e| AppError::InvalidConfig {
                key: HOST_VAR,
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_HOST,
        };
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| AppError::InvalidConfig {
                key: PORT_VAR,
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            addr: SocketAddr::new(host, port),
        })
    }
}
