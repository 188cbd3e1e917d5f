//! Runtime configuration read from the environment (and `.env`).

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_addr: SocketAddr,
    /// Holds the stored preset library.
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
    pub debug_mode: bool,
}

impl AppConfig {
    /// Loads `.env` when present, then reads `DATERANGE_*` variables.
    pub fn load() -> Result<Self> {
        // A missing .env file is normal outside development.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let server_addr = get("DATERANGE_SERVER_ADDR", DEFAULT_SERVER_ADDR);
        let server_addr = server_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid DATERANGE_SERVER_ADDR: {server_addr}"))?;

        Ok(Self {
            server_addr,
            data_dir: PathBuf::from(get("DATERANGE_DATA_DIR", DEFAULT_DATA_DIR)),
            log_dir: PathBuf::from(get("DATERANGE_LOG_DIR", DEFAULT_LOG_DIR)),
            log_level: get("DATERANGE_LOG_LEVEL", DEFAULT_LOG_LEVEL),
            debug_mode: lookup("DATERANGE_DEBUG_MODE")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false),
        })
    }
}
