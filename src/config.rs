use anyhow::{Context, Result};
use std::{env, net::SocketAddr};
use tracing::info;
use url::Url;

use crate::tmdb::TMDB_BASE;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub tmdb_api_key: String,
    pub tmdb_base_url: Url,
    pub bind_addr: SocketAddr,
    /// `APP_ENV=development`: upstream failures are logged at error level.
    pub diagnostics: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let tmdb_api_key = env::var("TMDB_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .context("Missing required environment variable: TMDB_API_KEY")?;

        let base = env::var("TMDB_BASE_URL").unwrap_or_else(|_| TMDB_BASE.to_string());
        let tmdb_base_url = parse_base_url(&base)?;

        let bind = env::var("RMDB_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse()
            .with_context(|| format!("RMDB_BIND_ADDR is not a socket address: {bind}"))?;

        let diagnostics = env::var("APP_ENV").is_ok_and(|v| v == "development");
        if diagnostics {
            info!("Development diagnostics enabled");
        }

        Ok(Self {
            tmdb_api_key,
            tmdb_base_url,
            bind_addr,
            diagnostics,
        })
    }
}

/// Endpoints are joined onto the base, so it must end with a slash or the
/// last path segment would be replaced.
fn parse_base_url(raw: &str) -> Result<Url> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized).with_context(|| format!("invalid TMDB_BASE_URL {raw}"))
}
