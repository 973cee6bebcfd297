use std::{fmt::Display, net::SocketAddr, str::FromStr, time::Duration};

use anyhow::Context;
use wanderplan_core::constants::DEFAULT_PLANNING_DELAY_MS;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30000;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub planning_delay: Duration,
}

impl Config {
    /// Reads the configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `WP_LISTEN_ADDR` wins over `PORT`; without either the server binds
    /// `0.0.0.0:5000`. An unparsable `WP_LISTEN_ADDR` is an error, other
    /// unparsable numbers fall back to their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = match lookup("WP_LISTEN_ADDR") {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("Invalid WP_LISTEN_ADDR '{}'", addr))?,
            None => SocketAddr::from(([0, 0, 0, 0], parse_or(&lookup, "PORT", DEFAULT_PORT))),
        };
        let db_path = lookup("WP_DB_PATH").unwrap_or_else(|| "./db/wanderplan.db".into());
        let cors_allow = lookup("WP_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms = parse_or(&lookup, "WP_REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS);
        let planning_delay_ms =
            parse_or(&lookup, "WP_PLANNING_DELAY_MS", DEFAULT_PLANNING_DELAY_MS);

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            planning_delay: Duration::from_millis(planning_delay_ms),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("Invalid {} '{}', using default {}", key, raw, default);
            default
        }
    }
}
