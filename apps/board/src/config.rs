//! Application configuration loading from environment variables.
//!
//! Configuration is read once at startup with `std::env::var`; a `.env` file
//! is honoured in development through `dotenvy`.
//!
//! # Environment Variables
//!
//! ## Required Variables
//! - `JWT_SECRET`: Secret used to verify viewer bearer tokens
//!
//! ## Optional Variables
//! - `RUST_LOG`: Logging level (default: "info,board=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `DISPATCH_URL`: Base URL of the post store receiving intents (default: none, intents are dropped)
//! - `DISPATCH_TIMEOUT_SECONDS`: Timeout for one dispatch to the store (default: 5)
//! - `VOTER_BREAKDOWN_ORDER`: `first_vote` or `most_votes` (default: "first_vote")

use crate::domain::post::vote_ledger::VoterOrder;
use serde::Deserialize;

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Secret key for verifying viewer JWTs (HS256)
    pub jwt_secret: String,

    /// Base URL of the store that owns posts; `None` binds the no-op dispatcher
    pub dispatch_url: Option<String>,

    /// Seconds to wait for the store before giving up on a dispatch
    pub dispatch_timeout_seconds: u64,

    /// Ordering of the "liked by" breakdown
    pub voter_order: VoterOrder,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a set variable
    /// cannot be parsed to the expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 3000)?,
            jwt_secret: env_required("JWT_SECRET")?,
            dispatch_url: std::env::var("DISPATCH_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            dispatch_timeout_seconds: env_or("DISPATCH_TIMEOUT_SECONDS", 5)?,
            voter_order: env_or("VOTER_BREAKDOWN_ORDER", VoterOrder::FirstVote)?,
        })
    }
}

/// Load a required environment variable.
///
/// # Errors
///
/// Returns an error if the variable is not set.
fn env_required(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("Missing required environment variable: {}", key))
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
