//! # Client Configuration
//!
//! Settings for the swap client, loaded from environment variables (and a
//! `.env` file when present). Everything has a default so the client starts
//! against a local backend with no setup.
//!
//! | Variable                   | Default                  |
//! |----------------------------|--------------------------|
//! | `SWAP_API_BASE_URL`        | `http://127.0.0.1:3001`  |
//! | `SWAP_API_TOKEN`           | unset                    |
//! | `SWAP_HTTP_TIMEOUT_SECS`   | `10`                     |
//! | `SWAP_DEBOUNCE_MS`         | `1000`                   |
//! | `SWAP_QUOTE_VALIDITY_SECS` | `15`                     |
//! | `SWAP_PAIRS_TTL_SECS`      | `300`                    |
//! | `SWAP_WALLET_POLL_SECS`    | `0` (no polling)         |
//! | `SWAP_DEFAULT_SELL`        | `BTC`                    |
//! | `SWAP_DEFAULT_BUY`         | `NGN`                    |

use std::env;
use std::str::FromStr;
use std::time::Duration;

use super::error::{AppError, Result};

/// Base URL for backend API server
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3001";

/// Quiet period before an amount edit turns into a quote request
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

/// How long a quote may be executed against, measured from request issuance
pub const DEFAULT_QUOTE_VALIDITY: Duration = Duration::from_secs(15);

/// Swap client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend root, without trailing slash
    pub api_base_url: String,
    /// Bearer token sent on every request
    pub api_token: Option<String>,
    /// Per-request timeout
    pub http_timeout: Duration,
    /// Amount-field debounce
    pub debounce: Duration,
    /// Quote validity window
    pub quote_validity: Duration,
    /// Supported-pairs cache lifetime
    pub pairs_ttl: Duration,
    /// Wallet balance polling interval; `None` disables polling
    pub wallet_poll: Option<Duration>,
    pub default_sell: String,
    pub default_buy: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_token: None,
            http_timeout: Duration::from_secs(10),
            debounce: DEFAULT_DEBOUNCE,
            quote_validity: DEFAULT_QUOTE_VALIDITY,
            pairs_ttl: Duration::from_secs(300),
            wallet_poll: None,
            default_sell: "BTC".to_string(),
            default_buy: "NGN".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from the process environment, reading `.env` first.
    pub fn from_env() -> Result<Self> {
        // A missing .env is the normal case outside development
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup("SWAP_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "SWAP_API_BASE_URL must be an http(s) URL, got {}",
                api_base_url
            )));
        }

        let api_token = lookup("SWAP_API_TOKEN").filter(|t| !t.trim().is_empty());

        let http_timeout = parse_or(&lookup, "SWAP_HTTP_TIMEOUT_SECS", 10u64)?;
        if http_timeout == 0 {
            return Err(AppError::Config(
                "SWAP_HTTP_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }
        let debounce_ms = parse_or(&lookup, "SWAP_DEBOUNCE_MS", 1000u64)?;
        let validity_secs = parse_or(&lookup, "SWAP_QUOTE_VALIDITY_SECS", 15u64)?;
        if validity_secs == 0 {
            return Err(AppError::Config(
                "SWAP_QUOTE_VALIDITY_SECS must be at least 1".to_string(),
            ));
        }
        let pairs_ttl_secs = parse_or(&lookup, "SWAP_PAIRS_TTL_SECS", 300u64)?;
        let wallet_poll_secs = parse_or(&lookup, "SWAP_WALLET_POLL_SECS", 0u64)?;

        Ok(Self {
            api_base_url,
            api_token,
            http_timeout: Duration::from_secs(http_timeout),
            debounce: Duration::from_millis(debounce_ms),
            quote_validity: Duration::from_secs(validity_secs),
            pairs_ttl: Duration::from_secs(pairs_ttl_secs),
            wallet_poll: (wallet_poll_secs > 0).then(|| Duration::from_secs(wallet_poll_secs)),
            default_sell: lookup("SWAP_DEFAULT_SELL")
                .map(|c| c.to_uppercase())
                .unwrap_or(defaults.default_sell),
            default_buy: lookup("SWAP_DEFAULT_BUY")
                .map(|c| c.to_uppercase())
                .unwrap_or(defaults.default_buy),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} must be a valid number: {}", name, e))),
        None => Ok(default),
    }
}
