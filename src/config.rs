use std::net::IpAddr;
use std::time::Duration;

use axum::http::HeaderValue;

pub const DEFAULT_DISPATCH_URL: &str =
    "https://api.github.com/repos/nthpaul/waitlist-data/dispatches";

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub dispatch_url: String,
    pub dispatch_timeout: Duration,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub allowed_origin: HeaderValue,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let github_token = env_required("GITHUB_TOKEN")?;
        if github_token.trim().is_empty() {
            return Err("GITHUB_TOKEN must not be empty".to_string());
        }

        let dispatch_url = env_or("WAITLIST_DISPATCH_URL", DEFAULT_DISPATCH_URL);

        let dispatch_timeout_secs: u64 = env_or("WAITLIST_DISPATCH_TIMEOUT_SECS", "10")
            .parse()
            .map_err(|e| format!("Invalid WAITLIST_DISPATCH_TIMEOUT_SECS: {e}"))?;

        let host: IpAddr = env_or("WAITLIST_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid WAITLIST_HOST: {e}"))?;

        let port: u16 = env_or("WAITLIST_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid WAITLIST_PORT: {e}"))?;

        let max_body_size: usize = env_or("WAITLIST_MAX_BODY_SIZE", "16384")
            .parse()
            .map_err(|e| format!("Invalid WAITLIST_MAX_BODY_SIZE: {e}"))?;

        let allowed_origin = HeaderValue::from_str(&env_or("WAITLIST_ALLOWED_ORIGIN", "*"))
            .map_err(|e| format!("Invalid WAITLIST_ALLOWED_ORIGIN: {e}"))?;
        let log_level = env_or("WAITLIST_LOG_LEVEL", "info");

        Ok(Config {
            github_token,
            dispatch_url,
            dispatch_timeout: Duration::from_secs(dispatch_timeout_secs),
            host,
            port,
            max_body_size,
            allowed_origin,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
