use anyhow::{bail, Context, Result};
use std::net::SocketAddr;
use std::time::Duration;

/// Placeholder upstream; the real service is expected to be swapped in via env
pub const DEFAULT_API_URL: &str = "https://api.accommodation-site.com/search";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Headers sent with every upstream request
pub const REQUEST_HEADERS: [(&str, &str); 5] = [
    (
        "User-Agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
    ),
    ("Accept", "application/json, text/plain, */*"),
    ("Accept-Language", "ko-KR,ko;q=0.9,en;q=0.8"),
    ("Accept-Encoding", "gzip, deflate, br"),
    ("Connection", "keep-alive"),
];

/// What to do when the upstream fetch fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Replace the failed fetch with synthetic listings
    #[default]
    Synthetic,
    /// Propagate the upstream error to the caller
    Surface,
}

impl std::str::FromStr for FallbackPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "synthetic" | "mock" => Ok(Self::Synthetic),
            "surface" | "error" => Ok(Self::Surface),
            other => bail!("unknown fallback policy '{}'", other),
        }
    }
}

/// Process-wide crawler settings, immutable after startup
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub fallback: FallbackPolicy,
    pub bind_addr: SocketAddr,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            fallback: FallbackPolicy::default(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
        }
    }
}

impl CrawlerConfig {
    /// Load settings from the process environment (and `.env` if present)
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("ACCOMMODATION_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match lookup("CRAWLER_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("Invalid CRAWLER_TIMEOUT_SECS '{}'", raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("CRAWLER_TIMEOUT_SECS must be greater than zero");
        }

        let fallback = match lookup("CRAWLER_FALLBACK") {
            Some(raw) => raw.parse().context("Invalid CRAWLER_FALLBACK")?,
            None => FallbackPolicy::default(),
        };

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid BIND_ADDR '{}'", bind_raw))?;

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
            fallback,
            bind_addr,
        })
    }
}
