use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use quotedesk_core::chart::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};
use quotedesk_market_data::provider::binance::DEFAULT_BASE_URL;

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub binance_base_url: String,
    /// Unset means a tripped digital-asset breaker never resets.
    pub crypto_breaker_cooldown: Option<Duration>,
    pub chart_width: u32,
    pub chart_height: u32,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            binance_base_url: DEFAULT_BASE_URL.to_string(),
            crypto_breaker_cooldown: None,
            chart_width: DEFAULT_CHART_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr: SocketAddr = std::env::var("QD_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid QD_LISTEN_ADDR")?;
        let cors_allow = std::env::var("QD_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("QD_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let binance_base_url =
            std::env::var("QD_BINANCE_BASE_URL").unwrap_or(defaults.binance_base_url);
        let crypto_breaker_cooldown = std::env::var("QD_CRYPTO_BREAKER_COOLDOWN_SECS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        let chart_width = env_u32("QD_CHART_WIDTH").unwrap_or(defaults.chart_width);
        let chart_height = env_u32("QD_CHART_HEIGHT").unwrap_or(defaults.chart_height);
        let log_format = std::env::var("QD_LOG_FORMAT").unwrap_or(defaults.log_format);

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            binance_base_url,
            crypto_breaker_cooldown,
            chart_width,
            chart_height,
            log_format,
        })
    }
}

fn env_u32(key: &str) -> Option<u32> {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .filter(|v| *v > 0)
}
