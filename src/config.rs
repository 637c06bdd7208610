use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;

use crate::global;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    /// host:port the browser uses to reach the server.
    pub reachable_addr: String,
    pub response_delay: Duration,
}

impl Config {
    /// Reads `LISTEN_ADDR`, `REACHABLE_ADDR` and `RESPONSE_DELAY_MS`, loading a
    /// `.env` file first if one exists.
    pub fn from_env() -> Result<Config> {
        dotenv().ok();
        Config::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let listen = var("LISTEN_ADDR").unwrap_or_else(|| global::DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = listen
            .parse()
            .with_context(|| format!("LISTEN_ADDR is not a socket address: {listen}"))?;

        let reachable_addr = var("REACHABLE_ADDR").unwrap_or_else(|| listen_addr.to_string());

        let response_delay = match var("RESPONSE_DELAY_MS") {
            Some(ms) => ms
                .parse::<u64>()
                .with_context(|| format!("RESPONSE_DELAY_MS is not a number: {ms}"))?,
            None => global::DEFAULT_RESPONSE_DELAY_MS,
        };

        Ok(Config {
            listen_addr,
            reachable_addr,
            response_delay: Duration::from_millis(response_delay),
        })
    }

    pub fn page_url(&self) -> String {
        format!("http://{}/", self.reachable_addr)
    }

    pub fn websocket_url(&self) -> String {
        format!("ws://{}/ws", self.reachable_addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:3030".parse::<SocketAddr>().unwrap());
        assert_eq!(config.reachable_addr, "127.0.0.1:3030");
        assert_eq!(config.response_delay, Duration::from_secs(1));
        assert_eq!(config.websocket_url(), "ws://127.0.0.1:3030/ws");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("LISTEN_ADDR", "0.0.0.0:8080"),
            ("REACHABLE_ADDR", "advisor.local:8080"),
            ("RESPONSE_DELAY_MS", "250"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.page_url(), "http://advisor.local:8080/");
        assert_eq!(config.response_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_values() {
        assert!(config_from(&[("LISTEN_ADDR", "nowhere")]).is_err());
        assert!(config_from(&[("RESPONSE_DELAY_MS", "soon")]).is_err());
    }
}
