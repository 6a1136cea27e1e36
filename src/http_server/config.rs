//! `[server]` section of the config file.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Where the conversion API listens and which browser origins may call it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    /// 5000 unless configured, the port the page expects.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed to call `/api` from a browser. Empty means any.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Replaces the configured port with the one given on the command line.
    pub fn override_port(&mut self, port: Option<u16>) {
        if let Some(port) = port {
            self.port = port;
        }
    }

    /// `host:port`, as handed to the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Configured origins as header values. Entries that are not valid header
    /// values are logged and skipped.
    pub fn allowed_origins(&self) -> Vec<HeaderValue> {
        self.cors_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect()
    }
}
