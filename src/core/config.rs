//! Configuration management for the MCP server.
//!
//! Configuration starts from defaults and is overridden by `MCP_`-prefixed
//! environment variables, optionally loaded from a `.env` file.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Chat page configuration.
    pub chat: ChatConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the chat home page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Webhook the home page posts chat messages to (`chat.webhook.url`).
    pub webhook_url: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "tool-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            chat: ChatConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_CHAT_WEBHOOK_URL`, plus the transport variables read by
    /// [`TransportConfig::from_env`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(url) = std::env::var("MCP_CHAT_WEBHOOK_URL") {
            config.chat.webhook_url = url;
        }

        config.transport = TransportConfig::from_env();

        config
    }

    /// Reject values that cannot be repaired with a default.
    pub fn validate(&self) -> Result<()> {
        if self.server.name.trim().is_empty() {
            return Err(Error::config("server name must not be empty"));
        }

        #[cfg(feature = "http")]
        #[allow(irrefutable_let_patterns)]
        if let TransportConfig::Http(http) = &self.transport {
            if !http.rpc_path.starts_with('/') {
                return Err(Error::config(format!(
                    "HTTP RPC path must start with '/': {}",
                    http.rpc_path
                )));
            }
        }

        Ok(())
    }
}
