//! Default values for agent configuration.
//!
//! The default record only seeds fields whose fallback must survive merging.
//! Text fields stay unset so a later source that omits them cannot clobber
//! an earlier source; their fallbacks live in the accessors below instead.

use crate::config::types::AgentConfig;

/// Newest gossip protocol version this agent speaks.
pub const PROTOCOL_VERSION_MAX: u32 = 4;

/// Protocol version used when no source sets one.
pub const DEFAULT_PROTOCOL: u32 = PROTOCOL_VERSION_MAX;

/// Port appended to a bind address that carries none.
pub const DEFAULT_BIND_PORT: u16 = 7946;

/// Log level used when no source sets one.
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// RPC listener address used when no source sets one.
pub const DEFAULT_RPC_ADDR: &str = "127.0.0.1:7373";

/// Returns the process-wide default record that decoding starts from.
pub fn default_config() -> AgentConfig {
    AgentConfig {
        protocol: Some(DEFAULT_PROTOCOL),
        ..AgentConfig::default()
    }
}

impl AgentConfig {
    /// Returns the configured log level, defaulting to `INFO`.
    pub fn log_level(&self) -> &str {
        if self.log_level.is_empty() {
            DEFAULT_LOG_LEVEL
        } else {
            &self.log_level
        }
    }

    /// Returns the configured RPC address, defaulting to `127.0.0.1:7373`.
    pub fn rpc_addr(&self) -> &str {
        if self.rpc_addr.is_empty() {
            DEFAULT_RPC_ADDR
        } else {
            &self.rpc_addr
        }
    }

    /// Returns the protocol version, defaulting to [`DEFAULT_PROTOCOL`].
    pub fn protocol_version(&self) -> u32 {
        self.protocol.unwrap_or(DEFAULT_PROTOCOL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_sets_protocol_only() {
        let config = default_config();
        assert_eq!(config.protocol, Some(DEFAULT_PROTOCOL));
        assert!(config.node_name.is_empty());
        assert!(config.bind_addr.is_empty());
        assert!(config.event_handlers.is_empty());
    }

    #[test]
    fn test_accessor_defaults() {
        let config = AgentConfig::default();
        assert_eq!(config.log_level(), "INFO");
        assert_eq!(config.rpc_addr(), "127.0.0.1:7373");
        assert_eq!(config.protocol_version(), DEFAULT_PROTOCOL);
    }

    #[test]
    fn test_accessors_prefer_configured_values() {
        let config = AgentConfig {
            log_level: "DEBUG".to_string(),
            rpc_addr: "0.0.0.0:7373".to_string(),
            protocol: Some(0),
            ..Default::default()
        };
        assert_eq!(config.log_level(), "DEBUG");
        assert_eq!(config.rpc_addr(), "0.0.0.0:7373");
        // Zero is a real version, not a fallback trigger
        assert_eq!(config.protocol_version(), 0);
    }
}
