//! Configuration type definitions for the murmur agent.
//!
//! These types are decoded from JSON config files and merged into a single
//! effective record.
//!
//! # Example Configuration
//!
//! ```json
//! {
//!   "node_name": "web-01",
//!   "role": "web",
//!   "protocol": 4,
//!   "bind": "10.0.0.5:7946",
//!   "encrypt_key": "cg8StVXbQJ0gPvMd9o7yrg==",
//!   "event_handlers": ["member-join=/opt/handlers/join.sh", "notify.sh"],
//!   "start_join": ["10.0.0.6", "10.0.0.7"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Effective configuration for a murmur agent.
///
/// Text fields use the empty string as "unset" and `protocol` uses `None`.
/// `AgentConfig::default()` is the all-unset record and is the seed for
/// merging; the seeded record that decoding starts from is
/// [`crate::config::defaults::default_config`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AgentConfig {
    /// Identity of this agent instance within the cluster.
    pub node_name: String,

    /// Free-form role tag advertised to peers.
    pub role: String,

    /// Gossip protocol version. Zero is a valid version, so unset is `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<u32>,

    /// Address to bind gossip to: `"ip"` or `"ip:port"`.
    #[serde(rename = "bind")]
    pub bind_addr: String,

    /// Base64-encoded symmetric key for gossip encryption.
    pub encrypt_key: String,

    /// Log level requested by the config. See [`AgentConfig::log_level`].
    pub log_level: String,

    /// Address for the agent's RPC listener. See [`AgentConfig::rpc_addr`].
    pub rpc_addr: String,

    /// Raw event handler specs, order-significant.
    pub event_handlers: Vec<String>,

    /// Peers to join at startup, order-significant.
    pub start_join: Vec<String>,
}

/// Overlay decoded from a single config source.
///
/// Every field is optional so the decoder can tell an absent key apart from
/// a key explicitly set to an empty value.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ConfigOverlay {
    #[serde(default)]
    pub node_name: Option<String>,

    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub protocol: Option<u32>,

    #[serde(default, rename = "bind")]
    pub bind_addr: Option<String>,

    #[serde(default)]
    pub encrypt_key: Option<String>,

    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub rpc_addr: Option<String>,

    #[serde(default)]
    pub event_handlers: Option<Vec<String>>,

    #[serde(default)]
    pub start_join: Option<Vec<String>>,
}

/// One parsed event handler binding.
///
/// Produced by [`AgentConfig::event_scripts`]; not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventScript {
    /// Event kind to react to; `"*"` matches every kind.
    pub event_filter: String,
    /// Specific user event name to match; empty matches any.
    pub user_event_filter: String,
    /// Path or command to invoke.
    pub script: String,
}

impl EventScript {
    pub fn new(
        event_filter: impl Into<String>,
        user_event_filter: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            event_filter: event_filter.into(),
            user_event_filter: user_event_filter.into(),
            script: script.into(),
        }
    }

    /// Whether this binding fires for every event kind.
    pub fn matches_all(&self) -> bool {
        self.event_filter == "*"
    }
}

impl fmt::Display for EventScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matches_all() {
            write!(f, "{}", self.script)
        } else {
            write!(f, "{}={}", self.event_filter, self.script)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_config_default_is_unset() {
        let config = AgentConfig::default();
        assert!(config.node_name.is_empty());
        assert!(config.protocol.is_none());
        assert!(config.event_handlers.is_empty());
        assert!(config.start_join.is_empty());
    }

    #[test]
    fn test_agent_config_serialization_uses_file_keys() {
        let config = AgentConfig {
            bind_addr: "127.0.0.1".to_string(),
            protocol: Some(3),
            ..Default::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["bind"], "127.0.0.1");
        assert_eq!(json["protocol"], 3);
        assert!(json.get("bind_addr").is_none());
    }

    #[test]
    fn test_event_script_display() {
        assert_eq!(EventScript::new("*", "", "foo.sh").to_string(), "foo.sh");
        assert_eq!(
            EventScript::new("member-join", "", "join.sh").to_string(),
            "member-join=join.sh"
        );
    }
}
