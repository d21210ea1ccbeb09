//! Decoding of a single JSON config source.
//!
//! Decoding overlays the fields present in the source onto a copy of the
//! default record. Absent keys keep their defaults; present keys win even
//! when they hold an empty or zero value.

use std::io::Read;

use crate::config::defaults::default_config;
use crate::config::types::{AgentConfig, ConfigOverlay};
use crate::errors::ConfigError;

/// Source name used when the caller does not supply one.
const ANONYMOUS_SOURCE: &str = "<input>";

/// Decodes JSON config sources on top of an injected default record.
#[derive(Debug, Clone)]
pub struct ConfigDecoder {
    defaults: AgentConfig,
}

impl Default for ConfigDecoder {
    fn default() -> Self {
        Self::new(default_config())
    }
}

impl ConfigDecoder {
    pub fn new(defaults: AgentConfig) -> Self {
        Self { defaults }
    }

    /// Decode one JSON object from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedInput`] if the input is not a JSON
    /// object or a known key has the wrong type.
    pub fn decode<R: Read>(&self, reader: R) -> Result<AgentConfig, ConfigError> {
        self.decode_named(reader, ANONYMOUS_SOURCE)
    }

    /// Like [`ConfigDecoder::decode`], naming the source in any error.
    pub fn decode_named<R: Read>(
        &self,
        reader: R,
        source_name: &str,
    ) -> Result<AgentConfig, ConfigError> {
        let malformed = |message: String| ConfigError::MalformedInput {
            source_name: source_name.to_string(),
            message,
        };

        let value: serde_json::Value =
            serde_json::from_reader(reader).map_err(|e| malformed(e.to_string()))?;

        // Derived struct visitors also accept sequences; only objects are configs.
        if !value.is_object() {
            return Err(malformed("expected a JSON object".to_string()));
        }

        let overlay: ConfigOverlay =
            serde_json::from_value(value).map_err(|e| malformed(e.to_string()))?;

        Ok(apply_overlay(self.defaults.clone(), overlay))
    }
}

/// Decode `reader` on top of [`default_config`].
pub fn decode_config<R: Read>(reader: R) -> Result<AgentConfig, ConfigError> {
    ConfigDecoder::default().decode(reader)
}

fn apply_overlay(mut config: AgentConfig, overlay: ConfigOverlay) -> AgentConfig {
    if let Some(node_name) = overlay.node_name {
        config.node_name = node_name;
    }
    if let Some(role) = overlay.role {
        config.role = role;
    }
    if let Some(protocol) = overlay.protocol {
        config.protocol = Some(protocol);
    }
    if let Some(bind_addr) = overlay.bind_addr {
        config.bind_addr = bind_addr;
    }
    if let Some(encrypt_key) = overlay.encrypt_key {
        config.encrypt_key = encrypt_key;
    }
    if let Some(log_level) = overlay.log_level {
        config.log_level = log_level;
    }
    if let Some(rpc_addr) = overlay.rpc_addr {
        config.rpc_addr = rpc_addr;
    }
    if let Some(event_handlers) = overlay.event_handlers {
        config.event_handlers = event_handlers;
    }
    if let Some(start_join) = overlay.start_join {
        config.start_join = start_join;
    }
    config
}
