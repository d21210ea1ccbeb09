//! Typed views derived from the loosely-typed string fields of a resolved
//! [`AgentConfig`].
//!
//! Views are computed on demand. A view that fails to parse only fails the
//! caller that asked for it; the rest of the config stays usable.

use base64::Engine;

use crate::config::defaults::DEFAULT_BIND_PORT;
use crate::config::types::{AgentConfig, EventScript};
use crate::errors::ConfigError;

/// Event filter that matches every event kind.
const ALL_EVENTS: &str = "*";

impl AgentConfig {
    /// Split the bind address into host and port.
    ///
    /// An address without a colon binds to [`DEFAULT_BIND_PORT`]. IPv6 hosts
    /// must be bracketed, e.g. `[::1]:7946`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddress`] if the port is not a valid
    /// port number or the address is otherwise malformed.
    pub fn bind_addr_parts(&self) -> Result<(String, u16), ConfigError> {
        let addr = self.bind_addr.as_str();
        if !addr.contains(':') {
            return Ok((addr.to_string(), DEFAULT_BIND_PORT));
        }

        let (host, port) = split_host_port(addr)?;
        let port = port.parse::<u16>().map_err(|e| ConfigError::InvalidAddress {
            addr: addr.to_string(),
            message: format!("invalid port '{}': {}", port, e),
        })?;

        Ok((host.to_string(), port))
    }

    /// Decode the base64 encryption key.
    ///
    /// An unset key yields an empty vector, meaning encryption is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEncoding`] if the key is not valid
    /// standard base64.
    pub fn encrypt_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        if self.encrypt_key.is_empty() {
            return Ok(Vec::new());
        }

        base64::engine::general_purpose::STANDARD
            .decode(&self.encrypt_key)
            .map_err(|e| ConfigError::InvalidEncoding {
                message: e.to_string(),
            })
    }

    /// Parse the raw event handler specs, preserving their order.
    ///
    /// A spec without `=` handles every event. Otherwise everything before
    /// the first `=` is the event filter and the rest is the script.
    pub fn event_scripts(&self) -> Result<Vec<EventScript>, ConfigError> {
        // TODO: support `user:<name>=script` once the user event filter
        // grammar is settled; the prefix is taken verbatim for now.
        Ok(self
            .event_handlers
            .iter()
            .map(|spec| match spec.split_once('=') {
                Some((filter, script)) => EventScript::new(filter, "", script),
                None => EventScript::new(ALL_EVENTS, "", spec.as_str()),
            })
            .collect())
    }
}

fn split_host_port(addr: &str) -> Result<(&str, &str), ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidAddress {
        addr: addr.to_string(),
        message: message.to_string(),
    };

    if let Some(rest) = addr.strip_prefix('[') {
        let (host, after) = rest
            .split_once(']')
            .ok_or_else(|| invalid("missing ']' in address"))?;
        let port = after
            .strip_prefix(':')
            .ok_or_else(|| invalid("missing port in address"))?;
        if has_bracket(host) {
            return Err(invalid("unexpected bracket in address"));
        }
        return non_empty_port(host, port).ok_or_else(|| invalid("missing port in address"));
    }

    let (host, port) = addr
        .split_once(':')
        .ok_or_else(|| invalid("missing port in address"))?;
    if port.contains(':') {
        return Err(invalid("too many colons in address"));
    }
    if has_bracket(host) || has_bracket(port) {
        return Err(invalid("unexpected bracket in address"));
    }

    non_empty_port(host, port).ok_or_else(|| invalid("missing port in address"))
}

fn has_bracket(s: &str) -> bool {
    s.contains(['[', ']'])
}

fn non_empty_port<'a>(host: &'a str, port: &'a str) -> Option<(&'a str, &'a str)> {
    (!port.is_empty()).then_some((host, port))
}
