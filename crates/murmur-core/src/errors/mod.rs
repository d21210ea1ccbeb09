use std::error::Error;

/// Base trait for all application errors
pub trait MurmurError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config path not found or inaccessible: '{path}': {message}")]
    PathNotFound { path: String, message: String },

    #[error("Failed to parse config '{source_name}': {message}")]
    MalformedInput {
        source_name: String,
        message: String,
    },

    #[error("Invalid bind address '{addr}': {message}")]
    InvalidAddress { addr: String, message: String },

    #[error("Invalid encryption key encoding: {message}")]
    InvalidEncoding { message: String },
}

impl MurmurError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::PathNotFound { .. } => "CONFIG_PATH_NOT_FOUND",
            ConfigError::MalformedInput { .. } => "CONFIG_MALFORMED_INPUT",
            ConfigError::InvalidAddress { .. } => "CONFIG_INVALID_ADDRESS",
            ConfigError::InvalidEncoding { .. } => "CONFIG_INVALID_ENCODING",
        }
    }

    fn is_user_error(&self) -> bool {
        // Every variant traces back to a path or value the operator supplied.
        match self {
            ConfigError::PathNotFound { .. }
            | ConfigError::MalformedInput { .. }
            | ConfigError::InvalidAddress { .. }
            | ConfigError::InvalidEncoding { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_found_display() {
        let error = ConfigError::PathNotFound {
            path: "/etc/murmur/missing.json".to_string(),
            message: "No such file or directory".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Config path not found or inaccessible: '/etc/murmur/missing.json': No such file or directory"
        );
        assert_eq!(error.error_code(), "CONFIG_PATH_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_malformed_input_display() {
        let error = ConfigError::MalformedInput {
            source_name: "agent.json".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse config 'agent.json': expected value at line 1 column 1"
        );
        assert_eq!(error.error_code(), "CONFIG_MALFORMED_INPUT");
    }

    #[test]
    fn test_derivation_error_codes() {
        let addr = ConfigError::InvalidAddress {
            addr: "1.2.3.4:x".to_string(),
            message: "invalid port".to_string(),
        };
        assert_eq!(addr.error_code(), "CONFIG_INVALID_ADDRESS");

        let key = ConfigError::InvalidEncoding {
            message: "Invalid byte 33, offset 0.".to_string(),
        };
        assert_eq!(key.error_code(), "CONFIG_INVALID_ENCODING");
        assert!(key.to_string().starts_with("Invalid encryption key encoding"));
    }
}
