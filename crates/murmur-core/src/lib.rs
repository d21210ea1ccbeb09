//! murmur-core: Configuration resolution for the murmur node agent
//!
//! This library loads agent configuration from files and directories,
//! merges it into one effective record, and derives typed values from it.
//! It is used by the `murmur` CLI and by the agent runtime.
//!
//! # Main Entry Points
//!
//! - [`config`] - Decode, merge, and resolve configuration
//! - [`errors`] - Error types shared across the crate
//! - [`logging`] - Structured logging setup

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;

// Re-export commonly used types at crate root for convenience
pub use config::{AgentConfig, ConfigResolver, EventScript, read_config_paths};
pub use errors::{ConfigError, MurmurError};

// Re-export logging initialization
pub use logging::init_logging;
