//! # Configuration System
//!
//! JSON configuration resolution for the murmur agent.
//!
//! ## Resolution Pipeline
//!
//! 1. **Defaults** - the process-wide default record ([`defaults::default_config`])
//! 2. **Decoding** - each source is decoded on top of a copy of the defaults
//! 3. **Merging** - decoded sources are folded left-to-right with [`merge_configs`]
//! 4. **Views** - typed values are derived on demand from the merged record
//!
//! Paths are resolved in the order given. A directory contributes its
//! `*.json` files sorted by name; an explicit file is always read.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use murmur_core::config::read_config_paths;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = read_config_paths(&["/etc/murmur/agent.json", "/etc/murmur/conf.d"])?;
//!     let (host, port) = config.bind_addr_parts()?;
//!     let key = config.encrypt_bytes()?;
//!     Ok(())
//! }
//! ```

pub mod decoding;
pub mod defaults;
pub mod loading;
pub mod types;
pub mod views;

// Public API exports
pub use decoding::{ConfigDecoder, decode_config};
pub use defaults::{DEFAULT_BIND_PORT, DEFAULT_PROTOCOL, default_config};
pub use loading::{ConfigResolver, merge_configs, read_config_paths};
pub use types::{AgentConfig, EventScript};
