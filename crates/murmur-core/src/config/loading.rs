//! Configuration loading and merging logic.
//!
//! Sources are resolved from an ordered list of paths and merged
//! left-to-right, so later sources override earlier ones:
//! 1. Each path is taken in the order given
//! 2. A directory contributes its `*.json` files in file name order
//! 3. A file is decoded as-is, whatever its extension

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};
use walkdir::{DirEntry, WalkDir};

use crate::config::decoding::ConfigDecoder;
use crate::config::types::AgentConfig;
use crate::errors::ConfigError;

/// Only directory entries with this suffix are treated as config sources.
const JSON_SUFFIX: &str = ".json";

/// Merge two configurations, with `override_config` taking precedence.
///
/// Text fields take the override value unless it is empty, `protocol` takes
/// the override unless it is unset, and list fields are concatenated with
/// the base entries first. Duplicates are kept.
pub fn merge_configs(base: AgentConfig, override_config: AgentConfig) -> AgentConfig {
    AgentConfig {
        node_name: merge_text(base.node_name, override_config.node_name),
        role: merge_text(base.role, override_config.role),
        protocol: override_config.protocol.or(base.protocol),
        bind_addr: merge_text(base.bind_addr, override_config.bind_addr),
        encrypt_key: merge_text(base.encrypt_key, override_config.encrypt_key),
        log_level: merge_text(base.log_level, override_config.log_level),
        rpc_addr: merge_text(base.rpc_addr, override_config.rpc_addr),
        event_handlers: concat(base.event_handlers, override_config.event_handlers),
        start_join: concat(base.start_join, override_config.start_join),
    }
}

fn merge_text(base: String, override_value: String) -> String {
    if override_value.is_empty() {
        base
    } else {
        override_value
    }
}

fn concat(mut base: Vec<String>, override_values: Vec<String>) -> Vec<String> {
    base.extend(override_values);
    base
}

/// Resolves an ordered list of files and directories into one config.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    decoder: ConfigDecoder,
}

impl ConfigResolver {
    /// Use a decoder seeded with a custom default record.
    pub fn with_decoder(decoder: ConfigDecoder) -> Self {
        Self { decoder }
    }

    /// Decode every source behind `paths` and fold them into one record.
    ///
    /// Resolution is fail-fast: the first missing path or malformed source
    /// aborts it and nothing merged so far is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PathNotFound`] if a path cannot be inspected or
    /// opened, and [`ConfigError::MalformedInput`] if a source fails to decode.
    pub fn resolve<P: AsRef<Path>>(&self, paths: &[P]) -> Result<AgentConfig, ConfigError> {
        info!(event = "core.config.resolve_started", path_count = paths.len());

        match self.resolve_paths(paths) {
            Ok((config, source_count)) => {
                info!(
                    event = "core.config.resolve_completed",
                    source_count = source_count,
                    node_name = %config.node_name
                );
                Ok(config)
            }
            Err(e) => {
                error!(
                    event = "core.config.resolve_failed",
                    error = %e,
                    "Config resolution aborted, no partial config returned"
                );
                Err(e)
            }
        }
    }

    fn resolve_paths<P: AsRef<Path>>(
        &self,
        paths: &[P],
    ) -> Result<(AgentConfig, usize), ConfigError> {
        let mut merged = AgentConfig::default();
        let mut source_count = 0;

        for path in paths {
            for source in expand_path(path.as_ref())? {
                let config = self.load_source(&source)?;
                merged = merge_configs(merged, config);
                source_count += 1;
            }
        }

        Ok((merged, source_count))
    }

    fn load_source(&self, path: &Path) -> Result<AgentConfig, ConfigError> {
        let file = File::open(path).map_err(|e| ConfigError::PathNotFound {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config = self
            .decoder
            .decode_named(BufReader::new(file), &path.display().to_string())?;

        debug!(
            event = "core.config.source_loaded",
            path = %path.display()
        );

        Ok(config)
    }
}

/// Resolve `paths` with the process-wide default record.
///
/// See [`ConfigResolver::resolve`].
pub fn read_config_paths<P: AsRef<Path>>(paths: &[P]) -> Result<AgentConfig, ConfigError> {
    ConfigResolver::default().resolve(paths)
}

/// Turn one supplied path into the config sources it names.
fn expand_path(path: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let metadata = fs::metadata(path).map_err(|e| ConfigError::PathNotFound {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    if metadata.is_dir() {
        dir_sources(path)
    } else {
        Ok(vec![path.to_path_buf()])
    }
}

/// Regular `*.json` files directly inside `dir`, sorted by file name.
fn dir_sources(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let mut sources = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| ConfigError::PathNotFound {
            path: e.path().unwrap_or(dir).display().to_string(),
            message: e.to_string(),
        })?;

        if !entry.file_name().to_string_lossy().ends_with(JSON_SUFFIX) {
            debug!(
                event = "core.config.dir_entry_skipped",
                path = %entry.path().display(),
                reason = "suffix"
            );
            continue;
        }

        if !is_regular_file(&entry) {
            debug!(
                event = "core.config.dir_entry_skipped",
                path = %entry.path().display(),
                reason = "not_a_file"
            );
            continue;
        }

        sources.push(entry.into_path());
    }

    Ok(sources)
}

fn is_regular_file(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        // Dangling links are skipped like any other non-file entry
        fs::metadata(entry.path())
            .map(|m| m.is_file())
            .unwrap_or(false)
    } else {
        entry.file_type().is_file()
    }
}
