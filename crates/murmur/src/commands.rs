use std::path::PathBuf;

use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use murmur_core::config::{AgentConfig, EventScript, read_config_paths};
use murmur_core::events;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("resolve", sub_matches)) => handle_resolve_command(sub_matches),
        Some(("views", sub_matches)) => handle_views_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Collect `--config-file` and `--config-dir` values in command-line order.
///
/// Precedence follows the order the flags were typed, not the flag kind, so
/// `-d conf.d -c override.json` lets the file win over the directory.
fn collect_config_paths(matches: &ArgMatches) -> Vec<PathBuf> {
    let mut indexed: Vec<(usize, PathBuf)> = Vec::new();

    for id in ["config-file", "config-dir"] {
        if let (Some(values), Some(indices)) =
            (matches.get_many::<String>(id), matches.indices_of(id))
        {
            indexed.extend(indices.zip(values.map(PathBuf::from)));
        }
    }

    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, path)| path).collect()
}

fn resolve_config(matches: &ArgMatches) -> Result<AgentConfig, Box<dyn std::error::Error>> {
    let paths = collect_config_paths(matches);

    info!(event = "cli.resolve_started", path_count = paths.len());

    match read_config_paths(paths.as_slice()) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!("❌ Failed to resolve config: {}", e);
            error!(event = "cli.resolve_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_resolve_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(matches)?;

    println!("{}", serde_json::to_string_pretty(&config)?);

    info!(
        event = "cli.resolve_completed",
        node_name = %config.node_name
    );
    Ok(())
}

#[derive(Serialize)]
struct BindView {
    host: String,
    port: u16,
}

#[derive(Serialize)]
struct ConfigViews {
    bind: BindView,
    protocol: u32,
    log_level: String,
    rpc_addr: String,
    encryption_enabled: bool,
    encrypt_key_len: usize,
    event_scripts: Vec<EventScript>,
}

fn handle_views_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(matches)?;

    let views = match derive_views(&config) {
        Ok(views) => views,
        Err(e) => {
            eprintln!("❌ Invalid config value: {}", e);
            error!(event = "cli.views_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    println!("{}", serde_json::to_string_pretty(&views)?);

    info!(
        event = "cli.views_completed",
        event_script_count = views.event_scripts.len()
    );
    Ok(())
}

fn derive_views(config: &AgentConfig) -> Result<ConfigViews, murmur_core::ConfigError> {
    let (host, port) = config.bind_addr_parts()?;
    let key = config.encrypt_bytes()?;

    Ok(ConfigViews {
        bind: BindView { host, port },
        protocol: config.protocol_version(),
        log_level: config.log_level().to_string(),
        rpc_addr: config.rpc_addr().to_string(),
        encryption_enabled: !key.is_empty(),
        encrypt_key_len: key.len(),
        event_scripts: config.event_scripts()?,
    })
}
