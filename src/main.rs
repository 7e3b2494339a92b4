//! Vial keycode inspector
//!
//! Command line front end over the keycode registry: convert between raw
//! values and keycode text for a given set of keyboard capabilities.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use cli::{parse_raw, Cli, Commands};
use vial_keycodes::protocol::MAX_TAP_DANCE;
use vial_keycodes::{Capabilities, KeycodeRegistry};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let caps = capabilities(&cli)?;
    debug!(?caps, "Using capabilities");
    let registry = KeycodeRegistry::for_capabilities(&caps)?;

    match cli.command {
        Commands::Serialize { raw } => {
            let raw = parse_raw(&raw).with_context(|| format!("invalid raw keycode: {raw}"))?;
            println!("{}", registry.serialize(raw));
        }
        Commands::Deserialize { text, strict } => {
            let raw = if strict {
                registry.deserialize_strict(&text)?
            } else {
                registry.deserialize(&text)
            };
            println!("{raw:#06x}");
        }
        Commands::Normalize { text } => {
            println!("{}", registry.normalize(&text));
        }
        Commands::Info { id } => print_info(&registry, &id)?,
        Commands::List { group } => {
            let snapshot = registry.snapshot();
            let keycodes = match group {
                Some(group) => snapshot.group(group).iter().collect(),
                None => snapshot.keycodes(),
            };
            for kc in keycodes {
                let raw = snapshot.resolve(kc.id())?;
                println!("{raw:#06x}  {:<32} {}", kc.id(), kc.label().replace('\n', " "));
            }
        }
    }

    Ok(())
}

/// Capabilities from `--caps`, or from the individual flags clamped to what
/// the protocol can address.
fn capabilities(cli: &Cli) -> Result<Capabilities> {
    if let Some(path) = &cli.caps_file {
        return Capabilities::load_from_file(path)
            .with_context(|| format!("failed to load capabilities from {}", path.display()));
    }

    let protocol = cli.protocol;
    let clamp = |what: &str, requested: usize, limit: usize| {
        if requested > limit {
            warn!("{what}: {requested} exceeds the {protocol} limit, using {limit}");
        }
        requested.min(limit)
    };

    Ok(Capabilities::new(protocol)
        .with_layers(clamp("layers", cli.layers, protocol.max_layers()))
        .with_macros(clamp("macros", cli.macros, protocol.max_macros()))
        .with_tap_dance(clamp("tap dance", cli.tap_dance, MAX_TAP_DANCE))
        .with_midi(cli.midi))
}

fn print_info(registry: &KeycodeRegistry, id: &str) -> Result<()> {
    let snapshot = registry.snapshot();
    let raw = snapshot.deserialize_strict(id)?;

    println!("id:       {}", snapshot.normalize(id));
    println!("label:    {}", snapshot.label(id).replace('\n', " "));
    if let Some(tooltip) = snapshot.tooltip(id) {
        println!("tooltip:  {tooltip}");
    }
    println!("masked:   {}", snapshot.is_mask(id));
    println!("basic:    {}", snapshot.is_basic(id));
    println!("raw:      {raw:#06x}");
    if let Some(kc) = snapshot.find_outer(id) {
        if kc.aliases().len() > 1 {
            println!("aliases:  {}", kc.aliases().join(", "));
        }
        if !kc.recorder_aliases().is_empty() {
            println!("recorder: {}", kc.recorder_aliases().join(", "));
        }
    }
    Ok(())
}
