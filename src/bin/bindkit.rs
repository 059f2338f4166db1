// Bindkit CLI
// Compiles a bindings file and reports or dumps the resulting tables

#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use anyhow::{bail, Context};
#[cfg(feature = "cli")]
use bindkit_core::{to_modifiers, Action, BindingConfig, BindingTable, MouseEvent};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::Serialize;

/// Key and mouse binding compiler
#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "bindkit")]
#[command(version)]
#[command(about = "Compile key and mouse binding directives", long_about = None)]
struct Args {
    /// Bindings file (defaults to the user config directory)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the primary modifier, e.g. "ctrl+shift"
    #[arg(short, long, value_name = "MODS")]
    primary_modifier: Option<String>,

    /// Validate config and exit
    #[arg(long)]
    check_config: bool,

    /// Print the compiled tables as TOML
    #[arg(long)]
    dump: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Serialize)]
struct KeyEntry<'a> {
    shortcut: String,
    action: &'a Action,
}

#[cfg(feature = "cli")]
#[derive(Debug, Serialize)]
struct MouseEntry<'a> {
    trigger: String,
    event: &'a MouseEvent,
    action: &'a Action,
}

/// Serializable view of a compiled binding table
#[cfg(feature = "cli")]
#[derive(Debug, Serialize)]
struct TableDump<'a> {
    keys: Vec<KeyEntry<'a>>,
    sequences: Vec<KeyEntry<'a>>,
    mouse: Vec<MouseEntry<'a>>,
}

#[cfg(feature = "cli")]
impl<'a> TableDump<'a> {
    fn new(table: &'a BindingTable) -> Self {
        let keys = table
            .keys()
            .map(|(trigger, action)| KeyEntry {
                shortcut: trigger.to_string(),
                action,
            })
            .collect();
        let sequences = table
            .sequences()
            .map(|(head, tail, action)| {
                let mut shortcut = head.to_string();
                for trigger in tail {
                    shortcut.push('>');
                    shortcut.push_str(&trigger.to_string());
                }
                KeyEntry { shortcut, action }
            })
            .collect();
        let mouse = table
            .mouse()
            .map(|(event, action)| MouseEntry {
                trigger: event.to_string(),
                event,
                action,
            })
            .collect();
        Self {
            keys,
            sequences,
            mouse,
        }
    }
}

#[cfg(feature = "cli")]
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[cfg(feature = "cli")]
fn load_table(args: &Args) -> anyhow::Result<BindingTable> {
    let config_path = match args.config.clone().or_else(BindingConfig::default_path) {
        Some(path) => path,
        None => bail!("--config is required when no user config directory exists"),
    };
    log::info!("Loading bindings from {}", config_path.display());

    let mut config = BindingConfig::from_path(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    if let Some(mods) = &args.primary_modifier {
        let mask = to_modifiers(mods);
        if mask.is_empty() || mask.has_placeholder() {
            bail!("Invalid primary modifier: {}", mods);
        }
        config.set_primary_modifier(mask);
    }

    Ok(config.into_table())
}

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let table = load_table(&args)?;

    if args.dump {
        print!("{}", toml::to_string_pretty(&TableDump::new(&table))?);
        return Ok(());
    }

    if args.check_config {
        println!("Configuration is valid");
    }
    println!(
        "{} key bindings, {} sequences, {} mouse bindings",
        table.key_count(),
        table.sequence_count(),
        table.mouse_count()
    );
    Ok(())
}

// Stub for when cli feature is not enabled
#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("Error: bindkit binary requires the 'cli' feature to be enabled.");
    std::process::exit(1);
}
