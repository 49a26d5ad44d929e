//! Merge SMS Backup & Restore exports into a grouped store directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sbrdata::reader::{decode_calls_file, decode_messages_file};
use sbrdata::{GroupPeriod, GroupedCollection, GroupedOptions, KeyZone, SbrConfig};

#[derive(Debug, Parser)]
#[command(name = "sbr-collect", version, about = "Merge phone backup exports into a grouped store")]
struct Cli {
    /// Directory holding the store.
    #[arg(long, env = "SBR_COLLECTION_V2_BASE_DIRECTORY")]
    base_directory: PathBuf,

    /// 0 for no grouping, 1 for monthly and 2 for yearly.
    #[arg(
        long,
        env = "SBR_COLLECTION_V2_GROUP_PERIOD",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=2)
    )]
    group_period: u8,

    /// Derive partition keys from UTC dates instead of the local time zone.
    #[arg(long, env = "SBR_COLLECTION_V2_UTC")]
    utc: bool,

    /// Call log export to import.
    #[arg(long)]
    call_file: Option<PathBuf>,

    /// Message export to import.
    #[arg(long)]
    message_file: Option<PathBuf>,

    /// Log every record that gets added.
    #[arg(long)]
    verbose: bool,

    /// Copy each partition file aside before overwriting it.
    #[arg(long, env = "SBR_COLLECTION_V2_BACKUP")]
    backup: bool,

    /// Read (or create) `sbr.config` in the base directory; its values override the flags.
    #[arg(long, env = "SBR_COLLECTION_V2_USE_CONFIG")]
    use_config: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("error running collection: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.base_directory.as_os_str().is_empty() {
        bail!("you have to provide a base directory");
    }

    let mut group_period = GroupPeriod::try_from(cli.group_period)?;
    let mut backup = cli.backup;
    if cli.use_config {
        let config = SbrConfig::load_or_init(
            &cli.base_directory,
            SbrConfig::new(group_period, backup),
        )
        .context("reading sbr.config")?;
        group_period = config.group_period;
        backup = config.backup;
    }

    let key_zone = if cli.utc { KeyZone::Utc } else { KeyZone::Local };
    let options = GroupedOptions::new(&cli.base_directory, group_period)
        .key_zone(key_zone)
        .verbose(cli.verbose)
        .backup(backup);
    let mut store = GroupedCollection::open(options)
        .with_context(|| format!("opening store at {}", cli.base_directory.display()))?;

    if let Some(path) = existing(cli.message_file.as_deref()) {
        info!(path = %path.display(), "using message file");
        let messages = decode_messages_file(path)
            .with_context(|| format!("decoding {}", path.display()))?;
        let summary = store.add_messages(&messages);
        info!(
            added = summary.added,
            duplicates = summary.duplicates,
            skipped = summary.skipped,
            "messages merged"
        );
    }

    if let Some(path) = existing(cli.call_file.as_deref()) {
        info!(path = %path.display(), "using call file");
        let calls =
            decode_calls_file(path).with_context(|| format!("decoding {}", path.display()))?;
        let summary = store.add_calls(&calls);
        info!(
            added = summary.added,
            duplicates = summary.duplicates,
            skipped = summary.skipped,
            "calls merged"
        );
    }

    store.save().context("saving store")?;
    Ok(())
}

// Missing input files are not an error; the import simply has nothing to add.
fn existing(path: Option<&Path>) -> Option<&Path> {
    let path = path?;
    if path.is_file() {
        Some(path)
    } else {
        info!(path = %path.display(), "input file not found, skipping");
        None
    }
}
