//! Merge SMS Backup & Restore exports into a single collection file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sbrdata::Collection;
use sbrdata::reader::{decode_calls_file, decode_messages_file};

#[derive(Debug, Parser)]
#[command(
    name = "sbr-collect-flat",
    version,
    about = "Merge phone backup exports into one collection file"
)]
struct Cli {
    /// Collection file to merge into. Created if absent.
    #[arg(long, env = "SBR_COLLECTION_COLLECTION_FILE")]
    collection_file: PathBuf,

    /// Call log export to import.
    #[arg(long, env = "SBR_COLLECTION_CALL_FILE", default_value = "calls.xml")]
    call_file: PathBuf,

    /// Message export to import.
    #[arg(long, env = "SBR_COLLECTION_MESSAGE_FILE", default_value = "sms.xml")]
    message_file: PathBuf,

    /// Log every record that gets added.
    #[arg(long)]
    verbose: bool,

    /// Copy the collection file aside before overwriting it.
    #[arg(long, env = "SBR_COLLECTION_BACKUP")]
    backup: bool,
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
    let mut collection = Collection::load_or_default(&cli.collection_file)
        .with_context(|| format!("loading {}", cli.collection_file.display()))?;
    collection.set_verbose(cli.verbose);
    collection.set_backup(cli.backup);

    if let Some(path) = existing(&cli.message_file) {
        info!(path = %path.display(), "using message file");
        let messages = decode_messages_file(path)
            .with_context(|| format!("decoding {}", path.display()))?;
        let summary = collection.add_messages(&messages);
        info!(added = summary.added, duplicates = summary.duplicates, "messages merged");
    }

    if let Some(path) = existing(&cli.call_file) {
        info!(path = %path.display(), "using call file");
        let calls =
            decode_calls_file(path).with_context(|| format!("decoding {}", path.display()))?;
        let summary = collection.add_calls(&calls);
        info!(added = summary.added, duplicates = summary.duplicates, "calls merged");
    }

    collection
        .save(&cli.collection_file)
        .with_context(|| format!("saving {}", cli.collection_file.display()))?;
    Ok(())
}

fn existing(path: &Path) -> Option<&Path> {
    if path.is_file() {
        Some(path)
    } else {
        info!(path = %path.display(), "input file not found, skipping");
        None
    }
}
