//! Print the calls of a flat collection file that match a number or contact name.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sbrdata::{Call, load_collection};

#[derive(Debug, Parser)]
#[command(name = "sbr-query", version, about = "Search the calls of a collection file")]
struct Cli {
    /// Collection file to search.
    #[arg(long, env = "SBR_QUERY_COLLECTION_FILE")]
    collection_file: PathBuf,

    /// Substring of the phone number.
    #[arg(long, env = "SBR_QUERY_NUMBER")]
    number: Option<String>,

    /// Substring of the contact name.
    #[arg(long, env = "SBR_QUERY_NAME")]
    name: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(err) = run(&Cli::parse()) {
        eprintln!("error running query: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let filter = CallFilter::new(cli.number.as_deref(), cli.name.as_deref());
    if filter.is_empty() {
        bail!("you have to provide either number or name");
    }

    let collection = load_collection(&cli.collection_file)
        .with_context(|| format!("loading {}", cli.collection_file.display()))?;
    for call in collection.calls().iter().filter(|call| filter.matches(call)) {
        println!("{call:?}");
    }
    Ok(())
}

/// Substring filters; empty filters never match.
struct CallFilter<'a> {
    number: Option<&'a str>,
    name: Option<&'a str>,
}

impl<'a> CallFilter<'a> {
    fn new(number: Option<&'a str>, name: Option<&'a str>) -> Self {
        Self {
            number: number.filter(|v| !v.is_empty()),
            name: name.filter(|v| !v.is_empty()),
        }
    }

    fn is_empty(&self) -> bool {
        self.number.is_none() && self.name.is_none()
    }

    fn matches(&self, call: &Call) -> bool {
        self.number.is_some_and(|n| call.number.contains(n))
            || self.name.is_some_and(|n| call.contact_name.contains(n))
    }
}
