use anyhow::Context;
use clap::Args;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::io::store::{name_from_filename, WalkStore};

#[derive(Args)]
pub struct ImportArgs {
    /// Input walk file to convert and file into the store
    #[arg(long)]
    pub r#in: String,

    /// Store directory (created on first use)
    #[arg(long)]
    pub store: String,

    /// Display name for the stored walk. Defaults to the input filename up
    /// to its first dot.
    #[arg(long)]
    pub name: Option<String>,
}

pub fn run(args: ImportArgs) -> anyhow::Result<()> {
    let raw = std::fs::read(&args.r#in).with_context(|| format!("read {}", args.r#in))?;

    let mut sap = Vec::new();
    let stats = sapwalk_core::convert(raw.as_slice(), &mut sap)?;

    let name = args
        .name
        .unwrap_or_else(|| name_from_filename(&args.r#in));
    let date = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock before unix epoch")?
        .as_secs();

    let store = WalkStore::open(&args.store)?;
    let key = store.put(&name, &raw, &sap, date)?;

    eprintln!(
        "import ok: name={} store={} lines={} records={}",
        name, args.store, stats.lines, stats.records
    );
    println!("{key}");
    Ok(())
}
