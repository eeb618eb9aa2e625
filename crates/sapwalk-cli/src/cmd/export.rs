use anyhow::Context;
use clap::Args;

use crate::io::store::WalkStore;

#[derive(Args)]
pub struct ExportArgs {
    /// Store directory
    #[arg(long)]
    pub store: String,

    /// Walk key as printed by import/list
    #[arg(long)]
    pub key: String,

    /// Output path. Defaults to <name>.sapwalk2 in the current directory.
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: ExportArgs) -> anyhow::Result<()> {
    let store = WalkStore::open(&args.store)?;
    let meta = store.meta(&args.key)?;

    let out = args
        .out
        .unwrap_or_else(|| format!("{}.sapwalk2", meta.name));
    std::fs::copy(store.sap_path(&args.key), &out)
        .with_context(|| format!("export {} to {}", args.key, out))?;

    eprintln!("export ok: key={} name={} out={}", args.key, meta.name, out);
    Ok(())
}
