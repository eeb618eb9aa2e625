use clap::Args;

use crate::io::store::WalkStore;

#[derive(Args)]
pub struct ListArgs {
    /// Store directory
    #[arg(long)]
    pub store: String,
}

pub fn run(args: ListArgs) -> anyhow::Result<()> {
    let store = WalkStore::open(&args.store)?;
    let walks = store.list()?;

    for (key, meta) in &walks {
        println!("{} {} {}", key, meta.date, meta.name);
    }
    eprintln!("list ok: store={} walks={}", args.store, walks.len());
    Ok(())
}
