// crates/sapwalk-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "sapwalk-cli")]
#[command(about = "SNMP walk -> SAP record converter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a raw walk dump to SAP records
    Convert(cmd::convert::ConvertArgs),

    /// Convert a walk and file it into a store (raw blob + records + metadata)
    Import(cmd::import::ImportArgs),

    /// List stored walks (key, date, name)
    List(cmd::list::ListArgs),

    /// Copy a stored walk's converted records out of the store
    Export(cmd::export::ExportArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Convert(args) => cmd::convert::run(args),
        Commands::Import(args) => cmd::import::run(args),
        Commands::List(args) => cmd::list::run(args),
        Commands::Export(args) => cmd::export::run(args),
    }
}
