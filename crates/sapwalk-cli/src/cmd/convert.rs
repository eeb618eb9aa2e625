use anyhow::Context;
use clap::Args;
use std::fs::File;
use std::io::BufReader;

#[derive(Args)]
pub struct ConvertArgs {
    /// Input walk file (raw net-snmp walk output)
    #[arg(long)]
    pub r#in: String,

    /// Output path for the SAP records
    #[arg(long)]
    pub out: String,
}

pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let input = BufReader::new(File::open(&args.r#in).with_context(|| format!("open {}", args.r#in))?);
    let output = File::create(&args.out).with_context(|| format!("create {}", args.out))?;

    let stats = sapwalk_core::convert(input, output)?;

    eprintln!(
        "convert ok: in={} out={} lines={} records={}",
        args.r#in, args.out, stats.lines, stats.records
    );
    Ok(())
}
