// crates/sapwalk-core/src/convert.rs
//
// Streaming walk -> SAP conversion. One pass over the input, one open record
// at a time, records written downstream the moment they are finalized. The
// output is flushed before returning on every path, including read failure,
// so nothing already converted is lost mid-buffer.

use std::io::{BufRead, BufWriter, Write};

use crate::error::Result;
use crate::sap::rewrite::normalize;
use crate::walk::reassemble::Reassembler;
use crate::walk::record::WalkRecord;

/// Counters reported after a conversion pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConvertStats {
    /// Physical lines consumed from the input.
    pub lines: u64,
    /// Logical records written to the output.
    pub records: u64,
}

/// Convert raw walk output on `input` into SAP records on `output`.
///
/// The caller owns both stream handles; this function neither opens nor
/// closes them. Emitted records are separated by `\n` and the final record
/// carries no trailing terminator. A read error aborts the pass without
/// emitting the in-flight record; everything already finalized has been
/// written and is flushed before the error surfaces.
pub fn convert<R: BufRead, W: Write>(mut input: R, output: W) -> Result<ConvertStats> {
    let mut out = BufWriter::new(output);
    let mut walk = Reassembler::new();
    let mut stats = ConvertStats::default();

    let result = pump(&mut input, &mut out, &mut walk, &mut stats);
    let flushed = out.flush();

    result?;
    flushed?;
    Ok(stats)
}

fn pump<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    walk: &mut Reassembler,
    stats: &mut ConvertStats,
) -> std::io::Result<()> {
    let mut line = Vec::new();
    loop {
        line.clear();
        let n = input.read_until(b'\n', &mut line)?;
        if n == 0 {
            // End of stream: the last open record flushes only if it
            // accumulated a value.
            if let Some(rec) = walk.finish() {
                emit(out, stats, rec)?;
            }
            return Ok(());
        }

        stats.lines += 1;
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        if let Some(rec) = walk.push_line(&line) {
            emit(out, stats, rec)?;
        }
    }
}

fn emit<W: Write>(out: &mut W, stats: &mut ConvertStats, rec: WalkRecord) -> std::io::Result<()> {
    if stats.records > 0 {
        out.write_all(b"\n")?;
    }
    stats.records += 1;
    out.write_all(&normalize(rec).render())
}
