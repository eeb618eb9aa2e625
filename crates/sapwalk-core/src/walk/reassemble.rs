// crates/sapwalk-core/src/walk/reassemble.rs
//
// Groups physical lines into logical walk records. At most one record is
// open at a time; a record-start line finalizes whatever was open before it,
// and end of stream finalizes the last one if it accumulated any value.

use crate::walk::line::{LineKind, LinePatterns};
use crate::walk::record::WalkRecord;

enum Mode {
    Idle,
    Accumulating(WalkRecord),
}

pub struct Reassembler {
    patterns: LinePatterns,
    mode: Mode,
}

impl Reassembler {
    pub fn new() -> Self {
        Self {
            patterns: LinePatterns::new(),
            mode: Mode::Idle,
        }
    }

    /// Feed one physical line (terminator already stripped). Returns the
    /// previously open record when `line` supersedes it.
    pub fn push_line(&mut self, line: &[u8]) -> Option<WalkRecord> {
        match self.patterns.classify(line) {
            LineKind::Noise => None,
            LineKind::TypedStart { oid, tag, value } => {
                self.open(WalkRecord::typed(oid, tag, value))
            }
            LineKind::UntypedStart { oid, value } => self.open(WalkRecord::untyped(oid, value)),
            LineKind::Continuation => {
                if let Mode::Accumulating(rec) = &mut self.mode {
                    rec.push_continuation(line);
                }
                // No open record: the line precedes the first start line.
                None
            }
        }
    }

    /// End of stream. An open record whose value is still empty is a bare
    /// header with nothing behind it and is dropped.
    pub fn finish(&mut self) -> Option<WalkRecord> {
        match std::mem::replace(&mut self.mode, Mode::Idle) {
            Mode::Accumulating(rec) if !rec.value.is_empty() => Some(rec),
            _ => None,
        }
    }

    fn open(&mut self, next: WalkRecord) -> Option<WalkRecord> {
        match std::mem::replace(&mut self.mode, Mode::Accumulating(next)) {
            Mode::Accumulating(prev) => Some(prev),
            Mode::Idle => None,
        }
    }
}
