// crates/sapwalk-core/src/walk/line.rs
//
// Physical line classification for net-snmp walk output.
//
// Four-way split, checked in this order:
// - noise: the end-of-MIB diagnostic, dropped outright
// - typed start:   <oid> = <TYPE>: <value>
// - untyped start: <oid> = <value>
// - continuation: anything else belongs to the open record

use regex::bytes::Regex;

/// net-snmp prints this when a walk runs off the end of the requested
/// subtree. It is a diagnostic, not data, and must not touch the open record.
const END_OF_MIB: &[u8] = b"No more variables left in this MIB View";

/// The two record-start patterns, compiled once per converter invocation.
/// Unicode mode is off so the classes match raw bytes; walk values are not
/// guaranteed to be UTF-8.
pub struct LinePatterns {
    typed: Regex,
    untyped: Regex,
}

/// Result of classifying one physical line (terminator already stripped).
/// Captures borrow from the line; the reassembler copies what it keeps.
pub enum LineKind<'a> {
    Noise,
    TypedStart {
        oid: &'a [u8],
        tag: &'a [u8],
        value: &'a [u8],
    },
    UntypedStart {
        oid: &'a [u8],
        value: &'a [u8],
    },
    Continuation,
}

impl LinePatterns {
    pub fn new() -> Self {
        Self {
            typed: Regex::new(r"(?-u)^(\.[^ ]+) = ([^:]+): (.*)")
                .expect("typed walk line pattern"),
            untyped: Regex::new(r"(?-u)^(\.[^ ]+) = (.*)")
                .expect("untyped walk line pattern"),
        }
    }

    /// Classify one line. The typed pattern is tried first, so a line
    /// satisfying both start forms is treated as typed.
    pub fn classify<'a>(&self, line: &'a [u8]) -> LineKind<'a> {
        if contains(line, END_OF_MIB) {
            return LineKind::Noise;
        }
        if let Some(caps) = self.typed.captures(line) {
            let (_, [oid, tag, value]) = caps.extract();
            return LineKind::TypedStart { oid, tag, value };
        }
        if let Some(caps) = self.untyped.captures(line) {
            let (_, [oid, value]) = caps.extract();
            return LineKind::UntypedStart { oid, value };
        }
        LineKind::Continuation
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
