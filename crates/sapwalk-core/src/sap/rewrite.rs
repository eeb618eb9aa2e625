// crates/sapwalk-core/src/sap/rewrite.rs
//
// Rewrites one reassembled walk record into SAP vocabulary. Pure and total:
// unrecognized type tags pass through with only the generic trims and the
// width-suffix collapse applied.

use crate::sap::line::SapRecord;
use crate::walk::record::WalkRecord;

/// Per-type rewrite, keyed by the exact original tag. First match wins;
/// adding a mapping is a table change, not a control-flow change.
const RULES: &[(&[u8], Rule)] = &[
    (b"STRING", Rule::OctetText),
    (b"Timeticks", Rule::TimeTicks),
    (b"OID", Rule::ObjectId),
    (b"INTEGER", Rule::Integer),
    (b"Hex-STRING", Rule::OctetHex),
];

#[derive(Clone, Copy)]
enum Rule {
    /// STRING: the SAP text field cannot carry embedded line breaks, so a
    /// multi-line value switches to the 0x hex representation.
    OctetText,
    /// Timeticks encodes as `(NNNN) <time string>`; only the tick count
    /// before the first `)` is kept.
    TimeTicks,
    /// An OID-typed value is itself a dotted identifier.
    ObjectId,
    Integer,
    /// Hex-STRING arrives as space-separated pairs; SAP wants one 0x blob.
    OctetHex,
}

impl Rule {
    fn apply(self, value: Vec<u8>) -> (Vec<u8>, Vec<u8>) {
        match self {
            Rule::OctetText => {
                let value = if value.contains(&b'\n') {
                    hex_0x(&value)
                } else {
                    value
                };
                (b"OctetString".to_vec(), value)
            }
            Rule::TimeTicks => {
                let head = value.split(|&b| b == b')').next().unwrap_or(&[]);
                let ticks = trim_leading(head, b'(');
                (b"TimeTicks".to_vec(), ticks.to_vec())
            }
            Rule::ObjectId => {
                let stripped = trim_leading(&value, b'.').to_vec();
                (b"ObjectID".to_vec(), stripped)
            }
            Rule::Integer => (b"Integer".to_vec(), value),
            Rule::OctetHex => {
                let mut out = b"0x".to_vec();
                out.extend(value.iter().copied().filter(|&b| b != b' '));
                (b"OctetString".to_vec(), out)
            }
        }
    }
}

/// The full rewrite: leading-dot oid strip, value trims, per-type rule,
/// width-suffix collapse. Every input is handled by some branch.
pub fn normalize(rec: WalkRecord) -> SapRecord {
    let oid = trim_leading(&rec.oid, b'.').to_vec();
    let value = trim_value(&rec.value).to_vec();

    let (tag, value) = match RULES.iter().find(|(token, _)| rec.tag == *token) {
        Some((_, rule)) => rule.apply(value),
        None => (rec.tag, value),
    };

    let tag = collapse_width(tag);

    SapRecord { oid, tag, value }
}

/// ASCII whitespace off both ends, then at most one surrounding quote
/// character per end (either `"` or `'`, each end independently).
fn trim_value(value: &[u8]) -> &[u8] {
    let v = value.trim_ascii();
    let v = match v.first() {
        Some(&b'"') | Some(&b'\'') => &v[1..],
        _ => v,
    };
    match v.last() {
        Some(&b'"') | Some(&b'\'') => &v[..v.len() - 1],
        _ => v,
    }
}

/// Width-qualified numeric tags collapse to their unqualified form
/// (Integer32 -> Integer, Counter32 -> Counter).
fn collapse_width(mut tag: Vec<u8>) -> Vec<u8> {
    if tag.ends_with(b"32") {
        tag.truncate(tag.len() - 2);
    }
    tag
}

fn trim_leading(bytes: &[u8], ch: u8) -> &[u8] {
    let start = bytes.iter().take_while(|&&b| b == ch).count();
    &bytes[start..]
}

fn hex_0x(bytes: &[u8]) -> Vec<u8> {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = Vec::with_capacity(2 + bytes.len() * 2);
    out.extend_from_slice(b"0x");
    for &b in bytes {
        out.push(HEX[(b >> 4) as usize]);
        out.push(HEX[(b & 0x0F) as usize]);
    }
    out
}
