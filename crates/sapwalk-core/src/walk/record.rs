/// One logical walk entry as reassembled from physical lines: oid, SNMP type
/// tag, raw value text. Byte vectors throughout; STRING values may carry
/// arbitrary bytes and the converter passes them through untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkRecord {
    pub oid: Vec<u8>,
    pub tag: Vec<u8>,
    pub value: Vec<u8>,
}

impl WalkRecord {
    pub fn typed(oid: &[u8], tag: &[u8], value: &[u8]) -> Self {
        Self {
            oid: oid.to_vec(),
            tag: tag.to_vec(),
            value: value.to_vec(),
        }
    }

    /// Untyped lines still need a SAP type downstream: anything that reads as
    /// an integer literal is INTEGER, everything else is STRING.
    pub fn untyped(oid: &[u8], value: &[u8]) -> Self {
        let tag: &[u8] = if parses_as_int(value) {
            b"INTEGER"
        } else {
            b"STRING"
        };
        Self {
            oid: oid.to_vec(),
            tag: tag.to_vec(),
            value: value.to_vec(),
        }
    }

    /// Append a continuation line, re-inserting the terminator the line
    /// split consumed. Values never store a trailing terminator of their own.
    pub fn push_continuation(&mut self, line: &[u8]) {
        self.value.push(b'\n');
        self.value.extend_from_slice(line);
    }
}

/// Accepts an optional sign followed by a base-10, 0x/0X, 0b/0B, 0o/0O, or
/// legacy leading-zero octal literal.
fn parses_as_int(value: &[u8]) -> bool {
    let Ok(text) = std::str::from_utf8(value) else {
        return false;
    };
    let unsigned = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);

    let (digits, radix) = if let Some(d) = strip_base_prefix(unsigned, "0x", "0X") {
        (d, 16)
    } else if let Some(d) = strip_base_prefix(unsigned, "0b", "0B") {
        (d, 2)
    } else if let Some(d) = strip_base_prefix(unsigned, "0o", "0O") {
        (d, 8)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (&unsigned[1..], 8)
    } else {
        (unsigned, 10)
    };

    !digits.is_empty() && i64::from_str_radix(digits, radix).is_ok()
}

fn strip_base_prefix<'a>(s: &'a str, lower: &str, upper: &str) -> Option<&'a str> {
    s.strip_prefix(lower).or_else(|| s.strip_prefix(upper))
}
