/// One normalized output record, ready to serialize.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SapRecord {
    pub oid: Vec<u8>,
    pub tag: Vec<u8>,
    pub value: Vec<u8>,
}

impl SapRecord {
    /// The three fields joined with the fixed `, ` separator, in oid / type /
    /// value order. No terminator; the converter owns newline placement.
    pub fn render(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.oid.len() + self.tag.len() + self.value.len() + 4);
        out.extend_from_slice(&self.oid);
        out.extend_from_slice(b", ");
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(b", ");
        out.extend_from_slice(&self.value);
        out
    }
}
