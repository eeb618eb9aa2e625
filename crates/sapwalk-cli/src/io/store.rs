// crates/sapwalk-cli/src/io/store.rs
//
// File-backed walk store. Each imported walk owns three files under the
// store root, all sharing the content key of the raw upload:
//   <key>.snmp   raw walk bytes as imported
//   <key>.sap    converted SAP records
//   <key>.meta   name + import date

use anyhow::Context;
use std::path::{Path, PathBuf};

const META_MAGIC: &[u8; 4] = b"SAPW";

pub struct WalkStore {
    root: PathBuf,
}

/// Metadata kept alongside the two blobs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkMeta {
    pub name: String,
    /// Import time, unix seconds.
    pub date: u64,
}

impl WalkStore {
    /// Open a store directory, creating it on first use.
    pub fn open(root: &str) -> anyhow::Result<Self> {
        std::fs::create_dir_all(root).with_context(|| format!("create store {root}"))?;
        Ok(Self {
            root: PathBuf::from(root),
        })
    }

    /// File both blobs plus metadata; returns the walk key. Identical raw
    /// bytes land on the same key, so a re-import overwrites its own entry.
    pub fn put(&self, name: &str, raw: &[u8], sap: &[u8], date: u64) -> anyhow::Result<String> {
        let key = walk_key(raw);

        std::fs::write(self.raw_path(&key), raw)
            .with_context(|| format!("write raw blob for {key}"))?;
        std::fs::write(self.sap_path(&key), sap)
            .with_context(|| format!("write sap blob for {key}"))?;

        let meta = WalkMeta {
            name: name.to_string(),
            date,
        };
        std::fs::write(self.meta_path(&key), encode_meta(&meta))
            .with_context(|| format!("write meta for {key}"))?;

        Ok(key)
    }

    /// All stored walks, ordered by (date, key).
    pub fn list(&self) -> anyhow::Result<Vec<(String, WalkMeta)>> {
        let mut out = Vec::new();
        for entry in std::fs::read_dir(&self.root).with_context(|| "read store dir".to_string())? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("meta") {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let bytes = std::fs::read(&path).with_context(|| format!("read {}", path.display()))?;
            let meta = decode_meta(&bytes).with_context(|| format!("decode {}", path.display()))?;
            out.push((key.to_string(), meta));
        }
        out.sort_by(|a, b| a.1.date.cmp(&b.1.date).then_with(|| a.0.cmp(&b.0)));
        Ok(out)
    }

    pub fn meta(&self, key: &str) -> anyhow::Result<WalkMeta> {
        let path = self.meta_path(key);
        let bytes = std::fs::read(&path).with_context(|| format!("no stored walk {key}"))?;
        decode_meta(&bytes).with_context(|| format!("decode {}", path.display()))
    }

    pub fn raw_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.snmp"))
    }

    pub fn sap_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.sap"))
    }

    fn meta_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.meta"))
    }
}

/// Content key: hex of the first 16 blake3 bytes of the raw upload.
pub fn walk_key(raw: &[u8]) -> String {
    let hash = blake3::hash(raw);
    let mut id = [0u8; 16];
    id.copy_from_slice(&hash.as_bytes()[0..16]);
    hex16(&id)
}

/// Derive the stored display name from an uploaded filename: everything up
/// to the first dot, or the whole name if there is none.
pub fn name_from_filename(path: &str) -> String {
    let file = Path::new(path)
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or(path);
    file.split('.').next().unwrap_or(file).to_string()
}

/// .meta layout (little-endian):
/// MAGIC[4]
/// date:u64
/// name_len:u16
/// name[name_len]     (utf-8)
/// crc32:u32          (over everything before crc32)
fn encode_meta(meta: &WalkMeta) -> Vec<u8> {
    let name = meta.name.as_bytes();
    let name_len: u16 = name.len().min(u16::MAX as usize) as u16;

    let mut b = Vec::with_capacity(4 + 8 + 2 + name.len() + 4);
    b.extend_from_slice(META_MAGIC);
    b.extend_from_slice(&meta.date.to_le_bytes());
    b.extend_from_slice(&name_len.to_le_bytes());
    b.extend_from_slice(&name[..name_len as usize]);

    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());

    b
}

fn decode_meta(bytes: &[u8]) -> anyhow::Result<WalkMeta> {
    if bytes.len() < 4 + 8 + 2 + 4 {
        anyhow::bail!("meta too small");
    }
    if &bytes[0..4] != META_MAGIC {
        anyhow::bail!("bad meta magic");
    }

    let crc_off = bytes.len() - 4;
    let crc_expected = u32::from_le_bytes(bytes[crc_off..].try_into().unwrap());
    let crc_actual = crc32(&bytes[..crc_off]);
    if crc_expected != crc_actual {
        anyhow::bail!("meta crc32 mismatch");
    }

    let mut i = 4usize;
    let date = read_u64(bytes, &mut i)?;
    let name_len = read_u16(bytes, &mut i)? as usize;
    if i + name_len != crc_off {
        anyhow::bail!("meta name_len mismatch");
    }
    let name = std::str::from_utf8(&bytes[i..i + name_len])
        .context("meta name not utf-8")?
        .to_string();

    Ok(WalkMeta { name, date })
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

fn hex16(id: &[u8; 16]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(32);
    for &b in id {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0F) as usize] as char);
    }
    s
}

fn read_u16(bytes: &[u8], i: &mut usize) -> anyhow::Result<u16> {
    if bytes.len() < *i + 2 {
        anyhow::bail!("unexpected eof");
    }
    let v = u16::from_le_bytes(bytes[*i..*i + 2].try_into().unwrap());
    *i += 2;
    Ok(v)
}

fn read_u64(bytes: &[u8], i: &mut usize) -> anyhow::Result<u64> {
    if bytes.len() < *i + 8 {
        anyhow::bail!("unexpected eof");
    }
    let v = u64::from_le_bytes(bytes[*i..*i + 8].try_into().unwrap());
    *i += 8;
    Ok(v)
}
