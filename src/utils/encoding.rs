//! Text decoding with an ordered encoding fallback
//!
//! Files are decoded as UTF-8 first, then Latin-1, then Windows-1252; the
//! first decoder that accepts the bytes wins.

use crate::error::{ReadmeGenError, Result};
use std::fs;
use std::path::Path;

/// Text encodings tried when reading project files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Latin1,
    Windows1252,
}

/// Decoding order used by `read_file_safely`
pub const FALLBACK_ORDER: [Encoding; 3] = [Encoding::Utf8, Encoding::Latin1, Encoding::Windows1252];

// 0x80..=0x9F; None marks bytes Windows-1252 leaves undefined
const WINDOWS_1252_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'), None, Some('\u{201A}'), Some('\u{0192}'),
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None, Some('\u{017D}'), None,
    None, Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
    Some('\u{0153}'), None, Some('\u{017E}'), Some('\u{0178}'),
];

impl Encoding {
    /// Decode `bytes`, or `None` if they are not valid in this encoding
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Encoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            Encoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            Encoding::Windows1252 => bytes
                .iter()
                .map(|&b| match b {
                    0x80..=0x9F => WINDOWS_1252_HIGH[usize::from(b - 0x80)],
                    _ => Some(char::from(b)),
                })
                .collect(),
        }
    }
}

/// Decode bytes with the first encoding in `FALLBACK_ORDER` that accepts them
pub fn decode_with_fallback(bytes: &[u8]) -> Option<String> {
    FALLBACK_ORDER.iter().find_map(|encoding| encoding.decode(bytes))
}

/// Read a file as text. Undecodable content yields an empty string;
/// only the read itself can fail.
pub fn read_file_safely(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| ReadmeGenError::file_read_error(path, e))?;
    Ok(decode_with_fallback(&bytes).unwrap_or_default())
}
