//! Content sniffing used to tell text files from binary ones.
//!
//! Only the first [`SNIFF_LEN`] bytes are inspected. Known signatures win;
//! anything else is plain text unless the sample holds a byte that never
//! appears in text (NUL and most other C0 controls).

use std::fmt;

/// Number of leading bytes considered when sniffing.
pub const SNIFF_LEN: usize = 512;

/// A detected MIME type such as `text/plain; charset=utf-8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentType(&'static str);

impl ContentType {
    pub const TEXT_UTF8: ContentType = ContentType("text/plain; charset=utf-8");
    pub const OCTET_STREAM: ContentType = ContentType("application/octet-stream");

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Returns `true` for every `text/*` type.
    pub fn is_text(&self) -> bool {
        self.0.starts_with("text/")
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Leading-byte signatures, checked in order.
const MAGIC: &[(&[u8], &str)] = &[
    (b"%PDF-", "application/pdf"),
    (b"%!PS-Adobe-", "application/postscript"),
    (b"\xFE\xFF", "text/plain; charset=utf-16be"),
    (b"\xFF\xFE", "text/plain; charset=utf-16le"),
    (b"\xEF\xBB\xBF", "text/plain; charset=utf-8"),
    (b"\x00\x00\x01\x00", "image/x-icon"),
    (b"\x00\x00\x02\x00", "image/x-icon"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"\x89PNG\x0D\x0A\x1A\x0A", "image/png"),
    (b"\xFF\xD8\xFF", "image/jpeg"),
    (b"OggS\x00", "application/ogg"),
    (b"PK\x03\x04", "application/zip"),
    (b"\x1F\x8B\x08", "application/x-gzip"),
    (b"Rar!\x1A\x07\x00", "application/x-rar-compressed"),
    (b"Rar!\x1A\x07\x01\x00", "application/x-rar-compressed"),
    (b"7z\xBC\xAF\x27\x1C", "application/x-7z-compressed"),
    (b"\x00asm", "application/wasm"),
    (b"\x7FELF", "application/x-executable"),
];

/// HTML openers, matched case-insensitively and followed by a space or `>`.
const HTML_TAGS: &[&[u8]] = &[
    b"<!DOCTYPE HTML",
    b"<HTML",
    b"<HEAD",
    b"<SCRIPT",
    b"<IFRAME",
    b"<H1",
    b"<DIV",
    b"<FONT",
    b"<TABLE",
    b"<A",
    b"<STYLE",
    b"<TITLE",
    b"<B",
    b"<BODY",
    b"<BR",
    b"<P",
    b"<!--",
];

/// Classifies `data` by its leading bytes.
pub fn sniff(data: &[u8]) -> ContentType {
    let sample = &data[..data.len().min(SNIFF_LEN)];

    let trimmed = trim_leading_whitespace(sample);
    if HTML_TAGS.iter().any(|tag| is_html_tag(trimmed, tag)) {
        return ContentType("text/html; charset=utf-8");
    }
    if trimmed.starts_with(b"<?xml") {
        return ContentType("text/xml; charset=utf-8");
    }

    for &(signature, mime) in MAGIC {
        if sample.starts_with(signature) {
            return ContentType(mime);
        }
    }
    if is_riff(sample, b"WEBPVP") {
        return ContentType("image/webp");
    }
    if is_riff(sample, b"WAVE") {
        return ContentType("audio/wave");
    }

    if sample.iter().any(|&b| is_binary_byte(b)) {
        ContentType::OCTET_STREAM
    } else {
        ContentType::TEXT_UTF8
    }
}

fn trim_leading_whitespace(data: &[u8]) -> &[u8] {
    let start = data
        .iter()
        .position(|&b| !matches!(b, b'\t' | b'\n' | 0x0C | b'\r' | b' '))
        .unwrap_or(data.len());
    &data[start..]
}

fn is_html_tag(data: &[u8], tag: &[u8]) -> bool {
    if data.len() < tag.len() + 1 {
        return false;
    }
    let head_matches = data
        .iter()
        .zip(tag)
        .all(|(d, t)| d.to_ascii_uppercase() == *t);
    head_matches && matches!(data[tag.len()], b' ' | b'>')
}

fn is_riff(data: &[u8], kind: &[u8]) -> bool {
    data.len() >= 8 + kind.len() && data.starts_with(b"RIFF") && data[8..].starts_with(kind)
}

/// Bytes that do not occur in text files.
fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}
