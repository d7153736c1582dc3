//! RFC 2397 percent-escaping.
//!
//! This is deliberately not generic query-string escaping: space encodes to
//! `%20`, never `+`, and the unreserved set is the RFC 2396 one — ASCII
//! alphanumerics plus `-_.!~*'()`. Both the parser (ascii payloads, unquoted
//! parameter values) and the serializer go through this module.

use crate::error::EscapeError;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Whether a byte may appear unescaped.
fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Percent-escape arbitrary bytes. Unreserved bytes pass through; everything
/// else becomes `%XX` with uppercase hex digits.
pub fn escape(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len());
    for &b in data {
        if is_unreserved(b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX_DIGITS[(b >> 4) as usize] as char);
            out.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
        }
    }
    out
}

/// Like [`escape`], taking a string.
pub fn escape_string(s: &str) -> String {
    escape(s.as_bytes())
}

/// Decode a percent-escaped string to bytes.
///
/// `%XX` sequences decode to the corresponding byte; all other characters
/// pass through unchanged. Fails when a `%` is not followed by exactly two
/// hex digits.
pub fn unescape(s: &str) -> Result<Vec<u8>, EscapeError> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let (hi, lo) = match (bytes.get(i + 1), bytes.get(i + 2)) {
                (Some(&hi), Some(&lo)) => (hi, lo),
                _ => return Err(EscapeError::InvalidPercentEscape { pos: i }),
            };
            match (hex_value(hi), hex_value(lo)) {
                (Some(hi), Some(lo)) => out.push((hi << 4) | lo),
                _ => return Err(EscapeError::InvalidPercentEscape { pos: i }),
            }
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    Ok(out)
}

/// Like [`unescape`], returning a string. Additionally fails if the decoded
/// bytes are not valid UTF-8.
pub fn unescape_to_string(s: &str) -> Result<String, EscapeError> {
    Ok(String::from_utf8(unescape(s)?)?)
}
