//! Data URL serializer — canonical text from a [`DataUrl`].
//!
//! The output order is fixed: `data:`, `type/subtype`, one `;name=value`
//! per parameter, `;base64` when the payload is base64-encoded, the comma,
//! then the payload. Parameter values are always percent-escaped, even when
//! the value was originally quoted, and parameters appear in key order —
//! the serializer produces a canonical form, not an echo of the original
//! formatting.

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::EncodeError;
use crate::escape::{escape, escape_string};
use crate::types::{DataUrl, Encoding};

/// Serialize a data URL to its canonical text form.
///
/// ```rust
/// use dataurl_core::{encode, DataUrl, Encoding, MediaType};
///
/// let url = DataUrl::new(MediaType::new("text", "html"), Encoding::Base64, b"<p>hi</p>".to_vec());
/// assert_eq!(encode(&url), "data:text/html;base64,PHA+aGk8L3A+");
/// ```
pub fn encode(url: &DataUrl) -> String {
    let mut out = String::from("data:");
    out.push_str(&url.media_type.type_);
    out.push('/');
    out.push_str(&url.media_type.subtype);
    for (name, value) in &url.media_type.params {
        out.push(';');
        out.push_str(name);
        out.push('=');
        out.push_str(&escape_string(value));
    }
    match url.encoding {
        Encoding::Base64 => {
            out.push_str(";base64,");
            out.push_str(&STANDARD.encode(&url.data));
        }
        Encoding::Ascii => {
            out.push(',');
            out.push_str(&escape(&url.data));
        }
    }
    out
}

/// Serialize a data URL into a writer, returning the number of bytes written.
///
/// A write failure surfaces as [`EncodeError::Io`] and may leave partial
/// output in the sink; nothing is rolled back.
pub fn write_to<W: Write>(url: &DataUrl, writer: &mut W) -> Result<u64, EncodeError> {
    let text = encode(url);
    writer.write_all(text.as_bytes())?;
    Ok(text.len() as u64)
}
