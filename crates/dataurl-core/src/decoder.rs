//! Data URL parser — folds the token stream into a [`DataUrl`].
//!
//! The parser starts from the RFC defaults (`text/plain;charset=US-ASCII`,
//! ascii encoding) and lets tokens override them:
//!
//! - an explicit media type removes the default `charset` parameter, so only
//!   an explicit `charset` parameter later re-adds one
//! - a repeated attribute overwrites the previous value (last write wins)
//! - quoted parameter values undo backslash escaping; unquoted values and
//!   ascii payloads undo percent escaping — two distinct mechanisms, kept
//!   distinct
//! - the payload decoder stays unselected until a `base64` marker or the
//!   comma disambiguates it
//!
//! The first error from any stage — lexer, percent decoder, base64 decoder —
//! aborts the parse. No partial result is ever returned.

use std::io::Read;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{ParseError, Result};
use crate::escape::{unescape, unescape_to_string};
use crate::lexer::{Lexer, TokenKind};
use crate::types::{DataUrl, Encoding};

/// Decoder applied to the raw payload text after the comma.
type PayloadDecoder = fn(&str) -> Result<Vec<u8>>;

fn ascii_payload(raw: &str) -> Result<Vec<u8>> {
    Ok(unescape(raw)?)
}

fn base64_payload(raw: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(raw)?)
}

/// Decode a data URL string.
///
/// ```rust
/// use dataurl_core::{decode_string, Encoding};
///
/// let url = decode_string("data:;base64,aGV5YQ==").unwrap();
/// assert_eq!(url.encoding, Encoding::Base64);
/// assert_eq!(url.data, b"heya");
/// ```
pub fn decode_string(input: &str) -> Result<DataUrl> {
    let mut url = DataUrl::default();
    let mut current_attr = "";
    let mut quoted_value = false;
    let mut payload_decoder: Option<PayloadDecoder> = None;

    for token in Lexer::new(input) {
        match token.kind {
            TokenKind::Error => return Err(ParseError::Lex(token.text.to_string())),
            TokenKind::MediaType => {
                url.media_type.type_ = token.text.to_string();
                // An explicit type drops the default charset; absence of an
                // explicit charset parameter then means no charset at all.
                url.media_type.params.remove("charset");
            }
            TokenKind::MediaSubType => {
                url.media_type.subtype = token.text.to_string();
            }
            TokenKind::ParamAttr => current_attr = token.text,
            TokenKind::LeftQuote => quoted_value = true,
            TokenKind::ParamVal => {
                let value = if quoted_value {
                    quoted_value = false;
                    unquote(token.text)
                } else {
                    unescape_to_string(token.text)?
                };
                url.media_type
                    .params
                    .insert(current_attr.to_string(), value);
            }
            TokenKind::Base64Marker => {
                url.encoding = Encoding::Base64;
                payload_decoder = Some(base64_payload);
            }
            TokenKind::DataComma => {
                if payload_decoder.is_none() {
                    payload_decoder = Some(ascii_payload);
                }
            }
            TokenKind::Data => {
                let decode_payload = payload_decoder.unwrap_or(ascii_payload);
                url.data = decode_payload(token.text)?;
            }
            TokenKind::Eof => return Ok(url),
            TokenKind::Prefix
            | TokenKind::MediaSep
            | TokenKind::ParamSemicolon
            | TokenKind::ParamEqual
            | TokenKind::RightQuote => {}
        }
    }

    // The lexer terminates every stream with Eof or Error; reaching this
    // point means the input ran out before the payload separator.
    Err(ParseError::Lex("no data separator found".to_string()))
}

/// Decode a data URL from a reader.
///
/// Reads the stream fully into memory first, then parses it. Read failures
/// surface as [`ParseError::Io`].
pub fn decode<R: Read>(mut reader: R) -> Result<DataUrl> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    decode_string(&text)
}

/// Undo quoted-string escaping: a backslash makes the following character
/// literal, so `\"` becomes `"` and `\\` becomes `\`. A trailing lone
/// backslash cannot have escaped anything and passes through.
fn unquote(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}
