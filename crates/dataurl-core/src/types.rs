//! Value types for parsed data URLs.
//!
//! A [`DataUrl`] is the structured form of an RFC 2397 `data:` URL: a
//! [`MediaType`] describing the payload, the transfer [`Encoding`] used on
//! the wire, and the decoded payload bytes. Parsing produces one owned
//! `DataUrl` per call; the parser never hands out shared state, so callers
//! are free to mutate `params` afterwards.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::decoder::decode_string;
use crate::encoder::encode;
use crate::escape::escape_string;

/// Identifier for the percent-escaped transfer encoding.
pub const ENCODING_ASCII: &str = "ascii";
/// Identifier for the base64 transfer encoding.
pub const ENCODING_BASE64: &str = "base64";

/// Transfer encoding of a data URL payload.
///
/// RFC 2397 defines exactly two: the implicit percent-escaped form and
/// base64 (signalled by a `;base64` marker before the comma).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Percent-escaped payload (the RFC's default).
    #[default]
    Ascii,
    /// Base64-encoded payload.
    Base64,
}

impl Encoding {
    /// The encoding's identifier as it is commonly spelled.
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Ascii => ENCODING_ASCII,
            Encoding::Base64 => ENCODING_BASE64,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A media type, subtype, and optional parameters, e.g. `text/plain;charset=utf-8`.
///
/// Parameter keys are unique; iteration order is the map's key order, so
/// serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    /// The top-level type, e.g. `text`.
    pub type_: String,
    /// The subtype, e.g. `plain`.
    pub subtype: String,
    /// Parameters such as `charset`.
    pub params: BTreeMap<String, String>,
}

impl MediaType {
    /// Build a media type with no parameters.
    pub fn new(type_: impl Into<String>, subtype: impl Into<String>) -> Self {
        MediaType {
            type_: type_.into(),
            subtype: subtype.into(),
            params: BTreeMap::new(),
        }
    }

    /// The `type/subtype` pair without parameters.
    pub fn content_type(&self) -> String {
        format!("{}/{}", self.type_, self.subtype)
    }
}

/// The RFC 2397 default: `text/plain;charset=US-ASCII`.
///
/// Every call builds a fresh parameter map, so mutating one parsed result
/// never leaks into another.
impl Default for MediaType {
    fn default() -> Self {
        let mut params = BTreeMap::new();
        params.insert("charset".to_string(), "US-ASCII".to_string());
        MediaType {
            type_: "text".to_string(),
            subtype: "plain".to_string(),
            params,
        }
    }
}

/// Renders `type/subtype` followed by `;name=value` for each parameter.
///
/// Parameter values are percent-escaped rather than quoted.
impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.type_, self.subtype)?;
        for (name, value) in &self.params {
            write!(f, ";{}={}", name, escape_string(value))?;
        }
        Ok(())
    }
}

/// A parsed data URL: media type, transfer encoding, and payload bytes.
///
/// `data` holds the decoded payload; it is empty (never absent) when the
/// URL carried nothing after the comma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    /// Media type of the payload.
    pub media_type: MediaType,
    /// Transfer encoding observed on the wire (and used when re-serializing).
    pub encoding: Encoding,
    /// Decoded payload bytes.
    pub data: Vec<u8>,
}

impl DataUrl {
    /// Build a data URL value from its parts.
    pub fn new(media_type: MediaType, encoding: Encoding, data: Vec<u8>) -> Self {
        DataUrl {
            media_type,
            encoding,
            data,
        }
    }
}

impl Default for DataUrl {
    fn default() -> Self {
        DataUrl {
            media_type: MediaType::default(),
            encoding: Encoding::Ascii,
            data: Vec::new(),
        }
    }
}

/// Renders the canonical serialized form, e.g. `data:text/plain;base64,aGV5YQ==`.
impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

/// Serializes as the canonical data URL string.
impl Serialize for DataUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode(self))
    }
}

/// Deserializes from a data URL string, surfacing parse failures as
/// deserialization errors.
impl<'de> Deserialize<'de> for DataUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        decode_string(&text).map_err(D::Error::custom)
    }
}
