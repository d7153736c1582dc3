//! # dataurl-core
//!
//! Parser and serializer for **`data:` URLs** (RFC 2397): the compact URI
//! form that embeds a media type, optional parameters, an encoding marker,
//! and the payload itself directly in the URL text.
//!
//! Decoding runs a hand-rolled state machine lexer over the input and folds
//! the resulting token stream into a typed [`DataUrl`]; encoding is the
//! inverse, producing a canonical serialization (deterministic parameter
//! order, percent-escaped parameter values).
//!
//! ## Quick start
//!
//! ```rust
//! use dataurl_core::{decode_string, encode, Encoding};
//!
//! let url = decode_string("data:text/plain;charset=utf-8;base64,aGV5YQ==").unwrap();
//! assert_eq!(url.media_type.content_type(), "text/plain");
//! assert_eq!(url.encoding, Encoding::Base64);
//! assert_eq!(url.data, b"heya");
//!
//! // Re-serialize to the canonical form
//! assert_eq!(encode(&url), "data:text/plain;charset=utf-8;base64,aGV5YQ==");
//! ```
//!
//! Omitted parts fall back to the RFC defaults (`text/plain;charset=US-ASCII`,
//! percent-escaped payload):
//!
//! ```rust
//! use dataurl_core::decode_string;
//!
//! let url = decode_string("data:,A%20brief%20note").unwrap();
//! assert_eq!(url.media_type.content_type(), "text/plain");
//! assert_eq!(url.data, b"A brief note");
//! ```
//!
//! ## Modules
//!
//! - [`decoder`] — data URL text → [`DataUrl`]
//! - [`encoder`] — [`DataUrl`] → canonical data URL text
//! - [`lexer`] — the tokenizer behind the decoder
//! - [`escape`] — the RFC 2397 percent-escape variant (space is `%20`, never `+`)
//! - [`error`] — error types for the decode and encode paths
//! - [`types`] — [`DataUrl`], [`MediaType`], [`Encoding`]

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod escape;
pub mod lexer;
pub mod types;

pub use decoder::{decode, decode_string};
pub use encoder::{encode, write_to};
pub use error::{EncodeError, EscapeError, ParseError};
pub use types::{DataUrl, Encoding, MediaType, ENCODING_ASCII, ENCODING_BASE64};
