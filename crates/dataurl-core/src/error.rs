//! Error types for data URL parsing and serialization.

use thiserror::Error;

/// Errors from the percent-escape codec.
#[derive(Error, Debug)]
pub enum EscapeError {
    /// A `%` was not followed by exactly two hex digits.
    #[error("invalid percent escape at byte {pos}")]
    InvalidPercentEscape {
        /// Byte offset of the offending `%`.
        pos: usize,
    },

    /// The unescaped bytes were requested as a string but are not valid UTF-8.
    #[error("unescaped bytes are not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Errors that can occur while decoding a data URL.
///
/// The first failure from any stage — lexer, percent decoder, or base64
/// decoder — aborts the parse; no partial result is returned.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The lexer rejected the input. Carries the lexer's message, e.g.
    /// `invalid character for media type`.
    #[error("{0}")]
    Lex(String),

    /// A parameter value or ascii payload held a malformed percent escape.
    #[error(transparent)]
    Escape(#[from] EscapeError),

    /// The base64 payload had an invalid alphabet or padding.
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Reading the input stream failed before lexing could start.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while writing a serialized data URL to a sink.
///
/// Serialization itself is infallible; only the write can fail, and a
/// failure may leave partial output behind.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The output sink rejected a write.
    #[error("failed to write data URL: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for decode results.
pub type Result<T> = std::result::Result<T, ParseError>;
