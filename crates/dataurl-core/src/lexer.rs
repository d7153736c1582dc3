//! Tokenizer for the data URL grammar.
//!
//! A single forward pass over the input, one character of lookahead, no
//! backtracking. The grammar (RFC 2397, informal ABNF):
//!
//! ```text
//! dataurl    = "data:" [ mediatype ] *( ";" parameter ) [ ";base64" ] "," data
//! mediatype  = type "/" subtype
//! parameter  = attribute "=" ( token / quoted-string )
//! token      = 1*( ALPHA / DIGIT / "+" / "-" / "." )
//! data       = *OCTET          ; taken verbatim to end of input
//! ```
//!
//! [`Lexer`] is an iterator: tokens are produced one at a time, as soon as
//! they are recognized, so a consumer can fold them without the whole
//! sequence ever being materialized. The stream always ends with either an
//! [`TokenKind::Eof`] token or a single [`TokenKind::Error`] token carrying
//! a message; nothing is produced after an error.

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// The literal `data:` prefix.
    Prefix,
    /// A media type, e.g. `text`.
    MediaType,
    /// The `/` between type and subtype.
    MediaSep,
    /// A media subtype, e.g. `plain`.
    MediaSubType,
    /// The `;` opening a parameter.
    ParamSemicolon,
    /// A parameter attribute name.
    ParamAttr,
    /// The `=` between attribute and value.
    ParamEqual,
    /// The opening `"` of a quoted parameter value.
    LeftQuote,
    /// A parameter value, still escaped as it appeared in the input.
    ParamVal,
    /// The closing `"` of a quoted parameter value.
    RightQuote,
    /// The `base64` marker before the comma.
    Base64Marker,
    /// The `,` separating the header from the payload.
    DataComma,
    /// The raw payload text after the comma.
    Data,
    /// A lexing failure; the token text is the message. Always the last token.
    Error,
    /// End of input. Always the last token of a successful lex.
    Eof,
}

/// A token with its kind and source text slice.
///
/// For an [`TokenKind::Error`] token, `text` is the error message instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The source text of this token.
    pub text: &'src str,
}

impl<'src> Token<'src> {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: &'src str) -> Self {
        Self { kind, text }
    }
}

/// Characters allowed in a media type or subtype.
fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Characters allowed in a parameter attribute name.
fn is_attr_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

/// Where the state machine currently is. Each state emits at most one token
/// per step; states that only reclassify (an absent media type falling
/// through to the parameter loop) emit nothing and advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Prefix,
    MediaType,
    MediaSep,
    MediaSubType,
    /// Expecting `;` (another parameter) or `,` (the payload separator).
    ParamOrComma,
    ParamAttr,
    ParamEqual,
    /// Expecting an unquoted value or the opening quote of a quoted one.
    ParamValue,
    /// Inside a quoted value, scanning for the closing quote.
    QuotedValue,
    RightQuote,
    Data,
    Eof,
    Done,
}

/// Tokenizer over a data URL string.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    input: &'src str,
    pos: usize,
    state: State,
}

const DATA_PREFIX: &str = "data:";

impl<'src> Lexer<'src> {
    /// Create a lexer over the given input.
    pub fn new(input: &'src str) -> Self {
        Lexer {
            input,
            pos: 0,
            state: State::Prefix,
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    #[inline]
    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Consume the longest run of bytes satisfying `pred`, returning it as a
    /// slice of the input. All delimiters in the grammar are ASCII, so runs
    /// always end on a character boundary.
    fn take_run(&mut self, pred: fn(u8) -> bool) -> &'src str {
        let start = self.pos;
        while self.peek().is_some_and(pred) {
            self.bump();
        }
        &self.input[start..self.pos]
    }

    /// Emit an error token and stop the stream.
    fn fail(&mut self, message: &'static str) -> Token<'src> {
        self.state = State::Done;
        Token::new(TokenKind::Error, message)
    }

    fn emit(&mut self, kind: TokenKind, text: &'src str, next: State) -> Token<'src> {
        self.state = next;
        Token::new(kind, text)
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        loop {
            match self.state {
                State::Done => return None,

                State::Prefix => {
                    if !self.input.starts_with(DATA_PREFIX) {
                        return Some(self.fail("expected data: prefix"));
                    }
                    self.pos = DATA_PREFIX.len();
                    return Some(self.emit(TokenKind::Prefix, DATA_PREFIX, State::MediaType));
                }

                State::MediaType => {
                    // A leading `;` or `,` (or end of input) means no explicit
                    // media type; the defaults apply and the parameter loop
                    // takes over.
                    match self.peek() {
                        Some(b) if is_token_byte(b) => {}
                        Some(b';') | Some(b',') | None => {
                            self.state = State::ParamOrComma;
                            continue;
                        }
                        Some(_) => return Some(self.fail("invalid character for media type")),
                    }
                    let run = self.take_run(is_token_byte);
                    return match self.peek() {
                        Some(b'/') => Some(self.emit(TokenKind::MediaType, run, State::MediaSep)),
                        _ => Some(self.fail("invalid character for media type")),
                    };
                }

                State::MediaSep => {
                    self.bump();
                    return Some(self.emit(TokenKind::MediaSep, "/", State::MediaSubType));
                }

                State::MediaSubType => {
                    let run = self.take_run(is_token_byte);
                    return match self.peek() {
                        Some(b';') | Some(b',') => {
                            Some(self.emit(TokenKind::MediaSubType, run, State::ParamOrComma))
                        }
                        _ => Some(self.fail("invalid character for media subtype")),
                    };
                }

                State::ParamOrComma => {
                    return match self.peek() {
                        Some(b';') => {
                            self.bump();
                            Some(self.emit(TokenKind::ParamSemicolon, ";", State::ParamAttr))
                        }
                        Some(b',') => {
                            self.bump();
                            Some(self.emit(TokenKind::DataComma, ",", State::Data))
                        }
                        _ => Some(self.fail("no data separator found")),
                    };
                }

                State::ParamAttr => {
                    let run = self.take_run(is_attr_byte);
                    return match self.peek() {
                        Some(b'=') if !run.is_empty() => {
                            Some(self.emit(TokenKind::ParamAttr, run, State::ParamEqual))
                        }
                        // A bare `base64` immediately before the comma is the
                        // encoding marker, not a parameter.
                        Some(b',') if run == "base64" => {
                            Some(self.emit(TokenKind::Base64Marker, run, State::ParamOrComma))
                        }
                        _ => Some(self.fail("invalid character for attribute")),
                    };
                }

                State::ParamEqual => {
                    self.bump();
                    return Some(self.emit(TokenKind::ParamEqual, "=", State::ParamValue));
                }

                State::ParamValue => {
                    if self.peek() == Some(b'"') {
                        self.bump();
                        return Some(self.emit(TokenKind::LeftQuote, "\"", State::QuotedValue));
                    }
                    let run = self.take_run(|b| b != b';' && b != b',');
                    return Some(self.emit(TokenKind::ParamVal, run, State::ParamOrComma));
                }

                State::QuotedValue => {
                    let start = self.pos;
                    loop {
                        match self.peek() {
                            // A backslash escapes the following character; both
                            // stay in the token text, uninterpreted for now.
                            Some(b'\\') => {
                                self.bump();
                                if self.peek().is_some() {
                                    self.bump();
                                }
                            }
                            Some(b'"') => {
                                let run = &self.input[start..self.pos];
                                return Some(self.emit(TokenKind::ParamVal, run, State::RightQuote));
                            }
                            Some(_) => self.bump(),
                            None => return Some(self.fail("unterminated quoted string")),
                        }
                    }
                }

                State::RightQuote => {
                    self.bump();
                    return Some(self.emit(TokenKind::RightQuote, "\"", State::ParamOrComma));
                }

                State::Data => {
                    let rest = &self.input[self.pos..];
                    if rest.is_empty() {
                        self.state = State::Eof;
                        continue;
                    }
                    self.pos = self.input.len();
                    return Some(self.emit(TokenKind::Data, rest, State::Eof));
                }

                State::Eof => {
                    return Some(self.emit(TokenKind::Eof, "", State::Done));
                }
            }
        }
    }
}
