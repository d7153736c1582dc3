//! Property-based round-trip tests.
//!
//! Uses `proptest` to generate random payloads, parameter maps, and whole
//! `DataUrl` values, checking the algebraic laws the codec promises:
//!
//! - `unescape(escape(b)) == b` for every byte sequence
//! - `decode_string(encode(url)) == url` for every well-formed value
//! - encoding is a fixpoint: re-encoding a decoded URL reproduces the same
//!   canonical text

use proptest::prelude::*;

use dataurl_core::escape::{escape, escape_string, unescape, unescape_to_string};
use dataurl_core::{decode_string, encode, DataUrl, Encoding, MediaType};

// ============================================================================
// Strategies
// ============================================================================

/// A media type or subtype: one or more token characters.
fn arb_token() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9][a-zA-Z0-9+.-]{0,9}").unwrap()
}

/// A parameter attribute name: letters, digits, and `-`.
fn arb_attr() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9][a-zA-Z0-9-]{0,7}").unwrap()
}

/// A parameter value, including the characters that force escaping.
fn arb_param_value() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-zA-Z0-9 ]{0,20}").unwrap(),
        Just("unformatted json".to_string()),
        Just(r#"b"<@>"r"#.to_string()),
        Just("café".to_string()),
        any::<String>(),
    ]
}

fn arb_encoding() -> impl Strategy<Value = Encoding> {
    prop_oneof![Just(Encoding::Ascii), Just(Encoding::Base64)]
}

fn arb_payload() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..64)
}

fn arb_data_url() -> impl Strategy<Value = DataUrl> {
    (
        arb_token(),
        arb_token(),
        prop::collection::btree_map(arb_attr(), arb_param_value(), 0..4),
        arb_encoding(),
        arb_payload(),
    )
        .prop_map(|(type_, subtype, params, encoding, data)| {
            let mut media_type = MediaType::new(type_, subtype);
            media_type.params = params;
            DataUrl::new(media_type, encoding, data)
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The escaper's core law: decoding inverts encoding for any bytes.
    #[test]
    fn unescape_inverts_escape(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let escaped = escape(&bytes);
        prop_assert_eq!(unescape(&escaped).unwrap(), bytes);
    }

    /// Same law through the string-typed convenience pair.
    #[test]
    fn unescape_to_string_inverts_escape_string(s in any::<String>()) {
        let escaped = escape_string(&s);
        prop_assert_eq!(unescape_to_string(&escaped).unwrap(), s);
    }

    /// Escaped output only ever contains unreserved characters and `%XX`.
    #[test]
    fn escaped_output_is_always_decodable(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        prop_assert!(unescape(&escape(&bytes)).is_ok());
    }

    /// Decoding a serialized value reproduces it exactly: media type,
    /// subtype, parameters, encoding, and payload bytes.
    #[test]
    fn decode_inverts_encode(url in arb_data_url()) {
        let text = encode(&url);
        let parsed = decode_string(&text)
            .unwrap_or_else(|e| panic!("decode failed for {text:?}: {e}"));
        prop_assert_eq!(parsed, url);
    }

    /// Serialization is canonical: encode ∘ decode ∘ encode is a fixpoint.
    #[test]
    fn encode_is_a_fixpoint(url in arb_data_url()) {
        let first = encode(&url);
        let second = encode(&decode_string(&first).unwrap());
        prop_assert_eq!(first, second);
    }

    /// A parameter value survives the quote-free canonical round-trip no
    /// matter what characters it holds.
    #[test]
    fn param_values_round_trip(value in arb_param_value()) {
        let mut media_type = MediaType::new("text", "plain");
        media_type.params.insert("v".to_string(), value.clone());
        let url = DataUrl::new(media_type, Encoding::Ascii, Vec::new());
        let parsed = decode_string(&encode(&url)).unwrap();
        prop_assert_eq!(&parsed.media_type.params["v"], &value);
    }
}
