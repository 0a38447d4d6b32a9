//! Property-based round-trip tests.
//!
//! Generates random state value trees and verifies the two codec contracts:
//! `to_submit(to_edit(v)) == v` and `from_json(to_json(v)) == v`, plus
//! totality of the display formatter. Strategies cover token-spelling
//! lookalike strings and keys, every sentinel token, and nested custom
//! wrappers.
//!
//! Exclusions, all by design rather than generator convenience:
//! - Object fields valued `undefined` (deleted on submit, so they cannot
//!   round-trip) — the object strategy filters them out.
//! - `Opaque` values (degrade to `null` in editable text).
//! - Duplicate object keys (JSON objects collapse them).
//! - Strings equal to a token's placeholder (placeholders are practically
//!   unique, not reserved; the generators simply never produce them).

use proptest::prelude::*;
use state_format::{
    format_inspector_state_value, to_edit, to_submit, CustomState, StateValue, Token,
};

// ============================================================================
// Strategies
// ============================================================================

fn arb_token() -> impl Strategy<Value = Token> {
    prop_oneof![
        Just(Token::PosInfinity),
        Just(Token::NegInfinity),
        Just(Token::Nan),
        Just(Token::Undefined),
    ]
}

/// Object keys, including token spellings as keys (they must never be
/// mistaken for tokens).
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-zA-Z_][a-zA-Z0-9_]{0,12}",
        1 => Just("undefined".to_string()),
        1 => Just("NaN".to_string()),
        1 => Just("Infinity".to_string()),
        1 => Just("-Infinity".to_string()),
    ]
}

/// String values with the edge cases that stress quoting and substitution.
fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 :,\\[\\]{}]{0,20}",
        Just("".to_string()),
        Just("Infinity".to_string()),
        Just("-Infinity".to_string()),
        Just("NaN".to_string()),
        Just("undefined".to_string()),
        Just("null".to_string()),
        Just("true".to_string()),
        Just("line1\nline2".to_string()),
        Just("say \"hi\"".to_string()),
        Just("path\\to\\file".to_string()),
        Just("caf\u{00e9}".to_string()),
        Just(":NaN,".to_string()),
        Just("[Infinity]".to_string()),
    ]
}

/// Floats generated as mantissa / 10^n so the decimal text representation
/// round-trips exactly, plus the non-finite specials (which normalize to
/// tokens and are covered separately).
fn arb_float() -> impl Strategy<Value = f64> {
    (-1_000_000_000i64..1_000_000_000i64, 1u32..5u32).prop_filter_map(
        "must not be a whole number",
        |(mantissa, decimals)| {
            let f = mantissa as f64 / 10f64.powi(decimals as i32);
            if f.fract() == 0.0 {
                None
            } else {
                Some(f)
            }
        },
    )
}

fn arb_leaf() -> impl Strategy<Value = StateValue> {
    prop_oneof![
        Just(StateValue::Null),
        any::<bool>().prop_map(StateValue::Bool),
        (-1_000_000i64..1_000_000i64).prop_map(StateValue::Int),
        arb_float().prop_map(StateValue::Float),
        arb_string().prop_map(StateValue::Str),
        arb_token().prop_map(StateValue::Token),
    ]
}

/// Deduplicate keys and drop `undefined`-valued fields (deleted on submit).
fn build_object(pairs: Vec<(String, StateValue)>) -> StateValue {
    let mut fields: Vec<(String, StateValue)> = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        if key == "_custom" {
            continue;
        }
        if matches!(value, StateValue::Token(Token::Undefined)) {
            continue;
        }
        if fields.iter().any(|(k, _)| k == &key) {
            continue;
        }
        fields.push((key, value));
    }
    StateValue::Object(fields)
}

fn arb_state_value() -> impl Strategy<Value = StateValue> {
    arb_leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            3 => prop::collection::vec(inner.clone(), 0..6).prop_map(StateValue::Array),
            3 => prop::collection::vec((arb_key(), inner.clone()), 0..6).prop_map(build_object),
            1 => (arb_string(), inner, any::<bool>()).prop_map(|(display_text, value, abbreviated)| {
                StateValue::Custom(CustomState {
                    display_text,
                    value: Box::new(value),
                    abbreviated,
                })
            }),
        ]
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Editable text parses back to an observably equivalent value.
    #[test]
    fn edit_roundtrip(value in arb_state_value()) {
        let text = to_edit(&value).unwrap();
        let back = to_submit(&text).unwrap();
        prop_assert_eq!(back, value);
    }

    /// The transport bridge is lossless in both directions.
    #[test]
    fn json_bridge_roundtrip(value in arb_state_value()) {
        let json = value.to_json().unwrap();
        let back = StateValue::from_json(&json).unwrap();
        prop_assert_eq!(back, value);
    }

    /// The display formatter is total: it labels anything without failing.
    #[test]
    fn formatter_is_total(value in arb_state_value()) {
        let _ = format_inspector_state_value(&value);
    }

    /// Bare tokens round-trip regardless of surrounding whitespace.
    #[test]
    fn bare_token_roundtrip(token in arb_token(), pad in "[ \t\n]{0,4}") {
        let text = format!("{}{}{}", pad, token.spelling(), pad);
        prop_assert_eq!(to_submit(&text).unwrap(), StateValue::Token(token));
    }
}
