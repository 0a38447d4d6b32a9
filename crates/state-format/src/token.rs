//! Sentinel tokens for runtime values that JSON cannot carry literally.
//!
//! `NaN`, `Infinity`, `-Infinity`, and `undefined` have no JSON literal, so
//! they travel as tokens: identity is the enum tag, never string comparison,
//! which keeps a user string that merely *spells* `"NaN"` distinct from the
//! sentinel itself. Each token has two textual forms:
//!
//! - **spelling** — the canonical display text (`Infinity`, `NaN`, ...),
//!   also what the edit codec emits unquoted in editable text
//! - **placeholder** — a structurally-valid JSON string stand-in used inside
//!   transport JSON and during the codec's substitution passes

/// Sentinel standing in for a non-JSON-safe runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `Number.POSITIVE_INFINITY`
    PosInfinity,
    /// `Number.NEGATIVE_INFINITY`
    NegInfinity,
    /// `NaN`
    Nan,
    /// `undefined`
    Undefined,
}

impl Token {
    /// Every token, ordered by spelling length (longest first) so textual
    /// scanners never read the `Infinity` suffix out of `-Infinity`.
    pub const ALL: [Token; 4] = [
        Token::NegInfinity,
        Token::Undefined,
        Token::PosInfinity,
        Token::Nan,
    ];

    /// Canonical display spelling, exact and case-sensitive.
    pub fn spelling(self) -> &'static str {
        match self {
            Token::PosInfinity => "Infinity",
            Token::NegInfinity => "-Infinity",
            Token::Nan => "NaN",
            Token::Undefined => "undefined",
        }
    }

    /// JSON-string stand-in used on the wire and mid-substitution.
    pub fn placeholder(self) -> &'static str {
        match self {
            Token::PosInfinity => "__inspector_infinity__",
            Token::NegInfinity => "__inspector_negative_infinity__",
            Token::Nan => "__inspector_nan__",
            Token::Undefined => "__inspector_undefined__",
        }
    }

    /// Look up a token by its exact canonical spelling.
    pub fn from_spelling(text: &str) -> Option<Token> {
        Token::ALL.into_iter().find(|t| t.spelling() == text)
    }

    /// Look up a token by its exact placeholder string.
    pub fn from_placeholder(text: &str) -> Option<Token> {
        Token::ALL.into_iter().find(|t| t.placeholder() == text)
    }

    /// Classify a non-finite float. Finite values return `None`.
    pub fn from_f64(f: f64) -> Option<Token> {
        if f.is_nan() {
            Some(Token::Nan)
        } else if f == f64::INFINITY {
            Some(Token::PosInfinity)
        } else if f == f64::NEG_INFINITY {
            Some(Token::NegInfinity)
        } else {
            None
        }
    }
}
