//! Display labels for tree rows and one-level unwrap of custom values.

use crate::token::Token;
use crate::types::StateValue;
use std::fmt;

/// A tree-row summary label. Primitives pass through with their original
/// type so UI code can render a number as a number and a boolean as a
/// boolean; everything else collapses to a computed string.
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Text(s) => f.write_str(s),
            Label::Int(i) => write!(f, "{}", i),
            Label::Float(x) => write!(f, "{}", x),
            Label::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Compute the summary label for a state value.
///
/// Rules, in priority order:
///
/// 1. Tokens (and non-finite floats, treated identically) show their
///    canonical spelling.
/// 2. `null` shows `"null"`.
/// 3. A custom-wrapped value shows its outermost `display_text`, unmodified;
///    nested wrappers are not descended into.
/// 4. Arrays show `"Array[n]"`.
/// 5. Plain objects — and opaque host values, which degrade rather than
///    fail — show `"Object"`.
/// 6. Remaining primitives pass through unchanged.
///
/// Pure and total: never fails for any well-formed value.
pub fn format_inspector_state_value(value: &StateValue) -> Label {
    match value {
        StateValue::Token(token) => Label::Text(token.spelling().to_string()),
        StateValue::Null => Label::Text("null".to_string()),
        StateValue::Custom(custom) => Label::Text(custom.display_text.clone()),
        StateValue::Array(items) => Label::Text(format!("Array[{}]", items.len())),
        StateValue::Object(_) | StateValue::Opaque(_) => Label::Text("Object".to_string()),
        StateValue::Bool(b) => Label::Bool(*b),
        StateValue::Int(i) => Label::Int(*i),
        StateValue::Float(f) => match Token::from_f64(*f) {
            Some(token) => Label::Text(token.spelling().to_string()),
            None => Label::Float(*f),
        },
        StateValue::Str(s) => Label::Text(s.clone()),
    }
}

/// Recover the value a consumer should treat as authoritative: exactly one
/// level of custom unwrap, leaving any nested wrapper intact. Everything
/// else is returned unchanged. Never fails.
pub fn get_raw_value(value: &StateValue) -> &StateValue {
    match value {
        StateValue::Custom(custom) => &custom.value,
        other => other,
    }
}
