//! The `StateValue` AST and its transport-JSON bridge.
//!
//! `StateValue` is the universal unit handled by the formatter and the edit
//! codec: a tagged union mirroring JSON plus the two inspector-specific
//! variants JSON cannot express — sentinel [`Token`]s for `NaN` /
//! `±Infinity` / `undefined`, and producer-attached [`CustomState`] display
//! wrappers. Integers and floats are kept apart, and objects use
//! `Vec<(String, StateValue)>` to preserve insertion order.
//!
//! On the wire (the transport-JSON convention the inspection bridge uses),
//! tokens travel as placeholder strings and custom wrappers as
//! `{"_custom": {"displayText": ..., "value": ...}}` objects, recognized
//! structurally by the `_custom` discriminator field rather than by any
//! nominal type.

use crate::error::{Result, StateFormatError};
use crate::token::Token;
use serde_json::{Map, Number, Value};

/// Maximum nesting depth accepted by every recursive conversion. Values are
/// owned trees, so cycles are impossible by construction; the ceiling guards
/// against adversarially deep nesting blowing the stack.
pub const MAX_DEPTH: usize = 128;

/// Discriminator field marking a custom-wrapped value in transport JSON.
const CUSTOM_FIELD: &str = "_custom";
const DISPLAY_TEXT_FIELD: &str = "displayText";
const VALUE_FIELD: &str = "value";
const ABBREVIATED_FIELD: &str = "abbreviated";

/// A runtime value as seen by the inspector.
#[derive(Debug, Clone, PartialEq)]
pub enum StateValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Sentinel for a value JSON cannot carry literally.
    Token(Token),
    Array(Vec<StateValue>),
    /// Key-value pairs in insertion order.
    Object(Vec<(String, StateValue)>),
    /// Producer-attached display wrapper around an underlying value.
    Custom(CustomState),
    /// Host value the inspector cannot decompose (function, symbol, exotic
    /// object); carries a type label. Displays generically and encodes to
    /// `null` in editable text rather than failing the node.
    Opaque(String),
}

/// A custom-wrapped value: a human label attached to an arbitrary underlying
/// value. The underlying value may itself be custom-wrapped; nesting is
/// never auto-flattened.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomState {
    /// Label shown in place of the underlying value.
    pub display_text: String,
    /// The value a consumer should treat as authoritative.
    pub value: Box<StateValue>,
    /// Whether `display_text` is an abbreviated form.
    pub abbreviated: bool,
}

impl StateValue {
    /// Convert a transport-JSON value into a `StateValue`.
    ///
    /// Placeholder strings in value position become [`Token`]s (keys are
    /// never reinterpreted, even when a key's text equals a placeholder),
    /// and `{"_custom": {...}}` objects become [`StateValue::Custom`].
    pub fn from_json(json: &Value) -> Result<StateValue> {
        Self::from_json_at(json, 0)
    }

    fn from_json_at(json: &Value, depth: usize) -> Result<StateValue> {
        if depth > MAX_DEPTH {
            return Err(StateFormatError::DepthLimit(MAX_DEPTH));
        }
        Ok(match json {
            Value::Null => StateValue::Null,
            Value::Bool(b) => StateValue::Bool(*b),
            Value::Number(n) => number_to_state(n),
            Value::String(s) => match Token::from_placeholder(s) {
                Some(token) => StateValue::Token(token),
                None => StateValue::Str(s.clone()),
            },
            Value::Array(arr) => {
                let mut items = Vec::with_capacity(arr.len());
                for item in arr {
                    items.push(Self::from_json_at(item, depth + 1)?);
                }
                StateValue::Array(items)
            }
            Value::Object(map) => {
                if let Some(custom) = Self::custom_from_map(map, depth)? {
                    return Ok(custom);
                }
                let mut fields = Vec::with_capacity(map.len());
                for (key, val) in map {
                    fields.push((key.clone(), Self::from_json_at(val, depth + 1)?));
                }
                StateValue::Object(fields)
            }
        })
    }

    /// Structural custom-wrapper check: a single `_custom` field whose value
    /// is an object carrying a string `displayText` and a `value`. Anything
    /// else (extra sibling fields, missing members, non-string label) parses
    /// as a plain object.
    fn custom_from_map(map: &Map<String, Value>, depth: usize) -> Result<Option<StateValue>> {
        if map.len() != 1 {
            return Ok(None);
        }
        let inner = match map.get(CUSTOM_FIELD) {
            Some(Value::Object(inner)) => inner,
            _ => return Ok(None),
        };
        let display_text = match inner.get(DISPLAY_TEXT_FIELD) {
            Some(Value::String(s)) => s.clone(),
            _ => return Ok(None),
        };
        let raw = match inner.get(VALUE_FIELD) {
            Some(raw) => raw,
            None => return Ok(None),
        };
        let abbreviated = matches!(inner.get(ABBREVIATED_FIELD), Some(Value::Bool(true)));
        Ok(Some(StateValue::Custom(CustomState {
            display_text,
            value: Box::new(Self::from_json_at(raw, depth + 1)?),
            abbreviated,
        })))
    }

    /// Convert a `StateValue` into its transport-JSON form.
    ///
    /// Tokens (and non-finite floats, which normalize to tokens) become
    /// placeholder strings; custom wrappers become `{"_custom": {...}}`
    /// objects; opaque host values degrade to `null`.
    pub fn to_json(&self) -> Result<Value> {
        self.to_json_at(0)
    }

    fn to_json_at(&self, depth: usize) -> Result<Value> {
        if depth > MAX_DEPTH {
            return Err(StateFormatError::DepthLimit(MAX_DEPTH));
        }
        Ok(match self {
            StateValue::Null => Value::Null,
            StateValue::Bool(b) => Value::Bool(*b),
            StateValue::Int(i) => Value::Number(Number::from(*i)),
            StateValue::Float(f) => match Token::from_f64(*f) {
                Some(token) => Value::String(token.placeholder().to_string()),
                None => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
            },
            StateValue::Str(s) => Value::String(s.clone()),
            StateValue::Token(token) => Value::String(token.placeholder().to_string()),
            StateValue::Array(items) => {
                let mut arr = Vec::with_capacity(items.len());
                for item in items {
                    arr.push(item.to_json_at(depth + 1)?);
                }
                Value::Array(arr)
            }
            StateValue::Object(fields) => {
                let mut map = Map::with_capacity(fields.len());
                for (key, val) in fields {
                    map.insert(key.clone(), val.to_json_at(depth + 1)?);
                }
                Value::Object(map)
            }
            StateValue::Custom(custom) => {
                let mut inner = Map::with_capacity(3);
                inner.insert(
                    DISPLAY_TEXT_FIELD.to_string(),
                    Value::String(custom.display_text.clone()),
                );
                inner.insert(VALUE_FIELD.to_string(), custom.value.to_json_at(depth + 1)?);
                if custom.abbreviated {
                    inner.insert(ABBREVIATED_FIELD.to_string(), Value::Bool(true));
                }
                let mut map = Map::with_capacity(1);
                map.insert(CUSTOM_FIELD.to_string(), Value::Object(inner));
                Value::Object(map)
            }
            StateValue::Opaque(_) => Value::Null,
        })
    }
}

/// Map a JSON number to `Int` when it is an exact i64, otherwise `Float`.
fn number_to_state(n: &Number) -> StateValue {
    if let Some(i) = n.as_i64() {
        StateValue::Int(i)
    } else if let Some(f) = n.as_f64() {
        StateValue::Float(f)
    } else {
        StateValue::Null
    }
}

impl From<bool> for StateValue {
    fn from(b: bool) -> Self {
        StateValue::Bool(b)
    }
}

impl From<i64> for StateValue {
    fn from(i: i64) -> Self {
        StateValue::Int(i)
    }
}

impl From<f64> for StateValue {
    /// Non-finite floats normalize to their token at construction, keeping
    /// raw `NaN` / `±Infinity` interchangeable with their sentinels.
    fn from(f: f64) -> Self {
        match Token::from_f64(f) {
            Some(token) => StateValue::Token(token),
            None => StateValue::Float(f),
        }
    }
}

impl From<&str> for StateValue {
    fn from(s: &str) -> Self {
        StateValue::Str(s.to_string())
    }
}

impl From<String> for StateValue {
    fn from(s: String) -> Self {
        StateValue::Str(s)
    }
}

impl From<Token> for StateValue {
    fn from(token: Token) -> Self {
        StateValue::Token(token)
    }
}
