//! # state-format
//!
//! Value formatting and edit round-trip codec for an inspection tree:
//! converting opaque, possibly non-JSON-safe runtime values into short
//! display labels, into editable text, and back into live values after a
//! user edit.
//!
//! Non-JSON-safe values (`NaN`, `Infinity`, `-Infinity`, `undefined`) are
//! carried as sentinel [`Token`]s, converted to their canonical spellings
//! only at the text boundary with substitution anchored to value position —
//! a key that merely spells `"undefined"` is never mistaken for the token.
//! Producers can attach a custom display label to any underlying value via
//! the structural `_custom` wrapping convention.
//!
//! ## Quick start
//!
//! ```rust
//! use state_format::{format_inspector_state_value, to_edit, to_submit, StateValue, Token};
//!
//! let value = StateValue::Object(vec![
//!     ("foo".to_string(), StateValue::Token(Token::PosInfinity)),
//! ]);
//!
//! // Tree-row label
//! assert_eq!(format_inspector_state_value(&value).to_string(), "Object");
//!
//! // Edit round-trip
//! let text = to_edit(&value).unwrap();
//! assert_eq!(text, r#"{"foo":Infinity}"#);
//! assert_eq!(to_submit(&text).unwrap(), value);
//! ```
//!
//! ## Modules
//!
//! - [`token`] — sentinel markers for non-JSON-safe values
//! - [`format`] — display labels ([`format_inspector_state_value`]) and
//!   one-level custom unwrap ([`get_raw_value`])
//! - [`edit`] — the [`to_edit`] / [`to_submit`] round-trip codec
//! - [`types`] — the [`StateValue`] AST and its transport-JSON bridge
//! - [`error`] — error types for parse/depth failures

pub mod edit;
pub mod error;
pub mod format;
pub mod token;
pub mod types;

pub use edit::{to_edit, to_submit};
pub use error::{Result, StateFormatError};
pub use format::{format_inspector_state_value, get_raw_value, Label};
pub use token::Token;
pub use types::{CustomState, StateValue, MAX_DEPTH};
