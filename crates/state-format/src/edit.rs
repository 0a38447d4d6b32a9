//! Edit codec — the two-way conversion between a state value and the
//! editable text an edit field shows.
//!
//! Tokens have no JSON literal, so both directions go through a placeholder
//! substitution pass anchored to *value position*: a placeholder or spelling
//! counts only when it is preceded by `:`, `,`, `[`, or start-of-text and
//! followed by `,`, `]`, `}`, or end-of-text. Key text is never rewritten,
//! so a key literally named `undefined` survives both directions untouched.
//!
//! - [`to_edit`] encodes tokens as placeholder strings, serializes the tree
//!   compactly with `serde_json`, then rewrites each value-position
//!   placeholder into its unquoted canonical spelling.
//! - [`to_submit`] runs the mirror image: a quote-aware scanner rewrites
//!   unquoted value-position spellings into quoted placeholders, the text is
//!   parsed as JSON, placeholders resolve back to tokens, and every object
//!   field that came back `undefined` is deleted.

use crate::error::Result;
use crate::token::Token;
use crate::types::StateValue;

/// Produce the editable text for a state value.
///
/// Primitives use JSON literal syntax; tokens (and non-finite floats) render
/// as their unquoted canonical spelling — not strict JSON, by design: the
/// output feeds a permissive edit field and [`to_submit`] accepts it back.
/// Ordinary string content, including a string that merely spells a token,
/// stays quoted and escaped exactly as JSON encodes it.
pub fn to_edit(value: &StateValue) -> Result<String> {
    let json = value.to_json()?;
    let text = serde_json::to_string(&json)?;
    Ok(unquote_placeholders(&text))
}

/// Parse user-edited text back into a state value.
///
/// A bare token spelling is recognized directly (it is not a legal JSON
/// document on its own). Any other text goes through spelling-to-placeholder
/// rewriting and a strict JSON parse; malformed text surfaces
/// [`StateFormatError::Parse`](crate::StateFormatError::Parse) with no
/// partial recovery. An object field edited to `undefined` is removed from
/// the result, at every nesting level, rather than kept with a sentinel.
pub fn to_submit(text: &str) -> Result<StateValue> {
    let trimmed = text.trim();
    if let Some(token) = Token::from_spelling(trimmed) {
        return Ok(StateValue::Token(token));
    }
    let rewritten = quote_token_spellings(trimmed);
    let json: serde_json::Value = serde_json::from_str(&rewritten)?;
    let mut value = StateValue::from_json(&json)?;
    prune_undefined_fields(&mut value);
    Ok(value)
}

/// Rewrite each value-position `"placeholder"` in serialized JSON into its
/// unquoted token spelling. Compact `serde_json` output has no interstitial
/// whitespace, so the anchors are the immediately adjacent bytes. A quote
/// inside a string literal is always escaped, so a bare `"` followed by a
/// full placeholder and a closing `"` is a genuine standalone string token,
/// never a fragment of longer user content.
fn unquote_placeholders(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'"' {
            if let Some((token, end)) = quoted_placeholder_at(text, i) {
                if anchored_compact(bytes, i, end) {
                    out.push_str(&text[copied..i]);
                    out.push_str(token.spelling());
                    copied = end;
                    i = end;
                    continue;
                }
            }
        }
        i += 1;
    }
    out.push_str(&text[copied..]);
    out
}

/// Match `"placeholder"` starting at `start` (which must index a `"`).
/// Returns the token and the index just past the closing quote.
fn quoted_placeholder_at(text: &str, start: usize) -> Option<(Token, usize)> {
    let rest = &text[start + 1..];
    for token in Token::ALL {
        let ph = token.placeholder();
        if rest.starts_with(ph) && rest.as_bytes().get(ph.len()) == Some(&b'"') {
            return Some((token, start + ph.len() + 2));
        }
    }
    None
}

/// Value-position anchor for compact JSON: preceded by `:`, `,`, `[`, or
/// start; followed by `,`, `]`, `}`, or end. A key fails the trailing check
/// (it is followed by `:`), so key text is never rewritten.
fn anchored_compact(bytes: &[u8], start: usize, end: usize) -> bool {
    let before_ok = start == 0 || matches!(bytes[start - 1], b':' | b',' | b'[');
    let after_ok = end == bytes.len() || matches!(bytes[end], b',' | b']' | b'}');
    before_ok && after_ok
}

/// Rewrite each unquoted value-position token spelling in user-edited text
/// into its quoted placeholder, producing parseable JSON. String literals
/// are skipped wholesale (tracking escapes), so quoted content — including a
/// key whose text equals a spelling — passes through unaltered. User text
/// may carry arbitrary whitespace, so anchors skip over it on both sides.
fn quote_token_spellings(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() + 16);
    let mut copied = 0;
    let mut i = 0;
    let mut in_string = false;
    let mut escaped = false;
    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }
        if b == b'"' {
            in_string = true;
            i += 1;
            continue;
        }
        if let Some((token, end)) = spelling_at(text, i) {
            if anchored_loose(bytes, i, end) {
                out.push_str(&text[copied..i]);
                out.push('"');
                out.push_str(token.placeholder());
                out.push('"');
                copied = end;
                i = end;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&text[copied..]);
    out
}

/// Match a token spelling starting at `start`. `Token::ALL` is ordered
/// longest spelling first, so `-Infinity` is never read as bare `Infinity`.
/// Comparison is byte-wise: `start` may sit inside a multi-byte character
/// in malformed input, where a `str` slice would panic.
fn spelling_at(text: &str, start: usize) -> Option<(Token, usize)> {
    for token in Token::ALL {
        let sp = token.spelling().as_bytes();
        if text.as_bytes()[start..].starts_with(sp) {
            return Some((token, start + sp.len()));
        }
    }
    None
}

/// Value-position anchor for hand-edited text: same delimiters as
/// [`anchored_compact`], but whitespace between the spelling and its
/// anchoring delimiter is allowed.
fn anchored_loose(bytes: &[u8], start: usize, end: usize) -> bool {
    let mut i = start;
    loop {
        if i == 0 {
            break;
        }
        let b = bytes[i - 1];
        if b.is_ascii_whitespace() {
            i -= 1;
            continue;
        }
        if !matches!(b, b':' | b',' | b'[') {
            return false;
        }
        break;
    }
    let mut j = end;
    while j < bytes.len() && bytes[j].is_ascii_whitespace() {
        j += 1;
    }
    j == bytes.len() || matches!(bytes[j], b',' | b']' | b'}')
}

/// Delete every object field whose value resolved to the `undefined`
/// sentinel, at every nesting level. Mirrors the host-runtime convention
/// where assigning `undefined` to a field is how an edit removes it.
/// Array elements are left alone: a slot holding `undefined` is still a
/// slot, only named fields disappear.
fn prune_undefined_fields(value: &mut StateValue) {
    match value {
        StateValue::Object(fields) => {
            fields.retain(|(_, v)| !matches!(v, StateValue::Token(Token::Undefined)));
            for (_, v) in fields.iter_mut() {
                prune_undefined_fields(v);
            }
        }
        StateValue::Array(items) => {
            for item in items.iter_mut() {
                prune_undefined_fields(item);
            }
        }
        StateValue::Custom(custom) => prune_undefined_fields(&mut custom.value),
        _ => {}
    }
}
