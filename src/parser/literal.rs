//! Literal parser: surface text of a token to a typed value

use crate::value::{Array, Value};

/// What a token's surface text denotes, in classification order
#[derive(Debug, Clone, PartialEq)]
pub enum TokenClass<'a> {
    /// Whole token is a decimal number
    Number(f64),

    /// Wrapped in double quotes; holds the text between them
    Text(&'a str),

    /// Exactly one character that is not a number
    Char(char),

    /// Wrapped in brackets; holds the interior
    Array(&'a str),

    /// Anything else, kept as raw text
    Bare(&'a str),
}

/// Classify a token; the first matching class wins
pub fn classify(token: &str) -> TokenClass<'_> {
    if let Some(n) = parse_number(token) {
        return TokenClass::Number(n);
    }
    if let Some(inner) = strip_delimited(token, '"', '"') {
        return TokenClass::Text(inner);
    }
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return TokenClass::Char(c);
    }
    if let Some(inner) = strip_delimited(token, '[', ']') {
        return TokenClass::Array(inner);
    }
    TokenClass::Bare(token)
}

pub fn parse_element(token: &str) -> Value {
    match classify(token) {
        TokenClass::Number(n) => Value::Number(n),
        TokenClass::Text(s) => Value::Text(s.to_string()),
        TokenClass::Char(c) => Value::Char(c),
        TokenClass::Array(inner) => Value::Array(parse_interior(inner)),
        TokenClass::Bare(s) => Value::Text(s.to_string()),
    }
}

/// Parse a token as a stack item. Anything that is not an array literal is
/// wrapped in a length-1 array.
pub fn parse_array(token: &str) -> Array {
    match classify(token) {
        TokenClass::Array(inner) => parse_interior(inner),
        _ => Array::singleton(parse_element(token)),
    }
}

fn parse_interior(inner: &str) -> Array {
    split_elements(inner)
        .into_iter()
        .map(parse_element)
        .collect()
}

/// Split the interior of an array literal into element tokens.
///
/// Commas and whitespace separate elements, but only outside nested brackets
/// and quotes. Pieces are trimmed and empty pieces dropped.
pub fn split_elements(inner: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut depth = 0i32;
    let mut in_quotes = false;
    let mut prev = None;

    for (i, c) in inner.char_indices() {
        match c {
            '"' if prev != Some('\\') => in_quotes = !in_quotes,
            _ if in_quotes => {}
            '[' => depth += 1,
            ']' => depth -= 1,
            c if depth == 0 && (c == ',' || c.is_whitespace()) => {
                pieces.push(&inner[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
        prev = Some(c);
    }
    pieces.push(&inner[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

fn strip_delimited(token: &str, open: char, close: char) -> Option<&str> {
    if token.len() < 2 {
        return None;
    }
    token.strip_prefix(open)?.strip_suffix(close)
}

/// Parse a token that is a decimal literal in its entirety:
/// `[+-]? (digits [. digits] | . digits) ([eE] [+-]? digits)?`
fn parse_number(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&bytes[i..]);
        i += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_digits = count_digits(&bytes[i..]);
        if exp_digits == 0 {
            return None;
        }
        i += exp_digits;
    }

    if i != bytes.len() {
        return None;
    }
    token.parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
