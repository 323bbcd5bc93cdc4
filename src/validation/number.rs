//! Numeric text conversion for the servings and quantity inputs.
//!
//! Follows the browser `Number()` conversion rules so that a value typed into
//! a numeric input is accepted or rejected the same way a web form would:
//! surrounding whitespace is ignored, whitespace-only text is zero, and
//! hex/octal/binary integer literals and `Infinity` are numbers.

use regex::Regex;
use std::sync::LazyLock;

static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("decimal literal pattern is valid")
});

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Converts text to a number, returning `None` where `Number()` yields NaN.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(is_js_whitespace);

    if trimmed.is_empty() {
        return Some(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    if DECIMAL_LITERAL.is_match(trimmed) {
        return trimmed.parse::<f64>().ok();
    }

    None
}

/// Parses `0x`/`0o`/`0b` literals.
///
/// Returns `None` when the text has no radix prefix, `Some(None)` when it has
/// one but the digits are invalid.
fn parse_radix_literal(text: &str) -> Option<Option<f64>> {
    let mut chars = text.chars();
    if chars.next() != Some('0') {
        return None;
    }
    let radix = match chars.next() {
        Some('x' | 'X') => 16,
        Some('o' | 'O') => 8,
        Some('b' | 'B') => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(None);
    }

    let mut value = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(digit) => value = value * f64::from(radix) + f64::from(digit),
            None => return Some(None),
        }
    }
    Some(Some(value))
}
