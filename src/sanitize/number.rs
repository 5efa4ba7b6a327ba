//! Integer cleaning for `number` fields
//!
//! Rules, applied after trimming surrounding whitespace:
//!
//! - An optional leading `+` or `-` sign.
//! - Digits, optionally followed by ONE decimal separator and more digits.
//!   The separator is `.` or, when no `.` is present, a single `,`. The
//!   fractional part is truncated toward zero (`0,00` -> 0, `1,000` -> 1).
//! - Anything else (letters, exponents, several separators, both `.` and
//!   `,`) is not a number and cleans to 0.
//! - Values beyond the `i64` range saturate to `i64::MAX` / `i64::MIN`.
//! - Legacy: a multi-digit integer with a leading `0` made only of octal
//!   digits is read base 8 (`01000` -> 512). `08` and `09` are decimal.

use serde_json::{Number, Value};

/// Clean an arbitrary JSON value into an integer
#[must_use]
pub fn clean_number(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => number_to_i64(n),
        Value::String(s) => parse_integer(s),
        Value::Array(_) | Value::Object(_) => 0,
    }
}

/// Parse a submitted string into an integer using the module rules
#[must_use]
pub fn parse_integer(raw: &str) -> i64 {
    let trimmed = raw.trim();

    let (negative, body) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let Some((int_part, frac_part)) = split_decimal(body) else {
        return 0;
    };

    if frac_part.is_none() && is_legacy_octal(int_part) {
        return accumulate(int_part, 8, negative);
    }

    accumulate(int_part, 10, negative)
}

/// Split `body` into integer and optional fractional digit runs.
///
/// Returns `None` when `body` is not a plain decimal literal.
fn split_decimal(body: &str) -> Option<(&str, Option<&str>)> {
    let dots = body.matches('.').count();
    let commas = body.matches(',').count();

    let (int_part, frac_part) = match (dots, commas) {
        (0, 0) => (body, None),
        (1, 0) => body.split_once('.').map(|(i, f)| (i, Some(f)))?,
        (0, 1) => body.split_once(',').map(|(i, f)| (i, Some(f)))?,
        _ => return None,
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !frac_part.is_none_or(all_digits) {
        return None;
    }
    if int_part.is_empty() && frac_part.is_none_or(str::is_empty) {
        return None;
    }

    Some((int_part, frac_part))
}

fn is_legacy_octal(digits: &str) -> bool {
    digits.len() > 1
        && digits.starts_with('0')
        && digits.bytes().all(|b| (b'0'..=b'7').contains(&b))
}

/// Saturating accumulation of validated digits
fn accumulate(digits: &str, radix: u32, negative: bool) -> i64 {
    let radix_i64 = i64::from(radix);
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0_i64, |acc, digit| {
            let shifted = acc.saturating_mul(radix_i64);
            if negative {
                shifted.saturating_sub(i64::from(digit))
            } else {
                shifted.saturating_add(i64::from(digit))
            }
        })
}

fn number_to_i64(n: &Number) -> i64 {
    if let Some(i) = n.as_i64() {
        return i;
    }
    if n.as_u64().is_some() {
        return i64::MAX;
    }
    // `as` saturates out-of-range floats and maps NaN to 0
    n.as_f64().map_or(0, |f| f.trunc() as i64)
}
