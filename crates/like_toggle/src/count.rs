// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric reading of the counter text.
//!
//! The counter has no type of its own, it is whatever text the page shows. Text is
//! coerced the way the page script always did it: surrounding whitespace is ignored,
//! empty text counts as zero, decimal, exponent, `0x`/`0o`/`0b` and `Infinity` forms
//! are all numbers, and anything else becomes `NaN`. Once a counter is `NaN` it stays
//! `NaN`, no matter how often it's incremented or decremented.
//!
//! Results are printed the way a browser prints numbers, so `"1.5"` goes to `"2.5"`
//! and `"1e3"` goes to `"1001"`.

use std::fmt;

use crate::error::{Error, Result};

/// Largest integer with an exact double representation, `2^53 - 1`.
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Count {
    /// Integer within `±MAX_SAFE_INTEGER`
    Number(i64),
    /// Anything else a number can be: fractions, huge values, infinities
    Float(f64),
    NaN,
}

impl Count {
    /// Parse counter text, failing with [`Error::CounterParse`] if it isn't numeric.
    ///
    /// `"NaN"` itself parses successfully, so a counter that already went bad
    /// does not keep reporting errors.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

        if trimmed.is_empty() {
            return Ok(Count::Number(0));
        }
        if trimmed == "NaN" {
            return Ok(Count::NaN);
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return Ok(Count::from_int(n));
        }

        parse_float(trimmed)
            .map(Count::from_f64)
            .ok_or_else(|| Error::CounterParse { text: text.into() })
    }

    /// Same as [`parse`](Count::parse), but non-numeric text becomes [`Count::NaN`].
    pub fn coerce(text: &str) -> Self {
        Count::parse(text).unwrap_or(Count::NaN)
    }

    pub fn from_f64(x: f64) -> Self {
        if x.is_nan() {
            Count::NaN
        } else if x.fract() == 0.0 && x.abs() <= MAX_SAFE_INTEGER as f64 {
            Count::Number(x as i64)
        } else {
            Count::Float(x)
        }
    }

    fn from_int(n: i64) -> Self {
        if n.unsigned_abs() <= MAX_SAFE_INTEGER {
            Count::Number(n)
        } else {
            Count::Float(n as f64)
        }
    }

    pub fn increment(self) -> Self {
        match self {
            Count::Number(n) => Count::from_int(n + 1),
            Count::Float(x) => Count::from_f64(x + 1.0),
            Count::NaN => Count::NaN,
        }
    }

    pub fn decrement(self) -> Self {
        match self {
            Count::Number(n) => Count::from_int(n - 1),
            Count::Float(x) => Count::from_f64(x - 1.0),
            Count::NaN => Count::NaN,
        }
    }

    pub const fn is_nan(self) -> bool {
        matches!(self, Count::NaN)
    }
}

impl From<i64> for Count {
    fn from(n: i64) -> Self {
        Count::from_int(n)
    }
}

/// Non-integer numeric text. Rust's own float syntax is wider than what a page
/// accepts (`inf`, `nan`, `infinity` in any case), so the shape is checked first.
fn parse_float(s: &str) -> Option<f64> {
    const RADIX: [(&str, u32); 6] = [
        ("0x", 16),
        ("0X", 16),
        ("0o", 8),
        ("0O", 8),
        ("0b", 2),
        ("0B", 2),
    ];

    for (prefix, radix) in RADIX {
        if let Some(digits) = s.strip_prefix(prefix) {
            if digits.is_empty() {
                return None;
            }

            return digits
                .chars()
                .try_fold(0.0, |acc: f64, c| Some(acc * radix as f64 + c.to_digit(radix)? as f64));
        }
    }

    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    if unsigned == "Infinity" {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    if !is_decimal_literal(unsigned) {
        return None;
    }

    s.parse().ok()
}

/// `digits [. digits] [e [+-] digits]`, with at least one digit before the exponent.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut pos = 0;
    let digits = |pos: &mut usize| {
        let start = *pos;

        while bytes.get(*pos).is_some_and(u8::is_ascii_digit) {
            *pos += 1;
        }

        *pos - start
    };

    let mut mantissa = digits(&mut pos);

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        mantissa += digits(&mut pos);
    }
    if mantissa == 0 {
        return false;
    }
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;

        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        if digits(&mut pos) == 0 {
            return false;
        }
    }

    pos == bytes.len()
}

/// Print `x` the way `Number.prototype.toString` does.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_infinite() {
        return f.write_str(if x < 0.0 { "-Infinity" } else { "Infinity" });
    }
    if x == 0.0 {
        return f.write_str("0");
    }
    if x < 0.0 {
        f.write_str("-")?;
    }

    // Shortest round-trip digits, e.g. `9.223372036854776e18`
    let sci = format!("{:e}", x.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits = mantissa.replace('.', "");
    let k = digits.len() as i32;
    let n = exp.parse::<i32>().unwrap_or(0) + 1;

    if k <= n && n <= 21 {
        write!(f, "{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);

        write!(f, "{int}.{frac}")
    } else if -6 < n && n <= 0 {
        write!(f, "0.{}{digits}", "0".repeat(-n as usize))
    } else {
        let e = n - 1;
        let sign = if e < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);

        if rest.is_empty() {
            write!(f, "{first}e{sign}{}", e.abs())
        } else {
            write!(f, "{first}.{rest}e{sign}{}", e.abs())
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Number(n) => f.write_str(itoa::Buffer::new().format(*n)),
            Count::Float(x) => write_float(f, *x),
            Count::NaN => f.write_str("NaN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after_like(text: &str) -> String {
        Count::coerce(text).increment().to_string()
    }

    #[test]
    fn parse_numbers() {
        assert_eq!(Count::parse("10"), Ok(Count::Number(10)));
        assert_eq!(Count::parse("  42\n"), Ok(Count::Number(42)));
        assert_eq!(Count::parse("-3"), Ok(Count::Number(-3)));
        assert_eq!(Count::parse("+7"), Ok(Count::Number(7)));
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(Count::parse(""), Ok(Count::Number(0)));
        assert_eq!(Count::parse("   "), Ok(Count::Number(0)));
    }

    #[test]
    fn numeric_text_in_other_forms() {
        assert_eq!(after_like("1.5"), "2.5");
        assert_eq!(after_like("1e3"), "1001");
        assert_eq!(after_like("0x1A"), "27");
        assert_eq!(after_like("0o17"), "16");
        assert_eq!(after_like("0b101"), "6");
        assert_eq!(after_like(".5"), "1.5");
        assert_eq!(after_like("0.1"), "1.1");
        assert_eq!(after_like("-2.5"), "-1.5");
        assert_eq!(after_like("Infinity"), "Infinity");
        assert_eq!(after_like("-Infinity"), "-Infinity");
        assert_eq!(Count::coerce("2.5").decrement().to_string(), "1.5");
    }

    #[test]
    fn beyond_i64() {
        assert_eq!(after_like("9223372036854775808"), "9223372036854776000");
        assert_eq!(after_like("1e21"), "1e+21");
    }

    #[test]
    fn non_numeric() {
        assert_eq!(
            Count::parse("abc"),
            Err(Error::CounterParse { text: "abc".into() })
        );

        for text in ["abc", "1.2.3", "1e", "0x", "-0x10", "inf", "infinity", "1_000", "."] {
            assert!(Count::coerce(text).is_nan(), "{text:?} should not be a number");
        }

        assert!(Count::parse("NaN").is_ok_and(Count::is_nan));
    }

    #[test]
    fn nan_is_sticky() {
        assert!(Count::NaN.increment().is_nan());
        assert!(Count::NaN.decrement().is_nan());
        assert_eq!(Count::NaN.to_string(), "NaN");
    }

    #[test]
    fn increment_then_decrement_is_identity() {
        for count in [Count::from(-5), Count::from(0), Count::from(999), Count::coerce("2.5")] {
            assert_eq!(count.increment().decrement(), count);
            assert_eq!(count.decrement().increment(), count);
        }
    }

    #[test]
    fn unbounded_below() {
        assert_eq!(Count::from(0).decrement().to_string(), "-1");
    }

    #[test]
    fn loses_precision_past_safe_integers() {
        let max = Count::from(MAX_SAFE_INTEGER as i64);

        assert_eq!(max.increment().to_string(), "9007199254740992");
        assert_eq!(max.increment().increment().to_string(), "9007199254740992");
    }

    #[test]
    fn float_formatting() {
        assert_eq!(Count::Float(1e-7).to_string(), "1e-7");
        assert_eq!(Count::Float(0.000001).to_string(), "0.000001");
        assert_eq!(Count::Float(1.25e22).to_string(), "1.25e+22");
        assert_eq!(Count::Float(123.456).to_string(), "123.456");
    }
}
