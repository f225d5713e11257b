//! Runtime values.

use std::fmt;

/// A runtime value: the result of evaluating an expression, and the contents
/// of every binding.
///
/// Numbers are `f64` everywhere: literals, arithmetic and `===` share one
/// representation, so `8 / 4 === 2` holds and `7 / 2` is `3.5`.
///
/// `PartialEq` is the language's `===`: values of different kinds are never
/// equal, numbers follow IEEE-754 (`0 === -0`, `NaN !== NaN`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Bool(bool),
}

/// The kind of a [`Value`], for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Bool,
}

impl Value {
    #[inline]
    pub const fn kind(self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Bool,
        }
    }

    #[inline]
    pub const fn as_number(self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n),
            Value::Bool(_) => None,
        }
    }

    #[inline]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(b),
            Value::Number(_) => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Number => "number",
            ValueKind::Bool => "boolean",
        })
    }
}

/// Renders values the way `print` shows them: `3`, `2.5`, `-0`, `1e+21`,
/// `1e-7`, `NaN`, `Infinity`, `true`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) if n.is_nan() => f.write_str("NaN"),
            Value::Number(n) if n.is_infinite() => {
                f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Value::Number(n) if n == 0.0 => f.write_str(if n.is_sign_negative() { "-0" } else { "0" }),
            Value::Number(n) => fmt_number(f, n),
        }
    }
}

/// Write a finite, non-zero number in JavaScript's `Number#toString`
/// layout: the shortest round-trip digits, positional when the decimal
/// exponent is in `-7 < e < 21`, exponential otherwise.
fn fmt_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    // `{:e}` yields the shortest round-trip digits, e.g. `1.2345e-7`.
    let sci = format!("{:e}", n.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let len = i32::try_from(digits.len()).unwrap_or(i32::MAX);
    // Digits before the decimal point.
    let point = exponent + 1;
    let zeros = |count: i32| "0".repeat(usize::try_from(count).unwrap_or(0));

    if n.is_sign_negative() {
        f.write_str("-")?;
    }
    if len <= point && point <= 21 {
        write!(f, "{digits}{}", zeros(point - len))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(usize::try_from(point).unwrap_or(0));
        write!(f, "{int}.{frac}")
    } else if -6 < point && point <= 0 {
        write!(f, "0.{}{digits}", zeros(-point))
    } else {
        let (first, rest) = digits.split_at(1);
        let sign = if exponent < 0 { '-' } else { '+' };
        let magnitude = exponent.unsigned_abs();
        if rest.is_empty() {
            write!(f, "{first}e{sign}{magnitude}")
        } else {
            write!(f, "{first}.{rest}e{sign}{magnitude}")
        }
    }
}
