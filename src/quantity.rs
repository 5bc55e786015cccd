//! Quantity values
//!
//! Quantities, timer durations and metadata values all share one tagged
//! shape: an integer, a decimal or a literal string. Fractions like `1/2`
//! and free text like `some` stay as literal strings.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A coerced value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    /// Numeric, no fractional part in the source
    Int(i64),
    /// Numeric with a fractional part
    Decimal(f64),
    /// Anything non numeric
    Text(String),
}

impl Value {
    /// Coerces trimmed text: all digits is an integer, `digits.digits` is a
    /// decimal, anything else stays text.
    pub(crate) fn parse(text: &str) -> Self {
        if is_all_digits(text) {
            if let Ok(n) = text.parse::<i64>() {
                return Value::Int(n);
            }
        } else if is_decimal(text) {
            if let Ok(n) = text.parse::<f64>() {
                return Value::Decimal(n);
            }
        }
        Value::Text(text.to_string())
    }

    /// Coercion for cookware counts, which have no decimal form: an integer
    /// or a literal string.
    pub(crate) fn parse_count(text: &str) -> Self {
        if is_all_digits(text) {
            if let Ok(n) = text.parse::<i64>() {
                return Value::Int(n);
            }
        }
        Value::Text(text.to_string())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(t) => Some(t),
            _ => None,
        }
    }
}

fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn is_decimal(text: &str) -> bool {
    let Some((int, frac)) = text.split_once('.') else {
        return false;
    };
    is_all_digits(int) && is_all_digits(frac)
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            // keep a trailing ".0" so a decimal never reads as an integer
            Value::Decimal(n) if n.fract() == 0.0 => write!(f, "{n:.1}"),
            Value::Decimal(n) => write!(f, "{n}"),
            Value::Text(t) => write!(f, "{t}"),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Decimal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}
