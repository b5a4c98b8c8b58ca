//! Loose numeric values as they occur in stored documents.
//!
//! Quantities and prices arrive from forms and previously persisted JSON,
//! so a document may carry them as integers, floats, or free text. Rather
//! than rejecting such records, every summation in the system reads them
//! through [`Numeric`]: malformed or non-finite values contribute **zero**.
//! This policy lives here and nowhere else, so it is applied uniformly.

use serde::{Deserialize, Serialize};

use crate::entity::ValueObject;

/// A quantity or price as stored in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Numeric {
    /// The value as a whole-unit quantity. Malformed input yields 0.
    pub fn quantity(&self) -> i64 {
        match self {
            Numeric::Int(v) => *v,
            Numeric::Float(v) if v.is_finite() => v.trunc() as i64,
            Numeric::Float(_) => 0,
            Numeric::Text(s) => match s.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => v.trunc() as i64,
                _ => 0,
            },
        }
    }

    /// The value as a monetary amount. Malformed input yields 0.0.
    pub fn amount(&self) -> f64 {
        match self {
            Numeric::Int(v) => *v as f64,
            Numeric::Float(v) if v.is_finite() => *v,
            Numeric::Float(_) => 0.0,
            Numeric::Text(s) => match s.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => 0.0,
            },
        }
    }
}

impl ValueObject for Numeric {}

impl Default for Numeric {
    fn default() -> Self {
        Numeric::Int(0)
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Int(value)
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Float(value)
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Numeric::Text(value.to_string())
    }
}

impl From<String> for Numeric {
    fn from(value: String) -> Self {
        Numeric::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_pass_through() {
        assert_eq!(Numeric::from(10).quantity(), 10);
        assert_eq!(Numeric::from(10).amount(), 10.0);
    }

    #[test]
    fn numeric_text_is_parsed() {
        assert_eq!(Numeric::from("12").quantity(), 12);
        assert_eq!(Numeric::from(" 12.5 ").amount(), 12.5);
        assert_eq!(Numeric::from("12.5").quantity(), 12);
    }

    #[test]
    fn malformed_text_contributes_zero() {
        assert_eq!(Numeric::from("abc").quantity(), 0);
        assert_eq!(Numeric::from("abc").amount(), 0.0);
        assert_eq!(Numeric::from("").amount(), 0.0);
    }

    #[test]
    fn non_finite_floats_contribute_zero() {
        assert_eq!(Numeric::Float(f64::NAN).quantity(), 0);
        assert_eq!(Numeric::Float(f64::INFINITY).amount(), 0.0);
        assert_eq!(Numeric::from("NaN").amount(), 0.0);
    }

    #[test]
    fn deserializes_from_document_representations() {
        let q: Numeric = serde_json::from_str("7").unwrap();
        assert_eq!(q.quantity(), 7);
        let p: Numeric = serde_json::from_str("\"3.50\"").unwrap();
        assert_eq!(p.amount(), 3.5);
        let bad: Numeric = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(bad.amount(), 0.0);
    }
}
