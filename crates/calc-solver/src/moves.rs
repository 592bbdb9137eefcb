//! The closed set of integer moves a puzzle can offer.
//!
//! Moves are plain immutable values. They serialize as externally tagged
//! JSON, e.g. `{"divide": 2}`, `{"add": -3}` or `{"replace": [1, 2]}`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    /// `n -> n / divisor`, truncating toward zero
    Divide(i64),
    /// `n -> n + addend`
    Add(i64),
    /// Replaces every occurrence of the first number's digits with the second's
    Replace(i64, i64),
}

impl Move {
    /// Apply this move to `value`.
    ///
    /// Division truncates toward zero, so `Divide(2)` maps 11 to 5 and -11 to -5.
    /// `Replace` works on the plain decimal rendering of `value` (a leading `-`
    /// for negatives, no leading zeros) and substitutes leftmost-first without
    /// overlap before parsing the text back. Leading zeros in the result are
    /// accepted, so `Replace(1, 0)` maps 12 to 2.
    pub fn apply(self, value: i64) -> Result<i64, MoveError> {
        match self {
            Move::Divide(0) => Err(MoveError::DivideByZero),
            Move::Divide(divisor) => value
                .checked_div(divisor)
                .ok_or(MoveError::Overflow { value, mv: self }),
            Move::Add(addend) => value
                .checked_add(addend)
                .ok_or(MoveError::Overflow { value, mv: self }),
            Move::Replace(search, replacement) => {
                let text = value
                    .to_string()
                    .replace(&search.to_string(), &replacement.to_string());
                text.parse::<i64>()
                    .map_err(|_| MoveError::Parse { text, mv: self })
            }
        }
    }

    /// Check that the move can be applied to at least some value.
    pub fn validate(self) -> Result<(), MoveError> {
        match self {
            Move::Divide(0) => Err(MoveError::DivideByZero),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Divide(divisor) => write!(f, "Divide({})", divisor),
            Move::Add(addend) => write!(f, "Add({})", addend),
            Move::Replace(search, replacement) => {
                write!(f, "Replace({}, {})", search, replacement)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_truncates() {
        assert_eq!(Move::Divide(2).apply(4), Ok(2));
        assert_eq!(Move::Divide(2).apply(6), Ok(3));
        assert_eq!(Move::Divide(2).apply(11), Ok(5));
        assert_eq!(Move::Divide(2).apply(-11), Ok(-5));
        assert_eq!(Move::Divide(-3).apply(10), Ok(-3));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Move::Divide(0).apply(7), Err(MoveError::DivideByZero));
        assert_eq!(Move::Divide(0).validate(), Err(MoveError::DivideByZero));
        assert!(Move::Divide(5).validate().is_ok());
    }

    #[test]
    fn test_add() {
        assert_eq!(Move::Add(2).apply(4), Ok(6));
        assert_eq!(Move::Add(2).apply(6), Ok(8));
        assert_eq!(Move::Add(2).apply(11), Ok(13));
        assert_eq!(Move::Add(-20).apply(11), Ok(-9));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(matches!(
            Move::Add(1).apply(i64::MAX),
            Err(MoveError::Overflow { value: i64::MAX, .. })
        ));
        assert!(matches!(
            Move::Divide(-1).apply(i64::MIN),
            Err(MoveError::Overflow { .. })
        ));
    }

    #[test]
    fn test_replace_every_occurrence() {
        assert_eq!(Move::Replace(4, 2).apply(343414), Ok(323212));
        assert_eq!(Move::Replace(1, 2).apply(11), Ok(22));
        assert_eq!(Move::Replace(7, 2).apply(11), Ok(11));
    }

    #[test]
    fn test_replace_multi_digit_is_non_overlapping() {
        // "111" -> leftmost "11" matches once, the trailing "1" stays
        assert_eq!(Move::Replace(11, 3).apply(111), Ok(31));
        assert_eq!(Move::Replace(12, 345).apply(1212), Ok(345345));
    }

    #[test]
    fn test_replace_leading_zeros_and_signs() {
        assert_eq!(Move::Replace(1, 0).apply(12), Ok(2));
        assert_eq!(Move::Replace(-1, 2).apply(-11), Ok(21));
        assert_eq!(Move::Replace(5, -1).apply(5), Ok(-1));
    }

    #[test]
    fn test_replace_unparsable_result() {
        let err = Move::Replace(1, -2).apply(11).unwrap_err();
        assert_eq!(
            err,
            MoveError::Parse {
                text: "-2-2".to_string(),
                mv: Move::Replace(1, -2),
            }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::Divide(3).to_string(), "Divide(3)");
        assert_eq!(Move::Add(-4).to_string(), "Add(-4)");
        assert_eq!(Move::Replace(1, 2).to_string(), "Replace(1, 2)");
    }

    #[test]
    fn test_json_format() {
        let catalog: Vec<Move> =
            serde_json::from_str(r#"[{"divide": 2}, {"add": 3}, {"replace": [1, 2]}]"#).unwrap();
        assert_eq!(
            catalog,
            vec![Move::Divide(2), Move::Add(3), Move::Replace(1, 2)]
        );
        assert_eq!(
            serde_json::to_string(&Move::Replace(2, 9)).unwrap(),
            r#"{"replace":[2,9]}"#
        );
    }
}
