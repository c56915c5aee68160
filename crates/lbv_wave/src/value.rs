//! Values carried by waveform events.

use std::fmt;

/// A single four-state logic level as written in a scalar value change.
///
/// - `Zero`: driven low
/// - `One`: driven high
/// - `X`: unknown
/// - `Z`: high-impedance
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Logic {
    /// Logic low (0).
    Zero,
    /// Logic high (1).
    One,
    /// Unknown.
    X,
    /// High-impedance.
    Z,
}

impl Logic {
    /// Converts a value-change character to a [`Logic`] level.
    ///
    /// Accepts '0', '1', 'x'/'X', and 'z'/'Z'.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Logic::Zero),
            '1' => Some(Logic::One),
            'x' | 'X' => Some(Logic::X),
            'z' | 'Z' => Some(Logic::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Logic::Zero => write!(f, "0"),
            Logic::One => write!(f, "1"),
            Logic::X => write!(f, "X"),
            Logic::Z => write!(f, "Z"),
        }
    }
}

/// The decoded value of one event.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Value {
    /// A scalar change (`0!`, `1!`, `x!`, `z!`).
    Bit(Logic),
    /// A binary vector change decoded as an unsigned integer, X/Z digits read as 0.
    Vector(u64),
    /// Vector digits that could not be decoded, kept verbatim.
    Raw(String),
}

impl Value {
    /// True only for a scalar `1`.
    pub fn is_high(&self) -> bool {
        matches!(self, Value::Bit(Logic::One))
    }

    /// True only for a scalar `0`.
    pub fn is_low(&self) -> bool {
        matches!(self, Value::Bit(Logic::Zero))
    }

    /// Numeric view of the value, if it has one.
    ///
    /// Scalars `0`/`1` map to 0/1; X, Z and raw strings have no number.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Vector(v) => Some(*v),
            Value::Bit(Logic::Zero) => Some(0),
            Value::Bit(Logic::One) => Some(1),
            Value::Bit(_) | Value::Raw(_) => None,
        }
    }

    /// Whether the value counts as non-zero data.
    ///
    /// Raw strings are non-zero; scalar X and Z are not.
    pub fn is_nonzero(&self) -> bool {
        match self {
            Value::Raw(_) => true,
            other => other.as_u64().is_some_and(|v| v != 0),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bit(l) => write!(f, "{l}"),
            Value::Vector(v) => write!(f, "{v}"),
            Value::Raw(s) => write!(f, "{s}"),
        }
    }
}

/// Decodes the MSB-first digit string of a `b<digits> <id>` line.
///
/// X and Z digits count as 0, and a string holding nothing but X/Z decodes
/// to 0. Any other digit, or a value wider than 64 significant bits, yields
/// [`Value::Raw`] with the digits unchanged.
pub fn decode_vector(digits: &str) -> Value {
    let mut acc: u64 = 0;
    for ch in digits.chars() {
        let bit = match ch {
            '1' => 1,
            '0' | 'x' | 'X' | 'z' | 'Z' => 0,
            _ => return Value::Raw(digits.to_string()),
        };
        acc = match acc.checked_mul(2).and_then(|a| a.checked_add(bit)) {
            Some(a) => a,
            None => return Value::Raw(digits.to_string()),
        };
    }
    Value::Vector(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn logic_from_char() {
        assert_eq!(Logic::from_char('0'), Some(Logic::Zero));
        assert_eq!(Logic::from_char('1'), Some(Logic::One));
        assert_eq!(Logic::from_char('x'), Some(Logic::X));
        assert_eq!(Logic::from_char('Z'), Some(Logic::Z));
        assert_eq!(Logic::from_char('b'), None);
    }

    #[test]
    fn decode_plain_binary() {
        assert_eq!(decode_vector("1010"), Value::Vector(10));
        assert_eq!(decode_vector("00000000"), Value::Vector(0));
        assert_eq!(decode_vector("11111111"), Value::Vector(255));
    }

    #[test]
    fn decode_xz_digits_as_zero() {
        assert_eq!(decode_vector("1x1z"), Value::Vector(0b1010));
        assert_eq!(decode_vector("xxxx"), Value::Vector(0));
        assert_eq!(decode_vector("zZxX"), Value::Vector(0));
        assert_eq!(decode_vector(""), Value::Vector(0));
    }

    #[test]
    fn decode_bad_digit_is_raw() {
        assert_eq!(decode_vector("10u1"), Value::Raw("10u1".to_string()));
    }

    #[test]
    fn decode_wide_vector() {
        let ones = "1".repeat(64);
        assert_eq!(decode_vector(&ones), Value::Vector(u64::MAX));
        let leading_zeros = format!("{}1", "0".repeat(100));
        assert_eq!(decode_vector(&leading_zeros), Value::Vector(1));
        let too_wide = format!("1{}", "0".repeat(64));
        assert_eq!(decode_vector(&too_wide), Value::Raw(too_wide.clone()));
    }

    #[test]
    fn value_predicates() {
        assert!(Value::Bit(Logic::One).is_high());
        assert!(!Value::Vector(1).is_high());
        assert!(Value::Bit(Logic::Zero).is_low());
        assert!(!Value::Bit(Logic::X).is_low());
        assert!(Value::Vector(3).is_nonzero());
        assert!(!Value::Vector(0).is_nonzero());
        assert!(!Value::Bit(Logic::Z).is_nonzero());
        assert!(Value::Raw("1u".into()).is_nonzero());
    }

    #[test]
    fn value_display() {
        assert_eq!(Value::Bit(Logic::X).to_string(), "X");
        assert_eq!(Value::Vector(42).to_string(), "42");
        assert_eq!(Value::Raw("1u0".into()).to_string(), "1u0");
    }

    proptest! {
        #[test]
        fn binary_digits_decode_like_radix_2(n in any::<u64>()) {
            let digits = format!("{n:b}");
            prop_assert_eq!(decode_vector(&digits), Value::Vector(n));
        }

        #[test]
        fn only_xz_decodes_to_zero(digits in "[xzXZ]{0,80}") {
            prop_assert_eq!(decode_vector(&digits), Value::Vector(0));
        }
    }
}
