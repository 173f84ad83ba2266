use std::fmt::{self, Write};
use std::str::FromStr;

use thiserror::Error;

/// An error which can be returned when parsing a gitlet object ID.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ParseIdError {
    /// Value being parsed is empty.
    #[error("cannot parse object ID from empty string")]
    Empty,

    /// Contains an invalid digit.
    ///
    /// Among other causes, this variant will be constructed when parsing a string that
    /// contains an uppercase letter.
    #[error("value contains invalid digit `{0}`")]
    InvalidDigit(char),

    /// ID string is too long.
    #[error("value is more than 40 digits long")]
    Overflow,

    /// ID string is too short.
    #[error("value is less than 40 digits long")]
    Underflow,

    /// Value was zero.
    #[error("ID would be zero")]
    Zero,
}

/// An object ID is a SHA-1 digest that identifies an object within a repository.
/// It is stored as a 20-byte signature, but is usually represented as 40 hex digits.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Id {
    id: [u8; 20],
}

/// Number of hex digits shown for an abbreviated ID (as in merge log entries).
pub const SHORT_LEN: usize = 7;

impl Id {
    pub(crate) fn from_digest(id: [u8; 20]) -> Id {
        Id { id }
    }

    /// Convert a 40-character hex ID to an object ID.
    ///
    /// It is an error if the ID contains anything other than 40 lowercase hex digits.
    pub fn from_hex<T: AsRef<[u8]>>(id: T) -> Result<Id, ParseIdError> {
        let hex = id.as_ref();

        match hex.len() {
            40 => {
                let mut bytes = [0; 20];
                for (byte, pair) in bytes.iter_mut().zip(hex.chunks(2)) {
                    *byte = digit_value(pair[0])? << 4 | digit_value(pair[1])?;
                }

                if bytes.iter().all(|x| *x == 0) {
                    Err(ParseIdError::Zero)
                } else {
                    Ok(Id { id: bytes })
                }
            }
            0 => Err(ParseIdError::Empty),
            n if n < 40 => Err(ParseIdError::Underflow),
            _ => Err(ParseIdError::Overflow),
        }
    }

    /// Returns the first few hex digits of this ID.
    pub fn short(&self) -> String {
        let mut s = self.to_string();
        s.truncate(SHORT_LEN);
        s
    }

    /// Splits the hex form into the two-digit shard name and the remaining 38 digits.
    pub fn shard(&self) -> (String, String) {
        let mut s = self.to_string();
        let rest = s.split_off(2);
        (s, rest)
    }

    /// Returns true if `prefix` is a (possibly complete) abbreviation of this ID.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.to_string().starts_with(prefix)
    }
}

/// Checks that `prefix` could be the start of an object ID:
/// non-empty, at most 40 digits, and only lowercase hex digits.
pub fn check_prefix(prefix: &str) -> Result<(), ParseIdError> {
    if prefix.is_empty() {
        return Err(ParseIdError::Empty);
    }
    if prefix.len() > 40 {
        return Err(ParseIdError::Overflow);
    }
    for b in prefix.bytes() {
        digit_value(b)?;
    }
    Ok(())
}

impl FromStr for Id {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::from_hex(s.as_bytes())
    }
}

static CHARS: &[u8] = b"0123456789abcdef";

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in self.id.iter() {
            f.write_char(CHARS[(byte >> 4) as usize].into())?;
            f.write_char(CHARS[(byte & 0xf) as usize].into())?;
        }

        Ok(())
    }
}

fn digit_value(c: u8) -> Result<u8, ParseIdError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        _ => Err(ParseIdError::InvalidDigit(c as char)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str() {
        let oid = Id::from_str("3cd9329ac53613a0bfa198ae28f3af957e49573c").unwrap();
        assert_eq!(oid.to_string(), "3cd9329ac53613a0bfa198ae28f3af957e49573c");
    }

    #[test]
    fn from_invalid_str() {
        let err = Id::from_hex("3cD9329ac53613a0bfa198ae28f3af957e49573c").unwrap_err();
        assert_eq!(err, ParseIdError::InvalidDigit('D'));
        assert_eq!(err.to_string(), "value contains invalid digit `D`");
    }

    #[test]
    fn from_hex_wrong_length() {
        assert_eq!(Id::from_hex("").unwrap_err(), ParseIdError::Empty);
        assert_eq!(
            Id::from_hex("3cd9329ac53613a0bfa198ae28f3af957e49573c4").unwrap_err(),
            ParseIdError::Overflow
        );
        assert_eq!(
            Id::from_hex("3cd9329ac53613a0bfa198ae28f3af957e49573").unwrap_err(),
            ParseIdError::Underflow
        );
    }

    #[test]
    fn error_zero() {
        let err = Id::from_hex("0000000000000000000000000000000000000000").unwrap_err();
        assert_eq!(err, ParseIdError::Zero);
        assert_eq!(err.to_string(), "ID would be zero");
    }

    #[test]
    fn short_and_shard() {
        let oid = Id::from_str("3cd9329ac53613a0bfa198ae28f3af957e49573c").unwrap();
        assert_eq!(oid.short(), "3cd9329");

        let (dir, file) = oid.shard();
        assert_eq!(dir, "3c");
        assert_eq!(file, "d9329ac53613a0bfa198ae28f3af957e49573c");
    }

    #[test]
    fn prefixes() {
        let oid = Id::from_str("3cd9329ac53613a0bfa198ae28f3af957e49573c").unwrap();
        assert!(oid.starts_with("3cd9"));
        assert!(oid.starts_with("3cd9329ac53613a0bfa198ae28f3af957e49573c"));
        assert!(!oid.starts_with("3cd8"));

        assert!(check_prefix("3cd9").is_ok());
        assert_eq!(check_prefix(""), Err(ParseIdError::Empty));
        assert_eq!(check_prefix("3cX9"), Err(ParseIdError::InvalidDigit('X')));
        assert_eq!(
            check_prefix("3cd9329ac53613a0bfa198ae28f3af957e49573c0"),
            Err(ParseIdError::Overflow)
        );
    }
}
