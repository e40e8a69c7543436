//! Exact salary amounts.
//!
//! # Invariants
//! - Amounts are whole cents; no floating point is involved in storage or
//!   parsing.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Decimal amount with two fractional digits, stored as cents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Salary(i64);

impl Salary {
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryParseError(String);

impl Display for SalaryParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid salary `{}`; expected digits with up to two decimals",
            self.0
        )
    }
}

impl Error for SalaryParseError {}

impl FromStr for Salary {
    type Err = SalaryParseError;

    /// Parses `"1500"`, `"1500.5"`, `"1500.50"` or `"-20.00"`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || SalaryParseError(value.to_string());
        let trimmed = value.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

        let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || fraction.len() > 2 || !all_digits(fraction)
        {
            return Err(invalid());
        }
        if digits.contains('.') && fraction.is_empty() {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let fraction: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };
        let cents = whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(fraction))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl TryFrom<String> for Salary {
    type Error = SalaryParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Salary> for String {
    fn from(value: Salary) -> Self {
        value.to_string()
    }
}

impl Display for Salary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::Salary;

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!("1500".parse::<Salary>().unwrap().cents(), 150_000);
        assert_eq!("1500.5".parse::<Salary>().unwrap().cents(), 150_050);
        assert_eq!(" 1500.05 ".parse::<Salary>().unwrap().cents(), 150_005);
        assert_eq!("-20.00".parse::<Salary>().unwrap().cents(), -2_000);
    }

    #[test]
    fn rejects_malformed_amounts() {
        for input in ["", "abc", "1.234", "1.", ".5", "1,50", "--1", "99999999999999999999"] {
            assert!(input.parse::<Salary>().is_err(), "{input} should fail");
        }
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Salary::from_cents(300_000).to_string(), "3000.00");
        assert_eq!(Salary::from_cents(7).to_string(), "0.07");
        assert_eq!(Salary::from_cents(-1_550).to_string(), "-15.50");
    }

    #[test]
    fn serializes_as_decimal_string() {
        let json = serde_json::to_string(&Salary::from_cents(123_456)).unwrap();
        assert_eq!(json, "\"1234.56\"");
        let back: Salary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Salary::from_cents(123_456));
    }
}
