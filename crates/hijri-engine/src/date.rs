//! Strict `YYYY-MM-DD` Gregorian dates.
//!
//! Every date entering the engine passes through [`GregorianDate::parse`],
//! which checks the lexical shape first and calendar validity second. Nothing
//! downstream re-validates: once a `GregorianDate` exists, it is a real day of
//! the proleptic Gregorian calendar.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::HijriError;

/// Earliest year a four-digit `YYYY` can spell.
pub const MIN_YEAR: i32 = 0;

/// Latest year a four-digit `YYYY` can spell.
pub const MAX_YEAR: i32 = 9999;

/// A validated Gregorian calendar date.
///
/// Serialized as its `YYYY-MM-DD` string; deserialization applies the same
/// validation as [`GregorianDate::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GregorianDate(NaiveDate);

impl GregorianDate {
    /// Parse a strict `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`HijriError::InvalidDate`] if the string is not exactly ten
    /// characters of the form `DDDD-DD-DD`, or if the digits do not name a
    /// real calendar day (e.g. `2026-02-30`).
    ///
    /// # Examples
    ///
    /// ```
    /// use hijri_engine::GregorianDate;
    ///
    /// let date = GregorianDate::parse("2026-02-18").unwrap();
    /// assert_eq!(date.to_string(), "2026-02-18");
    /// assert!(GregorianDate::parse("2026-2-18").is_err());
    /// assert!(GregorianDate::parse("2026-02-30").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, HijriError> {
        let bytes = s.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !shape_ok {
            return Err(HijriError::InvalidDate(format!(
                "'{s}': expected YYYY-MM-DD"
            )));
        }

        let year = parse_digits(&bytes[0..4]) as i32;
        let month = parse_digits(&bytes[5..7]);
        let day = parse_digits(&bytes[8..10]);

        Self::from_ymd(year, month, day)
            .ok_or_else(|| HijriError::InvalidDate(format!("'{s}': not a calendar date")))
    }

    /// Build a date from its components, or `None` if they do not name a real
    /// day in years `0000..=9999`.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(Self::checked)
    }

    fn checked(date: NaiveDate) -> Option<Self> {
        (MIN_YEAR..=MAX_YEAR)
            .contains(&date.year())
            .then_some(Self(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The following day, or `None` after 9999-12-31.
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().and_then(Self::checked)
    }

    /// The preceding day, or `None` before 0000-01-01.
    pub fn pred(&self) -> Option<Self> {
        self.0.pred_opt().and_then(Self::checked)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

/// Fold a run of ASCII digits into a number. Callers have already checked the bytes.
fn parse_digits(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

impl TryFrom<NaiveDate> for GregorianDate {
    type Error = HijriError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::checked(date)
            .ok_or_else(|| HijriError::InvalidDate(format!("'{date}': year out of range")))
    }
}

impl FromStr for GregorianDate {
    type Err = HijriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GregorianDate {
    type Error = HijriError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<GregorianDate> for String {
    fn from(date: GregorianDate) -> Self {
        date.to_string()
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
