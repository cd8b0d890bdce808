//! Gregorian → Hijri conversion on the 30-year tabular cycle.
//!
//! The conversion goes through the Julian Day Number: the civil-calendar JDN
//! formula turns the Gregorian date into a day count, which is then split into
//! 30-year cycles of 10631 days (11 leap years per cycle). Inside a cycle the
//! year comes out of two floor-division correction terms, and month and day
//! fall out of the remainder.
//!
//! The result approximates Umm al-Qura and can disagree with locally sighted
//! calendars by a day at month boundaries. The formula is kept exactly as is:
//! persisted period identifiers were computed with it, so any change here
//! silently re-keys stored progress.
//!
//! There is no inverse. Boundary finding in [`crate::bounds`] scans Gregorian
//! days and converts forward.

use std::fmt;

use serde::Serialize;

use crate::date::GregorianDate;

/// JDN of the Hijri epoch anchor used by the cycle arithmetic.
const HIJRI_EPOCH_JDN: i64 = 1_948_440;

/// Days in one 30-year tabular cycle.
const CYCLE_DAYS: i64 = 10_631;

const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Ula",
    "Jumada al-Akhirah",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qadah",
    "Dhu al-Hijjah",
];

/// A date in the tabular Hijri calendar.
///
/// Only produced by [`to_hijri`]; there is no public constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HijriDate {
    year: i32,
    month: u32,
    day: u32,
}

impl HijriDate {
    /// Hijri year. Dates before the epoch (July 622 CE) continue the cycle
    /// arithmetic backwards and give years ≤ 0.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of the month, 1-30.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Transliterated month name, e.g. `"Ramadan"`.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Whether `other` falls in the same Hijri month.
    pub fn same_month(&self, other: &HijriDate) -> bool {
        self.year == other.year && self.month == other.month
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Convert a Gregorian date to the tabular Hijri calendar.
///
/// Total over every date [`GregorianDate`] can hold.
///
/// # Examples
///
/// ```
/// use hijri_engine::{to_hijri, GregorianDate};
///
/// let h = to_hijri(GregorianDate::parse("2026-02-18").unwrap());
/// assert_eq!((h.year(), h.month(), h.day()), (1447, 9, 1));
/// assert_eq!(h.month_name(), "Ramadan");
/// ```
pub fn to_hijri(date: GregorianDate) -> HijriDate {
    let jdn = julian_day_number(date.year() as i64, date.month() as i64, date.day() as i64);

    let l = jdn - HIJRI_EPOCH_JDN + CYCLE_DAYS + 1;
    let cycles = floor_div(l - 1, CYCLE_DAYS);
    // Day within the cycle, shifted so the correction terms below stay positive.
    let l = l - CYCLE_DAYS * cycles + 354;

    let j = floor_div(10_985 - l, 5_316) * floor_div(50 * l, 17_719)
        + floor_div(l, 5_670) * floor_div(43 * l, 15_238);
    let l = l
        - floor_div(30 - j, 15) * floor_div(17_719 * j, 50)
        - floor_div(j, 16) * floor_div(15_238 * j, 43)
        + 29;

    let month = floor_div(24 * l, 709);
    let day = l - floor_div(709 * month, 24);
    let year = 30 * cycles + j - 30;

    HijriDate {
        year: year as i32,
        month: month as u32,
        day: day as u32,
    }
}

/// Civil-calendar Julian Day Number for a proleptic Gregorian date.
fn julian_day_number(year: i64, month: i64, day: i64) -> i64 {
    let a = floor_div(14 - month, 12);
    let y = year + 4_800 - a;
    let m = month + 12 * a - 3;
    day + floor_div(153 * m + 2, 5) + 365 * y + floor_div(y, 4) - floor_div(y, 100)
        + floor_div(y, 400)
        - 32_045
}

/// Floor division for a positive divisor.
fn floor_div(a: i64, b: i64) -> i64 {
    a.div_euclid(b)
}

// ── Tests ───────────────────────────────────────────────────────────────────
