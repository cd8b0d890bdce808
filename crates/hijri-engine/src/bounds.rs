//! Hijri month and week boundaries, expressed as Gregorian dates.
//!
//! With no Hijri → Gregorian inverse, boundaries are found by stepping one
//! Gregorian day at a time and converting forward until the Hijri month
//! changes. Every scan is capped at [`MAX_SCAN_DAYS`]; a Hijri month never
//! exceeds 30 days, so hitting the cap means the converter itself is broken.
//!
//! Weeks are fixed slices of the Hijri month, not weekday-aligned weeks:
//! days 1-7 are week 1, 8-14 week 2, and so on, with a short fifth week
//! holding day 29 (and day 30 when the month has one).

use serde::Serialize;
use tracing::error;

use crate::convert::{to_hijri, HijriDate};
use crate::date::GregorianDate;
use crate::error::HijriError;

/// Upper bound on days visited by any single boundary scan.
pub const MAX_SCAN_DAYS: u32 = 40;

/// Days per fixed Hijri week slice.
pub const DAYS_PER_WEEK: u32 = 7;

/// The Gregorian span of one Hijri month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthBounds {
    /// Gregorian date of Hijri day 1, or 0000-01-01 when the month began earlier.
    pub start: GregorianDate,
    /// Gregorian date of the last Hijri day, or 9999-12-31 when the month ends later.
    pub end: GregorianDate,
    /// Hijri day of `end`: 29 or 30, less when the month is clipped at 9999-12-31.
    pub last_hijri_day_of_month: u32,
}

impl MonthBounds {
    pub fn contains(&self, date: GregorianDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Find the Gregorian start and end of the Hijri month containing `anchor`.
///
/// # Errors
///
/// Returns [`HijriError::BoundaryNotFound`] if either edge is not reached
/// within [`MAX_SCAN_DAYS`] steps. This cannot happen for a correct
/// converter and should be treated as an internal failure.
///
/// # Examples
///
/// ```
/// use hijri_engine::{month_bounds, GregorianDate};
///
/// let bounds = month_bounds(GregorianDate::parse("2026-03-01").unwrap()).unwrap();
/// assert_eq!(bounds.start.to_string(), "2026-02-18");
/// assert_eq!(bounds.end.to_string(), "2026-03-19");
/// assert_eq!(bounds.last_hijri_day_of_month, 30);
/// ```
pub fn month_bounds(anchor: GregorianDate) -> Result<MonthBounds, HijriError> {
    let hijri = to_hijri(anchor);

    let start = scan_month_edge(anchor, &hijri, GregorianDate::pred, to_hijri)?;
    let end = scan_month_edge(anchor, &hijri, GregorianDate::succ, to_hijri)?;

    Ok(MonthBounds {
        start,
        end,
        last_hijri_day_of_month: to_hijri(end).day(),
    })
}

/// Step from `anchor` while the next day stays in `month`; return the last day that did.
fn scan_month_edge(
    anchor: GregorianDate,
    month: &HijriDate,
    step: fn(&GregorianDate) -> Option<GregorianDate>,
    convert: fn(GregorianDate) -> HijriDate,
) -> Result<GregorianDate, HijriError> {
    let mut edge = anchor;
    for _ in 0..MAX_SCAN_DAYS {
        match step(&edge) {
            Some(next) if convert(next).same_month(month) => edge = next,
            // Month changed, or the 0000..=9999 range ended.
            _ => return Ok(edge),
        }
    }

    error!(
        anchor = %anchor,
        hijri_year = month.year(),
        hijri_month = month.month(),
        "Hijri month edge not reached within scan limit"
    );
    Err(HijriError::BoundaryNotFound(format!(
        "no edge of Hijri month {}-{:02} within {MAX_SCAN_DAYS} days of {anchor}",
        month.year(),
        month.month()
    )))
}

/// Find the Gregorian date of Hijri `year`/`month`/`target_day`, scanning
/// forward from `month_start` (inclusive).
///
/// Returns `None` if no date in the next [`MAX_SCAN_DAYS`] days matches;
/// callers fall back to the month's own start or end.
pub fn find_by_hijri_day(
    month_start: GregorianDate,
    year: i32,
    month: u32,
    target_day: u32,
) -> Option<GregorianDate> {
    let mut current = month_start;
    for _ in 0..MAX_SCAN_DAYS {
        let hijri = to_hijri(current);
        if hijri.year() == year && hijri.month() == month && hijri.day() == target_day {
            return Some(current);
        }
        current = current.succ()?;
    }
    None
}

/// Week slice of a Hijri day: `ceil(day / 7)`.
///
/// ```
/// use hijri_engine::bounds::hijri_week_index;
///
/// assert_eq!(hijri_week_index(1), 1);
/// assert_eq!(hijri_week_index(7), 1);
/// assert_eq!(hijri_week_index(8), 2);
/// assert_eq!(hijri_week_index(30), 5);
/// ```
pub fn hijri_week_index(day: u32) -> u32 {
    day.div_ceil(DAYS_PER_WEEK)
}

/// First and last Hijri day of the week slice holding `day`, with the last
/// day clipped to `last_day_of_month`.
pub fn week_day_range(day: u32, last_day_of_month: u32) -> (u32, u32) {
    let first = (day.saturating_sub(1) / DAYS_PER_WEEK) * DAYS_PER_WEEK + 1;
    let last = (first + DAYS_PER_WEEK - 1).min(last_day_of_month);
    (first, last)
}

// ── Tests ───────────────────────────────────────────────────────────────────
