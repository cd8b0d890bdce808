//! Period identifiers for Hijri-anchored recurring challenges.
//!
//! A challenge recurs daily, weekly, or monthly on the Hijri calendar. For any
//! Gregorian date, [`period_for`] names the period that date belongs to with a
//! dense integer key and reports the period's Gregorian bounds. Each scope
//! packs the Hijri fields with its own radix, so keys increase with time
//! inside a scope and keys of different scopes for the same date differ by
//! orders of magnitude:
//!
//! | Scope   | `period_index`                       | Example (2026-03-01) |
//! |---------|--------------------------------------|----------------------|
//! | Daily   | `year*10000 + month*100 + day`       | `14470912`           |
//! | Weekly  | `year*1000 + month*10 + week`        | `1447092`            |
//! | Monthly | `year*100 + month`                   | `144709`             |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bounds::{find_by_hijri_day, hijri_week_index, month_bounds, week_day_range};
use crate::convert::to_hijri;
use crate::date::GregorianDate;
use crate::error::HijriError;

/// Recurrence granularity of a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeScope {
    Daily,
    Weekly,
    Monthly,
}

impl ChallengeScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeScope::Daily => "daily",
            ChallengeScope::Weekly => "weekly",
            ChallengeScope::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ChallengeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChallengeScope {
    type Err = HijriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(ChallengeScope::Daily),
            "weekly" => Ok(ChallengeScope::Weekly),
            "monthly" => Ok(ChallengeScope::Monthly),
            _ => Err(HijriError::InvalidScope(format!(
                "'{s}': expected daily, weekly or monthly"
            ))),
        }
    }
}

/// The period a date falls in for one [`ChallengeScope`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodMetadata {
    /// Dense key of the period within its scope.
    pub period_index: i64,
    pub hijri_year: i32,
    pub hijri_month: Option<u32>,
    /// Set for daily periods only.
    pub hijri_day: Option<u32>,
    /// Set for daily and weekly periods.
    pub hijri_week_index: Option<u32>,
    /// First Gregorian day of the period (inclusive).
    pub start_date_gregorian: GregorianDate,
    /// Last Gregorian day of the period (inclusive).
    pub end_date_gregorian: GregorianDate,
}

impl PeriodMetadata {
    /// Whether `date` lies within the period's inclusive bounds.
    pub fn contains(&self, date: GregorianDate) -> bool {
        self.start_date_gregorian <= date && date <= self.end_date_gregorian
    }

    /// Whether `other` describes the same period: every Hijri field and both bounds match.
    pub fn same_period(&self, other: &PeriodMetadata) -> bool {
        self.hijri_year == other.hijri_year
            && self.hijri_month == other.hijri_month
            && self.hijri_day == other.hijri_day
            && self.hijri_week_index == other.hijri_week_index
            && self.start_date_gregorian == other.start_date_gregorian
            && self.end_date_gregorian == other.end_date_gregorian
    }
}

/// Compute the period a `YYYY-MM-DD` date belongs to.
///
/// # Errors
///
/// Returns [`HijriError::InvalidDate`] if `date` is not a strict, real
/// `YYYY-MM-DD` date; no Hijri arithmetic runs in that case. Returns
/// [`HijriError::BoundaryNotFound`] only if a month scan breaks its bound
/// (an internal failure).
///
/// # Examples
///
/// ```
/// use hijri_engine::{period_for, ChallengeScope};
///
/// let daily = period_for("2026-02-18", ChallengeScope::Daily).unwrap();
/// assert_eq!(daily.period_index, 14470901);
///
/// let monthly = period_for("2026-02-18", ChallengeScope::Monthly).unwrap();
/// assert_eq!(monthly.period_index, 144709);
/// assert_eq!(monthly.start_date_gregorian.to_string(), "2026-02-18");
/// assert_eq!(monthly.end_date_gregorian.to_string(), "2026-03-19");
/// ```
pub fn period_for(date: &str, scope: ChallengeScope) -> Result<PeriodMetadata, HijriError> {
    let date = GregorianDate::parse(date)?;
    period_for_date(date, scope)
}

/// Compute the period an already-validated date belongs to.
///
/// See [`period_for`].
pub fn period_for_date(
    date: GregorianDate,
    scope: ChallengeScope,
) -> Result<PeriodMetadata, HijriError> {
    let hijri = to_hijri(date);
    let (year, month, day) = (hijri.year(), hijri.month(), hijri.day());

    let period = match scope {
        ChallengeScope::Daily => PeriodMetadata {
            period_index: i64::from(year) * 10_000 + i64::from(month) * 100 + i64::from(day),
            hijri_year: year,
            hijri_month: Some(month),
            hijri_day: Some(day),
            hijri_week_index: Some(hijri_week_index(day)),
            start_date_gregorian: date,
            end_date_gregorian: date,
        },
        ChallengeScope::Monthly => {
            let bounds = month_bounds(date)?;
            PeriodMetadata {
                period_index: i64::from(year) * 100 + i64::from(month),
                hijri_year: year,
                hijri_month: Some(month),
                hijri_day: None,
                hijri_week_index: None,
                start_date_gregorian: bounds.start,
                end_date_gregorian: bounds.end,
            }
        }
        ChallengeScope::Weekly => {
            let week = hijri_week_index(day);
            let bounds = month_bounds(date)?;
            let (first_day, last_day) = week_day_range(day, bounds.last_hijri_day_of_month);

            let start = find_by_hijri_day(bounds.start, year, month, first_day).unwrap_or_else(|| {
                warn!(%date, first_day, "Week start not found, using month start");
                bounds.start
            });
            let end = find_by_hijri_day(bounds.start, year, month, last_day).unwrap_or_else(|| {
                warn!(%date, last_day, "Week end not found, using month end");
                bounds.end
            });

            PeriodMetadata {
                period_index: i64::from(year) * 1_000 + i64::from(month) * 10 + i64::from(week),
                hijri_year: year,
                hijri_month: Some(month),
                hijri_day: None,
                hijri_week_index: Some(week),
                start_date_gregorian: start,
                end_date_gregorian: end,
            }
        }
    };

    debug!(
        %date,
        %scope,
        period_index = period.period_index,
        "Computed challenge period"
    );
    Ok(period)
}

// ── Tests ───────────────────────────────────────────────────────────────────
