//! End-of-day lock instants for daily entries.
//!
//! A daily entry stays editable until the last second of its calendar day in
//! the owner's time zone. [`lock_instant`] turns `(date, zone)` into that
//! threshold as a UTC instant; callers compare it with "now" to flip the
//! entry from open to locked. The offset is looked up in tzdata for the
//! instant itself, so the threshold moves correctly across DST transitions.
//! Nothing here is cached.
//!
//! An unknown zone does not fail: the lock is computed against a fixed
//! fallback offset (+03:00 by default) and a warning is logged. Entry creation
//! stays available with bad zone data, at the cost of a possibly wrong lock
//! time.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::convert::{to_hijri, HijriDate};
use crate::date::GregorianDate;
use crate::error::HijriError;

/// Zone assumed for owners who never set one.
pub const DEFAULT_TIMEZONE: &str = "Asia/Riyadh";

/// Offset used when a zone identifier cannot be resolved (+03:00).
pub const FALLBACK_OFFSET_SECONDS: i32 = 3 * 3600;

/// Last second of the local day.
pub const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 59) {
    Some(time) => time,
    None => panic!("23:59:59 is a valid time"),
};

/// Tunables for lock computation.
///
/// Deserializes from partial config; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockOptions {
    /// IANA zone applied when the owner's zone is unset.
    pub default_timezone: String,
    /// Offset east of UTC, in seconds, for unresolvable zones.
    pub fallback_offset_seconds: i32,
    /// Local wall-clock time at which the day locks.
    pub lock_time: NaiveTime,
}

impl Default for LockOptions {
    fn default() -> Self {
        Self {
            default_timezone: DEFAULT_TIMEZONE.to_string(),
            fallback_offset_seconds: FALLBACK_OFFSET_SECONDS,
            lock_time: END_OF_DAY,
        }
    }
}

/// The UTC instant at which `date` ends (23:59:59 local) in `zone`.
///
/// Uses [`LockOptions::default`]. See [`lock_instant_with_options`].
///
/// # Examples
///
/// ```
/// use hijri_engine::{lock_instant, GregorianDate};
///
/// let date = GregorianDate::parse("2026-03-01").unwrap();
/// let lock = lock_instant(date, "Asia/Riyadh");
/// assert_eq!(lock.to_rfc3339(), "2026-03-01T20:59:59+00:00");
///
/// // Unknown zones fall back to +03:00 instead of failing.
/// assert_eq!(lock_instant(date, "not/a-zone"), lock);
/// ```
pub fn lock_instant(date: GregorianDate, zone: &str) -> DateTime<Utc> {
    lock_instant_with_options(date, zone, &LockOptions::default())
}

/// The UTC instant at which `date` reaches `options.lock_time` in `zone`.
///
/// If the local lock time occurs twice (clocks set back), the later
/// occurrence is used. If it does not exist (clocks set forward), the offset
/// in force at that wall-clock reading taken as UTC is used. If `zone` is not
/// a known IANA identifier, `options.fallback_offset_seconds` is used and a
/// warning is logged.
pub fn lock_instant_with_options(
    date: GregorianDate,
    zone: &str,
    options: &LockOptions,
) -> DateTime<Utc> {
    let local = date.as_naive().and_time(options.lock_time);

    match zone.parse::<Tz>() {
        Ok(tz) => zoned_to_utc(&local, &tz),
        Err(_) => {
            warn!(
                zone,
                %date,
                offset_seconds = options.fallback_offset_seconds,
                "Unresolvable time zone, locking with fallback offset"
            );
            shift_to_utc(&local, options.fallback_offset_seconds)
        }
    }
}

fn zoned_to_utc(local: &NaiveDateTime, tz: &Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(_, later) => later.with_timezone(&Utc),
        LocalResult::None => {
            let offset = tz.offset_from_utc_datetime(local).fix().local_minus_utc();
            shift_to_utc(local, offset)
        }
    }
}

/// Subtract an east-of-UTC offset from a wall-clock reading.
fn shift_to_utc(local: &NaiveDateTime, offset_seconds: i32) -> DateTime<Utc> {
    let utc = *local - Duration::seconds(i64::from(offset_seconds));
    Utc.from_utc_datetime(&utc)
}

// ── Daily entry stamp ───────────────────────────────────────────────────────

/// Calendar values stamped on a daily entry when it is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntryStamp {
    pub date: GregorianDate,
    pub hijri: HijriDate,
    /// Zone the lock was computed for, after applying the default.
    pub timezone: String,
    pub lock_instant: DateTime<Utc>,
}

impl DailyEntryStamp {
    /// Whether the entry is locked at `now`. Locking is strict: at exactly
    /// the lock instant the entry is still open.
    pub fn is_locked_at(&self, now: DateTime<Utc>) -> bool {
        now > self.lock_instant
    }
}

/// Compute the Hijri date and lock instant for a new daily entry.
///
/// An unset or blank `zone` means [`DEFAULT_TIMEZONE`].
///
/// # Errors
///
/// Returns [`HijriError::InvalidDate`] if `date` is not a strict `YYYY-MM-DD` date.
pub fn entry_stamp(date: &str, zone: Option<&str>) -> Result<DailyEntryStamp, HijriError> {
    entry_stamp_with_options(date, zone, &LockOptions::default())
}

/// [`entry_stamp`] with explicit options.
pub fn entry_stamp_with_options(
    date: &str,
    zone: Option<&str>,
    options: &LockOptions,
) -> Result<DailyEntryStamp, HijriError> {
    let date = GregorianDate::parse(date)?;
    let timezone = zone
        .map(str::trim)
        .filter(|z| !z.is_empty())
        .unwrap_or(options.default_timezone.as_str())
        .to_string();

    Ok(DailyEntryStamp {
        date,
        hijri: to_hijri(date),
        lock_instant: lock_instant_with_options(date, &timezone, options),
        timezone,
    })
}

// ── Tests ───────────────────────────────────────────────────────────────────
