//! # hijri-engine
//!
//! Deterministic Hijri calendar computation for recurring challenges and
//! daily entries.
//!
//! The engine converts Gregorian dates to the tabular Hijri calendar, finds
//! Hijri month and week boundaries in Gregorian terms, derives stable period
//! identifiers for daily/weekly/monthly challenges, and computes the UTC
//! instant at which a local calendar day ends. Every function is pure and
//! synchronous: no clock reads, no I/O, no shared state.
//!
//! ## Modules
//!
//! - [`date`] — Strict `YYYY-MM-DD` Gregorian dates
//! - [`convert`] — Gregorian → Hijri on the 30-year tabular cycle
//! - [`bounds`] — Hijri month bounds and fixed 7-day week slices
//! - [`period`] — Period identifiers and bounds per challenge scope
//! - [`lock`] — End-of-day lock instants and daily entry stamps
//! - [`error`] — Error types

pub mod bounds;
pub mod convert;
pub mod date;
pub mod error;
pub mod lock;
pub mod period;

pub use bounds::{find_by_hijri_day, month_bounds, MonthBounds};
pub use convert::{to_hijri, HijriDate};
pub use date::GregorianDate;
pub use error::HijriError;
pub use lock::{
    entry_stamp, entry_stamp_with_options, lock_instant, lock_instant_with_options,
    DailyEntryStamp, LockOptions,
};
pub use period::{period_for, period_for_date, ChallengeScope, PeriodMetadata};
