use chrono::{Duration, NaiveDate, NaiveTime};
use hijri_engine::{
    lock_instant, month_bounds, period_for, period_for_date, to_hijri, ChallengeScope,
    GregorianDate,
};
use proptest::prelude::*;

const SCOPES: [ChallengeScope; 3] = [
    ChallengeScope::Daily,
    ChallengeScope::Weekly,
    ChallengeScope::Monthly,
];

fn date_from(epoch: NaiveDate, days: i64) -> GregorianDate {
    GregorianDate::try_from(epoch + Duration::days(days)).unwrap()
}

/// Any date a strict `YYYY` can spell.
fn any_date() -> impl Strategy<Value = GregorianDate> {
    let epoch = NaiveDate::from_ymd_opt(0, 1, 1).unwrap();
    (0i64..3_652_425).prop_map(move |d| date_from(epoch, d))
}

/// Dates since Riyadh moved off local mean time.
fn fixed_offset_era_date() -> impl Strategy<Value = GregorianDate> {
    let epoch = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
    (0i64..50_000).prop_map(move |d| date_from(epoch, d))
}

/// Dates in the range challenges are actually recorded for.
fn modern_date() -> impl Strategy<Value = GregorianDate> {
    let epoch = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    (0i64..73_000).prop_map(move |d| date_from(epoch, d))
}

fn scope() -> impl Strategy<Value = ChallengeScope> {
    prop::sample::select(SCOPES.to_vec())
}

proptest! {
    #[test]
    fn hijri_fields_in_range(date in any_date()) {
        let h = to_hijri(date);
        prop_assert!((1..=12).contains(&h.month()), "{date} -> {h}");
        prop_assert!((1..=30).contains(&h.day()), "{date} -> {h}");
    }

    #[test]
    fn month_bounds_span_one_hijri_month(date in any_date()) {
        let bounds = month_bounds(date).unwrap();
        prop_assert!(bounds.contains(date));

        let days = (bounds.end.as_naive() - bounds.start.as_naive()).num_days() + 1;
        prop_assert!(days <= 30, "{} days from {}", days, date);
        prop_assert!(bounds.last_hijri_day_of_month <= 30);

        // Edges of chrono's range aside, the month is 29 or 30 days long.
        if let (Some(_), Some(_)) = (bounds.start.pred(), bounds.end.succ()) {
            prop_assert_eq!(to_hijri(bounds.start).day(), 1);
            prop_assert!(days == 29 || days == 30, "{} days from {}", days, date);
            prop_assert_eq!(days as u32, bounds.last_hijri_day_of_month);
        }
    }

    #[test]
    fn period_contains_its_date(date in modern_date(), scope in scope()) {
        let p = period_for_date(date, scope).unwrap();
        prop_assert!(p.start_date_gregorian <= date && date <= p.end_date_gregorian);
    }

    #[test]
    fn period_is_idempotent(date in modern_date(), scope in scope()) {
        let a = period_for_date(date, scope).unwrap();
        let b = period_for(&date.to_string(), scope).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn dates_in_same_period_share_index(
        date in modern_date(),
        scope in scope(),
        offset in 0i64..31,
    ) {
        let p = period_for_date(date, scope).unwrap();
        let other = p.start_date_gregorian.as_naive() + Duration::days(offset);
        let other = GregorianDate::try_from(other).unwrap();
        prop_assume!(other <= p.end_date_gregorian);

        let q = period_for_date(other, scope).unwrap();
        prop_assert_eq!(q.period_index, p.period_index);
        prop_assert_eq!(q.start_date_gregorian, p.start_date_gregorian);
        prop_assert_eq!(q.end_date_gregorian, p.end_date_gregorian);
    }

    #[test]
    fn period_index_increases_with_time(date in modern_date(), scope in scope()) {
        let next_date = date.succ().unwrap();
        let p = period_for_date(date, scope).unwrap();
        let next = period_for_date(next_date, scope).unwrap();

        if next.start_date_gregorian == p.start_date_gregorian {
            prop_assert_eq!(next.period_index, p.period_index);
        } else {
            prop_assert!(next.period_index > p.period_index);
            prop_assert_eq!(next.start_date_gregorian, next_date);
        }
    }

    #[test]
    fn scope_indices_never_collide(date in modern_date()) {
        let daily = period_for_date(date, ChallengeScope::Daily).unwrap().period_index;
        let weekly = period_for_date(date, ChallengeScope::Weekly).unwrap().period_index;
        let monthly = period_for_date(date, ChallengeScope::Monthly).unwrap().period_index;
        prop_assert!(daily > weekly && weekly > monthly);
    }

    #[test]
    fn weekly_bounds_are_the_seven_day_slice(date in modern_date()) {
        let p = period_for_date(date, ChallengeScope::Weekly).unwrap();
        let first = to_hijri(p.start_date_gregorian).day();
        let last = to_hijri(p.end_date_gregorian).day();
        let week = p.hijri_week_index.unwrap();

        prop_assert_eq!(first, (week - 1) * 7 + 1);
        prop_assert!(last >= first && last - first <= 6);
        prop_assert!(week <= 5);
    }

    #[test]
    fn riyadh_lock_is_fixed_offset(date in fixed_offset_era_date()) {
        let lock = lock_instant(date, "Asia/Riyadh");
        let expected = date.as_naive().and_time(NaiveTime::from_hms_opt(20, 59, 59).unwrap());
        prop_assert_eq!(lock.naive_utc(), expected);
    }

    #[test]
    fn unknown_zone_matches_plus_three(date in modern_date(), zone in "[a-z]{3,8}/[0-9]{2}") {
        let fixed = lock_instant(date, "Etc/GMT-3");
        prop_assert_eq!(lock_instant(date, &zone), fixed);
    }

    #[test]
    fn malformed_dates_rejected(s in "[0-9]{1,3}-[0-9]{2}-[0-9]{2}|[0-9]{4}/[0-9]{2}/[0-9]{2}", scope in scope()) {
        prop_assert!(period_for(&s, scope).is_err());
    }
}
