//! Weekend progress at reference instants, zone handling, and monotonicity.

use approx::assert_abs_diff_eq;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Europe::Warsaw;
use proptest::prelude::*;
use wk_core::FixedClock;
use wk_progress::{
    get_weekend_progress, weekend_progress_at, WeekendProgressCalculator, WeekendSchedule, Zone,
};

fn wall(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn warsaw(y: i32, m: u32, d: u32, h: u32) -> DateTime<FixedOffset> {
    Warsaw
        .with_ymd_and_hms(y, m, d, h, 0, 0)
        .unwrap()
        .fixed_offset()
}

fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap().fixed_offset()
}

/// A calculator whose clock must never be consulted.
fn calculator() -> WeekendProgressCalculator<FixedClock> {
    WeekendProgressCalculator::with_clock(FixedClock::new(DateTime::<Utc>::MIN_UTC))
}

// ─── Reference instants ───────────────────────────────────────────────────────

#[test]
fn test_friday_afternoon() {
    let p = calculator().compute(Some(wall(2019, 2, 8, 15, 20))).unwrap();

    assert!(!p.is_weekend());
    assert_abs_diff_eq!(p.ratio, 0.983974358, epsilon = 1e-8);
    assert_eq!(p.remaining_description, "1 hour 40 minutes");
    assert_eq!(p.window_start, warsaw(2019, 2, 4, 9));
    assert_eq!(p.window_end, warsaw(2019, 2, 8, 17));
    assert_eq!(p.total_window, Duration::hours(104));
}

#[test]
fn test_friday_afternoon_with_explicit_zone_and_schedule() {
    let p = get_weekend_progress(
        Some(wall(2019, 2, 8, 15, 20)),
        Zone::default(),
        WeekendSchedule::default(),
    )
    .unwrap();

    assert!(!p.is_weekend());
    assert_abs_diff_eq!(p.ratio, 0.983974358, epsilon = 1e-8);
    assert_eq!(p.remaining_description, "1 hour 40 minutes");

    let in_utc = get_weekend_progress(
        Some(wall(2019, 2, 8, 15, 20)),
        Zone::Named(chrono_tz::UTC),
        WeekendSchedule::new(16, 9).unwrap(),
    )
    .unwrap();
    assert_eq!(in_utc.remaining_description, "40 minutes");
    assert_eq!(in_utc.window_end, utc(2019, 2, 8, 16));
}

#[test]
fn test_monday_from_clock() {
    let clock = FixedClock::at_utc(wall(2019, 2, 4, 10, 0));
    let p = WeekendProgressCalculator::with_clock(clock)
        .with_zone(Zone::Named(chrono_tz::UTC))
        .compute(None)
        .unwrap();

    assert_abs_diff_eq!(p.ratio, 0.0096153846, epsilon = 1e-9);
    assert_eq!(p.remaining_description, "4 days 7 hours");
    assert_eq!(p.window_start, utc(2019, 2, 4, 9));
    assert_eq!(p.window_end, utc(2019, 2, 8, 17));
}

#[test]
fn test_clock_instant_is_converted_into_the_zone() {
    // 08:30 UTC is 09:30 in Warsaw: already past the weekend end
    let clock = FixedClock::at_utc(wall(2019, 2, 4, 8, 30));
    let p = WeekendProgressCalculator::with_clock(clock).compute(None).unwrap();
    assert!(!p.is_weekend());
    assert_eq!(p.remaining_description, "4 days 7 hours 30 minutes");
}

#[test]
fn test_mid_week() {
    // 2019-02-20 is a Wednesday
    let p = calculator().compute(Some(wall(2019, 2, 20, 13, 0))).unwrap();

    assert_abs_diff_eq!(p.ratio, 0.5, epsilon = 1e-12);
    assert_eq!(p.remaining_description, "2 days 4 hours");
    assert_eq!(p.window_start, warsaw(2019, 2, 18, 9));
    assert_eq!(p.window_end, warsaw(2019, 2, 22, 17));
}

#[test]
fn test_friday_evening_is_weekend() {
    let p = calculator().compute(Some(wall(2019, 2, 22, 19, 0))).unwrap();

    assert!(p.is_weekend());
    assert_abs_diff_eq!(p.ratio, -0.96875, epsilon = 1e-12);
    assert_eq!(p.remaining_description, "2 days 14 hours");
    assert_eq!(p.window_start, warsaw(2019, 2, 22, 17));
    assert_eq!(p.window_end, warsaw(2019, 2, 25, 9));
    assert_eq!(p.total_window, Duration::hours(64));
}

#[test]
fn test_sunday() {
    let p = calculator().compute(Some(wall(2019, 2, 24, 10, 0))).unwrap();

    assert!(p.is_weekend());
    assert_abs_diff_eq!(p.ratio, -0.359375, epsilon = 1e-12);
    assert_eq!(p.remaining_description, "23 hours");
}

// ─── Zone handling ────────────────────────────────────────────────────────────

#[test]
fn test_foreign_zone_timestamp_is_attached_not_converted() {
    let utc_friday = Utc.with_ymd_and_hms(2019, 2, 8, 15, 20, 0).unwrap();
    let p = calculator().compute_for(&utc_friday).unwrap();
    // read as 15:20 Warsaw time, not 16:20
    assert_eq!(p.remaining_description, "1 hour 40 minutes");
}

#[test]
fn test_dst_weekend_is_an_hour_shorter() {
    // Warsaw moves to summer time on Sunday 2019-03-31
    let p = calculator().compute(Some(wall(2019, 3, 31, 10, 0))).unwrap();
    assert_eq!(p.total_window, Duration::hours(63));
    assert_eq!(p.remaining, Duration::hours(23));
    assert_abs_diff_eq!(p.ratio, -23.0 / 63.0, epsilon = 1e-12);
}

#[test]
fn test_wall_time_in_dst_gap_moves_forward() {
    let p = calculator().compute(Some(wall(2019, 3, 31, 2, 30))).unwrap();
    assert_eq!(p.remaining_description, "1 day 5 hours 30 minutes");
}

#[test]
fn test_local_zone() {
    let clock = FixedClock::at_utc(wall(2019, 2, 20, 12, 0));
    let p = WeekendProgressCalculator::with_clock(clock)
        .with_zone(Zone::from_name(Some("")).unwrap())
        .compute(None)
        .unwrap();
    // a work day in every zone
    assert!(!p.is_weekend());
    assert!(p.ratio > 0.0 && p.ratio < 1.0);
}

#[test]
fn test_schedule_is_applied() {
    let p = calculator()
        .with_schedule(WeekendSchedule::new(15, 10).unwrap())
        .compute(Some(wall(2019, 2, 8, 15, 20)))
        .unwrap();
    assert!(p.is_weekend());
    assert_eq!(p.window_end, warsaw(2019, 2, 11, 10));
}

// ─── Properties ───────────────────────────────────────────────────────────────

fn monday_end() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 2, 18, 9, 0, 0).unwrap()
}

fn friday_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 2, 22, 17, 0, 0).unwrap()
}

proptest! {
    #[test]
    fn ratio_in_range_and_sign_matches_weekend(minutes in 0i64..(7 * 24 * 60)) {
        let now = monday_end() + Duration::minutes(minutes);
        let p = weekend_progress_at(&now, &WeekendSchedule::default()).unwrap();
        if p.is_weekend() {
            prop_assert!(p.ratio >= -1.0 && p.ratio < 0.0);
        } else {
            prop_assert!(p.ratio >= 0.0 && p.ratio < 1.0);
        }
        prop_assert!(p.total_window > Duration::zero());
        prop_assert!(p.remaining > Duration::zero());
    }

    #[test]
    fn ratio_increases_through_the_work_week(a in 0i64..(104 * 60), b in 0i64..(104 * 60)) {
        prop_assume!(a < b);
        let schedule = WeekendSchedule::default();
        let pa = weekend_progress_at(&(monday_end() + Duration::minutes(a)), &schedule).unwrap();
        let pb = weekend_progress_at(&(monday_end() + Duration::minutes(b)), &schedule).unwrap();
        prop_assert!(!pa.is_weekend() && !pb.is_weekend());
        prop_assert!(pa.ratio < pb.ratio);
    }

    #[test]
    fn ratio_climbs_towards_zero_through_the_weekend(a in 0i64..(64 * 60), b in 0i64..(64 * 60)) {
        prop_assume!(a < b);
        let schedule = WeekendSchedule::default();
        let pa = weekend_progress_at(&(friday_start() + Duration::minutes(a)), &schedule).unwrap();
        let pb = weekend_progress_at(&(friday_start() + Duration::minutes(b)), &schedule).unwrap();
        prop_assert!(pa.is_weekend() && pb.is_weekend());
        prop_assert!(pa.ratio < pb.ratio);
    }
}
