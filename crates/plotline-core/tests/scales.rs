// File: crates/plotline-core/tests/scales.rs
// Purpose: Boundary exactness, nice domains, ticks, time intervals and categorical scales.

use chrono::NaiveDate;
use plotline_core::scale::{
    nice_domain, tick_increment, ticks, time_interval, to_datetime, TimeInterval, MAX_TICK_COUNT,
};
use plotline_core::{
    ChartError, ContinuousScale, LinearScale, OrdinalScale, Rgba, SequentialColorScale, TimeScale, Unknown,
};

#[test]
fn range_ends_are_exact_at_domain_ends() {
    let cases: &[(&[f64], (f64, f64))] = &[
        (&[1.0, 5.0], (0.0, 100.0)),
        (&[0.1, 0.7, 0.3], (0.0, 540.0)),
        (&[-17.3, 42.9, 3.0], (345.0, 0.0)),
        (&[1e-9, 3e-9], (0.0, 1.0)),
        (&[12345.678, 99999.1], (13.0, 871.5)),
    ];
    for (values, range) in cases {
        let s = LinearScale::from_values(values, "v", *range).unwrap();
        let (lo, hi) = s.domain();
        assert_eq!(s.map(lo), range.0, "{:?}", values);
        assert_eq!(s.map(hi), range.1, "{:?}", values);
    }
}

#[test]
fn empty_input_fails_with_field_name() {
    let err = LinearScale::from_values(&[], "humidity", (0.0, 100.0)).unwrap_err();
    match err {
        ChartError::EmptyDataset { field } => assert_eq!(field, "humidity"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn degenerate_domain_maps_to_middle() {
    let s = LinearScale::from_values(&[3.0, 3.0], "v", (0.0, 100.0)).unwrap();
    assert_eq!(s.map(3.0), 50.0);
}

#[test]
fn invert_round_trips_inside_range() {
    let s = LinearScale::new((10.0, 20.0), (400.0, 0.0));
    assert_eq!(s.invert(400.0), 10.0);
    assert_eq!(s.invert(0.0), 20.0);
    assert!((s.invert(s.map(13.7)) - 13.7).abs() < 1e-9);
}

#[test]
fn clamp_keeps_output_in_range() {
    let s = LinearScale::new((0.0, 10.0), (0.0, 100.0)).with_clamp(true);
    assert_eq!(s.map(-5.0), 0.0);
    assert_eq!(s.map(50.0), 100.0);
}

#[test]
fn tick_increment_uses_1_2_5() {
    assert_eq!(tick_increment(0.0, 100.0, 10), 10.0);
    assert_eq!(tick_increment(0.0, 95.0, 10), 10.0);
    assert_eq!(tick_increment(0.0, 1.0, 10), -10.0);
    assert_eq!(tick_increment(0.0, 20.0, 10), 2.0);
    assert_eq!(tick_increment(0.0, 50.0, 10), 5.0);
}

#[test]
fn ticks_are_round_and_inside() {
    assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(ticks(-3.0, 11.0, 5), vec![-2.0, 0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
    assert_eq!(ticks(4.0, 4.0, 10), vec![4.0]);
}

#[test]
fn ticks_terminate_far_from_zero() {
    let (lo, hi) = (1e17, 1e17 + 64.0);
    let t = ticks(lo, hi, 10);
    assert!(!t.is_empty() && t.len() <= 22, "got {} ticks", t.len());
    assert!(t.iter().all(|v| *v >= lo && *v <= hi));
    assert!(t.windows(2).all(|w| w[0] < w[1]));

    let rev = ticks(hi, lo, 10);
    assert_eq!(rev.len(), t.len());
    assert_eq!(rev.first(), t.last());
}

#[test]
fn tick_count_is_capped() {
    let t = ticks(0.0, 1.0, usize::MAX);
    assert!(t.len() <= 2 * MAX_TICK_COUNT + 2);
    assert_eq!(t.first(), Some(&0.0));
    assert_eq!(t.last(), Some(&1.0));
}

#[test]
fn nice_rounds_outward() {
    assert_eq!(nice_domain(0.13, 0.87, 10), (0.1, 0.9));
    assert_eq!(nice_domain(3.0, 97.0, 10), (0.0, 100.0));
    assert_eq!(nice_domain(97.0, 3.0, 10), (100.0, 0.0));

    let s = LinearScale::new((3.0, 97.0), (0.0, 500.0)).nice(10);
    assert_eq!(s.domain(), (0.0, 100.0));
    // The range is untouched by nice.
    assert_eq!(s.range(), (0.0, 500.0));
    assert_eq!(s.map(50.0), 250.0);
}

fn ms(y: i32, m: u32, d: u32) -> f64 {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp_millis() as f64
}

#[test]
fn time_interval_picks_calendar_steps() {
    assert_eq!(time_interval(ms(2018, 1, 1), ms(2018, 3, 1), 10), TimeInterval::Weeks(1));
    assert_eq!(time_interval(ms(2018, 1, 1), ms(2018, 12, 31), 10), TimeInterval::Months(1));
    assert_eq!(time_interval(ms(2018, 1, 1), ms(2018, 1, 11), 10), TimeInterval::Fixed(86_400_000));
}

#[test]
fn weekly_ticks_fall_on_sundays() {
    let s = TimeScale::from_millis((ms(2018, 1, 1), ms(2018, 3, 1)), (0.0, 800.0));
    let ticks = s.ticks_time(10);
    assert!(!ticks.is_empty());
    for t in &ticks {
        assert_eq!(t.format("%a").to_string(), "Sun");
        assert_eq!(t.format("%H:%M").to_string(), "00:00");
    }
    assert_eq!(ticks[0].date(), NaiveDate::from_ymd_opt(2018, 1, 7).unwrap());
}

#[test]
fn monthly_nice_lands_on_month_starts() {
    let s = TimeScale::from_millis((ms(2018, 1, 17), ms(2018, 11, 3)), (0.0, 800.0)).nice(10);
    let (lo, hi) = s.domain();
    assert_eq!(lo, ms(2018, 1, 1));
    assert_eq!(hi, ms(2018, 12, 1));
    assert_eq!(s.map(lo), 0.0);
    assert_eq!(s.map(hi), 800.0);
}

#[test]
fn time_scale_maps_datetimes() {
    let a = to_datetime(ms(2020, 1, 1) as i64);
    let b = to_datetime(ms(2020, 1, 11) as i64);
    let s = TimeScale::new((a, b), (0.0, 100.0));
    let mid = to_datetime(ms(2020, 1, 6) as i64);
    assert_eq!(s.map_time(&mid), 50.0);
    assert_eq!(s.invert_time(50.0), mid);
}

#[test]
fn ordinal_fails_outside_vocabulary_by_default() {
    let s = OrdinalScale::new(&["a", "b"], vec![1, 2]).unwrap();
    assert_eq!(s.map("b").unwrap(), 2);
    match s.map("z").unwrap_err() {
        ChartError::OutOfVocabulary { value } => assert_eq!(value, "z"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn ordinal_fallback_and_cycling() {
    let s = OrdinalScale::new(&["a", "b", "a", "c"], vec!["x", "y"])
        .unwrap()
        .with_unknown(Unknown::Fallback("grey"));
    assert_eq!(s.domain(), &["a".to_string(), "b".to_string(), "c".to_string()]);
    assert_eq!(s.map("c").unwrap(), "x");
    assert_eq!(s.map("nope").unwrap(), "grey");
    assert!(OrdinalScale::<u8>::new(&["a"], vec![]).is_err());
}

#[test]
fn sequential_color_interpolates_and_clamps() {
    let from = Rgba::rgb(0, 0, 0);
    let to = Rgba::rgb(200, 100, 50);
    let s = SequentialColorScale::new((0.0, 1.0), from, to);
    assert_eq!(s.map(0.0), from);
    assert_eq!(s.map(1.0), to);
    assert_eq!(s.map(0.5), Rgba::rgb(100, 50, 25));
    assert_eq!(s.map(7.0), to);
}
