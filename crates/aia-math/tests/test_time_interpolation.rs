//! Property tests for timestamp interpolation.

use aia_core::{BoundsPolicy, Error, Real, TimeSeries, Timestamp};
use aia_math::{time_interpolate, Diagnostic, TimeInterpolator};
use aia_time::{parse_timestamp, seconds_between};
use approx::assert_relative_eq;
use chrono::Duration;
use proptest::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn base() -> Timestamp {
    parse_timestamp("2010-05-01T00:00:00.000").unwrap()
}

/// Build a series from day gaps (all >= 1) and values.
fn series_from(steps: &[(i64, Real)]) -> TimeSeries<Timestamp, Real> {
    let mut t = base();
    let mut pairs = Vec::with_capacity(steps.len());
    for &(gap_days, value) in steps {
        t += Duration::days(gap_days);
        pairs.push((t, value));
    }
    TimeSeries::from_pairs(pairs)
}

fn steps_strategy() -> impl Strategy<Value = Vec<(i64, Real)>> {
    prop::collection::vec((1i64..400, 0.0f64..5_000.0), 2..25)
}

proptest! {
    #[test]
    fn exact_at_every_sample(steps in steps_strategy()) {
        let series = series_from(&steps);
        let interp = TimeInterpolator::new(BoundsPolicy::Strict);
        for (t, v) in series.iter() {
            let got = interp.evaluate(&series, *t).unwrap();
            prop_assert!(got.is_clean());
            prop_assert_eq!(got.value, *v);
        }
    }

    #[test]
    fn bounded_by_neighbours(steps in steps_strategy(), idx in 0usize..24, frac in 0.0f64..1.0) {
        let series = series_from(&steps);
        let keys = series.keys();
        let i = idx % (keys.len() - 1);
        let (t0, t1) = (keys[i], keys[i + 1]);
        let offset_ms = (seconds_between(t0, t1) * 1_000.0 * frac) as i64;
        let target = t0 + Duration::milliseconds(offset_ms);

        let (v0, v1) = (series[&t0], series[&t1]);
        let got = TimeInterpolator::new(BoundsPolicy::Strict)
            .evaluate(&series, target)
            .unwrap()
            .value;
        let slack = 1e-9 * v0.abs().max(v1.abs()).max(1.0);
        prop_assert!(got >= v0.min(v1) - slack, "{got} below [{v0}, {v1}]");
        prop_assert!(got <= v0.max(v1) + slack, "{got} above [{v0}, {v1}]");
    }

    #[test]
    fn flat_between_equal_tail_samples(steps in steps_strategy(), hold_days in 1i64..10_000, frac in 0.0f64..1.0) {
        let series = series_from(&steps);
        let (&last_t, &last_v) = series.last().unwrap();
        let sentinel = last_t + Duration::days(hold_days);
        let held = series.with_sample(sentinel, last_v);

        let offset_ms = (seconds_between(last_t, sentinel) * 1_000.0 * frac) as i64;
        let target = last_t + Duration::milliseconds(offset_ms);
        let got = TimeInterpolator::new(BoundsPolicy::Strict)
            .evaluate(&held, target)
            .unwrap()
            .value;
        prop_assert_eq!(got, last_v);
    }
}

#[test]
fn quarter_year_example() {
    init_logging();
    let series = TimeSeries::from_pairs(vec![
        (parse_timestamp("2010-10-01").unwrap(), 100.0),
        (parse_timestamp("2011-01-01").unwrap(), 90.0),
    ]);
    let v = time_interpolate(&series, "2010-11-16").unwrap();
    assert_relative_eq!(v, 100.0 - 10.0 * 46.0 / 92.0, max_relative = 1e-12);
}

#[test]
fn flat_hold_example() {
    init_logging();
    let series = TimeSeries::from_pairs(vec![
        (parse_timestamp("2019-01-01").unwrap(), 55.0),
        (parse_timestamp("2020-01-01").unwrap(), 50.0),
        (parse_timestamp("2040-05-01").unwrap(), 50.0),
    ]);
    assert_eq!(time_interpolate(&series, "2030-06-01").unwrap(), 50.0);
}

#[test]
fn before_first_sample_policies() {
    init_logging();
    let series = TimeSeries::from_pairs(vec![
        (parse_timestamp("2010-05-01").unwrap(), 1.0),
        (parse_timestamp("2010-05-11").unwrap(), 0.9),
    ]);
    let early = parse_timestamp("2010-04-21").unwrap();

    let e = TimeInterpolator::new(BoundsPolicy::Extrapolate)
        .evaluate(&series, early)
        .unwrap();
    assert_relative_eq!(e.value, 1.1, max_relative = 1e-12);
    assert!(matches!(
        e.diagnostics.as_slice(),
        [Diagnostic::BeforeCoverage { .. }]
    ));

    let err = TimeInterpolator::new(BoundsPolicy::Strict)
        .evaluate(&series, early)
        .unwrap_err();
    assert!(matches!(err, Error::TargetTimeOutOfBounds { .. }));
}

#[test]
fn single_precision_series() {
    let series: TimeSeries<Timestamp, f32> = TimeSeries::from_pairs(vec![
        (parse_timestamp("2010-10-01").unwrap(), 100.0f32),
        (parse_timestamp("2011-01-01").unwrap(), 90.0f32),
    ]);
    let v = TimeInterpolator::new(BoundsPolicy::Strict)
        .interpolate(&series, "2010-11-16")
        .unwrap();
    assert_relative_eq!(v, 95.0f32, max_relative = 1e-6);
}
