//! End-to-end tests: response tables on disk through to ratio queries.

use aia_core::{BoundsPolicy, Error, Timestamp};
use aia_math::Diagnostic;
use aia_response::{
    latest_table_in_dir, CalibrationRecord, CalibrationTable, EffectiveArea, ResponseConfig,
    TableLayout,
};
use aia_time::parse_timestamp;
use approx::assert_abs_diff_eq;
use chrono::Duration;
use proptest::prelude::*;
use std::path::PathBuf;

const TABLE: &str = "\
# AIA effective-area response table
DATE        T_START                  WAVE_STR  WAVELNTH  EFF_AREA
2010-03-24  2010-10-01T00:00:00.000  171_THIN  171       100.0
2010-03-24  2011-01-01T00:00:00.000  171_THIN  171       90.0
2010-03-24  2020-01-01T00:00:00.000  171_THIN  171       50.0
2010-03-24  2010-10-01T00:00:00.000  193_THIN  193       2.0
2010-03-24  2015-10-01T00:00:00.000  193_THIN  193       1.5
";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ts(s: &str) -> Timestamp {
    parse_timestamp(s).unwrap()
}

fn store() -> EffectiveArea {
    EffectiveArea::from_reader(
        TABLE.as_bytes(),
        ResponseConfig::default().with_bounds_policy(BoundsPolicy::Extrapolate),
    )
    .unwrap()
}

/// A fresh scratch directory under the system temp dir.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("aia-response-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn ratio_at_launch_is_one() {
    init_logging();
    let s = store();
    for w in [171, 193] {
        let e = s.evaluate_effective_area_ratio(w, "2010-10-01T00:00:00").unwrap();
        assert_eq!(e.value, 1.0);
        assert!(e.is_clean());
    }
}

#[test]
fn quarter_between_samples() {
    init_logging();
    let s = store();
    assert_abs_diff_eq!(s.effective_area(171, "2010-11-16").unwrap(), 95.0, epsilon = 1e-12);
    assert_abs_diff_eq!(
        s.effective_area_ratio(171, "2010-11-16").unwrap(),
        0.95,
        epsilon = 1e-12
    );
}

#[test]
fn flat_hold_until_sentinel() {
    init_logging();
    let s = store();
    assert_eq!(s.effective_area(171, "2030-06-01").unwrap(), 50.0);
    assert_eq!(s.effective_area_ratio(193, "2039-12-31").unwrap(), 0.75);
}

#[test]
fn past_sentinel_is_flagged() {
    init_logging();
    let e = store().evaluate_effective_area(171, "2045-01-01").unwrap();
    assert_eq!(e.value, 50.0);
    assert_eq!(
        e.diagnostics,
        vec![Diagnostic::AfterCoverage {
            target: ts("2045-01-01"),
            end: ts("2040-05-01"),
        }]
    );
}

#[test]
fn before_launch_is_flagged_or_rejected() {
    init_logging();
    let e = store().evaluate_effective_area(171, "2010-09-01").unwrap();
    assert!(e.value > 100.0);
    assert!(matches!(
        e.diagnostics.as_slice(),
        [Diagnostic::BeforeCoverage { .. }]
    ));

    let strict = EffectiveArea::from_reader(
        TABLE.as_bytes(),
        ResponseConfig::default().with_bounds_policy(BoundsPolicy::Strict),
    )
    .unwrap();
    assert!(matches!(
        strict.effective_area_ratio(171, "2010-09-01"),
        Err(Error::TargetTimeOutOfBounds { .. })
    ));
}

#[test]
fn unknown_channel_and_bad_time() {
    init_logging();
    let s = store();
    assert_eq!(
        s.effective_area_ratio(1600, "2015-01-01").unwrap_err(),
        Error::NoDataForChannel { wavelength: 1600.0 }
    );
    assert!(matches!(
        s.effective_area(171, "not a time"),
        Err(Error::Parse(_))
    ));
}

#[test]
fn custom_sentinel_moves_the_hold() {
    init_logging();
    let s = EffectiveArea::from_reader(
        TABLE.as_bytes(),
        ResponseConfig::default()
            .with_bounds_policy(BoundsPolicy::Strict)
            .with_flat_hold_until(ts("2025-01-01")),
    )
    .unwrap();
    assert_eq!(s.effective_area(171, "2024-06-01").unwrap(), 50.0);
    assert!(s.effective_area(171, "2026-01-01").is_err());
}

#[test]
fn sub_millisecond_calibration_epochs() {
    init_logging();
    let text = "\
WAVELNTH EFF_AREA T_START
171 100.0 2010-10-01T00:00:00.0000
171 90.0 2010-10-01T00:00:00.0004
171 80.0 2011-01-01T00:00:00.0000
";
    let config = ResponseConfig::default()
        .with_bounds_policy(BoundsPolicy::Strict)
        .with_layout(TableLayout::default().with_time_column_named("T_START"));
    let s = EffectiveArea::from_reader(text.as_bytes(), config).unwrap();
    assert_abs_diff_eq!(
        s.effective_area(171, "2010-10-01T00:00:00.0002").unwrap(),
        95.0,
        epsilon = 1e-9
    );
    let later = s.effective_area(171.0, "2010-11-16").unwrap();
    assert!(later < 90.0 && later > 80.0, "{later}");
}

#[test]
fn named_time_column_layout() {
    init_logging();
    let text = "\
WAVELNTH EFF_AREA EPOCH
171 10.0 2012-01-01
171 5.0 2014-01-01
";
    let config = ResponseConfig::default()
        .with_layout(TableLayout::default().with_time_column_named("EPOCH"));
    let s = EffectiveArea::from_reader(text.as_bytes(), config).unwrap();
    assert_abs_diff_eq!(s.effective_area_ratio(171, "2013-01-01").unwrap(), 0.75, epsilon = 1e-3);
}

#[test]
fn loads_from_path_and_directory() {
    init_logging();
    let dir = scratch_dir("load");
    std::fs::write(dir.join("aia_V8_20171210_050627_response_table.txt"), TABLE).unwrap();
    std::fs::write(
        dir.join("aia_V10_20201119_190000_response_table.txt"),
        TABLE.replace("100.0", "200.0"),
    )
    .unwrap();
    std::fs::write(dir.join("notes.txt"), "not a table").unwrap();

    let latest = latest_table_in_dir(&dir).unwrap();
    assert!(latest.ends_with("aia_V10_20201119_190000_response_table.txt"));

    let from_dir = EffectiveArea::from_directory(&dir, ResponseConfig::default()).unwrap();
    assert_eq!(from_dir.effective_area(171, "2010-10-01").unwrap(), 200.0);

    let from_path = EffectiveArea::from_path(
        dir.join("aia_V8_20171210_050627_response_table.txt"),
        ResponseConfig::default(),
    )
    .unwrap();
    assert_eq!(from_path.effective_area(171, "2010-10-01").unwrap(), 100.0);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn empty_directory_has_no_table() {
    let dir = scratch_dir("empty");
    assert!(matches!(
        EffectiveArea::from_directory(&dir, ResponseConfig::default()),
        Err(Error::Runtime(_))
    ));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn store_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EffectiveArea>();

    let s = store();
    std::thread::scope(|scope| {
        for w in [171, 193] {
            let s = &s;
            scope.spawn(move || {
                assert_eq!(s.effective_area_ratio(w, "2010-10-01").unwrap(), 1.0);
            });
        }
    });
}

fn decaying_table(steps: &[(i64, f64)]) -> CalibrationTable {
    let mut t = ts("2010-05-01");
    let mut area = 100.0;
    let mut records = Vec::with_capacity(steps.len() + 1);
    records.push(CalibrationRecord::new(171, t, area));
    for &(gap_days, keep) in steps {
        t += Duration::days(gap_days);
        area *= keep;
        records.push(CalibrationRecord::new(171, t, area));
    }
    CalibrationTable::new(records).unwrap()
}

proptest! {
    #[test]
    fn monotone_decay_gives_ratio_in_unit_interval(
        steps in prop::collection::vec((1i64..300, 0.5f64..1.0), 1..20),
        offset_days in 0i64..10_000,
    ) {
        let s = EffectiveArea::new(
            decaying_table(&steps),
            ResponseConfig::default().with_bounds_policy(BoundsPolicy::Strict),
        );
        let when = ts("2010-05-01") + Duration::days(offset_days);
        let ratio = s.effective_area_ratio(171, when).unwrap();
        prop_assert!(ratio <= 1.0 + 1e-12, "ratio {ratio} above launch");
        prop_assert!(ratio > 0.0);
    }

    #[test]
    fn after_last_sample_equals_latest(
        steps in prop::collection::vec((1i64..300, 0.5f64..1.0), 1..20),
        extra_days in 1i64..3_000,
    ) {
        let table = decaying_table(&steps);
        let s = EffectiveArea::with_defaults(table);
        let series = s.series_for(171).unwrap();
        let (last, latest) = series.latest();
        let got = s.effective_area(171, last + Duration::days(extra_days)).unwrap();
        prop_assert_eq!(got, latest);
    }
}
