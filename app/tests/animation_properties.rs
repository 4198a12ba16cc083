//! Cross-module properties of the splash mark animation: responsive sizing,
//! default merging, curve shape, and restartability.

use app::animation;
use app::components::loader::{LoaderConfig, LoaderProps};

const EPSILON: f64 = 1e-9;

#[test]
fn effective_size_matches_responsive_rule() {
    // Wide viewport: width / ratio wins.
    assert!((animation::effective_size(78.0, 700.0, 7.0) - 100.0).abs() < EPSILON);
    // Narrow viewport: configured minimum wins.
    assert!((animation::effective_size(78.0, 350.0, 7.0) - 78.0).abs() < EPSILON);
    // The rule is max(), so the result never drops below the configured size.
    for width in [0.0, 100.0, 545.0, 546.0, 10_000.0] {
        let size = animation::effective_size(78.0, width, 7.0);
        assert!(size >= 78.0 - EPSILON, "size shrank below minimum at width={width}");
        assert!((size - (width / 7.0).max(78.0)).abs() < EPSILON);
    }
}

#[test]
fn defaults_merge_field_by_field() {
    let defaults = LoaderProps::default().resolve();
    assert_eq!(defaults, LoaderConfig::default());

    let partial = LoaderProps {
        size: Some(100.0),
        ..LoaderProps::default()
    }
    .resolve();
    assert!((partial.size - 100.0).abs() < EPSILON);
    assert!((partial.ratio_scale - defaults.ratio_scale).abs() < EPSILON);
    assert!((partial.rotation_duration_ms - defaults.rotation_duration_ms).abs() < EPSILON);
    assert!((partial.opacity_duration_ms - defaults.opacity_duration_ms).abs() < EPSILON);
}

#[test]
fn rotation_is_periodic_and_sweeps_one_turn_per_period() {
    let period = LoaderConfig::default().rotation_duration_ms;
    for t in [0.0, 1.0, 999.5, 7_321.0, 11_999.9] {
        let here = animation::rotation_progress(t, period);
        let next_period = animation::rotation_progress(t + period, period);
        assert!((here - next_period).abs() < EPSILON);
    }

    // The mapped angle is strictly increasing within one period and covers
    // 0..2pi, so every angle is visited exactly once per revolution.
    let mut previous_angle = -1.0;
    for step in 0..1_000 {
        let t = f64::from(step) / 1_000.0 * period;
        let angle = animation::rotation_angle(animation::rotation_progress(t, period));
        assert!(angle > previous_angle, "angle regressed at t={t}");
        previous_angle = angle;
    }
    assert!(previous_angle < core::f64::consts::TAU);
    assert!(previous_angle > core::f64::consts::TAU * 0.998);
}

#[test]
fn opacity_never_decreases_and_saturates() {
    let duration = LoaderConfig::default().opacity_duration_ms;
    let mut previous = -1.0;
    for step in 0..=100 {
        let t = f64::from(step) * 6.0; // samples well past the duration
        let value = animation::opacity_progress(t, duration);
        assert!(value >= previous);
        assert!(value <= 1.0);
        previous = value;
    }
    assert!((animation::opacity_progress(duration, duration) - 1.0).abs() < EPSILON);
    assert!((animation::opacity_progress(duration * 50.0, duration) - 1.0).abs() < EPSILON);
}

#[test]
fn rotation_transform_preserves_shape() {
    for step in 0..=360 {
        let progress = f64::from(step) / 360.0;
        let [a, b, c, d, ..] = animation::rotation_matrix(animation::rotation_angle(progress));
        let determinant = a.mul_add(d, -(b * c));
        assert!(
            (determinant - 1.0).abs() < EPSILON,
            "not a proper rotation at progress={progress}"
        );
        assert!((a.mul_add(a, b * b) - 1.0).abs() < EPSILON);
        assert!((c.mul_add(c, d * d) - 1.0).abs() < EPSILON);
        assert!(a.mul_add(c, b * d).abs() < EPSILON);
    }
}

#[test]
fn fresh_instances_start_from_the_initial_frame() {
    // Every loader instance derives its progress from its own clock origin,
    // so elapsed time zero always reproduces the initial frame regardless of
    // what an earlier instance displayed.
    let config = LoaderProps::default().resolve();
    assert!((animation::rotation_progress(0.0, config.rotation_duration_ms)).abs() < EPSILON);
    assert!((animation::opacity_progress(0.0, config.opacity_duration_ms)).abs() < EPSILON);
}
