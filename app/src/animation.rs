//! This module holds the pure timing and transform math behind the animated
//! splash mark.
//!
//! Everything here is plain arithmetic over elapsed milliseconds, kept free of
//! any DOM or reactive types so the animation curves can be unit tested
//! without a browser. The loader component samples these functions once per
//! animation frame.

use core::f64::consts::TAU;

/// Normalized progress of the looping rotation at `elapsed_ms` into the
/// animation.
///
/// The value ramps linearly from 0 to 1 over `duration_ms`, then wraps back
/// to 0 and repeats indefinitely. A non-positive duration degenerates to an
/// instant animation and pins the progress at 0 (a full turn is
/// indistinguishable from no turn).
#[must_use]
pub fn rotation_progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 0.0;
    }
    elapsed_ms.rem_euclid(duration_ms) / duration_ms
}

/// Normalized progress of the one-shot fade-in at `elapsed_ms` into the
/// animation.
///
/// Ramps linearly from 0 to 1 over `duration_ms` and then holds at 1. A
/// non-positive duration is treated as an instant fade and returns 1.
#[must_use]
pub fn opacity_progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Maps a rotation progress value onto an angle in radians, sweeping the full
/// 0..2π range exactly once per period.
#[must_use]
pub fn rotation_angle(progress: f64) -> f64 {
    progress * TAU
}

/// 2D rotation matrix for `angle` radians in SVG column order
/// `[a, b, c, d, e, f]`.
///
/// The negated cosine terms match the artwork: the dash overlay is drawn
/// half-turned relative to the base glyph, so a zero progress still lines up
/// with the original design.
#[must_use]
pub fn rotation_matrix(angle: f64) -> [f64; 6] {
    let (sin, cos) = angle.sin_cos();
    [-cos, -sin, sin, -cos, 0.0, 0.0]
}

/// Renders a six-element matrix as an SVG `transform` attribute value.
#[must_use]
pub fn svg_matrix(matrix: &[f64; 6]) -> String {
    format!(
        "matrix({},{},{},{},{},{})",
        matrix[0], matrix[1], matrix[2], matrix[3], matrix[4], matrix[5]
    )
}

/// Pure-translation transform moving the origin to `(x, y)`.
#[must_use]
pub fn translate_matrix(x: f64, y: f64) -> String {
    format!("matrix(1.00,0.00,0.00,1.00,{x},{y})")
}

/// Responsive sizing rule for the mark: grow with the viewport but never
/// shrink below the configured minimum.
///
/// Returns `max(configured, viewport_width / ratio_scale)`; a non-positive
/// `ratio_scale` disables viewport scaling and yields the configured size.
#[must_use]
pub fn effective_size(configured: f64, viewport_width: f64, ratio_scale: f64) -> f64 {
    if ratio_scale <= 0.0 {
        return configured;
    }
    let scaled = viewport_width / ratio_scale;
    if scaled >= configured { scaled } else { configured }
}
