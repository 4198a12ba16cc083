//! This module defines the `loader` component: the splash mark with a
//! continuously rotating, fading-in dash overlay.
//!
//! The component owns two animation progress signals for its lifetime. Both
//! are advanced by a single `requestAnimationFrame` recursion that samples
//! `performance.now()`, so the curves stay in lockstep and stop on their own
//! once the view has been unmounted.

use leptos::{ev, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{animation, artwork};

/// Caller-supplied loader parameters. Every field is optional; unset fields
/// fall back to the values in [`LoaderConfig::default`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderProps {
    /// Minimum on-screen size of the mark, in pixels.
    pub size: Option<f64>,
    /// Divisor applied to the viewport width for responsive sizing.
    pub ratio_scale: Option<f64>,
    /// Period of one full rotation of the dash overlay, in milliseconds.
    pub rotation_duration_ms: Option<f64>,
    /// Length of the one-shot fade-in, in milliseconds.
    pub opacity_duration_ms: Option<f64>,
}

/// Fully resolved loader parameters, immutable for the life of one instance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub size: f64,
    pub ratio_scale: f64,
    pub rotation_duration_ms: f64,
    pub opacity_duration_ms: f64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            size: 78.0,
            ratio_scale: 7.0,
            rotation_duration_ms: 12_000.0,
            opacity_duration_ms: 300.0,
        }
    }
}

impl LoaderProps {
    /// Merges these props over the defaults, field by field; a supplied value
    /// always wins over the default.
    #[must_use]
    pub fn resolve(self) -> LoaderConfig {
        let defaults = LoaderConfig::default();
        LoaderConfig {
            size: self.size.unwrap_or(defaults.size),
            ratio_scale: self.ratio_scale.unwrap_or(defaults.ratio_scale),
            rotation_duration_ms: self
                .rotation_duration_ms
                .unwrap_or(defaults.rotation_duration_ms),
            opacity_duration_ms: self
                .opacity_duration_ms
                .unwrap_or(defaults.opacity_duration_ms),
        }
    }
}

/// Renders the animated splash mark.
///
/// The mark is an SVG in a fixed 624x624 viewbox drawn at the responsive size
/// `max(config.size, viewport_width / config.ratio_scale)`. Paint order is
/// outline, base glyph, then the dash overlay wrapped in two transform
/// groups: the outer group carries the fade-in opacity and the translation to
/// the viewbox center, the inner group the rotation matrix, and the path
/// itself the inverse translation, so the overlay rotates in place about the
/// glyph centroid.
///
/// Both animations start when the component mounts in the browser and are
/// torn down with it; there is no pause or restart surface. Server rendering
/// emits the initial frame (opacity 0, rotation 0).
pub fn component(props: LoaderProps) -> impl IntoView {
    let config = props.resolve();

    let viewport_width = RwSignal::new(0.0_f64);
    let rotation = RwSignal::new(0.0_f64);
    let opacity = RwSignal::new(0.0_f64);

    // Effects never run during SSR, so everything touching the window lives
    // inside this one mount effect.
    Effect::new(move |_| {
        viewport_width.set(read_viewport_width());
        let resize = window_event_listener(ev::resize, move |_| {
            viewport_width.set(read_viewport_width());
        });
        on_cleanup(move || resize.remove());

        // Rotation and fade share one clock origin so they start together.
        let origin_ms = timestamp_ms();
        advance_frame(origin_ms, config, rotation, opacity);
    });

    let logo_size =
        move || animation::effective_size(config.size, viewport_width.get(), config.ratio_scale);
    let center_offset =
        animation::translate_matrix(artwork::VIEWBOX.w / 2.0, artwork::VIEWBOX.h / 2.0);
    let center_invert =
        animation::translate_matrix(-artwork::VIEWBOX.w / 2.0, -artwork::VIEWBOX.h / 2.0);
    let rotation_transform = move || {
        let angle = animation::rotation_angle(rotation.get());
        animation::svg_matrix(&animation::rotation_matrix(angle))
    };

    view! {
        <svg
            width=move || logo_size().to_string()
            height=move || logo_size().to_string()
            viewBox=format!("0 0 {} {}", artwork::VIEWBOX.w, artwork::VIEWBOX.h)
            shape-rendering="geometricPrecision"
        >
            <path fill=artwork::DARK d=artwork::OUTLINE_PATH></path>
            <path fill=artwork::LIGHTEN d=artwork::BASE_PATH></path>
            <g transform=center_offset opacity=move || opacity.get()>
                <g transform=rotation_transform>
                    <path transform=center_invert fill=artwork::DASH d=artwork::DASH_PATH></path>
                </g>
            </g>
        </svg>
    }
}

/// One animation frame: sample the clock, publish both progress values, and
/// schedule the next frame.
///
/// `try_set` hands the value back once a signal has been disposed along with
/// the component, which is the cue to stop scheduling frames.
fn advance_frame(
    origin_ms: f64,
    config: LoaderConfig,
    rotation: RwSignal<f64>,
    opacity: RwSignal<f64>,
) {
    let elapsed_ms = timestamp_ms() - origin_ms;
    let disposed = rotation
        .try_set(animation::rotation_progress(
            elapsed_ms,
            config.rotation_duration_ms,
        ))
        .is_some()
        || opacity
            .try_set(animation::opacity_progress(
                elapsed_ms,
                config.opacity_duration_ms,
            ))
            .is_some();
    if disposed {
        return;
    }
    request_animation_frame(move || advance_frame(origin_ms, config, rotation, opacity));
}

/// Current width of the host window, in CSS pixels.
fn read_viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or_default()
}

/// Monotonic timestamp in milliseconds from the browser's performance clock.
fn timestamp_ms() -> f64 {
    window().performance().map_or(0.0, |perf| perf.now())
}
