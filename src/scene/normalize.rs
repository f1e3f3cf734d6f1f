//! Unit normalizer: raw astronomical magnitudes -> render-space scalars
//!
//! Pure functions over a validated [`BodySpec`] and the global
//! [`ScaleConstants`]. The formulas are deliberate visual compressions, not
//! physics:
//! - periods are squeezed so the reference period takes a few wall-clock
//!   seconds, then turned into an angular speed,
//! - distances are divided down and pushed outside the central body surface,
//! - radii are expressed relative to the central body and amplified so small
//!   bodies stay visible

use std::f64::consts::TAU;

use crate::scene::scale::ScaleConstants;
use crate::scene::states::BodySpec;

/// Render-space scalars derived from one body spec.
#[derive(Debug, Clone, Copy)]
pub struct Normalized {
    pub angular_speed: f64, // radians per second
    pub draw_distance: f64, // render units
    pub draw_radius: f64, // render units
}

/// Map a raw distance-from-center onto a render-space orbit radius.
///
/// The `minimum_gap` and central draw radius terms guarantee the result lies
/// strictly outside the central body's surface even for the smallest raw
/// distance. Shared by planets and belt bounds so both live on the same
/// scale.
pub fn normalize_distance(raw: f64, k: &ScaleConstants) -> f64 {
    raw / k.distance_compression + k.minimum_gap + k.central_draw_radius
}

/// Derive angular speed, draw distance and draw radius for one body.
///
/// Precondition: `spec` has already passed table validation, so all three
/// magnitudes are strictly positive and no division below can hit zero.
pub fn normalize(spec: &BodySpec, k: &ScaleConstants) -> Normalized {
    // Compressed period in wall-clock seconds: the reference period maps to
    // `time_compression` seconds, everything else scales linearly.
    let period_secs = spec.orbital_period * k.time_compression / k.reference_period;

    // One full revolution per compressed period.
    let angular_speed = TAU / period_secs;

    let draw_distance = normalize_distance(spec.mean_distance, k);

    // Size relative to the central body, so the ratio is unit-agnostic,
    // then amplified to stay visible next to the compressed distances.
    let draw_radius = spec.physical_radius / k.central_body_radius * k.radius_amplification;

    Normalized {
        angular_speed,
        draw_distance,
        draw_radius,
    }
}
