//! Orbit guide ring generator
//!
//! Samples a full circle at a given radius into a closed polyline in the
//! y = 0 plane. Deterministic; the render surface draws the result as a
//! translucent line loop.

use std::f64::consts::TAU;

use crate::scene::states::{NVec3, OrbitPath};

/// Sample a circle of `radius` into `segments + 1` points.
///
/// The first and last point coincide so the polyline closes without a seam.
/// `radius = 0.0` is legal and yields a degenerate cluster at the origin.
/// Callers pass `segments >= 3`; the scene config defaults to 128.
pub fn generate_orbit(radius: f64, segments: usize) -> OrbitPath {
    let mut points = Vec::with_capacity(segments + 1);

    for i in 0..=segments {
        let angle = i as f64 / segments as f64 * TAU;
        points.push(NVec3::new(angle.cos() * radius, 0.0, angle.sin() * radius));
    }

    OrbitPath { points }
}
