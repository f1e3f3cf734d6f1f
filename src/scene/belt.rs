//! Belt generator: scattered particle clouds between two orbit radii
//!
//! Each particle gets a uniform random angle, a radial distance interpolated
//! across the belt span, a bounded vertical offset for visual depth, and a
//! random size below the belt's scale. The RNG is passed in explicitly so a
//! fixed seed reproduces a belt exactly.

use std::f64::consts::TAU;

use rand::Rng;

use crate::scene::states::{BeltParticle, NVec3};

/// Render-space parameters for one belt, produced by the scene assembler
/// from the raw config (bounds already distance-normalized).
#[derive(Debug, Clone)]
pub struct BeltParams {
    pub min_distance: f64, // inner orbit radius, render units
    pub max_distance: f64, // outer orbit radius, render units
    pub count: usize, // particle count
    pub size_scale: f64, // particle sizes sampled in [0, size_scale)
    pub thickness: f64, // vertical spread, offsets in +-thickness/2
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Scatter `params.count` particles across the belt span.
///
/// Precondition: `min_distance <= max_distance` and `size_scale >= 0`,
/// enforced by belt config validation before the assembler calls this.
pub fn generate_belt<R: Rng>(params: &BeltParams, rng: &mut R) -> Vec<BeltParticle> {
    let mut particles = Vec::with_capacity(params.count);

    for _ in 0..params.count {
        // Random angle around the central body
        let angle = rng.gen::<f64>() * TAU;
        // Radial distance interpolated across the span
        let distance = lerp(params.min_distance, params.max_distance, rng.gen::<f64>());
        // Vertical offset for thickness
        let height = (rng.gen::<f64>() - 0.5) * params.thickness;
        let size = rng.gen::<f64>() * params.size_scale;

        particles.push(BeltParticle {
            position: NVec3::new(angle.cos() * distance, height, angle.sin() * distance),
            size,
        });
    }

    particles
}
