//! Per-frame orbital update step
//!
//! Repositions every body along its circular path from the elapsed wall-clock
//! time. Positions are a closed-form function of time, so the step is
//! idempotent for a fixed `elapsed` and periodic with period `2pi / omega`
//! per body. No body reads any other body.

use crate::scene::states::RenderBody;

/// Recompute each body's planar position for the given elapsed time.
/// Updates `position` in-place; `y` is left untouched (planar orbits only).
/// Called once per displayed frame by the render loop, which supplies
/// monotonically non-decreasing `elapsed` seconds.
pub fn update_positions(bodies: &mut [RenderBody], elapsed: f64) {
    for b in bodies.iter_mut() {
        // Phase along the circle at this body's angular speed
        let phase = elapsed * b.angular_speed;

        // x = cos(phase) * r, z = sin(phase) * r keeps the body exactly on
        // its orbit circle for any t
        b.position.x = phase.cos() * b.draw_distance;
        b.position.z = phase.sin() * b.draw_distance;
    }
}
