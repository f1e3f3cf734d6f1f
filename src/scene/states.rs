//! Core scene types for the solar-system viewer.
//!
//! Defines the static body table entry and the derived render-time records:
//! - `BodySpec`     – validated astronomical constants for one body
//! - `RenderBody`   – render-space scalars plus the animated position
//! - `OrbitPath`    – closed guide polyline for one orbit
//! - `Belt` / `BeltParticle` – static scattered particle clouds
//!
//! All geometry is kept in `f64` (`NVec3`) and only cast to `f32` at the
//! render boundary.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// Astronomical constants for one orbiting body, straight from the scene
/// table. Validated once at load time and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct BodySpec {
    pub name: String, // body name, for logs and labels
    pub color: u32, // 24-bit RGB
    pub orbital_period: f64, // orbital period in days
    pub mean_distance: f64, // mean distance from the central body, Gm
    pub physical_radius: f64, // physical radius, km
}

impl BodySpec {
    /// Split the packed 24-bit color into linear-ish [0, 1] channels
    /// for the render surface.
    pub fn color_rgb(&self) -> (f32, f32, f32) {
        let r = ((self.color >> 16) & 0xff) as f32 / 255.0;
        let g = ((self.color >> 8) & 0xff) as f32 / 255.0;
        let b = (self.color & 0xff) as f32 / 255.0;
        (r, g, b)
    }
}

/// One animated body in render space.
///
/// `angular_speed`, `draw_distance` and `draw_radius` are derived once by the
/// unit normalizer; `position` is the only field the per-frame update step
/// mutates.
#[derive(Debug, Clone)]
pub struct RenderBody {
    pub spec: BodySpec, // source table entry
    pub angular_speed: f64, // radians per wall-clock second
    pub draw_distance: f64, // orbit radius in render units
    pub draw_radius: f64, // sphere radius in render units
    pub position: NVec3, // current position, updated each frame
}

/// Closed polyline guide for one circular orbit, y = 0 plane.
/// First and last point coincide so the loop renders without a seam.
#[derive(Debug, Clone)]
pub struct OrbitPath {
    pub points: Vec<NVec3>,
}

/// One particle of a belt. Generated once, never animated.
#[derive(Debug, Clone, Copy)]
pub struct BeltParticle {
    pub position: NVec3,
    pub size: f64, // sphere radius in render units
}

/// A static particle cloud between two orbit radii.
#[derive(Debug, Clone)]
pub struct Belt {
    pub name: String,
    pub particles: Vec<BeltParticle>,
}
