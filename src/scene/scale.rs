//! Global scale constants for the scene
//!
//! `ScaleConstants` holds the fixed factors that map raw astronomical
//! magnitudes (days, Gm, km) into render-space scalars:
//! - time compression for angular speeds,
//! - distance compression and minimum gap for orbit radii,
//! - radius amplification for body sizes,
//! - orbit tessellation, belt thickness and the belt RNG seed

#[derive(Debug, Clone)]
pub struct ScaleConstants {
    pub central_draw_radius: f64, // central body sphere radius, render units
    pub central_body_radius: f64, // central body physical radius, km
    pub time_compression: f64, // seconds of wall clock per reference period
    pub reference_period: f64, // reference orbital period, days
    pub distance_compression: f64, // raw distance units per render unit
    pub minimum_gap: f64, // clearance outside the central body surface
    pub radius_amplification: f64, // visual boost for body radii
    pub orbit_segments: usize, // tessellation of each orbit guide ring
    pub belt_thickness: f64, // vertical spread of belt particles
    pub seed: u64, // belt RNG seed, 0 -> entropy
}
