//! Configuration types for loading scene descriptions from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! solar-system scene. A scene consists of:
//!
//! - [`ScaleConfig`] – global scale constants mapping raw magnitudes to render space
//! - [`BodyConfig`]  – astronomical constants for each orbiting body
//! - [`BeltConfig`]  – range, count and size scale for each particle belt
//! - [`SceneConfig`] – top-level wrapper used to load a scene from YAML
//!
//! # YAML format
//! An example scene YAML matching these types:
//!
//! ```yaml
//! scale:
//!   central_draw_radius: 5.0      # sun sphere radius in render units
//!   central_body_radius: 696340.0 # sun radius in km
//!   time_compression: 7.3         # reference period -> 7.3 s of wall clock
//!   reference_period: 365.0
//!   distance_compression: 5.0
//!   minimum_gap: 1.0
//!   radius_amplification: 50.0
//!   orbit_segments: 128
//!   belt_thickness: 10.0
//!   seed: 0                       # 0 -> random seed
//!
//! bodies:
//!   - name: earth
//!     color: 0x2e8b57
//!     orbital_period: 365.0       # days
//!     mean_distance: 150.0        # Gm
//!     physical_radius: 6371.0     # km
//!
//! belts:
//!   - name: asteroid
//!     min_distance: 300.0
//!     max_distance: 400.0
//!     count: 5000
//!     size_scale: 0.2
//! ```
//!
//! The scene assembler validates this configuration and maps it into the
//! runtime scene representation.

use serde::Deserialize;

/// Global scale constants for a scene.
/// All compressions are applied by the unit normalizer at build time.
#[derive(Deserialize, Debug, Clone)]
pub struct ScaleConfig {
    pub central_draw_radius: f64,  // central body sphere radius, render units
    pub central_body_radius: f64,  // central body physical radius, km
    pub time_compression: f64,     // wall-clock seconds per reference period
    pub reference_period: f64,     // reference orbital period, days
    pub distance_compression: f64, // raw distance units per render unit
    pub minimum_gap: f64,          // clearance outside the central body surface
    pub radius_amplification: f64, // visual boost for body radii
    pub orbit_segments: usize,     // tessellation of each orbit guide ring
    pub belt_thickness: f64,       // vertical spread of belt particles
    pub seed: Option<u64>,         // belt RNG seed; absent or 0 -> random
}

/// Configuration for a single orbiting body.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String,         // body name, for logs and error messages
    pub color: u32,           // 24-bit RGB
    pub orbital_period: f64,  // orbital period in days, must be > 0
    pub mean_distance: f64,   // mean distance from the central body in Gm, must be > 0
    pub physical_radius: f64, // physical radius in km, must be > 0
}

/// Configuration for a single particle belt.
/// Distances are in the same raw units as [`BodyConfig::mean_distance`].
#[derive(Deserialize, Debug)]
pub struct BeltConfig {
    pub name: String,      // belt name, for logs and error messages
    pub min_distance: f64, // inner edge, raw units
    pub max_distance: f64, // outer edge, raw units, must be >= min_distance
    pub count: usize,      // particles to scatter
    pub size_scale: f64,   // particle sizes sampled in [0, size_scale)
}

/// Top-level scene configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct SceneConfig {
    pub scale: ScaleConfig,      // global scale constants
    pub bodies: Vec<BodyConfig>, // body table defining the orbiting set
    pub belts: Vec<BeltConfig>,  // particle belts
}
