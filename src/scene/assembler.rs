//! Build a fully-initialized scene from configuration
//!
//! Takes a `SceneConfig` (YAML-facing) and produces the runtime bundle
//! (`SolarScene`) containing:
//! - the resolved scale constants (`ScaleConstants`)
//! - one `RenderBody` per validated table entry
//! - one `OrbitPath` guide ring per body
//! - the generated particle `Belt`s
//!
//! The scene is inserted into Bevy as a `Resource` and consumed by the
//! orbital-update and visualization systems

use bevy::prelude::Resource;
use rand::random;
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::configuration::config::{BeltConfig, BodyConfig, SceneConfig};
use crate::scene::belt::{generate_belt, BeltParams};
use crate::scene::error::{SceneError, SceneResult};
use crate::scene::normalize::{normalize, normalize_distance};
use crate::scene::orbit::generate_orbit;
use crate::scene::scale::ScaleConstants;
use crate::scene::states::{Belt, BodySpec, NVec3, OrbitPath, RenderBody};

/// Bevy resource representing a fully-initialized solar-system scene
///
/// This is the main "runtime bundle" constructed from a [`SceneConfig`]: it
/// owns the scale constants, the animated bodies, their orbit guide rings,
/// and the static belts
///
/// In Bevy terms, this is inserted as a `Resource` and then read by the
/// systems responsible for spawning meshes and syncing transforms; the
/// orbital update step is its single mutator
#[derive(Debug, Resource)]
pub struct SolarScene {
    pub constants: ScaleConstants,
    pub bodies: Vec<RenderBody>,
    pub orbits: Vec<OrbitPath>,
    pub belts: Vec<Belt>,
}

/// Check one table entry. A non-positive magnitude rejects the whole table,
/// so downstream code never sees a spec it would divide by zero on.
fn validate_body(cfg: &BodyConfig) -> SceneResult<BodySpec> {
    let checks = [
        ("orbital_period", cfg.orbital_period),
        ("mean_distance", cfg.mean_distance),
        ("physical_radius", cfg.physical_radius),
    ];
    for (field, value) in checks {
        if value <= 0.0 {
            return Err(SceneError::InvalidSpec {
                name: cfg.name.clone(),
                field,
                value,
            });
        }
    }

    Ok(BodySpec {
        name: cfg.name.clone(),
        color: cfg.color,
        orbital_period: cfg.orbital_period,
        mean_distance: cfg.mean_distance,
        physical_radius: cfg.physical_radius,
    })
}

/// Check one belt range before any sampling happens.
/// `count` is unsigned, so only the span and the size scale can be bad.
fn validate_belt(cfg: &BeltConfig) -> SceneResult<()> {
    if cfg.min_distance > cfg.max_distance {
        return Err(SceneError::InvalidBeltConfig {
            name: cfg.name.clone(),
            reason: format!(
                "min_distance {} exceeds max_distance {}",
                cfg.min_distance, cfg.max_distance
            ),
        });
    }
    if cfg.size_scale < 0.0 {
        return Err(SceneError::InvalidBeltConfig {
            name: cfg.name.clone(),
            reason: format!("size_scale {} is negative", cfg.size_scale),
        });
    }
    Ok(())
}

impl SolarScene {
    pub fn build_scene(cfg: SceneConfig) -> SceneResult<Self> {
        // Constants (runtime) from ScaleConfig; a zero/absent seed is
        // replaced with entropy so unconfigured runs still vary
        let s_cfg = cfg.scale;
        let mut seed = s_cfg.seed.unwrap_or(0);
        if seed == 0 {
            seed = random();
        }
        let constants = ScaleConstants {
            central_draw_radius: s_cfg.central_draw_radius,
            central_body_radius: s_cfg.central_body_radius,
            time_compression: s_cfg.time_compression,
            reference_period: s_cfg.reference_period,
            distance_compression: s_cfg.distance_compression,
            minimum_gap: s_cfg.minimum_gap,
            radius_amplification: s_cfg.radius_amplification,
            orbit_segments: s_cfg.orbit_segments,
            belt_thickness: s_cfg.belt_thickness,
            seed,
        };

        // Validate the whole table and every belt before deriving anything
        let specs: Vec<BodySpec> = cfg
            .bodies
            .iter()
            .map(validate_body)
            .collect::<SceneResult<_>>()?;
        for belt_cfg in &cfg.belts {
            validate_belt(belt_cfg)?;
        }

        // Bodies: normalize each spec into render-space scalars and place it
        // on the +x axis at its draw distance; one guide ring per body
        let mut bodies = Vec::with_capacity(specs.len());
        let mut orbits = Vec::with_capacity(specs.len());
        for spec in specs {
            let n = normalize(&spec, &constants);
            log::info!(
                "{}: angular_speed {:.4} rad/s, draw_distance {:.2}, draw_radius {:.4}",
                spec.name,
                n.angular_speed,
                n.draw_distance,
                n.draw_radius
            );

            orbits.push(generate_orbit(n.draw_distance, constants.orbit_segments));
            bodies.push(RenderBody {
                spec,
                angular_speed: n.angular_speed,
                draw_distance: n.draw_distance,
                draw_radius: n.draw_radius,
                position: NVec3::new(n.draw_distance, 0.0, 0.0),
            });
        }

        // Belts: one seeded RNG shared across belts, so a fixed seed pins
        // the whole scene, not just the first belt
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(constants.seed);
        let belts: Vec<Belt> = cfg
            .belts
            .iter()
            .map(|bc| {
                // Belt bounds go through the same distance normalization as
                // the planets, so the spans sit on the same render scale
                let params = BeltParams {
                    min_distance: normalize_distance(bc.min_distance, &constants),
                    max_distance: normalize_distance(bc.max_distance, &constants),
                    count: bc.count,
                    size_scale: bc.size_scale,
                    thickness: constants.belt_thickness,
                };
                log::info!("belt {}: {} particles in [{:.1}, {:.1}]",
                    bc.name, params.count, params.min_distance, params.max_distance);

                Belt {
                    name: bc.name.clone(),
                    particles: generate_belt(&params, &mut rng),
                }
            })
            .collect();

        Ok(Self {
            constants,
            bodies,
            orbits,
            belts,
        })
    }
}
