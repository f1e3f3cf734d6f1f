use orrery::scene::states::{BodySpec, NVec3, RenderBody};
use orrery::scene::scale::ScaleConstants;
use orrery::scene::normalize::{normalize, normalize_distance};
use orrery::scene::orbit::generate_orbit;
use orrery::scene::belt::{generate_belt, BeltParams};
use orrery::scene::motion::update_positions;
use orrery::scene::assembler::SolarScene;
use orrery::scene::error::SceneError;
use orrery::configuration::config::{BeltConfig, BodyConfig, ScaleConfig, SceneConfig};

use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use std::f64::consts::TAU;

/// Reference scale constants matching the shipped solar_system.yaml
pub fn test_constants() -> ScaleConstants {
    ScaleConstants {
        central_draw_radius: 5.0,
        central_body_radius: 696340.0,
        time_compression: 7.3,
        reference_period: 365.0,
        distance_compression: 5.0,
        minimum_gap: 1.0,
        radius_amplification: 50.0,
        orbit_segments: 128,
        belt_thickness: 10.0,
        seed: 42,
    }
}

/// Body spec with the given magnitudes and a white color
pub fn body(name: &str, period: f64, distance: f64, radius: f64) -> BodySpec {
    BodySpec {
        name: name.into(),
        color: 0xffffff,
        orbital_period: period,
        mean_distance: distance,
        physical_radius: radius,
    }
}

/// RenderBody derived from a spec via the normalizer, placed at t = 0
pub fn render_body(spec: BodySpec, k: &ScaleConstants) -> RenderBody {
    let n = normalize(&spec, k);
    RenderBody {
        spec,
        angular_speed: n.angular_speed,
        draw_distance: n.draw_distance,
        draw_radius: n.draw_radius,
        position: NVec3::new(n.draw_distance, 0.0, 0.0),
    }
}

/// Scale config mirroring `test_constants`, YAML-facing form
pub fn test_scale_config() -> ScaleConfig {
    ScaleConfig {
        central_draw_radius: 5.0,
        central_body_radius: 696340.0,
        time_compression: 7.3,
        reference_period: 365.0,
        distance_compression: 5.0,
        minimum_gap: 1.0,
        radius_amplification: 50.0,
        orbit_segments: 128,
        belt_thickness: 10.0,
        seed: Some(42),
    }
}

fn planet(name: &str, color: u32, period: f64, distance: f64, radius: f64) -> BodyConfig {
    BodyConfig {
        name: name.into(),
        color,
        orbital_period: period,
        mean_distance: distance,
        physical_radius: radius,
    }
}

/// Full 8-planet table from the default scene, with small belts so the
/// scene tests stay fast
pub fn solar_scene_config() -> SceneConfig {
    SceneConfig {
        scale: test_scale_config(),
        bodies: vec![
            planet("mercury", 0xb2b2b2, 88.0, 58.0, 2439.7),
            planet("venus", 0xe1c16e, 224.0, 108.0, 6051.8),
            planet("earth", 0x2e8b57, 365.0, 150.0, 6371.0),
            planet("mars", 0xb7410e, 687.0, 228.0, 3389.5),
            planet("jupiter", 0xd9a066, 4333.0, 778.0, 69911.0),
            planet("saturn", 0xf4c542, 10759.0, 1433.0, 58232.0),
            planet("uranus", 0x70a4ff, 30687.0, 2870.0, 25362.0),
            planet("neptune", 0x2b65ec, 60190.0, 4500.0, 24622.0),
        ],
        belts: vec![
            BeltConfig {
                name: "asteroid".into(),
                min_distance: 300.0,
                max_distance: 400.0,
                count: 200,
                size_scale: 0.2,
            },
            BeltConfig {
                name: "kuiper".into(),
                min_distance: 4800.0,
                max_distance: 7000.0,
                count: 200,
                size_scale: 0.5,
            },
        ],
    }
}

// ==================================================================================
// Normalizer tests
// ==================================================================================

#[test]
fn normalize_keeps_bodies_outside_central_body() {
    let k = test_constants();

    // Smallest real distance in the table and an absurdly close one
    for spec in [body("mercury", 88.0, 58.0, 2439.7), body("close", 1.0, 0.001, 1.0)] {
        let n = normalize(&spec, &k);
        assert!(
            n.draw_distance > k.central_draw_radius,
            "{} rendered inside the sun: {}",
            spec.name,
            n.draw_distance
        );
        assert!(n.draw_radius > 0.0);
        assert!(n.angular_speed > 0.0);
    }
}

#[test]
fn normalize_distance_is_monotonic() {
    let k = test_constants();

    let near = normalize(&body("near", 365.0, 100.0, 6371.0), &k);
    let far = normalize(&body("far", 365.0, 200.0, 6371.0), &k);

    assert!(
        near.draw_distance < far.draw_distance,
        "closer body drawn farther out: {} vs {}",
        near.draw_distance,
        far.draw_distance
    );
}

#[test]
fn normalize_earth_reference_values() {
    let k = test_constants();
    let n = normalize(&body("earth", 365.0, 150.0, 6371.0), &k);

    // 150 / 5 + 1 + 5
    assert!((n.draw_distance - 36.0).abs() < 1e-12, "got {}", n.draw_distance);
    // 6371 / 696340 * 50
    assert!((n.draw_radius - 0.4574633).abs() < 1e-6, "got {}", n.draw_radius);
    // one revolution in 7.3 seconds
    assert!((n.angular_speed - TAU / 7.3).abs() < 1e-12, "got {}", n.angular_speed);
    assert!((n.angular_speed - 0.8607103).abs() < 1e-6);
}

#[test]
fn normalize_distance_maps_belt_bounds() {
    let k = test_constants();

    assert!((normalize_distance(300.0, &k) - 66.0).abs() < 1e-12);
    assert!((normalize_distance(400.0, &k) - 86.0).abs() < 1e-12);
}

// ==================================================================================
// Orbit path tests
// ==================================================================================

#[test]
fn orbit_has_fixed_point_count_and_radius() {
    let path = generate_orbit(31.0, 128);

    assert_eq!(path.points.len(), 129);
    for p in &path.points {
        assert!((p.norm() - 31.0).abs() < 1e-9, "point off circle: {:?}", p);
        assert_eq!(p.y, 0.0);
    }
}

#[test]
fn orbit_closes_on_itself() {
    let path = generate_orbit(36.0, 128);

    let first = path.points.first().unwrap();
    let last = path.points.last().unwrap();
    assert!((first - last).norm() < 1e-9, "orbit seam: {:?} vs {:?}", first, last);
}

#[test]
fn orbit_zero_radius_degenerates_to_origin() {
    let path = generate_orbit(0.0, 16);

    assert_eq!(path.points.len(), 17);
    for p in &path.points {
        assert!(p.norm() < 1e-12);
    }
}

// ==================================================================================
// Belt tests
// ==================================================================================

fn test_belt_params(count: usize) -> BeltParams {
    BeltParams {
        min_distance: 66.0,
        max_distance: 86.0,
        count,
        size_scale: 0.2,
        thickness: 10.0,
    }
}

#[test]
fn belt_has_exact_count() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
    let particles = generate_belt(&test_belt_params(2000), &mut rng);

    assert_eq!(particles.len(), 2000);
}

#[test]
fn belt_particles_stay_in_bounds() {
    let params = test_belt_params(2000);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);

    for p in generate_belt(&params, &mut rng) {
        let planar = (p.position.x * p.position.x + p.position.z * p.position.z).sqrt();
        assert!(
            planar >= params.min_distance - 1e-9 && planar <= params.max_distance + 1e-9,
            "particle outside belt span: {}",
            planar
        );
        assert!(p.size < params.size_scale, "particle too large: {}", p.size);
        assert!(p.size >= 0.0);
        assert!(
            p.position.y.abs() <= params.thickness / 2.0,
            "particle outside belt thickness: {}",
            p.position.y
        );
    }
}

#[test]
fn belt_is_reproducible_for_a_seed() {
    let params = test_belt_params(500);

    let mut rng_a = Xoshiro256PlusPlus::seed_from_u64(7);
    let mut rng_b = Xoshiro256PlusPlus::seed_from_u64(7);
    let a = generate_belt(&params, &mut rng_a);
    let b = generate_belt(&params, &mut rng_b);

    for (pa, pb) in a.iter().zip(b.iter()) {
        assert_eq!(pa.position, pb.position);
        assert_eq!(pa.size, pb.size);
    }
}

#[test]
fn belt_zero_count_is_empty() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
    assert!(generate_belt(&test_belt_params(0), &mut rng).is_empty());
}

// ==================================================================================
// Orbital update tests
// ==================================================================================

#[test]
fn update_starts_on_positive_x_axis() {
    let k = test_constants();
    let mut bodies = vec![render_body(body("earth", 365.0, 150.0, 6371.0), &k)];

    update_positions(&mut bodies, 0.0);

    let b = &bodies[0];
    assert!((b.position.x - b.draw_distance).abs() < 1e-12);
    assert!(b.position.z.abs() < 1e-12);
}

#[test]
fn update_keeps_bodies_on_their_circles() {
    let k = test_constants();
    let mut bodies = vec![
        render_body(body("mercury", 88.0, 58.0, 2439.7), &k),
        render_body(body("neptune", 60190.0, 4500.0, 24622.0), &k),
    ];

    for t in [0.0, 0.5, 1.7, 123.456, 10_000.0] {
        update_positions(&mut bodies, t);
        for b in &bodies {
            let r2 = b.position.x * b.position.x + b.position.z * b.position.z;
            assert!(
                (r2 - b.draw_distance * b.draw_distance).abs() < 1e-6,
                "{} off its circle at t = {}",
                b.spec.name,
                t
            );
        }
    }
}

#[test]
fn update_is_periodic() {
    let k = test_constants();
    let mut bodies = vec![render_body(body("earth", 365.0, 150.0, 6371.0), &k)];
    let period = TAU / bodies[0].angular_speed;

    update_positions(&mut bodies, 1.234);
    let before = bodies[0].position;

    update_positions(&mut bodies, 1.234 + period);
    let after = bodies[0].position;

    assert!((before.x - after.x).abs() < 1e-9, "{} vs {}", before.x, after.x);
    assert!((before.z - after.z).abs() < 1e-9, "{} vs {}", before.z, after.z);
}

#[test]
fn update_is_idempotent_for_fixed_time() {
    let k = test_constants();
    let mut bodies = vec![render_body(body("mars", 687.0, 228.0, 3389.5), &k)];

    update_positions(&mut bodies, 42.0);
    let first = bodies[0].position;
    update_positions(&mut bodies, 42.0);

    assert_eq!(first, bodies[0].position);
}

#[test]
fn update_leaves_y_untouched() {
    let k = test_constants();
    let mut bodies = vec![render_body(body("earth", 365.0, 150.0, 6371.0), &k)];
    bodies[0].position.y = 3.0;

    update_positions(&mut bodies, 55.5);

    assert_eq!(bodies[0].position.y, 3.0);
}

// ==================================================================================
// Scene assembly tests
// ==================================================================================

#[test]
fn scene_builds_full_table() {
    let scene = SolarScene::build_scene(solar_scene_config()).expect("valid scene rejected");

    assert_eq!(scene.bodies.len(), 8);
    assert_eq!(scene.orbits.len(), 8);
    assert_eq!(scene.bodies[2].spec.name, "earth");

    for (b, path) in scene.bodies.iter().zip(scene.orbits.iter()) {
        assert!(b.draw_distance > scene.constants.central_draw_radius);
        assert_eq!(path.points.len(), scene.constants.orbit_segments + 1);
        // Guide ring sits on the body's orbit
        assert!((path.points[0].norm() - b.draw_distance).abs() < 1e-9);
    }

    assert_eq!(scene.belts.len(), 2);
    assert_eq!(scene.belts[0].particles.len(), 200);
    assert_eq!(scene.belts[1].particles.len(), 200);
}

#[test]
fn scene_is_reproducible_for_a_seed() {
    let a = SolarScene::build_scene(solar_scene_config()).unwrap();
    let b = SolarScene::build_scene(solar_scene_config()).unwrap();

    for (pa, pb) in a.belts[1].particles.iter().zip(b.belts[1].particles.iter()) {
        assert_eq!(pa.position, pb.position);
        assert_eq!(pa.size, pb.size);
    }
}

#[test]
fn scene_rejects_zero_orbital_period() {
    let mut cfg = solar_scene_config();
    cfg.bodies[0].orbital_period = 0.0;

    let err = SolarScene::build_scene(cfg).unwrap_err();
    assert!(
        matches!(err, SceneError::InvalidSpec { ref field, .. } if *field == "orbital_period"),
        "wrong error: {err}"
    );
}

#[test]
fn scene_rejects_negative_distance() {
    let mut cfg = solar_scene_config();
    cfg.bodies[4].mean_distance = -778.0;

    let err = SolarScene::build_scene(cfg).unwrap_err();
    assert!(matches!(err, SceneError::InvalidSpec { .. }), "wrong error: {err}");
}

#[test]
fn scene_rejects_inverted_belt_span() {
    let mut cfg = solar_scene_config();
    cfg.belts[0].min_distance = 500.0;

    let err = SolarScene::build_scene(cfg).unwrap_err();
    assert!(
        matches!(err, SceneError::InvalidBeltConfig { ref name, .. } if name == "asteroid"),
        "wrong error: {err}"
    );
}

#[test]
fn scene_rejects_negative_belt_size_scale() {
    let mut cfg = solar_scene_config();
    cfg.belts[1].size_scale = -0.5;

    let err = SolarScene::build_scene(cfg).unwrap_err();
    assert!(matches!(err, SceneError::InvalidBeltConfig { .. }), "wrong error: {err}");
}
