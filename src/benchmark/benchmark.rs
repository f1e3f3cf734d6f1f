use std::time::Instant;

use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::scene::belt::{generate_belt, BeltParams};
use crate::scene::motion::update_positions;
use crate::scene::orbit::generate_orbit;
use crate::scene::states::{BodySpec, NVec3, RenderBody};

/// Build a deterministic set of render bodies for timing runs
fn synthetic_bodies(n: usize) -> Vec<RenderBody> {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic speeds and radii, no rand needed
        let draw_distance = 10.0 + i_f;

        bodies.push(RenderBody {
            spec: BodySpec {
                name: format!("body-{i}"),
                color: 0xffffff,
                orbital_period: 1.0 + i_f,
                mean_distance: 1.0 + i_f,
                physical_radius: 1.0,
            },
            angular_speed: 0.1 + (i_f * 0.37).sin().abs(),
            draw_distance,
            draw_radius: 1.0,
            position: NVec3::new(draw_distance, 0.0, 0.0),
        });
    }

    bodies
}

pub fn bench_belt() {
    // Different particle counts to test
    let ns = [1_000, 5_000, 25_000, 100_000, 400_000];

    for n in ns {
        let params = BeltParams {
            min_distance: 66.0,
            max_distance: 86.0,
            count: n,
            size_scale: 0.2,
            thickness: 10.0,
        };

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        // Warm up
        let _ = generate_belt(&params, &mut rng);

        let t0 = Instant::now();
        let particles = generate_belt(&params, &mut rng);
        let dt = t0.elapsed().as_secs_f64();

        println!("belt   N = {n:7}, {dt:8.6} s, {} particles", particles.len());
    }
}

pub fn bench_orbit() {
    // Different tessellations to test
    let segments = [128, 512, 2_048, 8_192, 32_768];
    let orbits_per_run = 1_000;

    for s in segments {
        // Warm up
        let _ = generate_orbit(36.0, s);

        let t0 = Instant::now();
        for i in 0..orbits_per_run {
            let _ = generate_orbit(10.0 + i as f64, s);
        }
        let dt = t0.elapsed().as_secs_f64();

        println!(
            "orbit  segments = {s:6}, {orbits_per_run} orbits, total = {dt:8.6} s"
        );
    }
}

pub fn bench_update() {
    // Different body counts to test
    let ns = [8, 64, 512, 4_096];
    let steps = 10_000;

    for n in ns {
        let mut bodies = synthetic_bodies(n);

        // Warm up
        update_positions(&mut bodies, 0.0);

        let t0 = Instant::now();
        for step in 0..steps {
            // advance a synthetic 60 fps clock
            update_positions(&mut bodies, step as f64 * 0.016);
        }
        let dt = t0.elapsed().as_secs_f64();

        println!(
            "update N = {n:5}, {steps} steps, total = {dt:8.6} s, per step = {:.9} s",
            dt / steps as f64
        );
    }
}
