use bevy::prelude::*;
use bevy::math::primitives::Sphere;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;

use crate::scene::assembler::SolarScene;
use crate::scene::motion::update_positions;
use crate::scene::states::OrbitPath;

/// Component tagging each planet sphere with its body index into SolarScene::bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Camera placement, chosen so the inner system and the asteroid belt fill
/// the frame; the outer belt stays visible against the far plane
const CAMERA_HEIGHT: f32 = 350.0;
const CAMERA_DISTANCE: f32 = 1600.0;

/// Frustum constants
const CAMERA_FOV_DEG: f32 = 75.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 5000.0;

/// Orbit guide rings are white at 10% opacity
const ORBIT_ALPHA: f32 = 0.1;

/// Belt particles are grey (0x888888) at 60% opacity
const BELT_ALPHA: f32 = 0.6;

/// Floor for planet sphere radii so the smallest bodies stay visible
const MIN_BODY_RADIUS: f32 = 0.05;

/// Convenience entrypoint: hand the assembled scene to Bevy and run
pub fn run_3d(scene: SolarScene) {
    println!(
        "run_3d: starting Bevy 3D viewer with {} bodies, {} belts",
        scene.bodies.len(),
        scene.belts.len()
    );

    App::new()
        .insert_resource(scene)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_3d)
        .add_systems(Update, (orbital_step, sync_transforms_3d))
        .run();
}

/// Startup system: spawn camera, lights, the sun, one sphere per body,
/// the orbit guide rings and the belt particles
fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scene: Res<SolarScene>,
) {
    // 3D camera above the orbital plane, looking at the sun
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)), // pure black
            ..Default::default()
        },
        projection: PerspectiveProjection {
            fov: CAMERA_FOV_DEG.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..Default::default()
        }
        .into(),
        transform: Transform::from_xyz(250.0, CAMERA_HEIGHT, CAMERA_DISTANCE)
            .looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    // Flat white ambient plus a point light sitting in the sun
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
    });
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: CAMERA_FAR,
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    // The sun itself: white sphere at the origin
    commands.spawn(PbrBundle {
        mesh: meshes.add(Sphere::new(scene.constants.central_draw_radius as f32).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 1.0, 1.0), // white
            unlit: true,
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    // Spawn one sphere per body
    for (i, b) in scene.bodies.iter().enumerate() {
        // Ensure a minimum visual radius so tiny bodies are still visible
        let radius_screen = (b.draw_radius as f32).max(MIN_BODY_RADIUS);
        let (r, g, bl) = b.spec.color_rgb();

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(radius_screen).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: Color::srgb(r, g, bl),
                    unlit: true,
                    ..Default::default()
                }),
                transform: Transform::from_xyz(
                    b.position.x as f32,
                    b.position.y as f32,
                    b.position.z as f32,
                ),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }

    // Orbit guide rings: one translucent line loop per body, shared material
    let orbit_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, ORBIT_ALPHA),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..Default::default()
    });
    for path in scene.orbits.iter() {
        commands.spawn(PbrBundle {
            mesh: meshes.add(orbit_mesh(path)),
            material: orbit_material.clone(),
            ..Default::default()
        });
    }

    // Belt particles: one shared unit sphere, scaled per particle, with a
    // shared translucent material per belt
    let particle_mesh = meshes.add(Sphere::new(1.0).mesh());
    for belt in scene.belts.iter() {
        let belt_material = materials.add(StandardMaterial {
            base_color: Color::srgba(0.533, 0.533, 0.533, BELT_ALPHA), // 0x888888
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..Default::default()
        });

        for p in belt.particles.iter() {
            commands.spawn(PbrBundle {
                mesh: particle_mesh.clone(),
                material: belt_material.clone(),
                transform: Transform::from_xyz(
                    p.position.x as f32,
                    p.position.y as f32,
                    p.position.z as f32,
                )
                .with_scale(Vec3::splat(p.size as f32)),
                ..Default::default()
            });
        }
    }
}

/// Closed orbit polyline as a line-strip mesh in render-space coordinates
fn orbit_mesh(path: &OrbitPath) -> Mesh {
    let points: Vec<[f32; 3]> = path
        .points
        .iter()
        .map(|p| [p.x as f32, p.y as f32, p.z as f32])
        .collect();

    Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, points)
}

/// Per-frame orbital update, driven by Bevy's elapsed wall-clock time
fn orbital_step(mut scene: ResMut<SolarScene>, time: Res<Time>) {
    update_positions(&mut scene.bodies, time.elapsed_seconds_f64());
}

/// Copy updated body positions into the sphere transforms
fn sync_transforms_3d(
    scene: Res<SolarScene>,
    mut query: Query<(&BodyIndex, &mut Transform)>,
) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scene.bodies.get(*i) {
            transform.translation = Vec3::new(
                b.position.x as f32,
                b.position.y as f32,
                b.position.z as f32,
            );
        }
    }
}
