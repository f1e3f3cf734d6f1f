pub mod scene;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use scene::states::{Belt, BeltParticle, BodySpec, NVec3, OrbitPath, RenderBody};
pub use scene::scale::ScaleConstants;
pub use scene::error::{SceneError, SceneResult};
pub use scene::normalize::{normalize, normalize_distance, Normalized};
pub use scene::orbit::generate_orbit;
pub use scene::belt::{generate_belt, BeltParams};
pub use scene::motion::update_positions;
pub use scene::assembler::SolarScene;

pub use configuration::config::{BeltConfig, BodyConfig, ScaleConfig, SceneConfig};

pub use visualization::orrery_vis3d::run_3d;

pub use benchmark::benchmark::{bench_belt, bench_orbit, bench_update};
