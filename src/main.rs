use orrery::{SceneConfig, SolarScene};
use orrery::run_3d;
use orrery::{bench_belt, bench_orbit, bench_update};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Run the micro benchmarks instead of the viewer
    #[arg(short, long)]
    bench: bool,
}

// load here to keep main clean
fn load_scene_from_yaml(file_name: &str) -> Result<SceneConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenes").join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scene_cfg: SceneConfig = serde_yaml::from_reader(reader)?;

    Ok(scene_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_belt();
        bench_orbit();
        bench_update();
        return Ok(());
    }

    let scene_cfg = load_scene_from_yaml(&args.file_name)?;
    let scene = SolarScene::build_scene(scene_cfg)?;
    run_3d(scene);

    Ok(())
}
