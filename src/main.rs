use anyhow::{Result, bail};
use clap::Parser as Clap;
use crackitos::Timer;
use crackitos::config::*;
use crackitos::consts::{LOG_LEVEL_FILTER_DEBUG, LOG_LEVEL_FILTER_RELEASE};
use crackitos::scene::Scene;
use crackitos::shape::{Bounded, ShapeType};
use crackitos::util::io;
use crackitos::util::io::MainCli;
use crackitos::util::svg_exporter::{scene_to_svg, write_svg};
use itertools::Itertools;
use log::{Level, debug, info, warn};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fs;
use std::path::Path;

fn main() -> Result<()> {
    let mut config = DEFAULT_CRACKITOS_CONFIG;
    let args = MainCli::parse();

    let output_dir = args.output.as_str();
    fs::create_dir_all(output_dir)?;
    let log_file_path = format!("{}/log.txt", output_dir);
    match cfg!(debug_assertions) {
        true => io::init_logger(LOG_LEVEL_FILTER_DEBUG, Path::new(&log_file_path))?,
        false => io::init_logger(LOG_LEVEL_FILTER_RELEASE, Path::new(&log_file_path))?,
    }

    if let Some(arg_rng_seed) = args.rng_seed {
        config.rng_seed = Some(arg_rng_seed);
    }
    if let Some(n_shapes) = args.random {
        config.scene_gen.n_shapes = n_shapes;
    }

    let scene = match (&args.input, args.random) {
        (Some(input), None) => io::read_scene_json(Path::new(input))?,
        (None, _) => {
            let seed = match config.rng_seed {
                Some(seed) => {
                    info!("[MAIN] using seed: {}", seed);
                    seed
                }
                None => {
                    let seed = rand::random();
                    warn!("[MAIN] no seed provided, using: {}", seed);
                    seed
                }
            };
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            Scene::random(&mut rng, &config.scene_gen)
        }
        _ => bail!("invalid cli pattern (clap should have caught this)"),
    };

    let type_counts = scene.shapes.iter().counts_by(|s| s.shape_type());
    info!(
        "[MAIN] loaded scene {} with #{} shapes ({} boxes, {} circles, {} polygons)",
        scene.name,
        scene.shapes.len(),
        type_counts.get(&ShapeType::Aabb).unwrap_or(&0),
        type_counts.get(&ShapeType::Circle).unwrap_or(&0),
        type_counts.get(&ShapeType::Polygon).unwrap_or(&0),
    );

    let mut timer = Timer::with_fixed_delta_time(config.fixed_delta_time);
    let report = scene.report();
    timer.tick();

    let n_fixed_steps = std::iter::from_fn(|| timer.fixed_delta_time_step().then_some(())).count();
    info!(
        "[MAIN] found {} overlapping pairs among {} candidates in {:.3}ms ({} fixed steps of {:.0}ms)",
        report.overlapping_pairs.len(),
        scene.shapes.len() * scene.shapes.len().saturating_sub(1) / 2,
        timer.delta_time() * 1000.0,
        n_fixed_steps,
        timer.fixed_delta_time() * 1000.0
    );
    for &(i, j) in &report.overlapping_pairs {
        debug!(
            "[MAIN] #{} {:?} overlaps #{} {:?}",
            i,
            scene.shapes[i].shape_type(),
            j,
            scene.shapes[j].shape_type()
        );
    }

    let svg = scene_to_svg(&scene, &report.overlapping_pairs, config.draw);
    write_svg(
        &svg,
        Path::new(&format!("{output_dir}/{}.svg", scene.name)),
        Level::Info,
    )?;

    let json_path = format!("{output_dir}/report_{}.json", scene.name);
    io::write_json(&report, Path::new(&json_path), Level::Info)?;

    Ok(())
}
