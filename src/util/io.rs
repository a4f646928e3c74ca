use crate::EPOCH;
use crate::scene::Scene;
use anyhow::{Context, Result};
use clap::Parser;
use log::{Level, LevelFilter, log};
use serde::Serialize;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Parser)]
pub struct MainCli {
    /// Path to a scene file (mutually exclusive with -r)
    #[arg(short = 'i', long, conflicts_with = "random", help = "Path to the input scene JSON file")]
    pub input: Option<String>,

    /// Number of shapes of a generated scene (mutually exclusive with -i)
    #[arg(short = 'r', long, help = "Generate a random scene with this many shapes")]
    pub random: Option<usize>,

    #[arg(short = 's', long, help = "Fixed seed for the random number generator")]
    pub rng_seed: Option<u64>,

    #[arg(short = 'o', long, default_value = "output", help = "Directory to write the report, svg and log to")]
    pub output: String,
}

pub fn init_logger(level_filter: LevelFilter, log_file_path: &Path) -> Result<()> {
    //remove old log file
    let _ = fs::remove_file(log_file_path);
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{:<25}{}", prefix, message))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .chain(fern::log_file(log_file_path)?)
        .apply()?;
    log!(
        Level::Info,
        "[EPOCH]: {}",
        jiff::Timestamp::now().to_string()
    );
    Ok(())
}

pub fn write_json(json: &impl Serialize, path: &Path, log_lvl: Level) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create json file: {}", path.display()))?;
    serde_json::to_writer_pretty(file, json)?;
    log!(
        log_lvl,
        "[IO] json exported to file://{}",
        fs::canonicalize(path)
            .context("could not canonicalize path")?
            .display()
    );
    Ok(())
}

pub fn read_scene_json(path: &Path) -> Result<Scene> {
    let file = File::open(path)
        .with_context(|| format!("could not open scene file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let scene = serde_json::from_reader(reader)
        .with_context(|| format!("not a valid scene file: {}", path.display()))?;
    Ok(scene)
}
