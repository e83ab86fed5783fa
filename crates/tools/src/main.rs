use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{LevelFilter, Log, Metadata, Record};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use storey_core::{
    Building, BuildingGenerator, BuildingSpec, CleanupPlan, ExportManifest, ExportSettings,
    GenerationConfig, RoofType,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a seeded multi-floor building layout", long_about = None)]
struct Args {
    /// Footprint width along x, in meters
    #[arg(long, default_value_t = 20.0)]
    width: f64,
    /// Footprint depth along y, in meters
    #[arg(long, default_value_t = 16.0)]
    depth: f64,
    #[arg(short, long, default_value_t = 1)]
    floors: u32,
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// flat, gabled, shed or hip
    #[arg(long, default_value = "hip")]
    roof: RoofType,
    /// TOML file overriding the generation constants
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory that receives export_manifest.json and building.json
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Building name used for exported asset names
    #[arg(long, default_value = "Building")]
    name: String,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{} | {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn level_filter(verbose: u8, debug_env: bool) -> LevelFilter {
    match verbose {
        _ if debug_env => LevelFilter::Debug,
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) -> Result<()> {
    let debug_env = env::var("STOREY_DEBUG").is_ok_and(|value| value == "1");
    log::set_logger(&LOGGER).map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;
    log::set_max_level(level_filter(verbose, debug_env));
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<GenerationConfig> {
    match path {
        Some(path) => GenerationConfig::load(path)
            .with_context(|| format!("Failed to load config file: {}", path.display())),
        None => Ok(GenerationConfig::default()),
    }
}

fn write_outputs(out_dir: &Path, name: &str, building: &Building, config: &GenerationConfig) -> Result<()> {
    let manifest = ExportManifest::new(
        name,
        building,
        ExportSettings::default(),
        CleanupPlan::from_config(config),
    );
    let manifest_path = out_dir.join("export_manifest.json");
    manifest
        .write_atomic(&manifest_path)
        .with_context(|| format!("Failed to write manifest: {}", manifest_path.display()))?;

    let building_path = out_dir.join("building.json");
    let json = serde_json::to_string_pretty(building)
        .with_context(|| "Failed to serialize building JSON")?;
    fs::write(&building_path, json)
        .with_context(|| format!("Failed to write building file: {}", building_path.display()))?;

    println!("Wrote {} and {}", manifest_path.display(), building_path.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let config = load_config(args.config.as_deref())?;
    let spec = BuildingSpec {
        width: args.width,
        depth: args.depth,
        floors: args.floors,
        seed: args.seed,
        roof_type: args.roof,
    };

    let building = BuildingGenerator::new(config.clone())
        .generate(&spec)
        .with_context(|| format!("Failed to generate building for seed {}", spec.seed))?;

    for floor in &building.floors {
        println!(
            "Floor {}: {} rooms, {} doors, {} wall segments",
            floor.floor_index,
            floor.rooms.len(),
            floor.doors.len(),
            floor.walls.len()
        );
    }
    match &building.roof {
        Some(roof) => println!("Roof: {} ({} faces)", roof.roof_type, roof.faces.len()),
        None => println!("Roof: none"),
    }
    println!("Fingerprint: {:016x}", building.fingerprint());

    if let Some(out_dir) = &args.out_dir {
        write_outputs(out_dir, &args.name, &building, &config)?;
    }

    Ok(())
}
