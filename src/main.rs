mod assets;
mod config;
mod obj;
mod player;
mod runtime;
mod script;

use std::error::Error;
use std::path::{Path, PathBuf};

use bitmaze_level::Level;
use clap::{Parser, Subcommand};

use config::{AppConfig, DEFAULT_CONFIG_FILE};
use player::Walker;
use runtime::Session;
use script::Script;

#[derive(Parser)]
#[command(name = "bitmaze")]
#[command(about = "Builds 3D levels from pixel maps and walks them")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a level and report its geometry
    Inspect {
        /// Map image (PNG)
        map: PathBuf,
        /// Write the level and door panels as Wavefront OBJ
        #[arg(long)]
        obj: Option<PathBuf>,
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
    /// Run a scripted walk through a level
    Simulate {
        /// Map image (PNG)
        map: PathBuf,
        /// TOML script of input steps
        script: PathBuf,
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let filter = match cli.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .init();

    let result = match cli.command {
        Commands::Inspect { map, obj, config } => inspect(&map, obj.as_deref(), &config),
        Commands::Simulate {
            map,
            script,
            config,
        } => simulate(&map, &script, &config),
    };
    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_level(map: &Path, cfg: &AppConfig) -> Result<Level, Box<dyn Error>> {
    let path = assets::resolve_map_path(map);
    let grid = assets::load_map(&path)?;
    let level = Level::new(grid, &cfg.level)?;
    Ok(level)
}

fn inspect(map: &Path, obj: Option<&Path>, config: &Path) -> Result<(), Box<dyn Error>> {
    let cfg = AppConfig::load_or_default(config)?;
    let level = load_level(map, &cfg)?;
    let grid = level.grid();
    log::info!(
        "{}x{} level: {} quads, {} vertices, {} segments, {} solid cells, {} doors",
        grid.width,
        grid.height,
        level.mesh().quad_count(),
        level.mesh().vertices.len(),
        level.segments().len(),
        level.solids().len(),
        level.doors().len()
    );
    for door in level.doors() {
        let site = door.site();
        log::info!(
            "door at ({}, {}) {:?}, yaw {}",
            site.x,
            site.z,
            site.axis,
            door.yaw()
        );
    }
    if let Some(out) = obj {
        obj::export_level(&level, out)?;
    }
    Ok(())
}

fn simulate(map: &Path, script: &Path, config: &Path) -> Result<(), Box<dyn Error>> {
    let cfg = AppConfig::load_or_default(config)?;
    let level = load_level(map, &cfg)?;
    let spawn = Walker::spawn_point(&level, &cfg.walker).ok_or("map has no open cell to spawn in")?;
    let script = Script::load_from_path(script)?;
    log::info!(
        "spawning at ({:.2}, {:.2}); running {} ticks",
        spawn.x,
        spawn.z,
        script.total_ticks()
    );

    let mut session = Session::new(level, Walker::new(spawn, &cfg.walker));
    let frames = script.run(&mut session);

    let blocked = frames.iter().filter(|f| !f.factors.x_free() || !f.factors.z_free()).count();
    let pos = session.walker.pos;
    log::info!(
        "finished at ({:.3}, {:.3}) after {} ticks, {} blocked",
        pos.x,
        pos.z,
        session.tick(),
        blocked
    );
    for door in session.level.doors() {
        let site = door.site();
        log::info!("door ({}, {}): {:?}", site.x, site.z, door.state());
    }
    match frames.last().and_then(|f| f.probe) {
        Some(hit) => log::info!("facing a surface at ({:.3}, {:.3})", hit.x, hit.y),
        None => log::info!("nothing within probe range"),
    }
    Ok(())
}
