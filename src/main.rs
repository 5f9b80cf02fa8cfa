use clap::Parser;
use dotenv::dotenv;
use env_logger::{Builder, Env};
use kihonzu_grid::{
    BlockLabel, KihonzuError, Level, RunConfig, TileGrid, Zone, block_labels, jgd2011_to_zone,
    load_boundary, write_grid,
};
use log::{error, info};
use pbr::ProgressBar;
use std::fs;
use std::io::{Stdout, Write};
use std::path::PathBuf;
use std::process;
use std::sync::{Arc, Mutex};

/// Generate the national base map sheet grid (国土基本図の図郭) of one plane
/// rectangular coordinate zone, restricted to sheets that touch land.
#[derive(Parser, Debug)]
#[command(name = "kihonzu-grid", version)]
struct Args {
    /// Plane rectangular coordinate system zone (1-19)
    zone: u8,
    /// Map information level: 5000, 2500, 1250, 1000, 500 or 250
    level: Level,
    /// Directory to write the grid into, created if missing
    save_dir: PathBuf,
}

fn init_logger() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {} {}",
            buf.timestamp_millis(),
            record.level(),
            record.args()
        )
    });
    builder.init();
}

fn progress_bar(blocks: u64) -> ProgressBar<Stdout> {
    let mut pb = ProgressBar::new(blocks);
    pb.message("Blocks ");
    pb.show_speed = false;
    pb.show_time_left = false;
    pb
}

fn run(args: Args) -> Result<(), KihonzuError> {
    let config = RunConfig::from_env()?;
    let zone = Zone::new(args.zone)?;

    fs::create_dir_all(&args.save_dir)
        .map_err(|e| KihonzuError::IoError(format!("{}: {}", args.save_dir.display(), e)))?;

    let boundary = load_boundary(&config.boundary_path, zone)?;
    let boundary = jgd2011_to_zone(&boundary, zone)?;
    info!("Projected land boundary into EPSG:{}", zone.epsg());

    let mut builder = TileGrid::builder()
        .zone(zone.number())
        .level(args.level)
        .parallel(config.parallel);

    let progress = if config.progress {
        let blocks = block_labels(zone)?.len() as u64;
        let pb = Arc::new(Mutex::new(progress_bar(blocks)));
        let observed = Arc::clone(&pb);
        builder = builder.observer(move |_label: BlockLabel| {
            if let Ok(mut pb) = observed.lock() {
                pb.inc();
            }
        });
        Some(pb)
    } else {
        None
    };

    let grid = builder.build()?;
    if let Some(pb) = progress {
        if let Ok(mut pb) = pb.lock() {
            pb.finish();
        }
    }

    let land = grid.intersecting(&boundary);
    let path = write_grid(&land, &args.save_dir, config.format)?;
    info!(
        "Zone {} level {}: {} sheets written to '{}'",
        zone,
        args.level,
        land.len(),
        path.display()
    );
    Ok(())
}

fn main() {
    dotenv().ok();
    init_logger();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{}", e);
        process::exit(1);
    }
}
