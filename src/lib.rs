pub mod cli;
pub mod grades;
pub mod pyramid;
pub mod report;
pub mod ticks;

use std::{env, path::Path, sync::OnceLock};

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, debug, info};

use crate::{cli::Cli, grades::GradeLadder, pyramid::SendCriteria};

/// Tick export consumed on every run, resolved against the working directory.
pub const TICKS_FILE: &str = "ticks.csv";

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("climbing_pyramid", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    info!(
        "Building '{}' pyramid from '{TICKS_FILE}'",
        cli.route_type
    );

    let ascents = ticks::read_ticks(Path::new(TICKS_FILE))
        .with_context(|| format!("Reading tick log {TICKS_FILE:?}"))?;
    debug!("Loaded {} tick(s)", ascents.len());

    let ladder = GradeLadder::default();
    let criteria = SendCriteria::for_route_type(&cli.route_type);
    let pyramid = pyramid::build_pyramid(&ascents, &criteria, &ladder);
    let sorted = pyramid::sort_by_grade(pyramid, &ladder);
    info!("Pyramid spans {} grade(s)", sorted.len());

    report::print_pyramid(&mut std::io::stdout().lock(), &sorted)
        .context("Writing pyramid report")?;
    Ok(())
}
