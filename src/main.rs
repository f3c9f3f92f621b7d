use std::io;

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::args::Args;

mod args;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the maze.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let (width, height) = args.dimensions();

    let mut rng = match args.seed {
        Some(seed) => {
            info!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let maze = maze::generate(width, height, &mut rng);
    debug!("entry {:?}, exit {:?}", maze.entry.pos, maze.exit.pos);

    maze::render(&maze.grid, io::stdout().lock()).context("failed to write maze to stdout")?;

    Ok(())
}
