use clap::{ArgAction, Parser};
use log::info;
use maze::MIN_SIZE;

/// Largest accepted side length. Keeps `rows * cols` well inside `i32`.
pub const MAX_SIZE: i64 = 9999;

/// Generates a random maze and prints it to stdout.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_help_flag = true)]
pub struct Args {
    /// Maze width in cells. Raised to 5 if smaller, lowered by one if even.
    #[arg(short = 'w', long, value_parser = clap::value_parser!(u32).range(0..=MAX_SIZE))]
    pub width: u32,

    /// Maze height in cells. Raised to 5 if smaller, lowered by one if even.
    #[arg(short = 'h', long, value_parser = clap::value_parser!(u32).range(0..=MAX_SIZE))]
    pub height: u32,

    /// Seed for a reproducible maze. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print help
    // Only carries the action; clap exits before the value could be read.
    #[allow(dead_code)]
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    /// The grid size to build, after normalization.
    pub fn dimensions(&self) -> (i32, i32) {
        let width = normalize_dimension(self.width);
        let height = normalize_dimension(self.height);
        if width as u32 != self.width || height as u32 != self.height {
            info!("requested {}x{}, using {}x{}", self.width, self.height, width, height);
        }
        (width, height)
    }
}

/// Anything under 5 becomes 5 and even sizes drop by one, so chambers land on odd coordinates.
pub fn normalize_dimension(requested: u32) -> i32 {
    let size = requested as i32;
    if size < MIN_SIZE {
        MIN_SIZE
    } else if size % 2 == 0 {
        size - 1
    } else {
        size
    }
}
