use std::io::{self, Write};

use crate::grid::Grid;

/// Drawn for a filled cell. Two columns wide so cells come out roughly square.
pub const WALL: &str = "██";
/// Drawn for an open cell.
pub const SPACE: &str = "  ";

/// Writes one line per grid row, walls as solid blocks.
pub fn render(grid: &Grid, mut out: impl Write) -> io::Result<()> {
    write!(out, "{}", grid)?;
    out.flush()
}
