use log::debug;
use rand::Rng;

use crate::grid::{Grid, Pos};

/// Which pair of opposite borders an endpoint sits on.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Axis {
    /// Top or bottom row. The column is free.
    Horizontal,
    /// Left or right column. The row is free.
    Vertical
}

/// Which border of the pair: row/col 0 or the last one.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Side {
    Low,
    High
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Endpoint {
    pub axis: Axis,
    pub side: Side,
    pub pos: Pos
}

impl Endpoint {
    pub fn selector(&self) -> (Axis, Side) {
        (self.axis, self.side)
    }

    fn resolve(grid: &Grid, axis: Axis, side: Side, rng: &mut impl Rng) -> Endpoint {
        let (fixed_dim, free_dim) = match axis {
            Axis::Horizontal => (grid.rows, grid.cols),
            Axis::Vertical => (grid.cols, grid.rows),
        };
        let fixed = match side {
            Side::Low => 0,
            Side::High => fixed_dim - 1,
        };
        // Odd positions strictly inside the border: 1, 3, ..., free_dim - 2.
        let free = 2 * rng.gen_range(0..(free_dim - 1) / 2) + 1;

        let pos = match axis {
            Axis::Horizontal => Pos::of(fixed, free),
            Axis::Vertical => Pos::of(free, fixed),
        };
        Endpoint { axis, side, pos }
    }
}

fn random_selector(rng: &mut impl Rng) -> (Axis, Side) {
    let axis = if rng.gen::<bool>() { Axis::Vertical } else { Axis::Horizontal };
    let side = if rng.gen::<bool>() { Side::High } else { Side::Low };
    (axis, side)
}

/// Opens a random border cell to serve as the maze entry. The carver starts here.
pub fn place_entry(grid: &mut Grid, rng: &mut impl Rng) -> Endpoint {
    let (axis, side) = random_selector(rng);
    let entry = Endpoint::resolve(grid, axis, side, rng);
    grid.open(entry.pos);
    debug!("entry at {:?} ({:?}, {:?})", entry.pos, axis, side);
    entry
}

/// Opens a random border cell on a different edge than `entry`.
/// Reachability from the entry is left to the carver.
pub fn place_exit(grid: &mut Grid, entry: &Endpoint, rng: &mut impl Rng) -> Endpoint {
    let mut selector = random_selector(rng);
    while selector == entry.selector() {
        selector = random_selector(rng);
    }

    let (axis, side) = selector;
    let exit = Endpoint::resolve(grid, axis, side, rng);
    grid.open(exit.pos);
    debug!("exit at {:?} ({:?}, {:?})", exit.pos, axis, side);
    exit
}
