pub mod grid;
pub mod gen;
pub mod render;

use std::fmt::{Display, Formatter};

use rand::Rng;
pub use grid::{Grid, Cell, Dir, Pos, MIN_SIZE};
pub use gen::{Carver, Endpoint};
pub use render::render;

/// A fully carved maze and the two border openings.
pub struct Maze {
    pub grid: Grid,
    pub entry: Endpoint,
    pub exit: Endpoint
}

/// Builds a `width` x `height` maze. Both must be odd and at least `MIN_SIZE`.
pub fn generate(width: i32, height: i32, rng: &mut impl Rng) -> Maze {
    let mut grid = Grid::new(width, height);
    let entry = gen::place_entry(&mut grid, rng);
    let exit = gen::place_exit(&mut grid, &entry, rng);
    Carver::new(&mut grid, entry.pos, rng).generate();
    Maze { grid, entry, exit }
}

impl Display for Maze {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid)
    }
}
