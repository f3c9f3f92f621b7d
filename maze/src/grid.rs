use std::fmt::{Display, Formatter};

/// Smallest legal side length. The driver normalizes anything below this.
pub const MIN_SIZE: i32 = 5;

pub struct Grid {
    pub rows: i32,
    pub cols: i32,
    cells: Vec<Cell>
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Pos {
    pub row: i32,
    pub col: i32
}

impl Pos {
    pub fn of(row: i32, col: i32) -> Pos {
        Pos { row, col }
    }

    pub fn step(self, dir: Dir, distance: i32) -> Pos {
        let (d_row, d_col) = dir.delta();
        Pos::of(self.row + d_row * distance, self.col + d_col * distance)
    }

    /// Both coordinates odd: a traversable node of the maze graph.
    pub fn is_chamber(&self) -> bool {
        self.row % 2 == 1 && self.col % 2 == 1
    }

    /// Both coordinates even: never opened by the carver.
    pub fn is_junction(&self) -> bool {
        self.row % 2 == 0 && self.col % 2 == 0
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Dir {
    North,
    South,
    West,
    East
}

impl Dir {
    /// Candidate order used by the carver. Changing it changes seeded output.
    pub const ALL: [Dir; 4] = [Dir::North, Dir::South, Dir::West, Dir::East];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Dir::North => (-1, 0),
            Dir::South => (1, 0),
            Dir::West => (0, -1),
            Dir::East => (0, 1),
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Cell {
    pub filled: bool,
    pub visited: bool
}

impl Default for Cell {
    fn default() -> Self {
        Cell { filled: true, visited: false }
    }
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Grid {
        debug_assert!(width >= MIN_SIZE && height >= MIN_SIZE, "grid must be at least {}x{}", MIN_SIZE, MIN_SIZE);
        debug_assert!(width % 2 == 1 && height % 2 == 1, "grid dimensions must be odd, got {}x{}", width, height);

        let mut grid = Grid {
            rows: height,
            cols: width,
            cells: Vec::new()
        };
        grid.prepare_grid();
        grid
    }

    fn prepare_grid(&mut self) {
        self.cells.resize((self.rows * self.cols) as usize, Cell::default());
    }

    pub fn width(&self) -> i32 {
        self.cols
    }

    pub fn height(&self) -> i32 {
        self.rows
    }

    /// Carves the cell: it becomes open space and is never a carve target again.
    pub fn open(&mut self, pos: Pos) {
        let cell = self.mut_cell(pos);
        cell.filled = false;
        cell.visited = true;
    }

    /// Whether the carver may move into `pos`: on the grid, off the border and not yet visited.
    pub fn is_open_chamber(&self, pos: Pos) -> bool {
        self.is_interior(pos) && !self.get_cell(pos).visited
    }

    pub fn has(&self, pos: Pos) -> bool {
        pos.row >= 0 && pos.row < self.rows && pos.col < self.cols && pos.col >= 0
    }

    pub fn is_border(&self, pos: Pos) -> bool {
        self.has(pos) && (pos.row == 0 || pos.row == self.rows - 1 || pos.col == 0 || pos.col == self.cols - 1)
    }

    pub fn is_interior(&self, pos: Pos) -> bool {
        pos.row > 0 && pos.row < self.rows - 1 && pos.col > 0 && pos.col < self.cols - 1
    }

    pub fn is_filled(&self, pos: Pos) -> bool {
        self.get_cell(pos).filled
    }

    pub fn is_visited(&self, pos: Pos) -> bool {
        self.get_cell(pos).visited
    }

    pub fn get_cell(&self, pos: Pos) -> &Cell {
        &self.cells[self.index(pos)]
    }

    fn mut_cell(&mut self, pos: Pos) -> &mut Cell {
        let index = self.index(pos);
        &mut self.cells[index]
    }

    fn index(&self, pos: Pos) -> usize {
        if !self.has(pos) {
            panic!("Invalid pos {:?}", pos);
        }

        ((pos.row * self.cols) + pos.col) as usize
    }

    /// Every position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Pos::of(row, col)))
    }

    /// Every chamber position, row by row.
    pub fn chambers(&self) -> impl Iterator<Item = Pos> + '_ {
        (1..self.rows - 1).step_by(2).flat_map(move |row| (1..self.cols - 1).step_by(2).map(move |col| Pos::of(row, col)))
    }

    /// The wall layout handed to renderers. `true` is a wall.
    pub fn filled_rows(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.cols as usize)
            .map(|row| row.iter().map(|cell| cell.filled).collect())
            .collect()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.cols as usize) {
            for cell in row {
                f.write_str(if cell.filled { crate::render::WALL } else { crate::render::SPACE })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_solid() {
        for (width, height) in [(5, 5), (7, 5), (5, 9), (21, 13)] {
            let grid = Grid::new(width, height);
            assert_eq!(grid.width(), width);
            assert_eq!(grid.height(), height);
            assert_eq!(grid.positions().count(), (width * height) as usize);
            for pos in grid.positions() {
                assert!(grid.is_filled(pos), "{:?} should start filled", pos);
                assert!(!grid.is_visited(pos), "{:?} should start unvisited", pos);
            }
        }
    }

    #[test]
    fn new_grid_ignores_previous_grid() {
        let mut first = Grid::new(7, 7);
        first.open(Pos::of(1, 1));
        first.open(Pos::of(0, 3));

        let second = Grid::new(7, 7);
        assert!(second.positions().all(|pos| *second.get_cell(pos) == Cell::default()));
    }

    #[test]
    fn open_marks_visited() {
        let mut grid = Grid::new(5, 5);
        let pos = Pos::of(1, 3);
        grid.open(pos);
        assert!(!grid.is_filled(pos));
        assert!(grid.is_visited(pos));
        assert_eq!(grid.positions().filter(|p| !grid.is_filled(*p)).count(), 1);
    }

    #[test]
    #[should_panic(expected = "Invalid pos")]
    fn open_out_of_bounds_panics() {
        let mut grid = Grid::new(5, 5);
        grid.open(Pos::of(5, 0));
    }

    #[test]
    fn open_chamber_excludes_border_and_visited() {
        let mut grid = Grid::new(7, 7);
        assert!(grid.is_open_chamber(Pos::of(1, 1)));
        assert!(grid.is_open_chamber(Pos::of(5, 5)));
        assert!(!grid.is_open_chamber(Pos::of(0, 3)));
        assert!(!grid.is_open_chamber(Pos::of(3, 6)));
        assert!(!grid.is_open_chamber(Pos::of(-1, 3)));
        assert!(!grid.is_open_chamber(Pos::of(3, 9)));

        grid.open(Pos::of(3, 3));
        assert!(!grid.is_open_chamber(Pos::of(3, 3)));
    }

    #[test]
    fn border_classification() {
        let grid = Grid::new(5, 7);
        assert!(grid.is_border(Pos::of(0, 2)));
        assert!(grid.is_border(Pos::of(6, 2)));
        assert!(grid.is_border(Pos::of(3, 0)));
        assert!(grid.is_border(Pos::of(3, 4)));
        assert!(!grid.is_border(Pos::of(3, 2)));
        assert!(!grid.is_border(Pos::of(7, 2)));
        assert_eq!(grid.positions().filter(|p| grid.is_border(*p)).count(), 2 * 5 + 2 * 5);
    }

    #[test]
    fn chambers_are_odd_and_interior() {
        let grid = Grid::new(9, 7);
        let chambers: Vec<Pos> = grid.chambers().collect();
        assert_eq!(chambers.len(), 4 * 3);
        assert!(chambers.iter().all(|p| p.is_chamber() && grid.is_interior(*p)));
    }

    #[test]
    fn parity_helpers() {
        assert!(Pos::of(1, 3).is_chamber());
        assert!(Pos::of(2, 4).is_junction());
        assert!(!Pos::of(1, 2).is_chamber());
        assert!(!Pos::of(1, 2).is_junction());
        assert_eq!(Pos::of(3, 3).step(Dir::North, 2), Pos::of(1, 3));
        assert_eq!(Pos::of(3, 3).step(Dir::East, 2), Pos::of(3, 5));
    }

    #[test]
    fn display_draws_blocks() {
        let mut grid = Grid::new(5, 5);
        grid.open(Pos::of(0, 1));
        let text = grid.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "██  ██████");
        assert_eq!(lines[1], "██████████");
        assert_eq!(grid.filled_rows()[0], vec![true, false, true, true, true]);
    }
}
