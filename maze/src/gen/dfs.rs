//! Randomized depth-first carving with backtracking.
//!
//! Chambers sit on odd coordinates, so every advance after the first one moves
//! two cells: through a wall segment and into the next chamber. The very first
//! advance only takes the single step from the border entry into the adjacent
//! chamber.

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Dir, Grid, Pos};

/// The live DFS stack, from the entry to the current frontier cell.
#[derive(Debug, Clone, Default)]
pub struct Path {
    cells: Vec<Pos>
}

impl Path {
    pub fn starting_at(pos: Pos) -> Path {
        Path { cells: vec![pos] }
    }

    pub fn push(&mut self, pos: Pos) {
        self.cells.push(pos);
    }

    pub fn pop(&mut self) -> Option<Pos> {
        self.cells.pop()
    }

    pub fn frontier(&self) -> Option<Pos> {
        self.cells.last().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum State {
    Advancing,
    Backtracking,
    Done
}

pub struct Carver<'a, R: Rng> {
    grid: &'a mut Grid,
    rng: &'a mut R,
    path: Path,
    first_move: bool,
    state: State,
    steps: usize
}

impl<'a, R: Rng> Carver<'a, R> {
    /// `start` must already be open; it is normally the entry endpoint.
    pub fn new(grid: &'a mut Grid, start: Pos, rng: &'a mut R) -> Carver<'a, R> {
        Carver {
            grid,
            rng,
            path: Path::starting_at(start),
            first_move: true,
            state: State::Advancing,
            steps: 0
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Number of state transitions taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs the state machine to completion.
    pub fn generate(&mut self) {
        while self.state != State::Done {
            self.step();
        }
        debug!("carved {}x{} grid in {} steps", self.grid.cols, self.grid.rows, self.steps);
    }

    /// Performs one transition of the state machine.
    pub fn step(&mut self) {
        self.state = match self.state {
            State::Advancing => {
                let moved = self.random_move(self.first_move);
                self.first_move = false;
                if moved { State::Advancing } else { State::Backtracking }
            }
            State::Backtracking => self.backtrack(),
            State::Done => State::Done,
        };
        self.steps += 1;
    }

    fn backtrack(&mut self) -> State {
        self.path.pop();

        // An advance after the first pushes a wall segment and a chamber, so both come off together.
        // Once only the entry and the first chamber are left there is nowhere to return to.
        if !self.first_move && self.path.len() > 2 {
            self.path.pop();
            trace!("backtracked to {:?}", self.path.frontier());
            State::Advancing
        } else {
            self.path = Path::default();
            State::Done
        }
    }

    /// Tries to extend the path towards a random unvisited chamber. Returns false at a dead end.
    pub fn random_move(&mut self, first_move: bool) -> bool {
        let from = match self.path.frontier() {
            Some(pos) => pos,
            None => return false,
        };

        let candidates: Vec<Dir> = Dir::ALL
            .iter()
            .copied()
            .filter(|dir| self.grid.is_open_chamber(from.step(*dir, 2)))
            .collect();

        let dir = match candidates.choose(&mut *self.rng) {
            Some(dir) => *dir,
            None => return false,
        };

        let strides = if first_move { 1 } else { 2 };
        let mut pos = from;
        for _ in 0..strides {
            pos = pos.step(dir, 1);
            self.grid.open(pos);
            self.path.push(pos);
        }
        true
    }
}
