use crate::board::{Board, Cell};
use log::{debug, warn};
use rand::Rng;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    /// Places food on a random cell that is not in `occupied`.
    pub fn spawn<'a>(
        board: &Board,
        occupied: impl IntoIterator<Item = &'a Cell>,
        rng: &mut impl Rng,
    ) -> Self {
        let position = match sample_free_cell(board, &collect_occupied(board, occupied), rng) {
            Some(cell) => cell,
            None => {
                warn!("No free cell for initial food, placing it at the centre");
                board.center()
            }
        };
        Food { position }
    }

    pub fn at(position: Cell) -> Self {
        Food { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the food to a random cell outside `occupied`. A board with no
    /// free cell left keeps the food where it is.
    pub fn relocate<'a>(
        &mut self,
        board: &Board,
        occupied: impl IntoIterator<Item = &'a Cell>,
        rng: &mut impl Rng,
    ) {
        let occupied = collect_occupied(board, occupied);
        match sample_free_cell(board, &occupied, rng) {
            Some(cell) => {
                debug!("Food moved from {:?} to {:?}", self.position, cell);
                self.position = cell;
            }
            None => warn!(
                "Board is full ({} cells occupied), food stays at {:?}",
                occupied.len(),
                self.position
            ),
        }
    }
}

fn collect_occupied<'a>(
    board: &Board,
    occupied: impl IntoIterator<Item = &'a Cell>,
) -> HashSet<Cell> {
    occupied
        .into_iter()
        .copied()
        .filter(|cell| board.contains(*cell))
        .collect()
}

fn sample_free_cell(board: &Board, occupied: &HashSet<Cell>, rng: &mut impl Rng) -> Option<Cell> {
    if occupied.len() >= board.cell_count() {
        return None;
    }

    loop {
        let cell = board.random_cell(rng);
        if !occupied.contains(&cell) {
            return Some(cell);
        }
    }
}
