use super::board::{Board, Cell};
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;
use tracing::debug;

/// Chooses where the next piece of food goes
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FoodSpawner {
    board: Board,

    /// Food is never placed closer than this many cells to a wall
    margin: u16,
}

impl FoodSpawner {
    pub(crate) fn new(board: Board, margin: u16) -> FoodSpawner {
        FoodSpawner { board, margin }
    }

    /// Number of cells that food may ever be placed in
    pub(crate) fn capacity(&self) -> usize {
        self.board.inset_cells(self.margin).count()
    }

    /// Pick a cell uniformly at random from those eligible for food and not
    /// in `occupied`.  Returns `None` if there are no such cells.
    ///
    /// The free cells are enumerated rather than sampled by trial, so this
    /// terminates however crowded the board is.
    pub(crate) fn spawn<R: Rng>(&self, occupied: &HashSet<Cell>, rng: &mut R) -> Option<Cell> {
        let cell = self
            .board
            .inset_cells(self.margin)
            .filter(|c| !occupied.contains(c))
            .choose(rng);
        match cell {
            Some(c) => debug!(x = c.x, y = c.y, "Placed food"),
            None => debug!("No free cell left for food"),
        }
        cell
    }
}
