use super::board::Cell;
use super::direction::Direction;
use std::collections::{HashSet, VecDeque};

/// The cells covered by the snake, head first.
///
/// A `HashSet` mirror of the cells is kept alongside the ordered sequence so
/// that membership tests don't have to walk the body.  Both are only ever
/// changed together, by [`SnakeBody::advance()`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct SnakeBody {
    /// Occupied cells; index 0 is the head
    cells: VecDeque<Cell>,

    /// The same cells as `cells`, for membership tests
    occupied: HashSet<Cell>,
}

impl SnakeBody {
    /// Create a straight snake of `len` cells (at least one) with its head at
    /// `head` and its tail trailing behind it, opposite to `heading`
    pub(crate) fn straight(head: Cell, heading: Direction, len: usize) -> SnakeBody {
        let back = heading.reverse();
        let cells = std::iter::successors(Some(head), |&c| Some(c.step(back)))
            .take(len.max(1))
            .collect::<VecDeque<_>>();
        let occupied = cells.iter().copied().collect();
        SnakeBody { cells, occupied }
    }

    #[cfg(test)]
    pub(crate) fn from_cells<I: IntoIterator<Item = Cell>>(iter: I) -> SnakeBody {
        let cells = iter.into_iter().collect::<VecDeque<_>>();
        assert!(!cells.is_empty(), "snake body must not be empty");
        let occupied = cells.iter().copied().collect::<HashSet<_>>();
        assert_eq!(occupied.len(), cells.len(), "snake body must not overlap");
        SnakeBody { cells, occupied }
    }

    pub(crate) fn head(&self) -> Cell {
        self.cells[0]
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn occupies(&self, cell: Cell) -> bool {
        self.occupied.contains(&cell)
    }

    pub(crate) fn occupied(&self) -> &HashSet<Cell> {
        &self.occupied
    }

    pub(crate) fn to_vec(&self) -> Vec<Cell> {
        self.cells.iter().copied().collect()
    }

    /// Move the head to `new_head`.  Unless `grow` is true, the tail cell is
    /// dropped so that the length stays the same.
    pub(crate) fn advance(&mut self, new_head: Cell, grow: bool) {
        self.cells.push_front(new_head);
        self.occupied.insert(new_head);
        if !grow {
            if let Some(tail) = self.cells.pop_back() {
                self.occupied.remove(&tail);
            }
        }
    }
}
