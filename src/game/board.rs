use super::direction::Direction;
use crate::consts;
use thiserror::Error;

/// A position on the board, or a candidate position just off of it.  `x`
/// grows to the right and `y` grows downwards.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Return the neighboring cell one step in `direction`.  The result may
    /// lie outside the board.
    pub(crate) fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Dimensions of the playing field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    width: u16,
    height: u16,
}

impl Board {
    /// Create a board of the given size.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the board cannot hold a freshly-spawned snake or is
    /// larger than [`MAX_BOARD_SIDE`][consts::MAX_BOARD_SIDE] on either side.
    pub(crate) fn new(width: u16, height: u16) -> Result<Board, BoardError> {
        if usize::from(width / 2) < consts::INITIAL_SNAKE_LENGTH - 1 {
            return Err(BoardError::TooNarrow(width));
        }
        if height == 0 {
            return Err(BoardError::TooShort);
        }
        if width > consts::MAX_BOARD_SIDE || height > consts::MAX_BOARD_SIDE {
            return Err(BoardError::TooLarge { width, height });
        }
        Ok(Board { width, height })
    }

    pub(crate) fn width(self) -> u16 {
        self.width
    }

    pub(crate) fn height(self) -> u16 {
        self.height
    }

    /// The cell at which a new snake's head is placed
    pub(crate) fn center(self) -> Cell {
        Cell::new(i32::from(self.width / 2), i32::from(self.height / 2))
    }

    pub(crate) fn contains(self, cell: Cell) -> bool {
        (0..i32::from(self.width)).contains(&cell.x)
            && (0..i32::from(self.height)).contains(&cell.y)
    }

    /// Iterate over the cells at least `margin` cells away from every wall, in
    /// row-major order
    pub(crate) fn inset_cells(self, margin: u16) -> impl Iterator<Item = Cell> {
        let m = i32::from(margin);
        let xs = m..(i32::from(self.width) - m);
        let ys = m..(i32::from(self.height) - m);
        ys.flat_map(move |y| xs.clone().map(move |x| Cell::new(x, y)))
    }
}

impl Default for Board {
    fn default() -> Board {
        Board {
            width: consts::DEFAULT_BOARD_WIDTH,
            height: consts::DEFAULT_BOARD_HEIGHT,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum BoardError {
    #[error("board width {0} is too narrow to hold a new snake")]
    TooNarrow(u16),
    #[error("board height must be at least 1")]
    TooShort,
    #[error("board size {width}x{height} exceeds the maximum side length")]
    TooLarge { width: u16, height: u16 },
    #[error("food margin {margin} leaves no room for food beside a new snake")]
    NoRoomForFood { margin: u16 },
}
