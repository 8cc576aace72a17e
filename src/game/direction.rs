use tracing::trace;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the unit `(dx, dy)` offset for one step in this direction
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Holds the heading applied at the most recent tick along with the most
/// recent acceptable request for the next one.
///
/// Requests are only checked against the committed heading, so two quick
/// turns within a single tick can never add up to a U-turn.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DirectionBuffer {
    committed: Direction,
    pending: Direction,
}

impl DirectionBuffer {
    pub(crate) fn new(direction: Direction) -> DirectionBuffer {
        DirectionBuffer {
            committed: direction,
            pending: direction,
        }
    }

    /// Queue `direction` for the next tick, replacing any earlier request.
    /// A request to reverse the committed heading is dropped.
    pub(crate) fn request(&mut self, direction: Direction) {
        if direction == self.committed.reverse() {
            trace!(?direction, committed = ?self.committed, "Ignoring reversal request");
        } else {
            self.pending = direction;
        }
    }

    /// Apply the pending heading and return it
    pub(crate) fn commit(&mut self) -> Direction {
        self.committed = self.pending;
        self.committed
    }

    pub(crate) fn committed(&self) -> Direction {
        self.committed
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> Direction {
        self.pending
    }
}
