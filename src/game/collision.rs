use super::board::{Board, Cell};
use super::snake::SnakeBody;

/// Classification of the cell the snake's head is about to move into
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    /// The move is legal
    Clear,

    /// The cell lies outside the board
    WallHit,

    /// The cell is covered by the snake
    SelfHit,
}

/// Decide whether the head may move into `candidate`.  Walls are checked
/// before the body.
///
/// The body is tested as it stands *before* the move, so the cell currently
/// holding the tail counts as occupied even though the tail would leave it
/// on a non-growing move.
pub(crate) fn classify(candidate: Cell, body: &SnakeBody, board: Board) -> Outcome {
    if !board.contains(candidate) {
        Outcome::WallHit
    } else if body.occupies(candidate) {
        Outcome::SelfHit
    } else {
        Outcome::Clear
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;
    use rstest::rstest;

    fn square_loop() -> SnakeBody {
        // Head at (3,2) facing up, tail at (3,3) right below it
        SnakeBody::from_cells([
            Cell::new(3, 2),
            Cell::new(4, 2),
            Cell::new(4, 3),
            Cell::new(3, 3),
        ])
    }

    #[rstest]
    #[case(Cell::new(13, 10), Outcome::Clear)]
    #[case(Cell::new(24, 10), Outcome::WallHit)]
    #[case(Cell::new(-1, 10), Outcome::WallHit)]
    #[case(Cell::new(5, 20), Outcome::WallHit)]
    #[case(Cell::new(5, -1), Outcome::WallHit)]
    #[case(Cell::new(11, 10), Outcome::SelfHit)]
    #[case(Cell::new(10, 10), Outcome::SelfHit)]
    fn test_classify(#[case] candidate: Cell, #[case] r: Outcome) {
        let body = SnakeBody::straight(Cell::new(12, 10), Direction::Right, 3);
        assert_eq!(classify(candidate, &body, Board::default()), r);
    }

    #[test]
    fn tail_cell_counts_as_occupied() {
        let body = square_loop();
        let candidate = body.head().step(Direction::Down);
        assert_eq!(candidate, Cell::new(3, 3));
        assert_eq!(
            classify(candidate, &body, Board::default()),
            Outcome::SelfHit
        );
    }

    #[test]
    fn wall_checked_before_body() {
        let board = Board::new(4, 4).unwrap();
        let body = SnakeBody::from_cells([Cell::new(0, 0), Cell::new(1, 0)]);
        assert_eq!(classify(Cell::new(-1, 0), &body, board), Outcome::WallHit);
        assert_eq!(classify(Cell::new(4, 0), &body, board), Outcome::WallHit);
    }

    #[test]
    fn classification_is_repeatable() {
        let body = square_loop();
        let board = Board::default();
        for candidate in [Cell::new(3, 1), Cell::new(3, 3), Cell::new(-1, 0)] {
            let first = classify(candidate, &body, board);
            for _ in 0..5 {
                assert_eq!(classify(candidate, &body, board), first);
            }
        }
    }
}
