use super::board::{Board, Cell};
use super::collision::{classify, Outcome};
use super::direction::{Direction, DirectionBuffer};
use super::food::FoodSpawner;
use super::interpolate::RenderSnapshot;
use super::snake::SnakeBody;
use crate::consts;
use rand::Rng;
use tracing::info;

/// The simulation proper: snake, food, and score, advanced one tick at a
/// time.  Rendering only ever reads it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState {
    pub(super) board: Board,
    pub(super) spawner: FoodSpawner,
    pub(super) snake: SnakeBody,

    /// The snake's cells as they were before the most recent move
    pub(super) previous: Vec<Cell>,

    pub(super) heading: DirectionBuffer,

    /// `None` only once the board has no room left for food
    pub(super) food: Option<Cell>,

    pub(super) score: u32,
    pub(super) high_score: u32,
    pub(super) status: Status,

    /// Number of runs started, including the current one
    runs: u32,
}

impl GameState {
    pub(crate) fn new<R: Rng>(board: Board, food_margin: u16, rng: &mut R) -> GameState {
        let heading = Direction::Right;
        let snake = SnakeBody::straight(board.center(), heading, consts::INITIAL_SNAKE_LENGTH);
        let mut state = GameState {
            board,
            spawner: FoodSpawner::new(board, food_margin),
            previous: snake.to_vec(),
            snake,
            heading: DirectionBuffer::new(heading),
            food: None,
            score: 0,
            high_score: 0,
            status: Status::Running,
            runs: 0,
        };
        state.reset(rng);
        state
    }

    /// Start a new run: a fresh three-cell snake in the middle of the board
    /// heading right, new food, and a score of zero.  The high score is kept.
    pub(crate) fn reset<R: Rng>(&mut self, rng: &mut R) {
        let heading = Direction::Right;
        self.snake = SnakeBody::straight(
            self.board.center(),
            heading,
            consts::INITIAL_SNAKE_LENGTH,
        );
        self.previous = self.snake.to_vec();
        self.heading = DirectionBuffer::new(heading);
        self.score = 0;
        self.runs += 1;
        self.food = self.spawner.spawn(self.snake.occupied(), rng);
        self.status = if self.food.is_some() {
            Status::Running
        } else {
            Status::GameOver(Ending::BoardFilled)
        };
        info!(run = self.runs, high_score = self.high_score, "Starting new run");
    }

    /// Queue a turn for the next tick.  Ignored once the run is over.
    pub(crate) fn request(&mut self, direction: Direction) {
        if self.running() {
            self.heading.request(direction);
        }
    }

    /// Advance the simulation by one tick.  Does nothing once the run is
    /// over.
    pub(crate) fn tick_advance<R: Rng>(&mut self, rng: &mut R) -> Tick {
        if !self.running() {
            return Tick::Idle;
        }
        let heading = self.heading.commit();
        let candidate = self.snake.head().step(heading);
        match classify(candidate, &self.snake, self.board) {
            Outcome::WallHit => return self.end(Ending::HitWall),
            Outcome::SelfHit => return self.end(Ending::HitSelf),
            Outcome::Clear => (),
        }
        self.previous = self.snake.to_vec();
        let grow = self.food == Some(candidate);
        self.snake.advance(candidate, grow);
        if !grow {
            return Tick::Moved;
        }
        self.score += 1;
        self.food = self.spawner.spawn(self.snake.occupied(), rng);
        if self.food.is_none() {
            return self.end(Ending::BoardFilled);
        }
        Tick::Ate
    }

    fn end(&mut self, ending: Ending) -> Tick {
        self.status = Status::GameOver(ending);
        self.high_score = self.high_score.max(self.score);
        info!(
            run = self.runs,
            ?ending,
            score = self.score,
            high_score = self.high_score,
            length = self.snake.len(),
            "Run ended"
        );
        Tick::Ended(ending)
    }

    pub(crate) fn running(&self) -> bool {
        self.status == Status::Running
    }

    pub(crate) fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn board(&self) -> Board {
        self.board
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn high_score(&self) -> u32 {
        self.high_score
    }

    pub(crate) fn food(&self) -> Option<Cell> {
        self.food
    }

    /// The heading applied at the most recent tick
    pub(crate) fn direction(&self) -> Direction {
        self.heading.committed()
    }

    /// Pair the snake's previous and current cells for drawing at fraction
    /// `progress` of the way through the current tick.  Once the run is over,
    /// the final position is returned as-is.
    pub(crate) fn snapshot(&self, progress: f64) -> RenderSnapshot {
        let current = self.snake.to_vec();
        if self.running() {
            RenderSnapshot {
                previous: self.previous.clone(),
                current,
                progress,
            }
        } else {
            RenderSnapshot {
                previous: current.clone(),
                current,
                progress: 1.0,
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Status {
    Running,
    GameOver(Ending),
}

/// Why a run came to an end
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Ending {
    HitWall,
    HitSelf,
    /// The snake has filled the board and there is nowhere left to place food.
    BoardFilled,
}

impl Ending {
    pub(crate) fn is_collision(self) -> bool {
        matches!(self, Ending::HitWall | Ending::HitSelf)
    }
}

/// What happened during a call to [`GameState::tick_advance()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The run was already over
    Idle,
    Moved,
    Ate,
    Ended(Ending),
}
