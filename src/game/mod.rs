mod board;
mod clock;
mod collision;
mod direction;
mod food;
mod interpolate;
mod over;
mod snake;
mod state;
pub(crate) use self::board::{Board, BoardError};
pub(crate) use self::food::FoodSpawner;
use self::clock::GridClock;
use self::direction::Direction;
use self::interpolate::Point;
use self::over::{GameOver, OverOpt};
use self::state::{GameState, Status, Tick};
use crate::audio::{Audio, Chime};
use crate::command::Command;
use crate::config::Config;
use crate::consts;
use crate::input::EventSource;
use crate::util::center_rect;
use crossterm::event::Event;
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::Instant;

/// Whether the application should keep going after handling some input
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// The game screen: the simulation plus its clock, input handling, sound,
/// and drawing
#[derive(Clone, Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    state: GameState,
    clock: GridClock,
    audio: Audio,
    menu: GameOver,
}

impl<R: Rng> Game<R> {
    pub(crate) fn new(config: &Config, mut rng: R) -> Game<R> {
        let state = GameState::new(config.board.board, config.board.food_margin, &mut rng);
        Game {
            rng,
            state,
            clock: GridClock::new(config.tick_period(), Instant::now()),
            audio: Audio::new(config.sound),
            menu: GameOver::new(),
        }
    }

    /// Run the simulation and handle input until `until`, the time at which
    /// the next frame should be drawn.  Returns after at most one tick or
    /// one input event.  Once `until` has passed, pending input is still
    /// checked for without blocking.
    pub(crate) fn process_input<E: EventSource>(
        &mut self,
        events: &mut E,
        until: Instant,
    ) -> io::Result<Flow> {
        let now = Instant::now();
        let mut deadline = until;
        if self.state.running() {
            if self.clock.is_due(now) {
                self.advance(now);
                return Ok(Flow::Continue);
            }
            deadline = deadline.min(self.clock.next_tick());
        }
        match events.next_event(deadline.saturating_duration_since(now))? {
            Some(event) => Ok(self.handle_event(event)),
            None => Ok(Flow::Continue),
        }
    }

    fn advance(&mut self, now: Instant) {
        self.clock.tick(now);
        if let Tick::Ended(ending) = self.state.tick_advance(&mut self.rng) {
            self.menu = GameOver::new();
            if ending.is_collision() {
                self.audio.game_over();
            }
        }
    }

    fn handle_event(&mut self, event: Event) -> Flow {
        let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        else {
            return Flow::Continue;
        };
        match self.state.status() {
            Status::Running => match cmd {
                Command::Quit | Command::Q | Command::Esc => return Flow::Quit,
                Command::Up => self.state.request(Direction::Up),
                Command::Down => self.state.request(Direction::Down),
                Command::Left => self.state.request(Direction::Left),
                Command::Right => self.state.request(Direction::Right),
                _ => (),
            },
            Status::GameOver(_) => match self.menu.handle_command(cmd) {
                Some(OverOpt::Restart) => self.restart(),
                Some(OverOpt::Quit) => return Flow::Quit,
                None => (),
            },
        }
        Flow::Continue
    }

    fn restart(&mut self) {
        self.state.reset(&mut self.rng);
        self.clock.restart(Instant::now());
        self.menu = GameOver::new();
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>, now: Instant) {
        frame.render_widget(self.view(self.clock.progress(now)), frame.area());
    }

    fn view(&self, progress: f64) -> GameView<'_> {
        GameView {
            state: &self.state,
            menu: self.menu,
            progress,
        }
    }
}

/// Everything needed to draw one frame of the game
#[derive(Clone, Copy, Debug)]
struct GameView<'a> {
    state: &'a GameState,
    menu: GameOver,

    /// How far through the current tick this frame falls
    progress: f64,
}

impl Widget for GameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [score_area, field_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
        Line::styled(
            format!(
                " Score: {}   High: {}",
                self.state.score(),
                self.state.high_score()
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let board = self.state.board();
        let block_size = Size {
            width: board
                .width()
                .saturating_mul(consts::CELL_WIDTH)
                .saturating_add(2),
            height: board.height().saturating_add(2),
        };
        let block_area = center_rect(field_area, block_size);
        Block::bordered().render(block_area, buf);

        let mut level = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for cell in board.inset_cells(0) {
            level.draw_cell(
                Point::center_of(cell),
                consts::GRID_SYMBOLS,
                consts::GRID_STYLE,
            );
        }
        if let Some(food) = self.state.food() {
            level.draw_cell(
                Point::center_of(food),
                consts::FOOD_SYMBOLS,
                consts::FOOD_STYLE,
            );
        }
        let positions = self.state.snapshot(self.progress).positions();
        if let Some((&head, body)) = positions.split_first() {
            // Draw from the tail forwards so that, where segments overlap
            // mid-move, the one nearer the head wins
            for &p in body.iter().rev() {
                level.draw_cell(p, consts::SNAKE_BODY_SYMBOLS, consts::SNAKE_STYLE);
            }
            match self.state.status() {
                Status::GameOver(ending) if ending.is_collision() => {
                    level.draw_cell(head, consts::COLLISION_SYMBOLS, consts::COLLISION_STYLE);
                }
                _ => level.draw_cell(
                    head,
                    head_symbols(self.state.direction()),
                    consts::SNAKE_HEAD_STYLE,
                ),
            }
        }

        if let Status::GameOver(ending) = self.state.status() {
            let popup_area = center_rect(
                block_area,
                Size {
                    width: GameOver::WIDTH,
                    height: GameOver::HEIGHT,
                },
            );
            self.menu.with_ending(ending).render(popup_area, buf);
        }
    }
}

fn head_symbols(direction: Direction) -> [char; 2] {
    match direction {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOLS,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOLS,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOLS,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOLS,
    }
}

/// Draws board-cell-sized glyph pairs at fractional board positions
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw a cell-sized pair of glyphs centered on `center`, snapped to the
    /// nearest terminal column and row
    fn draw_cell(&mut self, center: Point, symbols: [char; 2], style: Style) {
        let Some(col) = to_offset((center.x - 0.5) * f64::from(consts::CELL_WIDTH)) else {
            return;
        };
        let Some(row) = to_offset(center.y - 0.5) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row).filter(|&y| y < self.area.bottom()) else {
            return;
        };
        for (i, symbol) in (0..).zip(symbols) {
            let Some(x) = self
                .area
                .x
                .checked_add(col)
                .and_then(|x| x.checked_add(i))
                .filter(|&x| x < self.area.right())
            else {
                continue;
            };
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(symbol);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}

/// Round a non-negative canvas coordinate to a terminal offset
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_offset(v: f64) -> Option<u16> {
    let v = v.round();
    (0.0..=f64::from(u16::MAX))
        .contains(&v)
        .then_some(v as u16)
}

#[cfg(test)]
mod tests {
    use super::board::Cell;
    use super::snake::SnakeBody;
    use super::state::Ending;
    use super::*;
    use crate::audio::Muted;
    use crate::config::BoardConfig;
    use crate::input::ScriptedEvents;
    use crossterm::event::KeyCode;
    use ratatui::style::{Color, Modifier};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::time::Duration;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn small_config() -> Config {
        Config {
            board: BoardConfig::new(8, 4, 0).unwrap(),
            sound: false,
            ..Config::default()
        }
    }

    fn new_game(config: &Config) -> Game<ChaCha12Rng> {
        Game::new(config, ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(code.into())
    }

    fn render(game: &Game<ChaCha12Rng>, progress: f64, area: Rect) -> Buffer {
        let mut buffer = Buffer::empty(area);
        game.view(progress).render(area, &mut buffer);
        buffer
    }

    #[test]
    fn draw_new_run() {
        let mut game = new_game(&small_config());
        game.state.food = Some(Cell::new(6, 0));
        let buffer = render(&game, 0.0, Rect::new(0, 0, 20, 7));
        let mut expected = Buffer::with_lines([
            " Score: 0   High: 0 ",
            " ┌────────────────┐ ",
            " │· · · · · · ▐▌· │ ",
            " │· · · · · · · · │ ",
            " │· · █████▶· · · │ ",
            " │· · · · · · · · │ ",
            " └────────────────┘ ",
        ]);
        expected.set_style(Rect::new(0, 0, 20, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(2, 2, 16, 4), consts::GRID_STYLE);
        expected.set_style(Rect::new(14, 2, 2, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(6, 4, 4, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(10, 4, 2, 1), consts::SNAKE_HEAD_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn draw_halfway_through_move() {
        let mut game = new_game(&small_config());
        game.state.food = Some(Cell::new(6, 0));
        assert_eq!(game.state.tick_advance(&mut game.rng), Tick::Moved);
        let buffer = render(&game, 0.5, Rect::new(0, 0, 20, 7));
        let mut expected = Buffer::with_lines([
            " Score: 0   High: 0 ",
            " ┌────────────────┐ ",
            " │· · · · · · ▐▌· │ ",
            " │· · · · · · · · │ ",
            " │· · ·█████▶ · · │ ",
            " │· · · · · · · · │ ",
            " └────────────────┘ ",
        ]);
        expected.set_style(Rect::new(0, 0, 20, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(2, 2, 16, 4), consts::GRID_STYLE);
        expected.set_style(Rect::new(14, 2, 2, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(7, 4, 4, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(11, 4, 2, 1), consts::SNAKE_HEAD_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn draw_move_completed() {
        let mut game = new_game(&small_config());
        game.state.food = Some(Cell::new(6, 0));
        assert_eq!(game.state.tick_advance(&mut game.rng), Tick::Moved);
        let buffer = render(&game, 1.0, Rect::new(0, 0, 20, 7));
        let mut expected = Buffer::with_lines([
            " Score: 0   High: 0 ",
            " ┌────────────────┐ ",
            " │· · · · · · ▐▌· │ ",
            " │· · · · · · · · │ ",
            " │· · · █████▶· · │ ",
            " │· · · · · · · · │ ",
            " └────────────────┘ ",
        ]);
        expected.set_style(Rect::new(0, 0, 20, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(2, 2, 16, 4), consts::GRID_STYLE);
        expected.set_style(Rect::new(14, 2, 2, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(8, 4, 4, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(12, 4, 2, 1), consts::SNAKE_HEAD_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn draw_game_over() {
        let config = Config {
            board: BoardConfig::new(10, 7, 0).unwrap(),
            sound: false,
            ..Config::default()
        };
        let mut game = new_game(&config);
        game.state.snake = SnakeBody::from_cells([Cell::new(9, 0), Cell::new(8, 0)]);
        game.state.food = Some(Cell::new(0, 6));
        game.state.score = 5;
        game.advance(Instant::now());
        assert_eq!(game.state.status(), Status::GameOver(Ending::HitWall));
        let area = Rect::new(0, 0, 22, 10);
        let buffer = render(&game, 0.3, area);
        let row = |y: u16| -> String {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol().to_owned())
                .collect()
        };
        assert_eq!(row(0), " Score: 5   High: 5   ");
        assert_eq!(row(2), "│· · · · · · · · ██××│");
        assert_eq!(buffer[(1, 2)].fg, Color::DarkGray);
        assert_eq!(buffer[(19, 2)].fg, Color::LightRed);
        assert_eq!(buffer[(19, 2)].modifier, Modifier::REVERSED);
        assert_eq!(buffer[(17, 2)].fg, Color::Green);
        assert!(row(3).contains("GAME OVER"), "{:?}", row(3));
        assert!(row(5).contains("Restart (r)"), "{:?}", row(5));
    }

    #[test]
    fn input_after_frame_deadline() {
        let mut game = new_game(&small_config());
        let earlier = Instant::now().checked_sub(Duration::from_secs(1)).unwrap();
        game.clock.restart(earlier);
        let mut events = ScriptedEvents::new([key(KeyCode::Esc)]);
        assert_eq!(game.process_input(&mut events, earlier).unwrap(), Flow::Continue);
        assert_eq!(game.state.snake.head(), Cell::new(5, 2));
        assert!(events.timeouts.is_empty());
        assert_eq!(game.process_input(&mut events, earlier).unwrap(), Flow::Quit);
        assert_eq!(events.timeouts, [Duration::ZERO]);
    }

    #[test]
    fn restart_after_frame_deadline() {
        let mut game = new_game(&small_config());
        game.state.snake = SnakeBody::from_cells([Cell::new(7, 2)]);
        game.state.food = Some(Cell::new(0, 0));
        game.advance(Instant::now());
        assert!(!game.state.running());
        let earlier = Instant::now().checked_sub(Duration::from_secs(1)).unwrap();
        let mut events = ScriptedEvents::new([key(KeyCode::Char('r'))]);
        assert_eq!(game.process_input(&mut events, earlier).unwrap(), Flow::Continue);
        assert!(game.state.running());
        assert_eq!(events.timeouts, [Duration::ZERO]);
    }

    #[test]
    fn turn_and_quit_while_running() {
        let mut game = new_game(&small_config());
        assert_eq!(game.handle_event(key(KeyCode::Up)), Flow::Continue);
        assert_eq!(game.state.heading.pending(), Direction::Up);
        assert_eq!(game.handle_event(key(KeyCode::Char('r'))), Flow::Continue);
        assert!(game.state.running());
        assert_eq!(game.handle_event(key(KeyCode::Esc)), Flow::Quit);
    }

    #[test]
    fn restart_only_after_game_over() {
        let mut game = new_game(&small_config());
        game.state.snake = SnakeBody::from_cells([Cell::new(7, 2), Cell::new(6, 2)]);
        game.state.food = Some(Cell::new(0, 0));
        game.state.score = 3;
        game.advance(Instant::now());
        assert_eq!(game.state.status(), Status::GameOver(Ending::HitWall));
        assert_eq!(game.handle_event(key(KeyCode::Up)), Flow::Continue);
        assert!(!game.state.running());
        assert_eq!(game.handle_event(key(KeyCode::Char('r'))), Flow::Continue);
        assert!(game.state.running());
        assert_eq!(game.state.score(), 0);
        assert_eq!(game.state.high_score(), 3);
        assert_eq!(game.state.snake.len(), consts::INITIAL_SNAKE_LENGTH);
    }

    #[test]
    fn quit_from_game_over_menu() {
        let mut game = new_game(&small_config());
        game.state.snake = SnakeBody::from_cells([Cell::new(7, 2)]);
        game.state.food = Some(Cell::new(0, 0));
        game.advance(Instant::now());
        assert_eq!(game.handle_event(key(KeyCode::Down)), Flow::Continue);
        assert_eq!(game.handle_event(key(KeyCode::Enter)), Flow::Quit);
    }

    #[test]
    fn chime_once_per_run() {
        let mut game = new_game(&small_config());
        game.state.snake = SnakeBody::from_cells([Cell::new(7, 2)]);
        game.state.food = Some(Cell::new(0, 0));
        let now = Instant::now();
        for _ in 0..5 {
            game.advance(now);
        }
        assert_eq!(game.audio, Audio::Muted(Muted { suppressed: 1 }));
        game.restart();
        game.state.snake = SnakeBody::from_cells([Cell::new(7, 2)]);
        game.state.food = Some(Cell::new(0, 0));
        game.advance(now);
        game.advance(now);
        assert_eq!(game.audio, Audio::Muted(Muted { suppressed: 2 }));
    }

    #[test]
    fn no_chime_when_board_filled() {
        let config = Config {
            board: BoardConfig::new(4, 1, 0).unwrap(),
            sound: false,
            ..Config::default()
        };
        let mut game = new_game(&config);
        game.advance(Instant::now());
        assert_eq!(game.state.status(), Status::GameOver(Ending::BoardFilled));
        assert_eq!(game.audio, Audio::Muted(Muted { suppressed: 0 }));
    }

    #[test]
    fn food_margin_from_config() {
        let config = Config {
            board: BoardConfig::new(8, 8, 3).unwrap(),
            sound: false,
            ..Config::default()
        };
        let game = new_game(&config);
        // Only the 2x2 middle is eligible, and the snake covers (3,4) and
        // (4,4)
        let food = game.state.food().unwrap();
        assert!(
            [Cell::new(3, 3), Cell::new(4, 3)].contains(&food),
            "{food:?}"
        );
        assert_eq!(
            FoodSpawner::new(game.state.board(), 3).capacity(),
            4
        );
    }
}
