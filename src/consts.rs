//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};

/// Default time between movements of the snake, in milliseconds
pub(crate) const DEFAULT_TICK_MS: u64 = 120;

/// Default number of frames drawn per second
pub(crate) const DEFAULT_FRAME_RATE: u32 = 60;

/// Upper bound on the configurable frame rate, so that a frame always lasts
/// at least a millisecond
pub(crate) const MAX_FRAME_RATE: u32 = 1000;

/// Default board width, in cells
pub(crate) const DEFAULT_BOARD_WIDTH: u16 = 24;

/// Default board height, in cells
pub(crate) const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Largest accepted board dimension
pub(crate) const MAX_BOARD_SIDE: u16 = 200;

/// Snake length at the start of each run
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Number of terminal columns used to draw one board cell
pub(crate) const CELL_WIDTH: u16 = 2;

/// Glyphs for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOLS: [char; 2] = ['▲', '▲'];

/// Glyphs for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOLS: [char; 2] = ['▼', '▼'];

/// Glyphs for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOLS: [char; 2] = ['◀', '█'];

/// Glyphs for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOLS: [char; 2] = ['█', '▶'];

/// Glyphs for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOLS: [char; 2] = ['█', '█'];

/// Glyphs for the food
pub(crate) const FOOD_SYMBOLS: [char; 2] = ['▐', '▌'];

/// Glyphs for an empty cell, which together form a dotted grid
pub(crate) const GRID_SYMBOLS: [char; 2] = ['·', ' '];

/// Glyphs for the snake's head after it has run into a wall or itself
pub(crate) const COLLISION_SYMBOLS: [char; 2] = ['×', '×'];

/// Style for [`GRID_SYMBOLS`]
pub(crate) const GRID_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Style for the snake's body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new()
    .fg(Color::LightGreen)
    .add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOLS`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
