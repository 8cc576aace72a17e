use crate::consts;
use crate::game::{Board, BoardError, FoodSpawner};
use serde::Deserialize;
use std::num::{NonZeroU64, ParseIntError};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Size of the playing field and where food may appear on it
    pub(crate) board: BoardConfig,

    /// Milliseconds between movements of the snake
    pub(crate) tick_ms: NonZeroU64,

    /// Frames drawn per second
    pub(crate) frame_rate: FrameRate,

    /// Whether to ring the terminal bell when the snake crashes
    pub(crate) sound: bool,

    /// File to write diagnostic logs to
    pub(crate) log_file: Option<PathBuf>,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms.get())
    }

    pub(crate) fn frame_period(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.get()
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            board: BoardConfig::default(),
            tick_ms: NonZeroU64::new(consts::DEFAULT_TICK_MS).unwrap_or(NonZeroU64::MIN),
            frame_rate: FrameRate(consts::DEFAULT_FRAME_RATE),
            sound: true,
            log_file: None,
        }
    }
}

/// Number of frames drawn per second, between 1 and
/// [`MAX_FRAME_RATE`][consts::MAX_FRAME_RATE]
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "u32")]
pub(crate) struct FrameRate(u32);

impl FrameRate {
    pub(crate) fn new(fps: u32) -> Result<FrameRate, FrameRateError> {
        if (1..=consts::MAX_FRAME_RATE).contains(&fps) {
            Ok(FrameRate(fps))
        } else {
            Err(FrameRateError::OutOfRange(fps))
        }
    }

    pub(crate) fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for FrameRate {
    type Error = FrameRateError;

    fn try_from(value: u32) -> Result<FrameRate, FrameRateError> {
        FrameRate::new(value)
    }
}

impl FromStr for FrameRate {
    type Err = FrameRateError;

    fn from_str(s: &str) -> Result<FrameRate, FrameRateError> {
        FrameRate::new(s.parse::<u32>()?)
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub(crate) enum FrameRateError {
    #[error("frame rate must be between 1 and {max}, got {0}", max = consts::MAX_FRAME_RATE)]
    OutOfRange(u32),
    #[error("invalid frame rate")]
    Parse(#[from] ParseIntError),
}

/// Validated board settings
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawBoardConfig")]
pub(crate) struct BoardConfig {
    pub(crate) board: Board,

    /// Food is never placed closer than this many cells to a wall
    pub(crate) food_margin: u16,
}

impl BoardConfig {
    /// # Errors
    ///
    /// Returns `Err` if the board is unusable or if the margin leaves too
    /// little room for food beside a freshly-spawned snake.
    pub(crate) fn new(
        width: u16,
        height: u16,
        food_margin: u16,
    ) -> Result<BoardConfig, BoardError> {
        let board = Board::new(width, height)?;
        if FoodSpawner::new(board, food_margin).capacity() <= consts::INITIAL_SNAKE_LENGTH {
            return Err(BoardError::NoRoomForFood {
                margin: food_margin,
            });
        }
        Ok(BoardConfig { board, food_margin })
    }
}

impl Default for BoardConfig {
    fn default() -> BoardConfig {
        BoardConfig {
            board: Board::default(),
            food_margin: 0,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawBoardConfig {
    width: u16,
    height: u16,
    food_margin: u16,
}

impl Default for RawBoardConfig {
    fn default() -> RawBoardConfig {
        RawBoardConfig {
            width: consts::DEFAULT_BOARD_WIDTH,
            height: consts::DEFAULT_BOARD_HEIGHT,
            food_margin: 0,
        }
    }
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = BoardError;

    fn try_from(value: RawBoardConfig) -> Result<BoardConfig, BoardError> {
        BoardConfig::new(value.width, value.height, value.food_margin)
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
