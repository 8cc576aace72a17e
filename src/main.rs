mod app;
mod audio;
mod command;
mod config;
mod consts;
mod game;
mod input;
mod logging;
mod util;
use crate::app::App;
use crate::config::{Config, FrameRate};
use crate::input::TerminalEvents;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use std::io::{self, ErrorKind};
use std::num::NonZeroU64;
use std::path::PathBuf;
use std::process::ExitCode;

/// What the command line asked for
#[derive(Clone, Debug, Eq, PartialEq)]
enum Mode {
    Run(Arguments),
    Help,
    Version,
}

/// Command-line settings that override the configuration file
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    tick_ms: Option<NonZeroU64>,
    frame_rate: Option<FrameRate>,
    mute: bool,
    log_file: Option<PathBuf>,
}

impl Mode {
    fn from_parser(mut parser: Parser) -> Result<Mode, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('t') | Arg::Long("tick-ms") => {
                    args.tick_ms = Some(parser.value()?.parse()?);
                }
                Arg::Long("frame-rate") => args.frame_rate = Some(parser.value()?.parse()?),
                Arg::Long("mute") => args.mute = true,
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('h') | Arg::Long("help") => return Ok(Mode::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Mode::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Mode::Run(args))
    }
}

impl Arguments {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path, false)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => {
                let path = Config::default_path()?;
                Config::load(&path, true)
                    .with_context(|| format!("failed to load {}", path.display()))?
            }
        };
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
        if let Some(frame_rate) = self.frame_rate {
            config.frame_rate = frame_rate;
        }
        if self.mute {
            config.sound = false;
        }
        if let Some(ref log_file) = self.log_file {
            config.log_file = Some(log_file.clone());
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    match Mode::from_parser(Parser::from_env()) {
        Ok(Mode::Run(args)) => match start(&args) {
            Ok(config) => {
                let terminal = ratatui::init();
                let r = App::new(&config, rand::rng()).run(terminal, TerminalEvents);
                ratatui::restore();
                io_exit(r)
            }
            Err(e) => {
                eprintln!("gridsnake: {e:?}");
                ExitCode::from(2)
            }
        },
        Ok(Mode::Help) => {
            print_help();
            ExitCode::SUCCESS
        }
        Ok(Mode::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            ExitCode::from(2)
        }
    }
}

/// Load configuration and set up logging before the terminal is taken over
fn start(args: &Arguments) -> anyhow::Result<Config> {
    let config = args.load_config()?;
    logging::init(config.log_file.as_deref()).context("failed to set up logging")?;
    Ok(config)
}

fn print_help() {
    println!("Usage: gridsnake [<options>]");
    println!();
    println!("Play snake in the terminal");
    println!();
    println!("Options:");
    println!("  -c, --config <PATH>   Read configuration from the given file");
    println!("  -t, --tick-ms <N>     Move the snake every N milliseconds");
    println!("      --frame-rate <N>  Draw N frames per second");
    println!("      --mute            Do not ring the bell on game over");
    println!("      --log-file <PATH> Append logs to the given file");
    println!("                        (filter with ${})", logging::LOG_ENV_VAR);
    println!("  -h, --help            Display this help message and exit");
    println!("  -V, --version         Show the program version and exit");
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
