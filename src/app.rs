use crate::config::Config;
use crate::game::{Flow, Game};
use crate::input::EventSource;
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// Owns the game screen and paces drawing against the simulation
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    frame_period: Duration,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(config: &Config, rng: R) -> App<R> {
        App {
            game: Game::new(config, rng),
            frame_period: config.frame_period(),
        }
    }

    pub(crate) fn run<B: Backend, E: EventSource>(
        mut self,
        mut terminal: Terminal<B>,
        mut events: E,
    ) -> io::Result<()> {
        info!(frame_period = ?self.frame_period, "Starting game");
        loop {
            let now = Instant::now();
            terminal.draw(|frame| self.game.draw(frame, now))?;
            let next_frame = now + self.frame_period;
            // Input and ticks get at least one turn per frame, even when
            // drawing overran the frame period
            loop {
                if self.game.process_input(&mut events, next_frame)? == Flow::Quit {
                    info!("Quitting");
                    return Ok(());
                }
                if Instant::now() >= next_frame {
                    break;
                }
            }
        }
    }
}
