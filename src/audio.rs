use enum_dispatch::enum_dispatch;
use std::io::{self, Write};
use tracing::{debug, warn};

/// Something that can make a noise when a run ends in a crash.  Playing is
/// fire-and-forget: failures are logged and otherwise ignored.
#[enum_dispatch]
pub(crate) trait Chime {
    fn game_over(&mut self);
}

#[enum_dispatch(Chime)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Audio {
    TerminalBell,
    Muted,
}

impl Audio {
    pub(crate) fn new(enabled: bool) -> Audio {
        if enabled {
            TerminalBell.into()
        } else {
            Muted::default().into()
        }
    }
}

/// Rings the terminal bell
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct TerminalBell;

impl Chime for TerminalBell {
    fn game_over(&mut self) {
        let mut stdout = io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
            warn!(error = %e, "Failed to ring terminal bell");
        }
    }
}

/// Stays silent, keeping count of the chimes it swallowed
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Muted {
    pub(crate) suppressed: u32,
}

impl Chime for Muted {
    fn game_over(&mut self) {
        self.suppressed += 1;
        debug!("Game-over chime muted");
    }
}
