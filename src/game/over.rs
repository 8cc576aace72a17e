use super::state::Ending;
use crate::command::Command;
use crate::consts;
use crate::util::EnumExt;
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A widget for the pop-up shown once a run has ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct GameOver {
    /// The currently-selected item in the menu
    selection: OverOpt,
}

impl GameOver {
    /// The height that should be used for the `Rect` passed to
    /// `GameOver::render()`
    pub(super) const HEIGHT: u16 = 5;

    /// The width that should be used for the `Rect` passed to
    /// `GameOver::render()`
    pub(super) const WIDTH: u16 = 18;

    pub(super) fn new() -> GameOver {
        GameOver {
            selection: OverOpt::min(),
        }
    }

    /// Handle a command.  Returns `Some` if the user made a choice.
    pub(super) fn handle_command(&mut self, cmd: Command) -> Option<OverOpt> {
        match cmd {
            Command::R => return Some(OverOpt::Restart),
            Command::Q | Command::Esc | Command::Quit => return Some(OverOpt::Quit),
            Command::Enter => return Some(self.selection),
            Command::Up => {
                if let Some(opt) = self.selection.prev() {
                    self.selection = opt;
                }
            }
            Command::Down => {
                if let Some(opt) = self.selection.next() {
                    self.selection = opt;
                }
            }
            Command::Next => self.selection = self.selection.next().unwrap_or_else(OverOpt::min),
            Command::Prev => self.selection = self.selection.prev().unwrap_or_else(OverOpt::max),
            Command::Home => self.selection = OverOpt::min(),
            Command::End => self.selection = OverOpt::max(),
            Command::Left | Command::Right => (),
        }
        None
    }

    /// Wrap the menu with the reason the run ended, ready for rendering
    pub(super) fn with_ending(self, ending: Ending) -> GameOverPopup {
        GameOverPopup {
            menu: self,
            ending,
        }
    }
}

/// The choices in the game-over menu
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(super) enum OverOpt {
    /// Start a new run
    Restart,

    /// Quit the application
    Quit,
}

impl OverOpt {
    fn to_line(self, selected: bool) -> Line<'static> {
        let mut line = Line::default();
        if selected {
            line.push_span("» ");
        } else {
            line.push_span("  ");
        }
        match self {
            OverOpt::Restart => {
                line.push_span("Restart (");
                line.push_span(Span::styled("r", consts::KEY_STYLE));
                line.push_span(")");
            }
            OverOpt::Quit => {
                line.push_span("Quit (");
                line.push_span(Span::styled("q", consts::KEY_STYLE));
                line.push_span(")");
            }
        }
        if selected {
            line = line.style(consts::MENU_SELECTION_STYLE);
        }
        line
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct GameOverPopup {
    menu: GameOver,
    ending: Ending,
}

impl Widget for GameOverPopup {
    /*
     * ┌── GAME OVER ───┐
     * │   Bit yourself │
     * │ » Restart (r)  │
     * │   Quit (q)     │
     * └────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.ending {
            Ending::HitWall | Ending::HitSelf => " GAME OVER ",
            Ending::BoardFilled => " YOU WIN ",
        };
        let cause = match self.ending {
            Ending::HitWall => "Hit the wall",
            Ending::HitSelf => "Bit yourself",
            Ending::BoardFilled => "Board filled",
        };
        let block = Block::bordered()
            .title(title)
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        let lines = std::iter::once(Line::from(format!("  {cause}")))
            .chain(OverOpt::iter().map(|opt| opt.to_line(self.menu.selection == opt)));
        for (line, row) in lines.zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}
