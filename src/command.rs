use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Home,
    End,
    Next,
    Prev,
    R,
    Q,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (_, KeyCode::BackTab) => Some(Command::Prev),
            (m, _) if !normal_modifiers.contains(m) => None,
            (_, KeyCode::Char('w' | 'W' | 'k') | KeyCode::Up) => Some(Command::Up),
            (_, KeyCode::Char('s' | 'S' | 'j') | KeyCode::Down) => Some(Command::Down),
            (_, KeyCode::Char('a' | 'A' | 'h') | KeyCode::Left) => Some(Command::Left),
            (_, KeyCode::Char('d' | 'D' | 'l') | KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Enter) => Some(Command::Enter),
            (_, KeyCode::Esc) => Some(Command::Esc),
            (_, KeyCode::Home) => Some(Command::Home),
            (_, KeyCode::End) => Some(Command::End),
            (_, KeyCode::Tab) => Some(Command::Next),
            (_, KeyCode::Char('r' | 'R')) => Some(Command::R),
            (_, KeyCode::Char('q' | 'Q')) => Some(Command::Q),
            _ => None,
        }
    }
}
