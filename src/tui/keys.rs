use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Navigation commands understood by the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    PageUp,
    PageDown,
    First,
    Last,
    Confirm,
    Back,
    Quit,
    /// Terminal resized; nothing changes but the frame.
    Redraw,
}

impl Command {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('x' | 'c')) => Some(Command::Quit),
            (KeyModifiers::CONTROL, KeyCode::Char('g')) => Some(Command::Back),
            (_, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => Some(Command::Up),
            (_, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => Some(Command::Down),
            (_, KeyCode::PageUp) | (KeyModifiers::NONE, KeyCode::Char('b')) => {
                Some(Command::PageUp)
            }
            (_, KeyCode::PageDown) | (KeyModifiers::NONE, KeyCode::Char(' ')) => {
                Some(Command::PageDown)
            }
            (_, KeyCode::Home) | (KeyModifiers::NONE, KeyCode::Char('g')) => Some(Command::First),
            (_, KeyCode::End)
            | (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                Some(Command::Last)
            }
            (_, KeyCode::Enter) => Some(Command::Confirm),
            (_, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left) => Some(Command::Back),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Footer help line.
pub const KEY_HELP: &str = "^X Exit | ^G Back/Refresh | Enter Open | PgUp/PgDn Page";
