//! The real [`Screen`]: ratatui over crossterm on stdout.
//!
//! The terminal is taken over when the screen is created and restored when it is
//! dropped. [`Screen::suspend`] releases it around an external program and a guard
//! takes it back on the way out, including when the program failed.

use crate::core::error::Result;
use crate::tui::keys::Command;
use crate::tui::render::{render_list, visible_rows};
use crate::tui::screen::Screen;
use crate::tui::selector::ListView;
use crate::tui::theme::Theme;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};
use log::{debug, warn};
use ratatui::DefaultTerminal;
use std::io::stdout;

pub struct TerminalScreen {
    terminal: DefaultTerminal,
    theme: Theme,
}

impl TerminalScreen {
    pub fn enter(theme: Theme) -> Result<Self> {
        let mut terminal = ratatui::try_init()?;
        terminal.hide_cursor()?;
        debug!("terminal initialised");
        Ok(Self { terminal, theme })
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        if let Err(e) = ratatui::try_restore() {
            warn!("failed to restore terminal: {e}");
        }
    }
}

/// Re-acquires the terminal when dropped.
struct Resume<'a> {
    terminal: &'a mut DefaultTerminal,
}

impl Drop for Resume<'_> {
    fn drop(&mut self) {
        let resumed = enable_raw_mode()
            .and_then(|_| execute!(stdout(), EnterAlternateScreen))
            .and_then(|_| self.terminal.hide_cursor())
            .and_then(|_| self.terminal.clear());
        match resumed {
            Ok(()) => debug!("terminal resumed"),
            Err(e) => warn!("failed to resume terminal: {e}"),
        }
    }
}

impl Screen for TerminalScreen {
    fn draw(&mut self, view: &ListView) -> Result<usize> {
        let rows = visible_rows(self.terminal.size()?.height);
        let page = view.page(rows)?;
        let theme = &self.theme;
        self.terminal.draw(|frame| {
            let area = frame.area();
            render_list(frame, area, view, page, rows, theme)
        })?;
        Ok(rows)
    }

    fn next_command(&mut self) -> Result<Command> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    debug!("key event: {:?} with modifiers {:?}", key.code, key.modifiers);
                    if let Some(command) = Command::from_key(key) {
                        return Ok(command);
                    }
                }
                Event::Resize(..) => return Ok(Command::Redraw),
                _ => {}
            }
        }
    }

    fn suspend<T, F>(&mut self, run: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        ratatui::try_restore()?;
        debug!("terminal released");
        let _resume = Resume {
            terminal: &mut self.terminal,
        };
        run()
    }
}
