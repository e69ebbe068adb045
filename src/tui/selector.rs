//! Paged list view with a single highlighted item.
//!
//! [`ListView`] holds the state of one list: a snapshot of its items, the selected
//! index and an optional one-line notice. [`select`] runs the draw/read/apply loop on a
//! [`Screen`] until the user confirms an item or asks to go back or quit.

use crate::core::error::{GitBrowserError, Result};
use crate::core::objects::Item;
use crate::core::pagination::{pagination, Page};
use crate::tui::keys::Command;
use crate::tui::screen::Screen;

/// How a list view ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Confirmed(Item),
    Back,
    Quit,
}

#[derive(Debug, Clone)]
pub struct ListView {
    title: String,
    items: Vec<Item>,
    selected: usize,
    notice: Option<String>,
}

impl ListView {
    /// Build a view over a non-empty list.
    ///
    /// When `previous` is listed, it starts selected; otherwise the first item does.
    pub fn new(title: impl Into<String>, items: Vec<Item>, previous: Option<&Item>) -> Result<Self> {
        if items.is_empty() {
            return Err(GitBrowserError::EmptyList);
        }
        let selected = previous
            .and_then(|previous| items.iter().position(|item| item == previous))
            .unwrap_or(0);
        Ok(Self {
            title: title.into(),
            items,
            selected,
            notice: None,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> &Item {
        &self.items[self.selected]
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn page(&self, visible_item_count: usize) -> Result<Page> {
        pagination(self.items.len(), visible_item_count, self.selected)
    }

    /// Apply one command, returning the outcome once the view is done.
    pub fn apply(&mut self, command: Command, visible_item_count: usize) -> Result<Option<Selection>> {
        let len = self.items.len();
        let page = self.page(visible_item_count)?;
        if command != Command::Redraw {
            self.notice = None;
        }

        match command {
            Command::Up => self.selected = (self.selected + len - 1) % len,
            Command::Down => self.selected = (self.selected + 1) % len,
            Command::PageUp => {
                self.selected = if page.is_first() {
                    0
                } else {
                    self.selected - visible_item_count
                };
            }
            Command::PageDown => {
                self.selected = if page.is_last() {
                    len - 1
                } else {
                    (self.selected + visible_item_count).min(len - 1)
                };
            }
            Command::First => self.selected = 0,
            Command::Last => self.selected = len - 1,
            Command::Confirm => {
                let item = self.selected_item();
                match item.refusal() {
                    Some(reason) => {
                        log::debug!("refused to open {}", item.name());
                        self.notice = Some(reason);
                    }
                    None => return Ok(Some(Selection::Confirmed(item.clone()))),
                }
            }
            Command::Back => return Ok(Some(Selection::Back)),
            Command::Quit => return Ok(Some(Selection::Quit)),
            Command::Redraw => {}
        }
        Ok(None)
    }
}

/// Run `view` interactively until it produces a [`Selection`].
pub fn select<U: Screen>(screen: &mut U, view: &mut ListView) -> Result<Selection> {
    loop {
        let rows = screen.draw(view)?;
        let command = screen.next_command()?;
        if let Some(selection) = view.apply(command, rows)? {
            log::debug!("{} -> {:?}", view.title(), selection);
            return Ok(selection);
        }
    }
}
