//! Interactive full-screen browsing.
//!
//! The navigation logic ([`selector`], [`browser`], [`session`]) only talks to the
//! terminal through the [`Screen`] trait. [`terminal`] and [`render`] are the only
//! modules that know about ratatui and crossterm.

pub mod browser;
pub mod keys;
pub mod pager;
pub mod render;
pub mod screen;
pub mod selector;
pub mod session;
pub mod terminal;
pub mod theme;

pub use browser::{BrowseState, Browser};
pub use keys::Command;
pub use pager::{CommandPager, Pager};
pub use screen::Screen;
pub use selector::{select, ListView, Selection};
pub use session::run_session;
pub use terminal::TerminalScreen;
pub use theme::Theme;
