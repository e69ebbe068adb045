//! gitbrowser - an interactive terminal browser for a git repository's object graph.
//!
//! Users walk references → commits → trees in a paged full-screen list and open text
//! blobs in an external pager. Nothing is ever written to the repository.
//!
//! # Public API
//! - [`core`]: Repository access, pagination, navigation history, configuration, errors
//! - [`tui`]: List views, the traversal controller and the terminal they run on
//! - [`commands`]: The `gitbrowser` command itself

pub mod commands;
pub mod core;
pub mod tui;

// Re-export the most used items for external users
pub use core::{
    pagination,
    BrowserConfig,
    Container,
    Entry,
    EntryKind,
    // Error handling
    GitBrowserError,
    // Repository access
    GitRepo,
    // Navigation
    History,
    Item,
    Leaf,
    LeafContent,
    ObjectStore,
    Page,
    Pinned,
    Result,
};

pub use tui::{run_session, BrowseState, Browser, Command, ListView, Pager, Screen, Selection};
