//! Core functionality for gitbrowser.
//!
//! This module provides the non-interactive building blocks: repository access,
//! page arithmetic, the navigation stack, configuration and error handling.

pub mod config;
pub mod dirs;
pub mod error;
pub mod flake;
pub mod git;
pub mod history;
pub mod objects;
pub mod output;
pub mod pagination;

// === Error handling ===
// Core error type and result alias used throughout the application
pub use error::{GitBrowserError, Result};

// === Repository access ===
// Object model seen by the browser and its git2 implementation
pub use git::GitRepo;
pub use objects::{
    Container, Entry, EntryKind, Item, ItemClass, Leaf, LeafContent, ObjectStore, Pinned,
};

// === Navigation ===
// Page window arithmetic and the stack of entered containers
pub use history::History;
pub use pagination::{pagination, Page};

// === Configuration ===
pub use config::BrowserConfig;
pub use flake::commit_from_flake;

// === Output formatting ===
pub use output::{print_error, print_error_with_structured_usage};
