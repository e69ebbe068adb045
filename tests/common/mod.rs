//! Shared utilities for gitbrowser integration tests.
//!
//! Repositories are built directly with git2 so tests don't depend on a git binary
//! or its configuration. The browser is driven through a scripted screen.

pub mod assertions;
pub mod fixtures;
pub mod repository;
pub mod screen;
