//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitBrowserError`] which covers every failure gitbrowser can
//! report. It uses `thiserror` for ergonomic error definitions and includes named
//! constructors for the structured variants.
//!
//! # Public API
//! - [`GitBrowserError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitBrowserError>`
//!
//! # Error Categories
//! - **Configuration**: Repository not found, conflicting options, flake lock problems,
//!   unreadable config file
//! - **Git operations**: git2 library errors, unknown revisions
//! - **Preconditions**: Zero page size, empty item lists
//! - **Terminal and pager**: Non-interactive stdout, pager exit failures

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Domain-specific error types for gitbrowser
#[derive(Error, Debug)]
pub enum GitBrowserError {
    // Repository errors
    #[error("Not a git repository: {path}")]
    NotARepository { path: PathBuf },

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("Revision '{revision}' does not name a commit")]
    RevisionNotFound { revision: String },

    #[error("Repository has no references to browse")]
    NoReferences,

    // Configuration errors
    #[error("Can't use --commit-id and --flake together")]
    ConflictingRevisionOptions,

    #[error("Can't find flake.lock from {path}")]
    FlakeLockNotFound { path: PathBuf },

    #[error("Input '{node}' is not present in {path}")]
    FlakeNodeMissing { node: String, path: PathBuf },

    #[error("Input '{node}' in {path} has no locked revision")]
    FlakeRevisionMissing { node: String, path: PathBuf },

    #[error("Invalid config file {path}: {source}")]
    InvalidConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid configuration: page size must be at least one row")]
    ZeroPageSize,

    // Precondition violations
    #[error("Nothing to select from an empty list")]
    EmptyList,

    // Terminal and pager errors
    #[error("gitbrowser requires an interactive terminal")]
    NotATerminal,

    #[error("Pager '{command}' exited with {status}")]
    PagerFailed { command: String, status: ExitStatus },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using GitBrowserError
pub type Result<T> = std::result::Result<T, GitBrowserError>;

impl GitBrowserError {
    /// Create a not-a-repository error for the path the user asked for
    pub fn not_a_repository(path: impl Into<PathBuf>) -> Self {
        Self::NotARepository { path: path.into() }
    }

    /// Create a revision not found error
    pub fn revision_not_found(revision: impl Into<String>) -> Self {
        Self::RevisionNotFound {
            revision: revision.into(),
        }
    }

    /// Create a flake lock not found error
    pub fn flake_lock_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FlakeLockNotFound { path: path.into() }
    }

    /// Create a flake node missing error
    pub fn flake_node_missing(node: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FlakeNodeMissing {
            node: node.into(),
            path: path.into(),
        }
    }

    /// Create a flake revision missing error
    pub fn flake_revision_missing(node: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FlakeRevisionMissing {
            node: node.into(),
            path: path.into(),
        }
    }

    /// Create an invalid config error naming the file that failed to parse
    pub fn invalid_config(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::InvalidConfig {
            path: path.into(),
            source,
        }
    }

    /// Create a pager failed error
    pub fn pager_failed(command: impl Into<String>, status: ExitStatus) -> Self {
        Self::PagerFailed {
            command: command.into(),
            status,
        }
    }

    /// Whether this error must stop the program before the session starts.
    ///
    /// Everything else raised during browsing is shown as a notice instead.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::NotARepository { .. }
                | Self::RevisionNotFound { .. }
                | Self::ConflictingRevisionOptions
                | Self::FlakeLockNotFound { .. }
                | Self::FlakeNodeMissing { .. }
                | Self::FlakeRevisionMissing { .. }
                | Self::InvalidConfig { .. }
                | Self::ZeroPageSize
        )
    }
}
