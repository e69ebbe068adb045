//! Pinned revision lookup from a Nix `flake.lock` file.

use crate::core::error::{GitBrowserError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const LOCK_FILE: &str = "flake.lock";

#[derive(Debug, Deserialize)]
struct FlakeLock {
    #[serde(default)]
    nodes: HashMap<String, FlakeNode>,
}

#[derive(Debug, Deserialize)]
struct FlakeNode {
    locked: Option<LockedInput>,
}

#[derive(Debug, Deserialize)]
struct LockedInput {
    rev: Option<String>,
}

/// Find the lock file a user pointed at.
///
/// Accepts the lock file itself, a sibling `flake.nix`, or the flake directory.
pub fn locate_lock_file(path: &Path) -> Result<PathBuf> {
    let candidate = match path.file_name().and_then(|name| name.to_str()) {
        Some(LOCK_FILE) => path.to_path_buf(),
        Some("flake.nix") => path
            .parent()
            .map(|dir| dir.join(LOCK_FILE))
            .unwrap_or_else(|| PathBuf::from(LOCK_FILE)),
        _ if path.is_dir() => path.join(LOCK_FILE),
        _ => return Err(GitBrowserError::flake_lock_not_found(path)),
    };
    if candidate.is_file() {
        Ok(candidate)
    } else {
        Err(GitBrowserError::flake_lock_not_found(path))
    }
}

/// Parse lock file content and return the locked revision of `node`.
pub fn locked_revision(content: &str, node: &str, lock_path: &Path) -> Result<String> {
    let lock: FlakeLock = serde_json::from_str(content)?;
    let entry = lock
        .nodes
        .get(node)
        .ok_or_else(|| GitBrowserError::flake_node_missing(node, lock_path))?;
    entry
        .locked
        .as_ref()
        .and_then(|locked| locked.rev.clone())
        .ok_or_else(|| GitBrowserError::flake_revision_missing(node, lock_path))
}

/// Revision that `flake` pins for the input called `node`.
pub fn commit_from_flake(flake: &Path, node: &str) -> Result<String> {
    let lock_path = locate_lock_file(flake)?;
    let content = std::fs::read_to_string(&lock_path)?;
    let rev = locked_revision(&content, node, &lock_path)?;
    log::info!("{} pins {node} at {rev}", lock_path.display());
    Ok(rev)
}
