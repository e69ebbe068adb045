//! Read-only git repository access.
//!
//! This module provides the [`GitRepo`] struct, which wraps the `git2` library and
//! implements [`ObjectStore`] for the browser: listing references, peeling them to
//! commits, listing trees and reading blobs.
//!
//! # Key Features
//! - **Discovery**: Opens the repository containing a path, not only its root
//! - **Stable listings**: References are sorted by name, tree entries keep git order
//! - **Binary detection**: Blob classification comes from libgit2's heuristics
//! - **Decode fallback**: Blobs that are not UTF-8 are reported as binary

use crate::core::{
    error::{GitBrowserError, Result},
    objects::{Container, Entry, EntryKind, Item, Leaf, LeafContent, ObjectStore, Pinned},
};
use git2::{ObjectType, Oid, Repository};
use std::path::Path;

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|e| {
            log::debug!("discover failed for {}: {e}", path.display());
            GitBrowserError::not_a_repository(path)
        })?;
        log::info!("opened repository at {}", repo.path().display());
        Ok(GitRepo { repo })
    }

    /// Classify a tree entry.
    ///
    /// A blob that can't be read is listed as text so that opening it reports the
    /// failure for that entry alone.
    fn entry_kind(&self, kind: Option<ObjectType>, id: Oid, name: &str) -> EntryKind {
        match kind {
            Some(ObjectType::Tree) => EntryKind::Container,
            Some(ObjectType::Blob) => match self.repo.find_blob(id) {
                Ok(blob) => EntryKind::Leaf {
                    binary: blob.is_binary(),
                },
                Err(e) => {
                    log::warn!("can't classify {name}: {e}");
                    EntryKind::Leaf { binary: false }
                }
            },
            _ => EntryKind::Other,
        }
    }
}

/// First seven hex digits of an object id.
pub fn short_id(oid: Oid) -> String {
    oid.to_string()[..7].to_string()
}

impl ObjectStore for GitRepo {
    fn location(&self) -> String {
        self.repo.path().display().to_string()
    }

    fn repo_name(&self) -> String {
        let path = self.repo.workdir().unwrap_or_else(|| self.repo.path());
        let path = if path.file_name().is_some_and(|name| name == ".git") {
            path.parent().unwrap_or(path)
        } else {
            path
        };
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn references(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for reference in self.repo.references()? {
            match reference?.name() {
                Some(name) => names.push(name.to_string()),
                None => log::warn!("skipping reference with a non UTF-8 name"),
            }
        }
        names.sort();
        Ok(names)
    }

    fn reference_root(&self, name: &str) -> Result<Container> {
        let commit = self.repo.find_reference(name)?.peel_to_commit()?;
        log::debug!("reference {name} resolved to {}", commit.id());
        Ok(Container::Root {
            commit: commit.id(),
            tree: commit.tree_id(),
        })
    }

    fn pin(&self, revision: &str) -> Result<Pinned> {
        let commit = self
            .repo
            .revparse_single(revision)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| {
                log::debug!("revparse of {revision} failed: {e}");
                GitBrowserError::revision_not_found(revision)
            })?;
        Ok(Pinned {
            root: Container::Root {
                commit: commit.id(),
                tree: commit.tree_id(),
            },
            label: short_id(commit.id()),
        })
    }

    fn entries(&self, container: &Container) -> Result<Vec<Item>> {
        let tree = self.repo.find_tree(container.tree_id())?;
        let mut items = Vec::with_capacity(tree.len());
        for entry in tree.iter() {
            let name = String::from_utf8_lossy(entry.name_bytes()).into_owned();
            let kind = self.entry_kind(entry.kind(), entry.id(), &name);
            items.push(Item::Entry(Entry::new(name, kind, entry.id())));
        }
        Ok(items)
    }

    fn leaf(&self, entry: &Entry) -> Result<Leaf> {
        let blob = self.repo.find_blob(entry.id)?;
        let content = if blob.is_binary() {
            LeafContent::Binary
        } else {
            match std::str::from_utf8(blob.content()) {
                Ok(text) => LeafContent::Text(text.to_string()),
                Err(e) => {
                    log::warn!("{} is not valid UTF-8, treating as binary: {e}", entry.name);
                    LeafContent::Binary
                }
            }
        };
        Ok(Leaf {
            name: entry.name.clone(),
            content,
        })
    }
}
