//! Browsable items and the object store they are listed from.
//!
//! The browser only ever sees the closed [`Item`] type: either a reference name or a
//! tree entry tagged with its [`EntryKind`]. Containers are the things that can be
//! expanded into items; leaves are opened into a pager instead. The repository behind
//! them is hidden behind [`ObjectStore`], implemented with git2 by
//! [`GitRepo`](crate::core::git::GitRepo).

use crate::core::error::Result;
use git2::Oid;

/// What a tree entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Container,
    Leaf { binary: bool },
    /// Submodule commits and anything else a tree may hold.
    Other,
}

/// A named entry of a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    pub id: Oid,
}

impl Entry {
    pub fn new(name: impl Into<String>, kind: EntryKind, id: Oid) -> Self {
        Self {
            name: name.into(),
            kind,
            id,
        }
    }
}

/// Display classification used for styling and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemClass {
    Reference,
    Container,
    TextLeaf,
    BinaryLeaf,
    Other,
}

/// One row of a browsable list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Reference(String),
    Entry(Entry),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Reference(name) => name,
            Item::Entry(entry) => &entry.name,
        }
    }

    pub fn class(&self) -> ItemClass {
        match self {
            Item::Reference(_) => ItemClass::Reference,
            Item::Entry(entry) => match entry.kind {
                EntryKind::Container => ItemClass::Container,
                EntryKind::Leaf { binary: false } => ItemClass::TextLeaf,
                EntryKind::Leaf { binary: true } => ItemClass::BinaryLeaf,
                EntryKind::Other => ItemClass::Other,
            },
        }
    }

    /// Short kind label shown in front of the name.
    pub fn label(&self) -> &'static str {
        match self.class() {
            ItemClass::Reference => "ref",
            ItemClass::Container => "tree",
            ItemClass::TextLeaf => "text",
            ItemClass::BinaryLeaf => "binary",
            ItemClass::Other => "",
        }
    }

    pub fn display_name(&self) -> String {
        match self.class() {
            ItemClass::Container => format!("{}/", self.name()),
            _ => self.name().to_string(),
        }
    }

    /// Why confirming this item cannot go anywhere, if it can't.
    pub fn refusal(&self) -> Option<String> {
        match self.class() {
            ItemClass::BinaryLeaf => Some(format!("{} is binary, not opened", self.name())),
            ItemClass::Other => Some(format!("{} can't be opened", self.name())),
            _ => None,
        }
    }
}

/// Something that expands into an ordered list of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Container {
    /// The root tree of a commit. Contributes no path segment.
    Root { commit: Oid, tree: Oid },
    Sub { name: String, tree: Oid },
}

impl Container {
    /// The container behind an entry; leaves have none.
    pub fn from_entry(entry: &Entry) -> Option<Self> {
        match entry.kind {
            EntryKind::Container => Some(Container::Sub {
                name: entry.name.clone(),
                tree: entry.id,
            }),
            _ => None,
        }
    }

    pub fn tree_id(&self) -> Oid {
        match self {
            Container::Root { tree, .. } | Container::Sub { tree, .. } => *tree,
        }
    }

    pub fn path_segment(&self) -> Option<&str> {
        match self {
            Container::Root { .. } => None,
            Container::Sub { name, .. } => Some(name),
        }
    }

    /// The row this container occupies in its parent's listing.
    pub fn as_item(&self) -> Option<Item> {
        match self {
            Container::Root { .. } => None,
            Container::Sub { name, tree } => Some(Item::Entry(Entry::new(
                name.clone(),
                EntryKind::Container,
                *tree,
            ))),
        }
    }
}

/// Decoded payload of a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafContent {
    Text(String),
    Binary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub name: String,
    pub content: LeafContent,
}

impl Leaf {
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            LeafContent::Text(text) => Some(text),
            LeafContent::Binary => None,
        }
    }
}

/// A commit chosen up front, bypassing reference selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pinned {
    pub root: Container,
    /// Short identifier used as the revision label.
    pub label: String,
}

/// Read-only access to a repository's object graph.
pub trait ObjectStore {
    /// Human readable location, used as the title of the reference list.
    fn location(&self) -> String;

    fn repo_name(&self) -> String;

    /// All reference names, in a stable order.
    fn references(&self) -> Result<Vec<String>>;

    /// Resolve a reference to its commit's root container.
    fn reference_root(&self, name: &str) -> Result<Container>;

    /// Resolve a user supplied revision to a pinned commit.
    fn pin(&self, revision: &str) -> Result<Pinned>;

    fn entries(&self, container: &Container) -> Result<Vec<Item>>;

    fn leaf(&self, entry: &Entry) -> Result<Leaf>;
}
