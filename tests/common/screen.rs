//! Scripted stand-ins for the terminal, the pager and an unreliable repository

#![allow(dead_code)]

use gitbrowser::core::error::{GitBrowserError, Result};
use gitbrowser::core::objects::{Container, Entry, Item, Leaf, ObjectStore, Pinned};
use gitbrowser::tui::{Command, ListView, Pager, Screen};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// What one drawn list looked like.
#[derive(Debug, Clone)]
pub struct Frame {
    pub title: String,
    pub selected: usize,
    pub selected_name: String,
    pub notice: Option<String>,
    pub visible: Vec<String>,
}

/// Screen that replays a fixed list of commands and records every frame.
///
/// Running out of commands is an error so a wrong script can't loop forever.
pub struct ScriptedScreen {
    rows: usize,
    commands: VecDeque<Command>,
    pub frames: Vec<Frame>,
    pub suspensions: usize,
}

impl ScriptedScreen {
    pub fn new(rows: usize, commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            rows,
            commands: commands.into_iter().collect(),
            frames: Vec::new(),
            suspensions: 0,
        }
    }

    pub fn push(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.commands.extend(commands);
    }

    pub fn last_frame(&self) -> &Frame {
        self.frames.last().expect("nothing was drawn")
    }

    pub fn titles(&self) -> Vec<String> {
        self.frames.iter().map(|frame| frame.title.clone()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl Screen for ScriptedScreen {
    fn draw(&mut self, view: &ListView) -> Result<usize> {
        let page = view.page(self.rows)?;
        let visible = page
            .range(view.items().len(), self.rows)
            .map(|index| view.items()[index].name().to_string())
            .collect();
        self.frames.push(Frame {
            title: view.title().to_string(),
            selected: view.selected(),
            selected_name: view.selected_item().name().to_string(),
            notice: view.notice().map(str::to_string),
            visible,
        });
        Ok(self.rows)
    }

    fn next_command(&mut self) -> Result<Command> {
        self.commands.pop_front().ok_or_else(|| {
            GitBrowserError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "command script exhausted",
            ))
        })
    }

    fn suspend<T, F>(&mut self, run: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        self.suspensions += 1;
        run()
    }
}

/// Pager that remembers what it was shown.
#[derive(Default)]
pub struct RecordingPager {
    pub shown: RefCell<Vec<(String, String)>>,
    pub fail: bool,
}

impl RecordingPager {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl Pager for RecordingPager {
    fn show(&self, leaf: &Leaf) -> Result<()> {
        self.shown.borrow_mut().push((
            leaf.name.clone(),
            leaf.text().unwrap_or_default().to_string(),
        ));
        if self.fail {
            return Err(GitBrowserError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "pager not installed",
            )));
        }
        Ok(())
    }
}

/// Store that fails to list one named sub-tree.
pub struct FlakyStore<S> {
    pub inner: S,
    pub broken: String,
}

impl<S: ObjectStore> ObjectStore for FlakyStore<S> {
    fn location(&self) -> String {
        self.inner.location()
    }

    fn repo_name(&self) -> String {
        self.inner.repo_name()
    }

    fn references(&self) -> Result<Vec<String>> {
        self.inner.references()
    }

    fn reference_root(&self, name: &str) -> Result<Container> {
        self.inner.reference_root(name)
    }

    fn pin(&self, revision: &str) -> Result<Pinned> {
        self.inner.pin(revision)
    }

    fn entries(&self, container: &Container) -> Result<Vec<Item>> {
        if container.path_segment() == Some(self.broken.as_str()) {
            return Err(GitBrowserError::Git(git2::Error::from_str(
                "simulated read failure",
            )));
        }
        self.inner.entries(container)
    }

    fn leaf(&self, entry: &Entry) -> Result<Leaf> {
        self.inner.leaf(entry)
    }
}

/// Store whose reference list can be read once and then fails.
pub struct StaleReferencesStore<S> {
    pub inner: S,
    pub reads: Cell<usize>,
}

impl<S> StaleReferencesStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            reads: Cell::new(0),
        }
    }
}

impl<S: ObjectStore> ObjectStore for StaleReferencesStore<S> {
    fn location(&self) -> String {
        self.inner.location()
    }

    fn repo_name(&self) -> String {
        self.inner.repo_name()
    }

    fn references(&self) -> Result<Vec<String>> {
        self.reads.set(self.reads.get() + 1);
        if self.reads.get() > 1 {
            return Err(GitBrowserError::Git(git2::Error::from_str(
                "simulated reference failure",
            )));
        }
        self.inner.references()
    }

    fn reference_root(&self, name: &str) -> Result<Container> {
        self.inner.reference_root(name)
    }

    fn pin(&self, revision: &str) -> Result<Pinned> {
        self.inner.pin(revision)
    }

    fn entries(&self, container: &Container) -> Result<Vec<Item>> {
        self.inner.entries(container)
    }

    fn leaf(&self, entry: &Entry) -> Result<Leaf> {
        self.inner.leaf(entry)
    }
}
