//! Traversal controller: references → commit → trees → text leaf.
//!
//! [`Browser`] owns the navigation [`History`] for a whole session. Each call to
//! [`Browser::next_leaf`] runs list views until the user confirms a text leaf, which is
//! returned with the history left intact, or quits. Calling it again resumes in the
//! container the leaf was opened from, with the leaf highlighted.
//!
//! Read failures and empty trees never end the session: the browser backs out one
//! level and shows the problem as a notice on the next list.

use crate::core::error::{GitBrowserError, Result};
use crate::core::history::History;
use crate::core::objects::{Container, Item, Leaf, ObjectStore, Pinned};
use crate::tui::screen::Screen;
use crate::tui::selector::{select, ListView, Selection};
use log::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseState {
    /// No container entered yet: a reference (or the pinned commit) comes next.
    AtRoot,
    /// The top of the history is being listed.
    Descending,
}

enum Step {
    Continue,
    Leaf(Leaf),
    Quit,
}

pub struct Browser<S: ObjectStore> {
    store: S,
    pinned: Option<Pinned>,
    history: History,
    revision: String,
    reference: Option<String>,
    /// Last reference list read, shown again when re-reading it fails.
    references: Vec<String>,
    previous: Option<Item>,
    notice: Option<String>,
}

impl<S: ObjectStore> Browser<S> {
    pub fn new(store: S, pinned: Option<Pinned>) -> Self {
        Self {
            store,
            pinned,
            history: History::new(),
            revision: String::new(),
            reference: None,
            references: Vec::new(),
            previous: None,
            notice: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Label of the revision being browsed: a reference name or a short commit id.
    pub fn revision(&self) -> &str {
        &self.revision
    }

    pub fn state(&self) -> BrowseState {
        if self.history.is_empty() {
            BrowseState::AtRoot
        } else {
            BrowseState::Descending
        }
    }

    /// Show `message` on the next list drawn.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    /// Browse until a text leaf is confirmed (`Some`) or the user quits (`None`).
    pub fn next_leaf<U: Screen>(&mut self, screen: &mut U) -> Result<Option<Leaf>> {
        loop {
            let step = match self.history.top().cloned() {
                None => self.enter_root(screen)?,
                Some(container) => match self.container_view(&container)? {
                    Some(mut view) => self.browse_container(screen, &mut view)?,
                    None => Step::Continue,
                },
            };
            match step {
                Step::Continue => {}
                Step::Leaf(leaf) => return Ok(Some(leaf)),
                Step::Quit => {
                    info!("session quit at depth {}", self.history.depth());
                    self.history.clear();
                    return Ok(None);
                }
            }
        }
    }

    fn enter_root<U: Screen>(&mut self, screen: &mut U) -> Result<Step> {
        if let Some(pinned) = &self.pinned {
            debug!("entering pinned commit {}", pinned.label);
            self.revision = pinned.label.clone();
            self.history.push(pinned.root.clone());
            return Ok(Step::Continue);
        }

        match self.store.references() {
            Ok(references) => self.references = references,
            Err(e) if !self.references.is_empty() => {
                warn!("failed to refresh references: {e}");
                self.notice = Some(format!("Can't refresh references: {e}"));
            }
            Err(e) => return Err(e),
        }
        let items: Vec<Item> = self.references.iter().cloned().map(Item::Reference).collect();
        let mut view = ListView::new(self.store.location(), items, self.previous.take().as_ref())
            .map_err(|_| GitBrowserError::NoReferences)?;
        if let Some(notice) = self.notice.take() {
            view.set_notice(notice);
        }

        loop {
            match select(screen, &mut view)? {
                Selection::Quit => return Ok(Step::Quit),
                Selection::Back => {
                    // Back on the reference list re-reads the references.
                    self.previous = Some(view.selected_item().clone());
                    return Ok(Step::Continue);
                }
                Selection::Confirmed(Item::Reference(name)) => {
                    match self.store.reference_root(&name) {
                        Ok(root) => {
                            info!("browsing {name}");
                            self.revision = name.clone();
                            self.reference = Some(name);
                            self.history.push(root);
                            return Ok(Step::Continue);
                        }
                        Err(e) => {
                            warn!("failed to resolve {name}: {e}");
                            view.set_notice(format!("Can't open {name}: {e}"));
                        }
                    }
                }
                Selection::Confirmed(item) => {
                    view.set_notice(format!("{} is not a reference", item.name()));
                }
            }
        }
    }

    /// List `container`, or back out of it with a notice when that is not possible.
    fn container_view(&mut self, container: &Container) -> Result<Option<ListView>> {
        let pinned_root = self.pinned.is_some() && self.history.depth() == 1;
        let items = match self.store.entries(container) {
            Ok(items) => items,
            // Backing out of the pinned root would re-enter it straight away.
            Err(e) if pinned_root => return Err(e),
            Err(e) => {
                warn!("failed to list {}: {e}", self.history.path());
                self.notice = Some(format!("Can't read {}: {e}", self.history.path()));
                self.back();
                return Ok(None);
            }
        };

        let title = self.history.label(&self.store.repo_name(), &self.revision);
        match ListView::new(title, items, self.previous.take().as_ref()) {
            Ok(mut view) => {
                if let Some(notice) = self.notice.take() {
                    view.set_notice(notice);
                }
                Ok(Some(view))
            }
            Err(e) if pinned_root => Err(e),
            Err(_) => {
                debug!("{} is empty", self.history.path());
                self.notice = Some(format!("{} is empty", self.history.path()));
                self.back();
                Ok(None)
            }
        }
    }

    fn browse_container<U: Screen>(&mut self, screen: &mut U, view: &mut ListView) -> Result<Step> {
        loop {
            match select(screen, view)? {
                Selection::Quit => return Ok(Step::Quit),
                Selection::Back => {
                    self.back();
                    return Ok(Step::Continue);
                }
                Selection::Confirmed(Item::Entry(entry)) => {
                    if let Some(sub) = Container::from_entry(&entry) {
                        self.history.push(sub);
                        return Ok(Step::Continue);
                    }
                    match self.store.leaf(&entry) {
                        Ok(leaf) if leaf.text().is_some() => {
                            info!("opening {}/{}", self.history.path(), leaf.name);
                            self.previous = Some(Item::Entry(entry));
                            return Ok(Step::Leaf(leaf));
                        }
                        Ok(_) => view.set_notice(format!("{} is binary, not opened", entry.name)),
                        Err(e) => {
                            warn!("failed to read {}: {e}", entry.name);
                            view.set_notice(format!("Can't read {}: {e}", entry.name));
                        }
                    }
                }
                Selection::Confirmed(item) => {
                    view.set_notice(format!("{} can't be opened here", item.name()));
                }
            }
        }
    }

    /// Pop one level and remember which row to highlight in the level below.
    fn back(&mut self) {
        self.previous = self.history.back();
        if self.history.is_empty() {
            self.previous = self.reference.clone().map(Item::Reference);
        }
    }
}
