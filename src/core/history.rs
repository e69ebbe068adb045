//! Navigation stack of entered containers.
//!
//! Read bottom to top, the stack is the path from the commit's root tree to the
//! container currently listed. Popping it yields the parent together with the row the
//! user descended from, so the parent list can highlight it again.

use crate::core::objects::{Container, Item};

#[derive(Debug, Default, Clone)]
pub struct History {
    containers: Vec<Container>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.containers.len()
    }

    pub fn push(&mut self, container: Container) {
        log::debug!("history push {:?} at depth {}", container, self.depth());
        self.containers.push(container);
    }

    pub fn pop(&mut self) -> Option<Container> {
        let popped = self.containers.pop();
        log::debug!("history pop {:?} to depth {}", popped, self.depth());
        popped
    }

    /// The container currently being listed.
    pub fn top(&self) -> Option<&Container> {
        self.containers.last()
    }

    pub fn clear(&mut self) {
        self.containers.clear();
    }

    /// Pop the current container and return the row to highlight in its parent.
    ///
    /// A popped root tree has no row in any tree listing, so it yields `None`.
    pub fn back(&mut self) -> Option<Item> {
        self.pop().and_then(|container| container.as_item())
    }

    /// Slash separated path of the sub-containers on the stack.
    pub fn path(&self) -> String {
        let segments: Vec<&str> = self
            .containers
            .iter()
            .filter_map(Container::path_segment)
            .collect();
        if segments.is_empty() {
            ".".to_string()
        } else {
            segments.join("/")
        }
    }

    /// View title: `<repository>@<revision>:<path>`.
    pub fn label(&self, repo_name: &str, revision: &str) -> String {
        format!("{repo_name}@{revision}:{}", self.path())
    }
}
