//! External pager used to display text leaves.

use crate::core::config::BrowserConfig;
use crate::core::error::{GitBrowserError, Result};
use crate::core::objects::Leaf;
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

pub const DEFAULT_PAGER: &str = "less";

/// Displays a leaf and blocks until the user is done with it.
pub trait Pager {
    fn show(&self, leaf: &Leaf) -> Result<()>;
}

/// Pick the pager command line.
///
/// `GITBROWSER_PAGER` wins over the config file, which wins over `PAGER`.
pub fn resolve_pager_command(
    override_var: Option<String>,
    configured: Option<&str>,
    pager_var: Option<String>,
) -> String {
    override_var
        .or_else(|| configured.map(str::to_string))
        .or(pager_var)
        .map(|command| command.trim().to_string())
        .filter(|command| !command.is_empty())
        .unwrap_or_else(|| DEFAULT_PAGER.to_string())
}

/// Pipes the leaf's text into an external command.
#[derive(Debug, Clone)]
pub struct CommandPager {
    command: String,
}

impl CommandPager {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn from_config(config: &BrowserConfig) -> Self {
        Self::new(resolve_pager_command(
            std::env::var("GITBROWSER_PAGER").ok(),
            config.pager.as_deref(),
            std::env::var("PAGER").ok(),
        ))
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Pager for CommandPager {
    fn show(&self, leaf: &Leaf) -> Result<()> {
        let text = leaf.text().unwrap_or_default();
        let mut words = self.command.split_whitespace();
        let program = words.next().unwrap_or(DEFAULT_PAGER);

        log::debug!("paging {} ({} bytes) through {}", leaf.name, text.len(), self.command);
        let mut child = Command::new(program)
            .args(words)
            .stdin(Stdio::piped())
            .spawn()?;

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        // stdin is closed here, so the pager sees end of input before we wait on it.
        let status = child.wait()?;
        match written {
            Ok(()) => {}
            // The pager quit before reading everything.
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
            Err(e) => return Err(e.into()),
        }
        if status.success() {
            Ok(())
        } else {
            Err(GitBrowserError::pager_failed(self.command.clone(), status))
        }
    }
}
