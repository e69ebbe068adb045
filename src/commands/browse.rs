use crate::core::{
    config::BrowserConfig,
    error::{GitBrowserError, Result},
    flake::commit_from_flake,
    git::GitRepo,
    objects::ObjectStore,
};
use crate::tui::{run_session, Browser, CommandPager, TerminalScreen, Theme};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Options of a browsing session, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct BrowseArgs {
    pub commit_id: Option<String>,
    pub repository_path: PathBuf,
    pub flake: Option<PathBuf>,
    /// Lock file input to read; defaults to the repository name.
    pub flake_input: Option<String>,
}

/// The revision to pin, if any, from `--commit-id` or a flake lock.
pub fn resolve_revision(repo: &GitRepo, args: &BrowseArgs) -> Result<Option<String>> {
    match (&args.commit_id, &args.flake) {
        (Some(_), Some(_)) => Err(GitBrowserError::ConflictingRevisionOptions),
        (Some(commit_id), None) => Ok(Some(commit_id.clone())),
        (None, Some(flake)) => {
            let node = args
                .flake_input
                .clone()
                .unwrap_or_else(|| repo.repo_name());
            commit_from_flake(flake, &node).map(Some)
        }
        (None, None) => Ok(None),
    }
}

pub fn execute_browse(args: BrowseArgs) -> Result<()> {
    if args.commit_id.is_some() && args.flake.is_some() {
        return Err(GitBrowserError::ConflictingRevisionOptions);
    }

    let git_repo = GitRepo::open(&args.repository_path)?;
    let pinned = resolve_revision(&git_repo, &args)?
        .map(|revision| git_repo.pin(&revision))
        .transpose()?;
    let config = BrowserConfig::load()?;

    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        return Err(GitBrowserError::NotATerminal);
    }

    let pager = CommandPager::from_config(&config);
    log::info!("using pager '{}'", pager.command());

    let mut browser = Browser::new(git_repo, pinned);
    let opened = {
        let mut screen = TerminalScreen::enter(Theme::from_config(&config))?;
        run_session(&mut browser, &mut screen, &pager)?
    };
    log::info!("session ended after opening {opened} leaves");
    Ok(())
}
