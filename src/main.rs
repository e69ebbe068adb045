use clap::Parser;
use gitbrowser::commands::{execute_browse, BrowseArgs};
use gitbrowser::core::{
    dirs::get_cache_directory, print_error, print_error_with_structured_usage,
};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

const LOG_FILE: &str = "gitbrowser.log";

const USAGE: &[&str] = &[
    "gitbrowser [-C <path>]",
    "gitbrowser -c <revision> [-C <path>]",
    "gitbrowser --flake <path> [--flake-input <name>] [-C <path>]",
];

const OPTIONS: &[(&str, &str)] = &[
    ("-c, --commit-id", "Browse this revision instead of choosing a reference"),
    ("-C, --repository-path", "Repository to browse (default: current directory)"),
    ("--flake", "Take the revision from a flake.lock"),
    ("--flake-input", "Lock file input to read (default: repository name)"),
];

#[derive(Parser)]
#[command(name = "gitbrowser")]
#[command(about = "Browse a git repository's references, trees and files in the terminal")]
#[command(version)]
struct Cli {
    /// Revision to browse, skipping reference selection
    #[arg(short = 'c', long = "commit-id", conflicts_with = "flake")]
    commit_id: Option<String>,

    /// Path inside the repository to browse
    #[arg(short = 'C', long = "repository-path")]
    repository_path: Option<PathBuf>,

    /// flake.lock, flake.nix or flake directory pinning the revision
    #[arg(long)]
    flake: Option<PathBuf>,

    /// Name of the flake input locking this repository
    #[arg(long, requires = "flake")]
    flake_input: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

/// Send log records to a file in the cache directory; the terminal belongs to the UI.
fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    let log_dir = get_cache_directory();
    let file = fs::create_dir_all(&log_dir).and_then(|_| File::create(log_dir.join(LOG_FILE)));

    if let Ok(file) = file {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let repository_path = match cli.repository_path {
        Some(path) => path,
        None => match env::current_dir() {
            Ok(path) => path,
            Err(e) => {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        },
    };

    let args = BrowseArgs {
        commit_id: cli.commit_id,
        repository_path,
        flake: cli.flake,
        flake_input: cli.flake_input,
    };

    if let Err(e) = execute_browse(args) {
        log::error!("{e}");
        if e.is_configuration() {
            print_error_with_structured_usage(&e.to_string(), USAGE, OPTIONS);
        } else {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }
}
