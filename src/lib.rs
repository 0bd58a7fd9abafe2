pub(crate) mod cli;
pub mod command;
pub mod purge;
pub mod shell;
pub(crate) mod utils;

use crate::cli::cli_format_path;
use crate::purge::{run_purge, FailurePolicy, PurgeQueue};
use crate::shell::ShellExecutor;
use std::path::{Path, PathBuf};

pub fn resolve_binary(path: &Path) -> anyhow::Result<PathBuf> {
    Ok(which::which(path)?)
}

/// Removes the contents of `app_dir` and then the contents of `git_dir` using the host shell.
///
/// Both paths are used as raw prefixes of a `rm -Rf <path>*` command line.
pub fn purge_dirs(app_dir: &str, git_dir: &str, policy: FailurePolicy) -> anyhow::Result<()> {
    for (name, dir) in [("app", app_dir), ("git", git_dir)] {
        if dir.is_empty() {
            log::info!(
                "The {} directory is empty, everything matching `*` in {} will be removed",
                name,
                cli_format_path(current_dir_display())
            );
        }
    }

    let queue = PurgeQueue::from_dirs(app_dir, git_dir);
    let mut executor = ShellExecutor::new();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    run_purge(queue, &mut executor, &mut stdout, policy)?;
    Ok(())
}

fn current_dir_display() -> String {
    std::env::current_dir()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|_| "the current directory".to_string())
}
