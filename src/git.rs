use crate::constants::PREFERRED_SCOPE_DIRS;
use crate::error::{ExecutionError, PreconditionError};
use git2::Repository;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// check we're somewhere inside a git working tree, returning its root
pub fn sanity_check(path: &Path) -> Result<PathBuf, PreconditionError> {
    let repo = Repository::discover(path).map_err(PreconditionError::NotARepository)?;
    repo.workdir()
        .map(Path::to_path_buf)
        .ok_or(PreconditionError::BareRepository)
}

/// scope suggestions from the tracked top-level directories of the repository
///
/// well-known source directories come first, the rest follow in path order.
/// any failure yields an empty list; suggestions are a convenience only
pub fn detect_scope_candidates(root: &Path) -> Vec<String> {
    match tracked_top_level_dirs(root) {
        Ok(dirs) => order_scopes(dirs),
        Err(_) => Vec::new(),
    }
}

/// first path component of every index entry that lives in a subdirectory
fn tracked_top_level_dirs(root: &Path) -> Result<BTreeSet<String>, git2::Error> {
    let repo = Repository::open(root)?;
    let index = repo.index()?;

    let dirs = index
        .iter()
        .filter_map(|entry| {
            let slash = entry.path.iter().position(|&b| b == b'/')?;
            Some(String::from_utf8_lossy(&entry.path[..slash]).into_owned())
        })
        .collect();

    Ok(dirs)
}

fn order_scopes(mut dirs: BTreeSet<String>) -> Vec<String> {
    let mut scopes = Vec::with_capacity(dirs.len());
    for preferred in PREFERRED_SCOPE_DIRS {
        if dirs.remove(*preferred) {
            scopes.push((*preferred).to_string());
        }
    }
    scopes.extend(dirs);
    scopes
}

/// create a commit with the given message
///
/// uses the git binary rather than git2 so commit signing (gpg/ssh) and hooks
/// (pre-commit, commit-msg, etc.) work as expected; output goes straight to the terminal
pub fn commit(path: &Path, message: &str) -> Result<(), ExecutionError> {
    let status = std::process::Command::new("git")
        .arg("commit")
        .arg("--message")
        .arg(message)
        .current_dir(path)
        .status()
        .map_err(ExecutionError::Spawn)?;

    if status.success() {
        Ok(())
    } else {
        Err(ExecutionError::Failed(status))
    }
}
