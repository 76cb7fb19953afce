use std::process::ExitStatus;
use thiserror::Error;

/// startup checks that must pass before the interactive flow begins
#[derive(Error, Debug)]
pub enum PreconditionError {
    #[error("interactive terminal required")]
    NotInteractive,

    #[error("not in a git repository")]
    NotARepository(#[source] git2::Error),

    #[error("repository has no working directory")]
    BareRepository,
}

/// failures of the final `git commit` invocation
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("failed to run git commit")]
    Spawn(#[source] std::io::Error),

    #[error("git commit failed with {0}")]
    Failed(ExitStatus),
}
