mod cli;
mod config;
mod constants;
mod error;
mod flow;
mod git;
mod message;
mod scopes;
mod session;
mod steps;
mod theme;
mod ui;

use crate::config::Config;
use crate::error::PreconditionError;
use crate::flow::Flow;
use crate::session::Outcome;
use crate::theme::Theme;
use anyhow::Result;
use std::io::IsTerminal;
use std::path::Path;

fn main() {
    cli::Cli::parse_args();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // sanity checks
    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        return Err(PreconditionError::NotInteractive.into());
    }
    let root = git::sanity_check(Path::new("."))?;

    // main
    let config = Config::load();
    let scope_candidates = if config.skip_scope {
        Vec::new()
    } else {
        git::detect_scope_candidates(&root)
    };

    let flow = Flow::new(config, scope_candidates);
    match session::run(flow, &Theme::default())? {
        Outcome::Commit(message) => {
            status!("committing:");
            for line in message.lines() {
                info!("  {}", line);
            }
            info!();
            git::commit(Path::new("."), &message)?;
        }
        Outcome::Declined => status!("commit cancelled"),
        Outcome::Aborted => info!("aborted, nothing committed"),
    }

    Ok(())
}
