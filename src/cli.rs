use clap::Parser;

/// git-cz: compose a conventional commit message step by step and commit it
///
/// Settings are read from ./.git-cz.json, ~/.git-cz.json or
/// ~/.config/git-cz/config.json (first match wins).
#[derive(Parser, Debug)]
#[command(
    name = "git-cz",
    about,
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
