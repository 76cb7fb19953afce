use anyhow::{Context, Result, bail};
use std::fmt::Display;
use std::io::{self, Write};

/// write one line to stdout, ignoring failures (e.g. a closed pipe)
pub fn out_line(line: impl Display) {
    let _ = writeln!(io::stdout(), "{line}");
}

/// write one line to stderr, ignoring failures
pub fn err_line(line: impl Display) {
    let _ = writeln!(io::stderr(), "{line}");
}

#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {{
        use colored::Colorize;
        $crate::ui::err_line(format!($($arg)+).yellow());
    }};
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {{
        use colored::Colorize;
        $crate::ui::err_line(format!($($arg)+).red());
    }};
}

#[macro_export]
macro_rules! status {
    ($($arg:tt)+) => {{
        use colored::Colorize;
        $crate::ui::out_line(format!($($arg)+).green());
    }};
}

#[macro_export]
macro_rules! info {
    () => {
        $crate::ui::out_line("")
    };
    ($($arg:tt)+) => {
        $crate::ui::out_line(format!($($arg)+))
    };
}

/// open `text` in the user's editor and return the edited result without trailing whitespace
///
/// $VISUAL wins over $EDITOR; the editor runs via the shell so arguments in the
/// variable (e.g. "code --wait") are honoured
pub fn edit_in_editor(text: &str) -> Result<String> {
    use std::env;
    use std::fs;
    use std::process::Command;
    use tempfile::Builder;

    let editor = env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .context("neither VISUAL nor EDITOR is set")?;

    let mut temp_file = Builder::new()
        .prefix("COMMIT_BODY")
        .suffix(".txt")
        .tempfile()
        .context("failed to create temporary file")?;
    temp_file
        .write_all(text.as_bytes())
        .context("failed to write to temporary file")?;
    temp_file
        .flush()
        .context("failed to flush temporary file")?;

    let temp_path = temp_file.path().to_owned();
    let quoted_path = shlex::try_quote(&temp_path.to_string_lossy())
        .context("temporary file path cannot be quoted")?
        .into_owned();

    let status = Command::new("sh")
        .arg("-c")
        .arg(format!("{editor} {quoted_path}"))
        .status()
        .with_context(|| format!("failed to run editor: {editor}"))?;
    if !status.success() {
        bail!("editor exited with {status}");
    }

    let edited = fs::read_to_string(&temp_path).context("failed to read edited text")?;
    Ok(edited.trim_end().to_string())
}
