// commit message
pub const DEFAULT_MAX_SUBJECT_LENGTH: usize = 100;
pub const DEFAULT_MAX_BODY_LINE_LENGTH: usize = 100;
pub const BREAKING_CHANGE_TOKEN: &str = "BREAKING CHANGE";
pub const DEFAULT_BREAKING_NOTE: &str = "Breaking changes were introduced in this commit.";

// footer choices offered by the footer type step, "" means no footer
pub const FOOTER_TYPES: &[(&str, &str)] = &[
    ("", "No footer (skip)"),
    (BREAKING_CHANGE_TOKEN, "Introduces a breaking API change"),
    ("Fixes", "This change fixes a specific issue"),
    ("Closes", "This change closes a specific issue"),
    ("Refs", "References an issue or PR"),
    ("See", "References external information"),
    ("DEPRECATED", "Marks deprecated functionality"),
];

// config
pub const CONFIG_FILE_NAME: &str = ".git-cz.json";
pub const CONFIG_DIR_NAME: &str = "git-cz";

// scopes
pub const PREFERRED_SCOPE_DIRS: &[&str] = &["cmd", "pkg", "internal", "api", "ui", "docs"];

// ui
pub const MAX_SUGGESTIONS_SHOWN: usize = 8;
pub const MAX_DIVIDER_WIDTH: usize = 80;
