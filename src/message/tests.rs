use super::*;

/// helper to build a message from the fields most tests care about
fn message(commit_type: &str, scope: &str, subject: &str) -> CommitMessage {
    CommitMessage {
        commit_type: commit_type.to_string(),
        scope: scope.to_string(),
        subject: subject.to_string(),
        ..CommitMessage::default()
    }
}

fn assert_round_trip(original: &CommitMessage) {
    let formatted = original.format();
    let parsed = CommitMessage::parse(&formatted);
    assert_eq!(parsed.commit_type, original.commit_type, "type of {formatted:?}");
    assert_eq!(parsed.scope, original.scope, "scope of {formatted:?}");
    assert_eq!(parsed.is_breaking, original.is_breaking, "breaking of {formatted:?}");
    assert_eq!(parsed.subject, original.subject, "subject of {formatted:?}");
    assert_eq!(parsed.body, original.body, "body of {formatted:?}");
    assert_eq!(parsed.footer_type, original.footer_type, "footer of {formatted:?}");
    assert_eq!(parsed.footer_value, original.footer_value, "footer of {formatted:?}");
    assert_eq!(parsed.emoji, original.emoji, "emoji of {formatted:?}");
}

#[test]
fn test_format_header_only() {
    assert_eq!(message("feat", "", "add new feature").format(), "feat: add new feature");

    let with_emoji = CommitMessage {
        emoji: "🐛".to_string(),
        ..message("fix", "", "resolve issue")
    };
    assert_eq!(with_emoji.format(), "🐛 fix: resolve issue");
}

#[test]
fn test_format_scope_body_and_footer() {
    let msg = CommitMessage {
        body: "first line\nsecond line".to_string(),
        footer_type: "Fixes".to_string(),
        footer_value: "#123".to_string(),
        ..message("fix", "parser", "handle empty input")
    };
    assert_eq!(
        msg.format(),
        "fix(parser): handle empty input\n\nfirst line\nsecond line\n\nFixes: #123"
    );
}

#[test]
fn test_format_breaking_adds_default_footer() {
    let msg = CommitMessage {
        is_breaking: true,
        ..message("feat", "api", "drop v1 routes")
    };
    assert_eq!(
        msg.format(),
        "feat(api)!: drop v1 routes\n\nBREAKING CHANGE: Breaking changes were introduced in this commit."
    );
}

#[test]
fn test_format_breaking_with_explicit_footer() {
    let msg = CommitMessage {
        is_breaking: true,
        footer_type: "BREAKING CHANGE".to_string(),
        footer_value: "config keys renamed".to_string(),
        ..message("refactor", "", "rename config keys")
    };
    assert_eq!(
        msg.format(),
        "refactor!: rename config keys\n\nBREAKING CHANGE: config keys renamed"
    );
}

#[test]
fn test_format_half_footer_is_omitted() {
    let msg = CommitMessage {
        footer_type: "Refs".to_string(),
        ..message("docs", "", "fix typo")
    };
    assert_eq!(msg.format(), "docs: fix typo");
}

#[test]
fn test_format_partial_message_for_preview() {
    assert_eq!(CommitMessage::default().format(), ": ");
    assert_eq!(message("ci", "", "").format(), "ci: ");
    assert!(!message("ci", "", "").is_complete());
    assert!(message("ci", "", "cache deps").is_complete());
}

#[test]
fn test_end_to_end_header() {
    assert_eq!(
        message("feat", "api", "add health endpoint").format(),
        "feat(api): add health endpoint"
    );
}

#[test]
fn test_validate_empty_subject() {
    assert_eq!(
        message("feat", "", "").validate_subject(100),
        Err(SubjectError::Empty)
    );
    assert_eq!(SubjectError::Empty.to_string(), "subject cannot be empty");
}

#[test]
fn test_validate_length_boundary() {
    // "fix: abcde" is exactly 10 characters
    assert_eq!(message("fix", "", "abcde").validate_subject(10), Ok(()));
    assert_eq!(
        message("fix", "", "abcdef").validate_subject(10),
        Err(SubjectError::TooLong {
            length: 11,
            max: 10
        })
    );
}

#[test]
fn test_validate_length_counts_prefix() {
    let msg = CommitMessage {
        is_breaking: true,
        emoji: "✨".to_string(),
        ..message("feat", "ui", "abc")
    };
    // "✨ feat(ui)!: abc" is 16 characters
    assert_eq!(msg.validate_subject(16), Ok(()));
    assert!(matches!(
        msg.validate_subject(15),
        Err(SubjectError::TooLong { length: 16, .. })
    ));
}

#[test]
fn test_validate_strict_rules() {
    assert_eq!(
        message("feat", "", "Add thing").validate_subject_strict(100),
        Err(SubjectError::Capitalized)
    );
    assert_eq!(
        message("feat", "", "add thing.").validate_subject_strict(100),
        Err(SubjectError::TrailingPeriod)
    );
    assert_eq!(message("feat", "", "add thing").validate_subject_strict(100), Ok(()));

    // the lenient check accepts both
    assert_eq!(message("feat", "", "Add thing.").validate_subject(100), Ok(()));
}

#[test]
fn test_validate_strict_checks_empty_first() {
    assert_eq!(
        message("feat", "", "").validate_subject_strict(100),
        Err(SubjectError::Empty)
    );
}

#[test]
fn test_parse_simple_and_scoped_headers() {
    let parsed = CommitMessage::parse("feat: add login");
    assert_eq!(parsed.commit_type, "feat");
    assert_eq!(parsed.scope, "");
    assert_eq!(parsed.subject, "add login");
    assert!(!parsed.is_breaking);

    let parsed = CommitMessage::parse("fix(auth/oauth)!: refresh tokens\n");
    assert_eq!(parsed.commit_type, "fix");
    assert_eq!(parsed.scope, "auth/oauth");
    assert!(parsed.is_breaking);
    assert_eq!(parsed.subject, "refresh tokens");
}

#[test]
fn test_parse_emoji_header() {
    let parsed = CommitMessage::parse("✨ feat(ui): dark mode");
    assert_eq!(parsed.emoji, "✨");
    assert_eq!(parsed.commit_type, "feat");
    assert_eq!(parsed.scope, "ui");
    assert_eq!(parsed.subject, "dark mode");
}

#[test]
fn test_parse_subject_with_parentheses_and_colons() {
    let parsed = CommitMessage::parse("fix: handle f(x): edge case");
    assert_eq!(parsed.commit_type, "fix");
    assert_eq!(parsed.scope, "");
    assert_eq!(parsed.subject, "handle f(x): edge case");
}

#[test]
fn test_parse_shortcode_emoji_header() {
    let parsed = CommitMessage::parse(":sparkles: feat(api): add thing");
    assert_eq!(parsed.emoji, ":sparkles:");
    assert_eq!(parsed.commit_type, "feat");
    assert_eq!(parsed.scope, "api");
    assert_eq!(parsed.subject, "add thing");
}

#[test]
fn test_parse_scope_with_colon_and_spaces() {
    let parsed = CommitMessage::parse("feat(a: b)!: add thing");
    assert_eq!(parsed.commit_type, "feat");
    assert_eq!(parsed.scope, "a: b");
    assert!(parsed.is_breaking);
    assert_eq!(parsed.subject, "add thing");
}

#[test]
fn test_parse_drops_trailing_newline_of_body() {
    let parsed = CommitMessage::parse("docs: notes\n\nline one\n");
    assert_eq!(parsed.body, "line one");
}

#[test]
fn test_parse_malformed_header() {
    let parsed = CommitMessage::parse("fix(legacy) handling of X\n\nsome body");
    assert_eq!(parsed.commit_type, "");
    assert_eq!(parsed.scope, "");
    assert_eq!(parsed.subject, "");
    assert_eq!(parsed.body, "some body");

    let parsed = CommitMessage::parse("not a commit: at all");
    assert_eq!(parsed.commit_type, "");
    assert_eq!(parsed.subject, "");

    // a word in front of the type is not an emoji
    let parsed = CommitMessage::parse("hello fix: thing");
    assert_eq!(parsed.commit_type, "");
    assert_eq!(parsed.emoji, "");

    let parsed = CommitMessage::parse("feat(api: unclosed scope");
    assert_eq!(parsed.commit_type, "");

    assert_eq!(CommitMessage::parse(""), CommitMessage::default());
}

#[test]
fn test_parse_body_and_footer() {
    let parsed =
        CommitMessage::parse("docs: update readme\n\nfirst paragraph\n\nsecond paragraph\n\nRefs: #42");
    assert_eq!(parsed.body, "first paragraph\n\nsecond paragraph");
    assert_eq!(parsed.footer_type, "Refs");
    assert_eq!(parsed.footer_value, "#42");
}

#[test]
fn test_parse_body_without_footer() {
    let parsed = CommitMessage::parse("docs: update readme\n\nwhy this matters\n\nmore detail");
    assert_eq!(parsed.body, "why this matters\n\nmore detail");
    assert_eq!(parsed.footer_type, "");
    assert_eq!(parsed.footer_value, "");
}

#[test]
fn test_parse_default_breaking_footer_is_implied() {
    let parsed = CommitMessage::parse(
        "feat!: new api\n\nBREAKING CHANGE: Breaking changes were introduced in this commit.",
    );
    assert!(parsed.is_breaking);
    assert_eq!(parsed.footer_type, "");
    assert_eq!(parsed.footer_value, "");
}

#[test]
fn test_round_trip() {
    assert_round_trip(&message("feat", "api", "add health endpoint"));
    assert_round_trip(&message("chore", "", "bump deps: serde and clap"));
    assert_round_trip(&CommitMessage {
        is_breaking: true,
        body: "old config files are no longer read\n\nmigrate with the script".to_string(),
        ..message("refactor", "config", "switch to json")
    });
    assert_round_trip(&CommitMessage {
        footer_type: "Closes".to_string(),
        footer_value: "#7".to_string(),
        ..message("fix", "", "stop leaking handles")
    });
    assert_round_trip(&CommitMessage {
        is_breaking: true,
        body: "multi\nline".to_string(),
        footer_type: "BREAKING CHANGE".to_string(),
        footer_value: "flag removed".to_string(),
        ..message("feat", "cli", "remove legacy flag")
    });
}

#[test]
fn test_round_trip_header_edges() {
    assert_round_trip(&message("feat", "a: b", "add thing"));
    assert_round_trip(&message("fix", "the parser", "handle f(x): edge case"));
    assert_round_trip(&message("fix", "", "handle f(x) (again)"));
    assert_round_trip(&CommitMessage {
        emoji: "✨".to_string(),
        ..message("feat", "ui", "dark mode")
    });
    assert_round_trip(&CommitMessage {
        emoji: ":sparkles:".to_string(),
        is_breaking: true,
        ..message("feat", "api", "add thing")
    });
    assert_round_trip(&CommitMessage {
        emoji: "🐛".to_string(),
        ..message("fix", "", "stop crash")
    });
}

#[test]
fn test_reads_back() {
    assert!(message("feat", "api", "add health endpoint").reads_back());
    assert!(
        !CommitMessage {
            body: "see below\n\nReviewed-by: someone".to_string(),
            ..message("docs", "", "tidy readme")
        }
        .reads_back()
    );
}

#[test]
fn test_overlong_lines() {
    assert_eq!(overlong_lines("short\nthis one is long\nok", 10), vec![2]);
    assert!(overlong_lines("", 10).is_empty());
    assert!(overlong_lines("exactly 10", 10).is_empty());
}
