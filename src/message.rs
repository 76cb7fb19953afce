use crate::constants::{BREAKING_CHANGE_TOKEN, DEFAULT_BREAKING_NOTE};
use thiserror::Error;

/// structured fields of a conventional commit message
///
/// Any combination of fields can be formatted, so a half-filled message doubles
/// as the live preview while the user is still answering prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitMessage {
    pub commit_type: String,
    pub scope: String,
    pub is_breaking: bool,
    pub subject: String,
    pub body: String,
    pub footer_type: String,
    pub footer_value: String,
    pub emoji: String,
}

/// why a subject was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubjectError {
    #[error("subject cannot be empty")]
    Empty,

    #[error("header is {length} characters, the maximum is {max}")]
    TooLong { length: usize, max: usize },

    #[error("subject should not start with a capital letter")]
    Capitalized,

    #[error("subject should not end with a period")]
    TrailingPeriod,
}

impl CommitMessage {
    pub fn is_complete(&self) -> bool {
        !self.commit_type.is_empty() && !self.subject.is_empty()
    }

    /// first line: `[emoji ]type[(scope)][!]: subject`
    pub fn header(&self) -> String {
        let mut header = String::new();
        if !self.emoji.is_empty() {
            header.push_str(&self.emoji);
            header.push(' ');
        }
        header.push_str(&self.commit_type);
        if !self.scope.is_empty() {
            header.push('(');
            header.push_str(&self.scope);
            header.push(')');
        }
        if self.is_breaking {
            header.push('!');
        }
        header.push_str(": ");
        header.push_str(&self.subject);
        header
    }

    /// render the full message; absent sections are left out
    pub fn format(&self) -> String {
        let mut message = self.header();

        if !self.body.is_empty() {
            message.push_str("\n\n");
            message.push_str(&self.body);
        }

        if !self.footer_type.is_empty() && !self.footer_value.is_empty() {
            message.push_str(&format!("\n\n{}: {}", self.footer_type, self.footer_value));
        } else if self.is_breaking {
            message.push_str(&format!(
                "\n\n{BREAKING_CHANGE_TOKEN}: {DEFAULT_BREAKING_NOTE}"
            ));
        }

        message
    }

    /// check the subject is present and the header fits within `max_length` characters
    pub fn validate_subject(&self, max_length: usize) -> Result<(), SubjectError> {
        if self.subject.is_empty() {
            return Err(SubjectError::Empty);
        }

        let length = self.header().chars().count();
        if length > max_length {
            return Err(SubjectError::TooLong {
                length,
                max: max_length,
            });
        }

        Ok(())
    }

    /// `validate_subject` plus casing and punctuation rules
    pub fn validate_subject_strict(&self, max_length: usize) -> Result<(), SubjectError> {
        self.validate_subject(max_length)?;

        if self.subject.chars().next().is_some_and(char::is_uppercase) {
            return Err(SubjectError::Capitalized);
        }
        if self.subject.ends_with('.') {
            return Err(SubjectError::TrailingPeriod);
        }

        Ok(())
    }

    /// best-effort inverse of `format`; unparseable parts come back empty
    ///
    /// trailing whitespace of the whole message is dropped, so a body ending in a newline
    /// reads back without it
    pub fn parse(message: &str) -> Self {
        let mut parsed = Self::default();
        let message = message.trim_end();

        let (header, rest) = match message.split_once("\n\n") {
            Some((header, rest)) => (header, rest),
            None => (message, ""),
        };
        parse_header(header, &mut parsed);

        let mut paragraphs: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split("\n\n").collect()
        };

        if let Some((token, value)) = paragraphs.last().and_then(|last| split_footer(last)) {
            paragraphs.pop();
            // the synthesized footer is implied by the breaking marker
            let synthesized = parsed.is_breaking
                && token == BREAKING_CHANGE_TOKEN
                && value == DEFAULT_BREAKING_NOTE;
            if !synthesized {
                parsed.footer_type = token.to_string();
                parsed.footer_value = value.to_string();
            }
        }
        parsed.body = paragraphs.join("\n\n");

        parsed
    }

    /// whether the formatted message parses back into the same fields
    ///
    /// fails e.g. when the body ends in a paragraph that looks like a `token: value` trailer
    pub fn reads_back(&self) -> bool {
        Self::parse(&self.format()) == *self
    }
}

fn parse_header(header: &str, parsed: &mut CommitMessage) {
    let (emoji, fields) = match split_prefix(header) {
        Some(fields) => ("", fields),
        None => {
            // an emoji token may precede the type
            let Some((emoji, rest)) = header.split_once(' ') else {
                return;
            };
            if !is_emoji(emoji) {
                return;
            }
            let Some(fields) = split_prefix(rest) else {
                return;
            };
            (emoji, fields)
        }
    };

    parsed.commit_type = fields.commit_type.to_string();
    parsed.scope = fields.scope.to_string();
    parsed.is_breaking = fields.is_breaking;
    parsed.subject = fields.subject.to_string();
    parsed.emoji = emoji.to_string();
}

struct HeaderFields<'a> {
    commit_type: &'a str,
    scope: &'a str,
    is_breaking: bool,
    subject: &'a str,
}

/// `type[(scope)][!]: subject`
///
/// scopes never contain parentheses, so the scope ends at the first ")" and may hold
/// spaces or ": " of its own
fn split_prefix(header: &str) -> Option<HeaderFields<'_>> {
    let type_end = header.find(['(', '!', ':'])?;
    let commit_type = &header[..type_end];
    if commit_type.is_empty()
        || commit_type.contains(char::is_whitespace)
        || commit_type.contains(')')
    {
        return None;
    }

    let mut rest = &header[type_end..];
    let mut scope = "";
    if let Some(after_open) = rest.strip_prefix('(') {
        let (inner, after_close) = after_open.split_once(')')?;
        scope = inner;
        rest = after_close;
    }

    let (rest, is_breaking) = match rest.strip_prefix('!') {
        Some(stripped) => (stripped, true),
        None => (rest, false),
    };
    let subject = rest.strip_prefix(": ")?;

    Some(HeaderFields {
        commit_type,
        scope,
        is_breaking,
        subject,
    })
}

/// a pictograph (no ASCII letters or digits) or a `:shortcode:`
fn is_emoji(token: &str) -> bool {
    let is_shortcode = token.len() > 2 && token.starts_with(':') && token.ends_with(':');
    !token.is_empty() && (is_shortcode || !token.contains(|c: char| c.is_ascii_alphanumeric()))
}

/// `token: value` on a single line, where token is a trailer word or BREAKING CHANGE
fn split_footer(paragraph: &str) -> Option<(&str, &str)> {
    if paragraph.contains('\n') {
        return None;
    }
    let (token, value) = paragraph.split_once(": ")?;
    let is_word = token.starts_with(|c: char| c.is_ascii_alphabetic())
        && token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    (is_word || token == BREAKING_CHANGE_TOKEN).then_some((token, value))
}

/// 1-based numbers of lines longer than `max` characters
pub fn overlong_lines(text: &str, max: usize) -> Vec<usize> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| line.chars().count() > max)
        .map(|(idx, _)| idx + 1)
        .collect()
}

#[cfg(test)]
mod tests;
