//! Prompt steps of the commit flow.
//!
//! Each step owns its widget state and turns logical inputs into a [`Reply`]. Once a step
//! replies `Submit`, the flow pulls its [`Value`] and decides what it means for the commit
//! message.

mod scope;
mod select;
mod text;
mod toggle;

pub use scope::ScopeInput;
pub use select::{Choice, Select};
pub use text::{TextArea, TextInput};
pub use toggle::Toggle;

use crate::config::Config;
use crate::constants::FOOTER_TYPES;
use crate::message::{CommitMessage, overlong_lines};
use crate::theme::Theme;

/// terminal-independent input, already decoded from key presses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Char(char),
    Backspace,
    Left,
    Right,
    Up,
    Down,
    Tab,
    /// enter
    Submit,
    /// ctrl-d, ends multi-line input
    Finish,
    /// ctrl-e, hand the text to an external editor
    Edit,
    /// esc
    Back,
    /// replace the current text (result of an external edit)
    Text(String),
}

/// what a step holds when submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Flag(bool),
}

/// how a step responded to one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Pending,
    Submit,
    Back,
    Quit,
    Edit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Type,
    Scope,
    Subject,
    Breaking,
    Body,
    FooterType,
    FooterValue,
    Confirm,
}

impl StepKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Type => "Select the type of change that you're committing",
            Self::Scope => "What is the scope of this change? (optional)",
            Self::Subject => "Write a short, imperative tense description of the change",
            Self::Breaking => "Are there any breaking changes?",
            Self::Body => "Provide a longer description of the change (optional)",
            Self::FooterType => "Add a footer? (optional)",
            Self::FooterValue => "Enter the footer value",
            Self::Confirm => "Confirm your commit message",
        }
    }
}

pub enum Step {
    TypeSelect(Select),
    ScopeInput(ScopeInput),
    SubjectInput {
        input: TextInput,
        max_length: usize,
        prefix_length: usize,
    },
    BreakingToggle(Toggle),
    BodyInput {
        area: TextArea,
        max_line_length: usize,
    },
    FooterTypeSelect(Select),
    FooterValueInput(TextInput),
    ConfirmToggle(Toggle),
}

impl Step {
    pub fn commit_type(config: &Config) -> Self {
        let choices = config
            .types
            .iter()
            .map(|t| {
                let label = if config.use_emoji && !t.emoji.is_empty() {
                    format!("{} {}", t.emoji, t.name)
                } else {
                    t.name.clone()
                };
                Choice::new(&t.name, &label, &t.description)
            })
            .collect();
        Self::TypeSelect(Select::new(choices))
    }

    pub fn scope(candidates: Vec<String>) -> Self {
        Self::ScopeInput(ScopeInput::new(candidates))
    }

    pub fn subject(max_length: usize) -> Self {
        Self::SubjectInput {
            input: TextInput::new("concise description of the change"),
            max_length,
            prefix_length: 0,
        }
    }

    pub fn breaking() -> Self {
        Self::BreakingToggle(Toggle::new(false, "Yes", "No"))
    }

    pub fn body(max_line_length: usize) -> Self {
        Self::BodyInput {
            area: TextArea::default(),
            max_line_length,
        }
    }

    pub fn footer_type() -> Self {
        let choices = FOOTER_TYPES
            .iter()
            .map(|&(token, description)| {
                let label = if token.is_empty() { "(none)" } else { token };
                Choice::new(token, label, description)
            })
            .collect();
        Self::FooterTypeSelect(Select::new(choices))
    }

    pub fn footer_value() -> Self {
        Self::FooterValueInput(TextInput::new("e.g. #123 or a description"))
    }

    pub fn confirm() -> Self {
        Self::ConfirmToggle(Toggle::new(true, "Commit", "Cancel"))
    }

    pub fn kind(&self) -> StepKind {
        match self {
            Self::TypeSelect(_) => StepKind::Type,
            Self::ScopeInput(_) => StepKind::Scope,
            Self::SubjectInput { .. } => StepKind::Subject,
            Self::BreakingToggle(_) => StepKind::Breaking,
            Self::BodyInput { .. } => StepKind::Body,
            Self::FooterTypeSelect(_) => StepKind::FooterType,
            Self::FooterValueInput(_) => StepKind::FooterValue,
            Self::ConfirmToggle(_) => StepKind::Confirm,
        }
    }

    /// prepare the step for (re)activation; entered values are kept
    pub fn initialize(&mut self, message: &CommitMessage) {
        match self {
            Self::SubjectInput { prefix_length, .. } => {
                let prefix = CommitMessage {
                    subject: String::new(),
                    ..message.clone()
                };
                *prefix_length = prefix.header().chars().count();
            }
            Self::ScopeInput(scope) => scope.clear_highlight(),
            _ => {}
        }
    }

    pub fn handle(&mut self, input: Input) -> Reply {
        match self {
            Self::TypeSelect(select) | Self::FooterTypeSelect(select) => select.handle(input),
            Self::ScopeInput(scope) => scope.handle(input),
            Self::SubjectInput { input: text, .. } | Self::FooterValueInput(text) => {
                text.handle(input)
            }
            Self::BodyInput { area, .. } => area.handle(input),
            Self::BreakingToggle(toggle) | Self::ConfirmToggle(toggle) => toggle.handle(input),
        }
    }

    /// the value the step would submit right now
    pub fn value(&self) -> Value {
        match self {
            Self::TypeSelect(select) | Self::FooterTypeSelect(select) => {
                Value::Text(select.selected().to_string())
            }
            Self::ScopeInput(scope) => Value::Text(scope.current().to_string()),
            Self::SubjectInput { input, .. } | Self::FooterValueInput(input) => {
                Value::Text(input.value().trim().to_string())
            }
            Self::BodyInput { area, .. } => {
                Value::Text(trim_blank_lines(area.value()).to_string())
            }
            Self::BreakingToggle(toggle) | Self::ConfirmToggle(toggle) => {
                Value::Flag(toggle.value())
            }
        }
    }

    pub fn view(&self, theme: &Theme) -> Vec<String> {
        match self {
            Self::TypeSelect(select) | Self::FooterTypeSelect(select) => select.view(theme),
            Self::ScopeInput(scope) => scope.view(theme),
            Self::SubjectInput {
                input,
                max_length,
                prefix_length,
            } => {
                let mut lines = input.view(theme);
                let used = prefix_length + input.value().trim().chars().count();
                let counter = format!("{used}/{max_length} characters");
                lines.push(String::new());
                if used > *max_length {
                    lines.push(theme.error(&counter).to_string());
                } else {
                    lines.push(theme.hint(&counter).to_string());
                }
                lines.push(
                    theme
                        .hint("use the imperative mood: \"add\" not \"added\"")
                        .to_string(),
                );
                lines
            }
            Self::BodyInput {
                area,
                max_line_length,
            } => {
                let mut lines = area.view(theme);
                let long = overlong_lines(area.value(), *max_line_length);
                if !long.is_empty() {
                    let numbers: Vec<String> = long.iter().map(ToString::to_string).collect();
                    lines.push(String::new());
                    lines.push(
                        theme
                            .warning(&format!(
                                "line(s) {} longer than {} characters",
                                numbers.join(", "),
                                max_line_length
                            ))
                            .to_string(),
                    );
                }
                lines
            }
            Self::BreakingToggle(toggle) => {
                let mut lines = toggle.view(theme);
                lines.push(String::new());
                lines.push(
                    theme
                        .hint("breaking changes require users to change their code to upgrade")
                        .to_string(),
                );
                lines
            }
            Self::FooterValueInput(input) => input.view(theme),
            Self::ConfirmToggle(toggle) => toggle.view(theme),
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            Self::TypeSelect(_) | Self::FooterTypeSelect(_) => {
                "↑/↓: navigate • enter: select • esc: back • q/ctrl+c: quit"
            }
            Self::ScopeInput(_) => "tab/↑/↓: suggestions • enter: submit • esc: back • ctrl+c: quit",
            Self::BodyInput { .. } => {
                "enter: new line • ctrl+d: done • ctrl+e: open editor • esc: back • ctrl+c: quit"
            }
            Self::BreakingToggle(_) | Self::ConfirmToggle(_) => {
                "y/n: choose • tab/space: toggle • enter: submit • esc: back • ctrl+c: quit"
            }
            Self::SubjectInput { .. } | Self::FooterValueInput(_) => {
                "enter: submit • esc: back • ctrl+c: quit"
            }
        }
    }
}

/// drop trailing whitespace and leading blank lines, keeping the first line's indentation
fn trim_blank_lines(text: &str) -> &str {
    let text = text.trim_end();
    match text.find(|c: char| !c.is_whitespace()) {
        Some(first) => {
            let line_start = text[..first].rfind('\n').map_or(0, |idx| idx + 1);
            &text[line_start..]
        }
        None => "",
    }
}
