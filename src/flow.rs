//! Step sequencing for one interactive session.
//!
//! [`Flow`] is a reducer: the driver feeds it one [`Event`] at a time and executes the
//! returned [`Effect`]. Nothing in here touches the terminal, so whole sessions can be
//! scripted in tests.

use crate::config::Config;
use crate::constants::MAX_DIVIDER_WIDTH;
use crate::message::CommitMessage;
use crate::steps::{Input, Reply, Step, StepKind, Value};
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Input(Input),
    /// ctrl-c; wins over anything a step would do with the key
    Quit,
}

/// side effect requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    Commit(String),
    OpenEditor(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    /// confirmed, the message is ready to commit
    Completed,
    /// the confirm step was answered with no
    Declined,
    Aborted,
}

pub struct Flow {
    config: Config,
    steps: Vec<Step>,
    active: usize,
    status: Status,
    message: CommitMessage,
    error: Option<String>,
}

impl Flow {
    pub fn new(config: Config, scope_candidates: Vec<String>) -> Self {
        let mut steps = vec![Step::commit_type(&config)];
        if !config.skip_scope {
            steps.push(Step::scope(scope_candidates));
        }
        steps.push(Step::subject(config.max_subject_length));
        steps.push(Step::breaking());
        if !config.skip_body {
            steps.push(Step::body(config.max_body_line_length));
        }
        if !config.skip_footer {
            steps.push(Step::footer_type());
            steps.push(Step::footer_value());
        }
        steps.push(Step::confirm());

        let message = CommitMessage::default();
        steps[0].initialize(&message);

        Self {
            config,
            steps,
            active: 0,
            status: Status::Active,
            message,
            error: None,
        }
    }

    pub fn active_kind(&self) -> Option<StepKind> {
        match self.status {
            Status::Active => Some(self.steps[self.active].kind()),
            _ => None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// show a problem on the current step, e.g. a failed external edit
    pub fn report(&mut self, problem: String) {
        self.error = Some(problem);
    }

    pub fn handle(&mut self, event: Event) -> Effect {
        if self.status != Status::Active {
            return Effect::None;
        }

        let input = match event {
            Event::Quit => return self.abort(),
            Event::Input(input) => input,
        };

        self.error = None;
        match self.steps[self.active].handle(input) {
            Reply::Pending => Effect::None,
            Reply::Edit(text) => Effect::OpenEditor(text),
            Reply::Back => self.retreat(),
            Reply::Quit => self.abort(),
            Reply::Submit => {
                let value = self.steps[self.active].value();
                self.submit(value)
            }
        }
    }

    fn abort(&mut self) -> Effect {
        self.status = Status::Aborted;
        Effect::Quit
    }

    fn submit(&mut self, value: Value) -> Effect {
        let kind = self.steps[self.active].kind();

        if kind == StepKind::Confirm {
            return if value == Value::Flag(true) {
                self.status = Status::Completed;
                Effect::Commit(self.message.format())
            } else {
                self.status = Status::Declined;
                Effect::Quit
            };
        }

        match self.apply(kind, value) {
            Ok(message) => {
                self.message = message;
                self.advance()
            }
            Err(reason) => {
                self.error = Some(reason);
                Effect::None
            }
        }
    }

    /// validate a submitted value against a copy of the message
    fn apply(&self, kind: StepKind, value: Value) -> Result<CommitMessage, String> {
        let mut message = self.message.clone();

        match (kind, value) {
            (StepKind::Type, Value::Text(name)) => {
                let commit_type = self
                    .config
                    .find_type(&name)
                    .ok_or_else(|| format!("unknown commit type: {name}"))?;
                message.emoji = if self.config.use_emoji {
                    commit_type.emoji.clone()
                } else {
                    String::new()
                };
                message.commit_type = name;
            }
            (StepKind::Scope, Value::Text(scope)) => {
                if scope.contains(['(', ')']) {
                    return Err("scope cannot contain parentheses".to_string());
                }
                message.scope = scope;
            }
            (StepKind::Subject, Value::Text(subject)) => {
                message.subject = subject;
                self.check_subject(&message)?;
            }
            (StepKind::Breaking, Value::Flag(is_breaking)) => {
                message.is_breaking = is_breaking;
                if is_breaking {
                    self.check_subject(&message)?;
                }
            }
            (StepKind::Body, Value::Text(body)) => message.body = body,
            (StepKind::FooterType, Value::Text(footer_type)) => {
                if footer_type.is_empty() {
                    message.footer_value.clear();
                }
                message.footer_type = footer_type;
            }
            (StepKind::FooterValue, Value::Text(footer_value)) => {
                if footer_value.is_empty() {
                    return Err("footer value cannot be empty (esc to pick no footer)".to_string());
                }
                message.footer_value = footer_value;
            }
            (kind, value) => return Err(format!("unexpected value {value:?} for {kind:?}")),
        }

        Ok(message)
    }

    fn check_subject(&self, message: &CommitMessage) -> Result<(), String> {
        let max = self.config.max_subject_length;
        let checked = if self.config.strict_subject {
            message.validate_subject_strict(max)
        } else {
            message.validate_subject(max)
        };
        checked.map_err(|e| e.to_string())
    }

    /// steps that currently have nothing to ask
    fn is_skipped(&self, idx: usize) -> bool {
        self.steps[idx].kind() == StepKind::FooterValue && self.message.footer_type.is_empty()
    }

    fn advance(&mut self) -> Effect {
        let mut next = self.active + 1;
        while next < self.steps.len() && self.is_skipped(next) {
            next += 1;
        }
        if next == self.steps.len() {
            // confirm is always last, so only a sequence without it gets here
            self.status = Status::Completed;
            return Effect::Commit(self.message.format());
        }
        self.activate(next);
        Effect::None
    }

    fn retreat(&mut self) -> Effect {
        let mut previous = self.active;
        loop {
            if previous == 0 {
                return self.abort();
            }
            previous -= 1;
            if !self.is_skipped(previous) {
                break;
            }
        }
        self.activate(previous);
        Effect::None
    }

    fn activate(&mut self, idx: usize) {
        self.active = idx;
        self.steps[idx].initialize(&self.message);
    }

    /// render the current frame as lines, styled with `theme`
    pub fn view(&self, theme: &Theme, width: usize) -> Vec<String> {
        let Some(kind) = self.active_kind() else {
            return Vec::new();
        };
        let step = &self.steps[self.active];

        let mut lines = vec![
            format!(
                "{}  {}",
                theme.title("Git Conventional Commit"),
                theme.hint(&format!("{}/{}", self.active + 1, self.steps.len()))
            ),
            String::new(),
            kind.title().to_string(),
            theme
                .hint(&"─".repeat(width.clamp(1, MAX_DIVIDER_WIDTH)))
                .to_string(),
        ];

        if kind == StepKind::Confirm {
            lines.push(theme.hint("preview:").to_string());
            lines.push(String::new());
            for line in self.message.format().lines() {
                lines.push(format!("  {}", theme.preview(line)));
            }
            if !self.message.reads_back() {
                lines.push(String::new());
                lines.push(
                    theme
                        .warning("the last body paragraph will be read as a footer by other tools")
                        .to_string(),
                );
            }
        } else if self.message.is_complete() {
            lines.push(format!(
                "{} {}",
                theme.hint("header:"),
                theme.preview(&self.message.header())
            ));
        }

        lines.push(String::new());
        lines.extend(step.view(theme));

        if let Some(error) = &self.error {
            lines.push(String::new());
            lines.push(theme.error(error).to_string());
        }

        lines.push(String::new());
        lines.push(theme.hint(step.help()).to_string());
        lines
    }
}
