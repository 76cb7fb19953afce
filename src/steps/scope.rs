use super::{Input, Reply, TextInput};
use crate::constants::MAX_SUGGESTIONS_SHOWN;
use crate::scopes;
use crate::theme::Theme;

/// free text scope with suggestions taken from the repository layout
pub struct ScopeInput {
    input: TextInput,
    candidates: Vec<String>,
    highlighted: Option<usize>,
}

impl ScopeInput {
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            input: TextInput::new("e.g. api, parser, docs"),
            candidates,
            highlighted: None,
        }
    }

    fn suggestions(&self) -> Vec<&str> {
        let mut matches = scopes::filter(&self.candidates, self.input.value().trim());
        matches.truncate(MAX_SUGGESTIONS_SHOWN);
        matches
    }

    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    /// highlighted suggestion if any, otherwise the typed text
    pub fn current(&self) -> &str {
        self.highlighted
            .and_then(|idx| self.suggestions().get(idx).copied())
            .unwrap_or_else(|| self.input.value().trim())
    }

    pub fn handle(&mut self, input: Input) -> Reply {
        let count = self.suggestions().len();
        match input {
            Input::Down | Input::Tab if count > 0 => {
                self.highlighted = Some(self.highlighted.map_or(0, |idx| (idx + 1) % count));
                Reply::Pending
            }
            Input::Up if count > 0 => {
                self.highlighted = Some(
                    self.highlighted
                        .map_or(count - 1, |idx| (idx + count - 1) % count),
                );
                Reply::Pending
            }
            // esc closes the suggestion highlight before leaving the step
            Input::Back if self.highlighted.is_some() => {
                self.highlighted = None;
                Reply::Pending
            }
            input => {
                if self.input.edit(&input) {
                    self.highlighted = None;
                    return Reply::Pending;
                }
                self.input.handle(input)
            }
        }
    }

    pub fn view(&self, theme: &Theme) -> Vec<String> {
        let mut lines = self.input.view(theme);
        let suggestions = self.suggestions();
        if suggestions.is_empty() {
            return lines;
        }

        lines.push(String::new());
        lines.push(theme.hint("suggestions:").to_string());
        for (idx, suggestion) in suggestions.iter().enumerate() {
            if self.highlighted == Some(idx) {
                lines.push(format!("{} {}", theme.selected("›"), theme.selected(suggestion)));
            } else {
                lines.push(format!("  {suggestion}"));
            }
        }
        lines
    }
}
