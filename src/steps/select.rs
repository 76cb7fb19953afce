use super::{Input, Reply};
use crate::theme::Theme;

/// one entry of a selection list
pub struct Choice {
    pub value: String,
    pub label: String,
    pub description: String,
}

impl Choice {
    pub fn new(value: &str, label: &str, description: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            description: description.to_string(),
        }
    }
}

/// vertical list with a cursor; wraps around at both ends
pub struct Select {
    choices: Vec<Choice>,
    cursor: usize,
}

impl Select {
    pub fn new(choices: Vec<Choice>) -> Self {
        debug_assert!(!choices.is_empty(), "select requires at least one choice");
        Self { choices, cursor: 0 }
    }

    pub fn selected(&self) -> &str {
        self.choices
            .get(self.cursor)
            .map_or("", |choice| choice.value.as_str())
    }

    pub fn handle(&mut self, input: Input) -> Reply {
        let count = self.choices.len().max(1);
        match input {
            Input::Up | Input::Char('k') => {
                self.cursor = (self.cursor + count - 1) % count;
                Reply::Pending
            }
            Input::Down | Input::Tab | Input::Char('j') => {
                self.cursor = (self.cursor + 1) % count;
                Reply::Pending
            }
            Input::Submit | Input::Finish => Reply::Submit,
            Input::Back => Reply::Back,
            Input::Char('q') => Reply::Quit,
            _ => Reply::Pending,
        }
    }

    pub fn view(&self, theme: &Theme) -> Vec<String> {
        let width = self
            .choices
            .iter()
            .map(|choice| choice.label.chars().count())
            .max()
            .unwrap_or(0);

        self.choices
            .iter()
            .enumerate()
            .map(|(idx, choice)| {
                let label = format!("{:<width$}", choice.label);
                if idx == self.cursor {
                    format!(
                        "{} {}  {}",
                        theme.selected("›"),
                        theme.selected(&label),
                        choice.description
                    )
                } else {
                    format!("  {}  {}", label, theme.hint(&choice.description))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select() -> Select {
        Select::new(vec![
            Choice::new("feat", "feat", "A new feature"),
            Choice::new("fix", "fix", "A bug fix"),
            Choice::new("docs", "docs", "Documentation only changes"),
        ])
    }

    #[test]
    fn test_navigation_wraps() {
        let mut select = select();
        assert_eq!(select.selected(), "feat");
        select.handle(Input::Up);
        assert_eq!(select.selected(), "docs");
        select.handle(Input::Down);
        select.handle(Input::Char('j'));
        assert_eq!(select.selected(), "fix");
        select.handle(Input::Char('k'));
        assert_eq!(select.selected(), "feat");
    }

    #[test]
    fn test_submit_back_quit() {
        let mut select = select();
        assert_eq!(select.handle(Input::Submit), Reply::Submit);
        assert_eq!(select.handle(Input::Back), Reply::Back);
        assert_eq!(select.handle(Input::Char('q')), Reply::Quit);
        assert_eq!(select.handle(Input::Char('z')), Reply::Pending);
    }

    #[test]
    fn test_view_marks_cursor() {
        colored::control::set_override(false);
        let mut select = select();
        select.handle(Input::Down);
        let lines = select.view(&Theme::default());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  feat"));
        assert!(lines[1].starts_with("› fix "));
    }
}
