use super::{Input, Reply};
use crate::theme::Theme;

/// yes/no choice with a default
pub struct Toggle {
    value: bool,
    yes_label: &'static str,
    no_label: &'static str,
}

impl Toggle {
    pub fn new(default: bool, yes_label: &'static str, no_label: &'static str) -> Self {
        Self {
            value: default,
            yes_label,
            no_label,
        }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn handle(&mut self, input: Input) -> Reply {
        match input {
            Input::Char('y' | 'Y') => {
                self.value = true;
                Reply::Submit
            }
            Input::Char('n' | 'N') => {
                self.value = false;
                Reply::Submit
            }
            Input::Char(' ') | Input::Tab | Input::Left | Input::Right => {
                self.value = !self.value;
                Reply::Pending
            }
            Input::Char('q') => Reply::Quit,
            Input::Submit | Input::Finish => Reply::Submit,
            Input::Back => Reply::Back,
            _ => Reply::Pending,
        }
    }

    pub fn view(&self, theme: &Theme) -> Vec<String> {
        let yes = format!("[Y] {}", self.yes_label);
        let no = format!("[N] {}", self.no_label);
        let line = if self.value {
            format!("{}   {}", theme.selected(&yes), theme.hint(&no))
        } else {
            format!("{}   {}", theme.hint(&yes), theme.selected(&no))
        };
        vec![line]
    }
}
