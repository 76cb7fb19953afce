use super::{Input, Reply};
use crate::theme::Theme;

const CURSOR: &str = "▏";

/// single-line text field with a movable cursor
pub struct TextInput {
    value: String,
    cursor: usize, // in chars
    placeholder: &'static str,
}

impl TextInput {
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            placeholder,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, text: &str) {
        self.value = text.replace(['\r', '\n'], " ");
        self.cursor = self.value.chars().count();
    }

    /// apply an editing input; returns false for inputs that are not edits
    pub fn edit(&mut self, input: &Input) -> bool {
        match input {
            Input::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.value.insert(at, *c);
                self.cursor += 1;
            }
            Input::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.value.remove(at);
                }
            }
            Input::Left => self.cursor = self.cursor.saturating_sub(1),
            Input::Right => self.cursor = (self.cursor + 1).min(self.value.chars().count()),
            Input::Text(text) => self.set(text),
            _ => return false,
        }
        true
    }

    pub fn handle(&mut self, input: Input) -> Reply {
        if self.edit(&input) {
            return Reply::Pending;
        }
        match input {
            Input::Submit | Input::Finish => Reply::Submit,
            Input::Back => Reply::Back,
            _ => Reply::Pending,
        }
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.value
            .char_indices()
            .nth(chars)
            .map_or(self.value.len(), |(idx, _)| idx)
    }

    pub fn view(&self, theme: &Theme) -> Vec<String> {
        if self.value.is_empty() {
            return vec![format!("› {CURSOR}{}", theme.hint(self.placeholder))];
        }
        let at = self.byte_offset(self.cursor);
        let (before, after) = self.value.split_at(at);
        vec![format!("› {before}{CURSOR}{after}")]
    }
}

/// multi-line text; typing always appends at the end
#[derive(Default)]
pub struct TextArea {
    value: String,
}

impl TextArea {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn handle(&mut self, input: Input) -> Reply {
        match input {
            Input::Char(c) => self.value.push(c),
            Input::Submit => self.value.push('\n'),
            Input::Backspace => {
                self.value.pop();
            }
            Input::Text(text) => self.value = text.trim_end().to_string(),
            Input::Finish => return Reply::Submit,
            Input::Edit => return Reply::Edit(self.value.clone()),
            Input::Back => return Reply::Back,
            _ => {}
        }
        Reply::Pending
    }

    pub fn view(&self, theme: &Theme) -> Vec<String> {
        if self.value.is_empty() {
            return vec![format!(
                "│ {CURSOR}{}",
                theme.hint("motivation for the change, contrast with previous behaviour")
            )];
        }
        let mut lines: Vec<String> = self
            .value
            .split('\n')
            .map(|line| format!("│ {line}"))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.push_str(CURSOR);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            input.handle(Input::Char(c));
        }
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = TextInput::new("");
        type_into(&mut input, "add tsets");
        input.handle(Input::Backspace);
        input.handle(Input::Backspace);
        input.handle(Input::Backspace);
        type_into(&mut input, "ests");
        assert_eq!(input.value(), "add tests");
    }

    #[test]
    fn test_cursor_movement_inserts_mid_text() {
        let mut input = TextInput::new("");
        type_into(&mut input, "ad");
        input.handle(Input::Left);
        type_into(&mut input, "d");
        input.handle(Input::Right);
        input.handle(Input::Right);
        type_into(&mut input, "é!");
        assert_eq!(input.value(), "addé!");

        input.handle(Input::Left);
        input.handle(Input::Backspace);
        assert_eq!(input.value(), "add!");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::new("");
        input.handle(Input::Backspace);
        type_into(&mut input, "x");
        input.handle(Input::Left);
        input.handle(Input::Left);
        input.handle(Input::Backspace);
        assert_eq!(input.value(), "x");
    }

    #[test]
    fn test_set_strips_newlines() {
        let mut input = TextInput::new("");
        input.handle(Input::Text("one\ntwo".to_string()));
        assert_eq!(input.value(), "one two");
    }

    #[test]
    fn test_input_replies() {
        let mut input = TextInput::new("");
        assert_eq!(input.handle(Input::Submit), Reply::Submit);
        assert_eq!(input.handle(Input::Back), Reply::Back);
        assert_eq!(input.handle(Input::Edit), Reply::Pending);
        // q is ordinary text here
        assert_eq!(input.handle(Input::Char('q')), Reply::Pending);
        assert_eq!(input.value(), "q");
    }

    #[test]
    fn test_area_enter_adds_line_and_finish_submits() {
        let mut area = TextArea::default();
        for c in "first".chars() {
            area.handle(Input::Char(c));
        }
        assert_eq!(area.handle(Input::Submit), Reply::Pending);
        area.handle(Input::Char('2'));
        assert_eq!(area.value(), "first\n2");
        assert_eq!(area.handle(Input::Finish), Reply::Submit);
    }

    #[test]
    fn test_area_edit_round_trip() {
        let mut area = TextArea::default();
        area.handle(Input::Char('a'));
        assert_eq!(area.handle(Input::Edit), Reply::Edit("a".to_string()));
        area.handle(Input::Text("from editor\n\nsecond\n".to_string()));
        assert_eq!(area.value(), "from editor\n\nsecond");
    }
}
