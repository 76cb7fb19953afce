use colored::{Color, ColoredString, Colorize};

/// colours used when rendering the flow; passed into every view call
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
    pub warning: Color,
    pub selected: Color,
    pub preview: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Magenta,
            muted: Color::BrightBlack,
            error: Color::Red,
            warning: Color::Yellow,
            selected: Color::Green,
            preview: Color::Cyan,
        }
    }
}

impl Theme {
    pub fn title(&self, text: &str) -> ColoredString {
        text.color(self.accent).bold()
    }

    pub fn hint(&self, text: &str) -> ColoredString {
        text.color(self.muted)
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.color(self.error)
    }

    pub fn warning(&self, text: &str) -> ColoredString {
        text.color(self.warning)
    }

    pub fn selected(&self, text: &str) -> ColoredString {
        text.color(self.selected).bold()
    }

    pub fn preview(&self, text: &str) -> ColoredString {
        text.color(self.preview)
    }
}
