//! Terminal driver: renders the flow, decodes keys, runs requested effects.

use crate::flow::{Effect, Event, Flow, Status};
use crate::steps::Input;
use crate::theme::Theme;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use std::io::{self, Write};

/// how the interactive part of the session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Commit(String),
    Declined,
    Aborted,
}

/// raw mode + alternate screen for as long as the guard lives
struct Screen;

impl Screen {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("this command requires an interactive terminal")?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)
            .context("failed to prepare the terminal")?;
        Ok(Self)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// drive `flow` until it completes, is declined, or is aborted
pub fn run(mut flow: Flow, theme: &Theme) -> Result<Outcome> {
    let mut screen = Some(Screen::enter()?);

    loop {
        draw(&flow, theme)?;

        let Some(event) = read_event()? else {
            continue;
        };

        match flow.handle(event) {
            Effect::None => {}
            Effect::Commit(message) => return Ok(Outcome::Commit(message)),
            Effect::Quit => {
                return Ok(match flow.status() {
                    Status::Declined => Outcome::Declined,
                    _ => Outcome::Aborted,
                });
            }
            Effect::OpenEditor(text) => {
                // hand the terminal to the editor, then take it back
                drop(screen.take());
                let edited = ui::edit_in_editor(&text);
                screen = Some(Screen::enter()?);
                match edited {
                    Ok(edited) => {
                        flow.handle(Event::Input(Input::Text(edited)));
                    }
                    Err(e) => flow.report(format!("{e:#}")),
                }
            }
        }
    }
}

fn draw(flow: &Flow, theme: &Theme) -> Result<()> {
    let (width, _) = terminal::size().unwrap_or((80, 24));
    let mut stdout = io::stdout();

    queue!(stdout, MoveTo(0, 0), Clear(ClearType::All)).context("failed to clear screen")?;
    for line in flow.view(theme, usize::from(width)) {
        // raw mode needs explicit carriage returns
        write!(stdout, "{line}\r\n").context("failed to draw")?;
    }
    stdout.flush().context("failed to draw")
}

/// block for the next key press the flow cares about; resizes just trigger a redraw
fn read_event() -> Result<Option<Event>> {
    match event::read().context("failed to read terminal event")? {
        TermEvent::Key(key) => Ok(map_key(key)),
        _ => Ok(None),
    }
}

/// decode a key press into a flow event
pub fn map_key(key: KeyEvent) -> Option<Event> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let input = match key.code {
        KeyCode::Char('c') if ctrl => return Some(Event::Quit),
        KeyCode::Char('d') if ctrl => Input::Finish,
        KeyCode::Char('e') if ctrl => Input::Edit,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(c) => Input::Char(c),
        KeyCode::Enter => Input::Submit,
        KeyCode::Esc => Input::Back,
        KeyCode::Backspace => Input::Backspace,
        KeyCode::Left => Input::Left,
        KeyCode::Right => Input::Right,
        KeyCode::Up => Input::Up,
        KeyCode::Down => Input::Down,
        KeyCode::Tab | KeyCode::BackTab => Input::Tab,
        _ => return None,
    };
    Some(Event::Input(input))
}
