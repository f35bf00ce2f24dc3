use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Line,
    widgets::{Block, Paragraph},
};

use crate::ui::widgets::{KeyBindingDisplay, style};

pub(crate) const MAX_PLAYER_NAME_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum InvalidPlayerName {
    #[display("player name is empty")]
    Empty,
    #[display("player name is longer than {MAX_PLAYER_NAME_LEN} characters")]
    TooLong,
    #[display("player name contains {_0:?}")]
    InvalidChar(#[error(not(source))] char),
}

/// Accepts 1 to 16 ASCII letters, digits, `_` or `-`.
pub(crate) fn validate_player_name(name: &str) -> Result<(), InvalidPlayerName> {
    if name.is_empty() {
        return Err(InvalidPlayerName::Empty);
    }
    if name.chars().count() > MAX_PLAYER_NAME_LEN {
        return Err(InvalidPlayerName::TooLong);
    }
    if let Some(ch) = name.chars().find(|ch| !is_name_char(*ch)) {
        return Err(InvalidPlayerName::InvalidChar(ch));
    }
    Ok(())
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LoginAction {
    Stay,
    Submit(String),
    Quit,
}

/// Asks for the player name before the game screen opens.
#[derive(Debug, Default)]
pub(crate) struct LoginScreen {
    input: String,
    error: Option<InvalidPlayerName>,
}

impl LoginScreen {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn handle_event(&mut self, event: &Event) -> LoginAction {
        let Some(key) = event.as_key_event() else {
            return LoginAction::Stay;
        };
        if key.kind == KeyEventKind::Release {
            return LoginAction::Stay;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => LoginAction::Quit,
            KeyCode::Esc => LoginAction::Quit,
            KeyCode::Enter => match validate_player_name(&self.input) {
                Ok(()) => LoginAction::Submit(self.input.clone()),
                Err(e) => {
                    self.error = Some(e);
                    LoginAction::Stay
                }
            },
            KeyCode::Backspace => {
                self.input.pop();
                self.error = None;
                LoginAction::Stay
            }
            KeyCode::Char(ch) => {
                if self.input.chars().count() < MAX_PLAYER_NAME_LEN {
                    self.input.push(ch);
                }
                self.error = None;
                LoginAction::Stay
            }
            _ => LoginAction::Stay,
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        let area = frame
            .area()
            .centered(Constraint::Length(40), Constraint::Length(8));
        let [prompt_area, input_area, error_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .spacing(1)
        .areas(area);

        frame.render_widget(
            Line::styled("ENTER PLAYER NAME", style::DEFAULT).centered(),
            prompt_area,
        );
        frame.render_widget(
            Paragraph::new(format!("{}_", self.input))
                .style(style::DEFAULT)
                .block(Block::bordered().style(style::DEFAULT)),
            input_area,
        );
        if let Some(error) = &self.error {
            frame.render_widget(
                Line::styled(error.to_string(), style::ERROR).centered(),
                error_area,
            );
        }
        frame.render_widget(
            KeyBindingDisplay::new(&[(&["Enter"], "Play"), (&["Esc"], "Quit")]),
            help_area,
        );
    }
}
