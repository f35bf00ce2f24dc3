use brickwell_engine::{SessionPhase, SessionSnapshot};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::ui::widgets::{PieceDisplay, ScoreDisplay, WellDisplay, color, style};

/// Full game view: score panel, well and next-piece preview.
#[derive(Debug)]
pub(crate) struct SessionDisplay<'a> {
    snapshot: &'a SessionSnapshot<'a>,
}

impl<'a> SessionDisplay<'a> {
    pub(crate) fn new(snapshot: &'a SessionSnapshot<'a>) -> Self {
        Self { snapshot }
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let snapshot = self.snapshot;
        let in_play = snapshot.phase.is_active() || snapshot.phase.is_paused();
        let block_padding = Padding::symmetric(1, 0);
        let border_style = match snapshot.phase {
            SessionPhase::Idle => color::GRAY,
            SessionPhase::Active => color::WHITE,
            SessionPhase::Paused => color::YELLOW,
            SessionPhase::Over => color::RED,
        };

        let well = {
            let widget = WellDisplay::new(snapshot.well)
                .block(Block::bordered().border_style(border_style).style(style::DEFAULT));
            if in_play {
                widget
                    .ghost(snapshot.ghost_piece())
                    .falling_piece(snapshot.current)
            } else {
                widget
            }
        };
        let next_panel = {
            let panel = PieceDisplay::new().block(
                Block::bordered()
                    .title(Line::from("NEXT").centered())
                    .padding(block_padding)
                    .border_style(border_style)
                    .style(style::DEFAULT),
            );
            if in_play { panel.piece(snapshot.next) } else { panel }
        };
        let score_panel = ScoreDisplay::new(snapshot).block(
            Block::bordered()
                .title(Line::from("SCORE").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style::DEFAULT),
        );

        let [left_column, center_column, right_column] = Layout::horizontal([
            Constraint::Length(score_panel.width()),
            Constraint::Length(well.width()),
            Constraint::Length(next_panel.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [score_area] =
            Layout::vertical([Constraint::Length(score_panel.height())]).areas(left_column);
        let [well_area] = Layout::vertical([Constraint::Length(well.height())]).areas(center_column);
        let [next_area] =
            Layout::vertical([Constraint::Length(next_panel.height())]).areas(right_column);

        let well_width = well.width();
        score_panel.render(score_area, buf);
        well.render(well_area, buf);
        next_panel.render(next_area, buf);

        let popup = match snapshot.phase {
            SessionPhase::Active => None,
            SessionPhase::Idle => Some((
                "PRESS ENTER",
                Style::new().fg(color::BLACK).bg(color::WHITE),
            )),
            SessionPhase::Paused => {
                Some(("PAUSED", Style::new().fg(color::BLACK).bg(color::YELLOW)))
            }
            SessionPhase::Over => {
                Some(("GAME OVER!!", Style::new().fg(color::WHITE).bg(color::RED)))
            }
        };

        if let Some((text, style)) = popup {
            let block = Block::new().style(style);
            let text = Text::styled(text, style).centered();
            let area = well_area.centered(Constraint::Length(well_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
