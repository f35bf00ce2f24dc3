use std::iter;

use brickwell_engine::SessionSnapshot;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::style;

/// Player name, score, high score and line counts.
pub(crate) struct ScoreDisplay<'a> {
    snapshot: &'a SessionSnapshot<'a>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ScoreDisplay<'a> {
    pub(crate) fn new(snapshot: &'a SessionSnapshot<'a>) -> Self {
        Self {
            snapshot,
            block: None,
        }
    }

    pub(crate) fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub(crate) fn width(&self) -> u16 {
        20 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub(crate) fn height(&self) -> u16 {
        let rows = u16::try_from(ROWS.len()).unwrap_or(u16::MAX);
        rows + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(fn(&SessionSnapshot<'_>) -> String),
    LabelValue(&'static str, fn(&SessionSnapshot<'_>) -> String),
}

const ROWS: &[Row] = &[
    Row::FullLabel("PLAYER:"),
    Row::FullValue(|snapshot| snapshot.player.to_owned()),
    Row::Empty,
    Row::FullLabel("SCORE:"),
    Row::FullValue(|snapshot| snapshot.score.to_string()),
    Row::FullLabel("HIGH SCORE:"),
    Row::FullValue(|snapshot| snapshot.high_score.to_string()),
    Row::Empty,
    Row::LabelValue("LINES:", |snapshot| snapshot.lines_cleared.to_string()),
    Row::LabelValue("PIECES:", |snapshot| snapshot.completed_pieces.to_string()),
];

impl Widget for ScoreDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;
        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas.iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                }
                Row::FullValue(value) => {
                    Line::styled(value(self.snapshot), style)
                        .right_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.snapshot), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
