use brickwell_engine::Piece;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::BlockDisplay;

/// Preview of a single piece in its spawn orientation, centred in a 4×2 box.
#[derive(Debug)]
pub(crate) struct PieceDisplay<'a> {
    piece: Option<Piece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PieceDisplay<'a> {
    pub(crate) fn new() -> Self {
        Self {
            piece: None,
            block: None,
        }
    }

    pub(crate) fn piece(self, piece: Piece) -> Self {
        Self {
            piece: Some(piece),
            ..self
        }
    }

    pub(crate) fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub(crate) fn width(&self) -> u16 {
        4 * BlockDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub(crate) fn height(&self) -> u16 {
        2 * BlockDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let empty = BlockDisplay::empty(false);
        let Some(piece) = self.piece else {
            empty.render(area, buf);
            return;
        };

        let shape = piece.shape();
        let (width, height) = (u16::from(shape.width()), u16::from(shape.height()));
        let piece_area = area.centered(
            Constraint::Length(width * BlockDisplay::width()),
            Constraint::Length(height * BlockDisplay::height()),
        );

        let col_constraints = (0..width).map(|_| Constraint::Length(BlockDisplay::width()));
        let row_constraints = (0..height).map(|_| Constraint::Length(BlockDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let occupied = BlockDisplay::piece(piece.color());
        for (y, row) in (0..).zip(piece_area.layout_vec(&vertical)) {
            for (x, cell) in (0..).zip(row.layout_vec(&horizontal)) {
                if shape.is_occupied(x, y) {
                    occupied.render(cell, buf);
                } else {
                    empty.render(cell, buf);
                }
            }
        }
    }
}
