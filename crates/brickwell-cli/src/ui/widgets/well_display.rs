use std::iter;

use brickwell_engine::{Piece, Position, Well};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::BlockDisplay;

/// The well with its locked cells, plus the falling piece and its ghost.
#[derive(Debug)]
pub(crate) struct WellDisplay<'a> {
    well: &'a Well,
    ghost: Option<Piece>,
    falling_piece: Option<Piece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> WellDisplay<'a> {
    pub(crate) fn new(well: &'a Well) -> Self {
        Self {
            well,
            ghost: None,
            falling_piece: None,
            block: None,
        }
    }

    pub(crate) fn ghost(self, piece: Piece) -> Self {
        Self {
            ghost: Some(piece),
            ..self
        }
    }

    pub(crate) fn falling_piece(self, piece: Piece) -> Self {
        Self {
            falling_piece: Some(piece),
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
        u16::from(self.well.columns()) * BlockDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub(crate) fn height(&self) -> u16 {
        u16::from(self.well.rows()) * BlockDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }

    fn blocks(&self) -> Vec<Vec<BlockDisplay>> {
        let mut grid: Vec<Vec<_>> = self
            .well
            .lines()
            .map(|row| {
                row.iter()
                    .map(|cell| BlockDisplay::from_cell(*cell, true))
                    .collect()
            })
            .collect();

        let mut overlay = |piece: &Piece, display: BlockDisplay| {
            for Position { x, y } in piece.cells() {
                let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
                    continue;
                };
                if let Some(slot) = grid.get_mut(y).and_then(|row| row.get_mut(x)) {
                    *slot = display;
                }
            }
        };
        if let Some(ghost) = &self.ghost {
            overlay(ghost, BlockDisplay::ghost());
        }
        if let Some(piece) = &self.falling_piece {
            overlay(piece, BlockDisplay::piece(piece.color()));
        }
        grid
    }
}

impl Widget for WellDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &WellDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints =
            (0..self.well.columns()).map(|_| Constraint::Length(BlockDisplay::width()));
        let row_constraints =
            (0..self.well.rows()).map(|_| Constraint::Length(BlockDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout_vec(&vertical)
            .into_iter()
            .map(|row| row.layout_vec(&horizontal));

        for (grid_row, row) in iter::zip(grid_cells, self.blocks()) {
            for (grid_cell, block) in iter::zip(grid_row, row) {
                block.render(grid_cell, buf);
            }
        }
    }
}
