use brickwell_engine::{Cell, PieceColor};
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::ui::widgets::{piece_style, style};

/// One well cell drawn as a two-column terminal block.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BlockDisplay {
    style: Style,
    symbol: &'static str,
}

impl BlockDisplay {
    pub(crate) const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub(crate) const fn width() -> u16 {
        2
    }

    pub(crate) const fn height() -> u16 {
        1
    }

    pub(crate) const fn empty(show_dots: bool) -> Self {
        if show_dots {
            Self::new(style::EMPTY_DOT, ".")
        } else {
            Self::new(style::EMPTY, "")
        }
    }

    pub(crate) const fn ghost() -> Self {
        Self::new(style::GHOST, "[]")
    }

    pub(crate) const fn piece(color: PieceColor) -> Self {
        Self::new(piece_style(color), "")
    }

    pub(crate) const fn from_cell(cell: Cell, show_dots: bool) -> Self {
        match cell {
            Cell::Empty => Self::empty(show_dots),
            Cell::Locked(color) => Self::piece(color),
        }
    }
}

impl Widget for BlockDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BlockDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Paragraph fills the whole area, not just the cells under the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
