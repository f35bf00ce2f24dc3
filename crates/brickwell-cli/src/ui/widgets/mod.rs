use brickwell_engine::PieceColor;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Block as BlockWidget,
};

pub(crate) use self::{
    block_display::*, key_binding_display::*, piece_display::*, score_display::*,
    session_display::*, well_display::*,
};

mod block_display;
mod key_binding_display;
mod piece_display;
mod score_display;
mod session_display;
mod well_display;

pub(crate) mod color {
    use ratatui::style::Color;

    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub(crate) mod style {
    use ratatui::style::{Color, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY: Style = bg_only(color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);
    pub const GHOST: Style = fg_bg(color::WHITE, color::BLACK);
    pub const ERROR: Style = Style::new().fg(color::RED);
}

/// Solid style for cells of the given piece colour.
pub(crate) const fn piece_style(piece_color: PieceColor) -> Style {
    let (r, g, b) = piece_color.rgb();
    let color = Color::Rgb(r, g, b);
    Style::new().fg(color).bg(color)
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
