//! Storefront widgets.
//!
//! Each view borrows its view model and implements ratatui's `Widget`.
//! Views only place already-formatted text; the palette for the current
//! theme is resolved here.

pub mod cart_drawer;
pub mod footer;
pub mod nav_bar;
pub mod product_grid;
pub mod success_overlay;

pub use cart_drawer::CartDrawerView;
pub use footer::FooterView;
pub use nav_bar::NavBarView;
pub use product_grid::{ProductGridView, grid_columns};
pub use success_overlay::SuccessOverlayView;

use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::presentation::view_models::ThemeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub focus: Color,
    pub heart: Color,
    pub badge: Color,
    pub success: Color,
}

pub(crate) fn palette(theme: ThemeKind) -> Palette {
    match theme {
        ThemeKind::Light => Palette {
            background: Color::Rgb(255, 237, 213),
            foreground: Color::Rgb(31, 41, 55),
            muted: Color::Rgb(120, 113, 108),
            accent: Color::Rgb(234, 88, 12),
            focus: Color::Rgb(202, 138, 4),
            heart: Color::Red,
            badge: Color::Red,
            success: Color::Green,
        },
        ThemeKind::Dark => Palette {
            background: Color::Rgb(3, 7, 18),
            foreground: Color::White,
            muted: Color::Gray,
            accent: Color::Rgb(251, 191, 36),
            focus: Color::Rgb(250, 204, 21),
            heart: Color::Red,
            badge: Color::Red,
            success: Color::Green,
        },
    }
}

/// Rectangle of at most `width` x `height` centered in `area`.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::buffer::Buffer;

    /// Buffer rows as plain strings, for asserting on rendered text.
    pub fn rows(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn contains(buf: &Buffer, needle: &str) -> bool {
        rows(buf).iter().any(|row| row.contains(needle))
    }
}
