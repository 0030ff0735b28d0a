use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use super::Palette;
use crate::presentation::view_models::{ProductCardViewModel, ProductGridViewModel};

pub const CARD_HEIGHT: u16 = 7;
const CARD_MIN_WIDTH: u16 = 30;
const MAX_COLUMNS: usize = 4;

/// Number of card columns that fit in `width`, between 1 and 4.
pub fn grid_columns(width: u16) -> usize {
    ((width / CARD_MIN_WIDTH) as usize).clamp(1, MAX_COLUMNS)
}

pub struct ProductGridView<'a> {
    model: &'a ProductGridViewModel,
    palette: Palette,
}

impl<'a> ProductGridView<'a> {
    pub(crate) fn new(model: &'a ProductGridViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }
}

impl<'a> Widget for ProductGridView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = Style::default()
            .fg(self.palette.foreground)
            .bg(self.palette.background);
        buf.set_style(area, base);

        if self.model.cards.is_empty() {
            Paragraph::new("No products match your search.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(self.palette.muted))
                .render(Rect { height: 1.min(area.height), ..area }, buf);
            return;
        }

        let columns = grid_columns(area.width);
        let card_width = area.width / columns as u16;
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;

        // Scroll just enough to keep the focused card's row on screen.
        let focused_row = self.model.focused.unwrap_or(0) / columns;
        let first_row = focused_row.saturating_sub(visible_rows - 1);

        for (i, card) in self.model.cards.iter().enumerate() {
            let row = i / columns;
            if row < first_row || row >= first_row + visible_rows {
                continue;
            }
            let col = (i % columns) as u16;
            let y = area.y + (row - first_row) as u16 * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            if height < 3 {
                continue;
            }
            let card_area = Rect::new(area.x + col * card_width, y, card_width, height);
            render_card(card, self.palette, card_area, buf);
        }
    }
}

fn render_card(card: &ProductCardViewModel, palette: Palette, area: Rect, buf: &mut Buffer) {
    let border_style = if card.focused {
        Style::default()
            .fg(palette.focus)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted)
    };
    let border_type = if card.focused {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };

    let heart = if card.wishlisted {
        Span::styled(" ♥ ", Style::default().fg(palette.heart))
    } else {
        Span::styled(" ♡ ", Style::default().fg(palette.muted))
    };

    let block = Block::bordered()
        .border_type(border_type)
        .border_style(border_style)
        .title(Line::from(Span::styled(
            format!(" {} ", card.name),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .title(Line::from(heart).alignment(Alignment::Right));

    let lines = vec![
        Line::from(Span::styled(
            card.description.as_str(),
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                card.price.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                if card.focused { "[a] Add to Cart" } else { "" },
                Style::default().fg(palette.accent),
            ),
        ]),
    ];

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block)
        .render(area, buf);
}
