use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::Palette;
use crate::presentation::view_models::NavBarViewModel;

pub struct NavBarView<'a> {
    model: &'a NavBarViewModel,
    palette: Palette,
}

impl<'a> NavBarView<'a> {
    pub(crate) fn new(model: &'a NavBarViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }
}

impl<'a> Widget for NavBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = Style::default()
            .fg(self.palette.foreground)
            .bg(self.palette.background);
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(self.palette.accent))
            .style(base);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Length(16), Constraint::Min(0)]).split(inner);

        Paragraph::new(Span::styled(
            self.model.title.as_str(),
            Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .render(chunks[0], buf);

        let key = Style::default().fg(self.palette.accent);
        let search_style = if self.model.search_active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Black).bg(Color::Gray)
        };
        let search_text = if self.model.search.is_empty() && !self.model.search_active {
            "Search...".to_string()
        } else if self.model.search_active {
            format!("{}▏", self.model.search)
        } else {
            self.model.search.clone()
        };

        let mut controls = vec![
            Span::styled("[/]", key),
            Span::raw(" 🔍 "),
            Span::styled(format!(" {:<18}", search_text), search_style),
            Span::raw("  "),
            Span::styled("[c]", key),
            Span::raw(format!(" {} ▾  ", self.model.category)),
            Span::styled("[t]", key),
            Span::raw(format!(" {}  ", self.model.theme_toggle)),
            Span::styled("[o]", key),
            Span::raw(" 🛒"),
        ];
        if let Some(count) = self.model.cart_badge {
            controls.push(Span::styled(
                format!(" {} ", count),
                Style::default()
                    .fg(Color::White)
                    .bg(self.palette.badge)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(controls))
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
