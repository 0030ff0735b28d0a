use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::Palette;
use crate::presentation::view_models::CartDrawerViewModel;

const DRAWER_WIDTH: u16 = 42;

pub struct CartDrawerView<'a> {
    model: &'a CartDrawerViewModel,
    palette: Palette,
}

impl<'a> CartDrawerView<'a> {
    pub(crate) fn new(model: &'a CartDrawerViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }
}

impl<'a> Widget for CartDrawerView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = DRAWER_WIDTH.min(area.width);
        let drawer = Rect::new(area.right() - width, area.y, width, area.height);
        Clear.render(drawer, buf);

        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(self.palette.accent))
            .style(
                Style::default()
                    .fg(self.palette.foreground)
                    .bg(self.palette.background),
            );
        let inner = block.inner(drawer);
        block.render(drawer, buf);

        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(inner);

        let header =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(8)]).split(chunks[0]);
        Paragraph::new(Span::styled(
            "Your Cart",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .render(header[0], buf);
        Paragraph::new(Span::styled(
            "[Esc] ✕",
            Style::default().fg(self.palette.muted),
        ))
        .alignment(Alignment::Right)
        .render(header[1], buf);

        if self.model.lines.is_empty() {
            Paragraph::new("Your cart is empty.")
                .style(Style::default().fg(self.palette.muted))
                .render(chunks[1], buf);
        } else {
            let name_width = (inner.width as usize).saturating_sub(10);
            let items: Vec<ListItem> = self
                .model
                .lines
                .iter()
                .map(|line| {
                    let style = if line.selected {
                        Style::default()
                            .fg(self.palette.focus)
                            .add_modifier(Modifier::REVERSED)
                    } else {
                        Style::default()
                    };
                    ListItem::new(Line::from(vec![
                        Span::raw(format!("{:<width$}", truncate(&line.name, name_width), width = name_width)),
                        Span::raw(format!("{:>9}", line.price)),
                    ]))
                    .style(style)
                })
                .collect();
            // The list scrolls to keep the selected line on screen.
            let selected = self.model.lines.iter().position(|line| line.selected);
            let mut state = ListState::default().with_selected(selected);
            StatefulWidget::render(List::new(items), chunks[1], buf, &mut state);
        }

        Paragraph::new(Span::styled(
            self.model.total.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .render(chunks[2], buf);

        Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(self.palette.accent)),
                Span::raw(" Checkout  "),
                Span::styled("[d]", Style::default().fg(self.palette.accent)),
                Span::raw(" Remove"),
            ]),
        ])
        .alignment(Alignment::Center)
        .render(chunks[3], buf);
    }
}

fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
