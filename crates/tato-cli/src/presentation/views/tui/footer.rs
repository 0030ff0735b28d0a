use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::Palette;
use crate::presentation::view_models::FooterViewModel;

pub struct FooterView<'a> {
    model: &'a FooterViewModel,
    palette: Palette,
}

impl<'a> FooterView<'a> {
    pub(crate) fn new(model: &'a FooterViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }
}

impl<'a> Widget for FooterView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.model.text.as_str())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(self.palette.muted)
                    .bg(self.palette.background),
            )
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(self.palette.muted)),
            )
            .render(area, buf);
    }
}
