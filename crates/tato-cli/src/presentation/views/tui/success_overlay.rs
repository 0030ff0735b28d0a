use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

use super::{Palette, centered_rect};
use crate::presentation::view_models::SuccessOverlayViewModel;

pub struct SuccessOverlayView<'a> {
    model: &'a SuccessOverlayViewModel,
    palette: Palette,
}

impl<'a> SuccessOverlayView<'a> {
    pub(crate) fn new(model: &'a SuccessOverlayViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }
}

impl<'a> Widget for SuccessOverlayView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(32, 7, area);
        Clear.render(popup, buf);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "✔",
                Style::default()
                    .fg(self.palette.success)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.model.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(self.palette.foreground)
                    .bg(self.palette.background),
            )
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.palette.success)),
            )
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::ThemeKind;
    use crate::presentation::views::tui::{palette, test_support};

    #[test]
    fn test_overlay_is_centered_and_titled() {
        let model = SuccessOverlayViewModel {
            title: "Order Confirmed!".to_string(),
        };
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);

        SuccessOverlayView::new(&model, palette(ThemeKind::Light)).render(area, &mut buf);

        let rows = test_support::rows(&buf);
        let title_row = rows
            .iter()
            .position(|r| r.contains("Order Confirmed!"))
            .unwrap();
        assert!(title_row > 5 && title_row < 15);
        assert!(rows[0].trim().is_empty());
    }
}
