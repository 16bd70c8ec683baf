//! Single-line clickable button.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Widget,
};

/// Renders `[ label ]`, dimmed when disabled
pub struct Button<'a> {
    label: &'a str,
    enabled: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, enabled: bool) -> Self {
        Self { label, enabled }
    }

    /// Cells needed to draw a button with this label
    pub fn width(label: &str) -> u16 {
        label.chars().count() as u16 + 4
    }

    fn style(&self) -> Style {
        if self.enabled {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let text = format!("[ {} ]", self.label);
        Span::styled(text, self.style()).render(area, buf);
    }
}

/// Lay out buttons left to right starting at `origin`, `gap` cells apart.
///
/// Buttons that would not fit within `origin` get an empty rectangle.
pub fn row_areas(origin: Rect, labels: &[&str], gap: u16) -> Vec<Rect> {
    let mut x = origin.x;
    labels
        .iter()
        .map(|label| {
            let width = Button::width(label);
            let area = if x + width <= origin.right() && origin.height > 0 {
                Rect::new(x, origin.y, width, 1)
            } else {
                Rect::default()
            };
            x += width + gap;
            area
        })
        .collect()
}
