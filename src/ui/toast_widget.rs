use crate::ui::toast::{Toast, ToastType};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Stacks toasts upward from the bottom-right corner of `area`
pub struct ToastWidget<'a> {
    toasts: &'a [&'a Toast],
}

impl<'a> ToastWidget<'a> {
    pub fn new(toasts: &'a [&'a Toast]) -> Self {
        Self { toasts }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        if self.toasts.is_empty() {
            return;
        }

        let toast_height = 3u16;
        let gap = 1u16;

        for (idx, toast) in self.toasts.iter().rev().enumerate() {
            // Width follows the message, bounded by the screen
            let toast_width = (toast.message.chars().count() as u16 + 6).min(area.width);
            let offset = idx as u16 * (toast_height + gap);
            if toast_height + 1 + offset > area.height {
                break;
            }
            let toast_area = Rect::new(
                area.right().saturating_sub(toast_width + 1),
                area.bottom().saturating_sub(toast_height + 1 + offset),
                toast_width,
                toast_height,
            );

            // Clear background
            frame.render_widget(Clear, toast_area);

            let border_style = Style::default().fg(toast_color(toast.toast_type));
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(Style::default().bg(Color::Black));

            let text = Paragraph::new(Line::from(vec![
                Span::styled(
                    toast_icon(toast.toast_type),
                    border_style.add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::raw(toast.message.as_str()),
            ]))
            .block(block)
            .alignment(Alignment::Left);

            frame.render_widget(text, toast_area);
        }
    }
}

fn toast_icon(toast_type: ToastType) -> &'static str {
    match toast_type {
        ToastType::Info => "ℹ",
        ToastType::Warning => "⚠",
    }
}

fn toast_color(toast_type: ToastType) -> Color {
    match toast_type {
        ToastType::Info => Color::Cyan,
        ToastType::Warning => Color::Yellow,
    }
}
