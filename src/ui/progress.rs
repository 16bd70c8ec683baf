//! Session title, remaining time, pause banner and progress gauge.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use crate::pomodoro::{ProgressView, SessionLabel};

/// Leaves its area untouched while idle
pub struct ProgressPanel<'a> {
    view: Option<&'a ProgressView>,
}

impl<'a> ProgressPanel<'a> {
    pub fn new(view: Option<&'a ProgressView>) -> Self {
        Self { view }
    }
}

fn phase_color(label: SessionLabel) -> Color {
    match label {
        SessionLabel::Focusing => Color::Red,
        SessionLabel::OnBreak => Color::Green,
    }
}

impl Widget for ProgressPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(view) = self.view else {
            return;
        };

        let color = phase_color(view.label);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        Paragraph::new(Span::styled(
            view.title.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .render(rows[0], buf);

        Paragraph::new(view.subtitle.as_str()).render(rows[1], buf);

        let status = if view.paused {
            Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else if let Some(ends_at) = view.ends_at {
            Span::styled(
                format!("ends at {}", ends_at.format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            Span::raw("")
        };
        Paragraph::new(status).render(rows[2], buf);

        Gauge::default()
            .gauge_style(Style::default().fg(color).bg(Color::Black))
            .percent(view.percent_u16())
            .label(format!("{}%", view.percent_u16()))
            .render(rows[4], buf);
    }
}
