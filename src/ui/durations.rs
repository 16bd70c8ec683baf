//! Focus and break duration panels with their -/+ buttons.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::Action;
use crate::pomodoro::format::minutes_to_duration;
use crate::ui::button::{row_areas, Button};
use crate::ui::layout::inner;

const DECREASE_LABEL: &str = "-";
const INCREASE_LABEL: &str = "+";

/// One duration readout with decrease/increase buttons on the right
pub struct DurationPanel {
    title: &'static str,
    minutes: u32,
    editable: bool,
    decrease: Action,
    increase: Action,
}

impl DurationPanel {
    pub fn focus(minutes: u32, editable: bool) -> Self {
        Self {
            title: "Focus",
            minutes,
            editable,
            decrease: Action::DecreaseFocus,
            increase: Action::IncreaseFocus,
        }
    }

    pub fn break_time(minutes: u32, editable: bool) -> Self {
        Self {
            title: "Break",
            minutes,
            editable,
            decrease: Action::DecreaseBreak,
            increase: Action::IncreaseBreak,
        }
    }

    /// Readout text, e.g. "Focus Duration: 00:25"
    pub fn text(&self) -> String {
        format!("{} Duration: {}", self.title, minutes_to_duration(self.minutes))
    }

    /// Button positions for mouse hit-testing, matching what `render` draws
    pub fn button_areas(&self, area: Rect) -> [(Action, Rect); 2] {
        let inner = inner(area);
        let buttons_width = Button::width(DECREASE_LABEL) + 1 + Button::width(INCREASE_LABEL);
        let origin = Rect {
            x: inner.right().saturating_sub(buttons_width).max(inner.x),
            width: buttons_width.min(inner.width),
            ..inner
        };
        let areas = row_areas(origin, &[DECREASE_LABEL, INCREASE_LABEL], 1);
        [(self.decrease, areas[0]), (self.increase, areas[1])]
    }
}

impl Widget for DurationPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.editable {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let text = Paragraph::new(Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .block(block);
        text.render(area, buf);

        let [decrease, increase] = self.button_areas(area);
        Button::new(DECREASE_LABEL, self.editable).render(decrease.1, buf);
        Button::new(INCREASE_LABEL, self.editable).render(increase.1, buf);
    }
}
