//! Play/pause and stop buttons.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

use crate::app::Action;
use crate::pomodoro::TimerState;
use crate::ui::button::{row_areas, Button};
use crate::ui::layout::inner;

pub struct Controls {
    state: TimerState,
    stop_enabled: bool,
}

impl Controls {
    pub fn new(state: TimerState, stop_enabled: bool) -> Self {
        Self {
            state,
            stop_enabled,
        }
    }

    fn play_pause_label(&self) -> &'static str {
        match self.state {
            TimerState::Idle => "Start",
            TimerState::Running => "Pause",
            TimerState::Paused => "Resume",
        }
    }

    pub fn button_areas(&self, area: Rect) -> [(Action, Rect); 2] {
        let areas = row_areas(inner(area), &[self.play_pause_label(), "Stop"], 2);
        [(Action::TogglePlayPause, areas[0]), (Action::Stop, areas[1])]
    }
}

impl Widget for Controls {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Timer ")
            .render(area, buf);

        let [play_pause, stop] = self.button_areas(area);
        Button::new(self.play_pause_label(), true).render(play_pause.1, buf);
        Button::new("Stop", self.stop_enabled).render(stop.1, buf);
    }
}
