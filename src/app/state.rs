//! Independent type definitions used by App.

use ratatui::layout::{Position, Rect};

/// Every user action the UI can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    IncreaseFocus,
    DecreaseFocus,
    IncreaseBreak,
    DecreaseBreak,
    /// Start from idle, resume when paused, pause when running
    TogglePlayPause,
    Stop,
    ToggleHelp,
    Quit,
}

impl Action {
    /// Whether this action edits a configured duration
    pub fn is_duration_edit(self) -> bool {
        matches!(
            self,
            Action::IncreaseFocus
                | Action::DecreaseFocus
                | Action::IncreaseBreak
                | Action::DecreaseBreak
        )
    }
}

/// Clickable button rectangles recorded during the last draw
#[derive(Debug, Clone, Default)]
pub struct ButtonAreas {
    areas: Vec<(Action, Rect)>,
}

impl ButtonAreas {
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn insert(&mut self, action: Action, area: Rect) {
        self.areas.retain(|(a, _)| *a != action);
        self.areas.push((action, area));
    }

    /// The button under screen cell (`col`, `row`), if any
    pub fn hit(&self, col: u16, row: u16) -> Option<Action> {
        let position = Position::new(col, row);
        self.areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(action, _)| *action)
    }

    pub fn area(&self, action: Action) -> Option<Rect> {
        self.areas
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, area)| *area)
    }
}
