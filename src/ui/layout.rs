use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub focus_panel: Rect,
    pub break_panel: Rect,
    pub controls: Rect,
    pub progress: Rect,
    pub help_bar: Rect,
}

/// Durations row (focus | break), controls, progress, and a help bar at the bottom
pub fn create_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let durations = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(vertical[0]);

    AppLayout {
        focus_panel: durations[0],
        break_panel: durations[1],
        controls: vertical[1],
        progress: vertical[2],
        help_bar: vertical[3],
    }
}

/// Area inside a one-cell border
pub fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
