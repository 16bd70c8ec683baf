//! `?` overlay listing the timer's keys, one line per group.
//!
//! Duration keys are dimmed while a session exists, since the timer
//! rejects edits until it is stopped.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

struct KeyGroup {
    name: &'static str,
    /// Whether the group is affected by the session lock
    locked_in_session: bool,
    keys: &'static [(&'static str, &'static str)],
}

const GROUPS: &[KeyGroup] = &[
    KeyGroup {
        name: "Session",
        locked_in_session: false,
        keys: &[("Space/p", "start, pause, resume"), ("s", "stop")],
    },
    KeyGroup {
        name: "Focus",
        locked_in_session: true,
        keys: &[("k/↑", "+5 min"), ("j/↓", "-5 min")],
    },
    KeyGroup {
        name: "Break",
        locked_in_session: true,
        keys: &[("l/→", "+1 min"), ("h/←", "-1 min")],
    },
    KeyGroup {
        name: "App",
        locked_in_session: false,
        keys: &[("?", "close this"), ("q/Esc", "quit")],
    },
];

/// Width reserved for group names so the key columns line up
const NAME_WIDTH: usize = 9;

pub struct HelpMenuWidget {
    session_active: bool,
}

impl HelpMenuWidget {
    pub fn new(session_active: bool) -> Self {
        Self { session_active }
    }

    /// Popup area: full width, directly above the help bar
    pub fn calculate_area(screen: Rect) -> Rect {
        // One line per group plus the top border
        let height = (GROUPS.len() as u16 + 1).min(screen.height);
        Rect {
            x: 0,
            y: screen.height.saturating_sub(height + 1),
            width: screen.width,
            height,
        }
    }

    fn group_line(&self, group: &KeyGroup) -> Line<'static> {
        let dimmed = group.locked_in_session && self.session_active;
        let (key_style, label_style) = if dimmed {
            let style = Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM);
            (style, style)
        } else {
            (
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::White),
            )
        };

        let mut spans = vec![Span::styled(
            format!(" {:<NAME_WIDTH$}", group.name),
            Style::default().fg(Color::Yellow),
        )];
        for (key, label) in group.keys {
            spans.push(Span::styled(format!("{key} "), key_style));
            spans.push(Span::styled(format!("{label}   "), label_style));
        }
        if dimmed {
            spans.push(Span::styled(
                "(stop the timer to edit)",
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }

    fn lines(&self) -> Vec<Line<'static>> {
        GROUPS.iter().map(|group| self.group_line(group)).collect()
    }
}

impl Widget for HelpMenuWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " Pomodoro keys ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(Color::Black));

        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_area_sits_above_help_bar() {
        let area = HelpMenuWidget::calculate_area(Rect::new(0, 0, 100, 30));
        assert_eq!(area, Rect::new(0, 24, 100, 5));
    }

    #[test]
    fn test_area_on_tiny_screen() {
        let area = HelpMenuWidget::calculate_area(Rect::new(0, 0, 40, 3));
        assert_eq!(area.height, 3);
        assert_eq!(area.y, 0);
    }

    #[test]
    fn test_one_line_per_group() {
        let lines = HelpMenuWidget::new(false).lines();
        let text: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(text.len(), 4);
        assert!(text[0].starts_with(" Session"));
        assert!(text[1].contains("k/↑ +5 min"));
        assert!(text[2].contains("h/← -1 min"));
        assert!(text[3].contains("q/Esc quit"));
    }

    #[test]
    fn test_duration_keys_dimmed_during_session() {
        let idle = HelpMenuWidget::new(false).lines();
        let active = HelpMenuWidget::new(true).lines();

        assert!(!line_text(&idle[1]).contains("stop the timer"));
        assert!(line_text(&active[1]).contains("stop the timer"));
        assert!(line_text(&active[2]).contains("stop the timer"));
        // Session and app keys stay live
        assert!(!line_text(&active[0]).contains("stop the timer"));
        assert_eq!(active[0].spans[1].style.fg, Some(Color::Cyan));
        assert_eq!(active[1].spans[1].style.fg, Some(Color::DarkGray));
    }
}
