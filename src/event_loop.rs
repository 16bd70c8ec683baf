use std::io;
use std::time::Instant;

use anyhow::Result;
use chrono::Local;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tracing::debug;

use crate::app::App;
use crate::event::{next_event, Event};
use crate::handlers::{key_to_action, mouse_to_action};
use crate::pomodoro::{ProgressView, TimerState};
use crate::ui::layout::create_layout;
use crate::ui::{Controls, DurationPanel, HelpMenuWidget, ProgressPanel, ToastWidget};

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Apply ticks that came due while we were waiting
        app.on_tick(Instant::now());

        // Update toast manager (remove expired)
        app.toast_manager.update();

        draw(terminal, app)?;

        // Block until input arrives or the next tick is due
        if let Some(event) = next_event(app.poll_timeout(Instant::now()))? {
            handle_event(app, event, Instant::now());
        }

        if app.should_quit {
            app.shutdown();
            return Ok(());
        }
    }
}

/// Route one terminal event to the app
pub fn handle_event(app: &mut App, event: Event, now: Instant) {
    let action = match event {
        Event::Key(key) => key_to_action(key),
        Event::Mouse(mouse) => mouse_to_action(&app.button_areas, mouse),
        Event::Resize(w, h) => {
            debug!(w, h, "terminal resized");
            None
        }
        Event::Other => None,
    };
    if let Some(action) = action {
        app.dispatch(action, now);
    }
}

/// Draw one frame and record where the buttons landed
pub fn draw_ui(f: &mut Frame, app: &mut App) {
    let layout = create_layout(f.area());
    let timer = &app.timer;
    let editable = timer.durations_editable();

    let focus = DurationPanel::focus(timer.config().focus_minutes, editable);
    let brk = DurationPanel::break_time(timer.config().break_minutes, editable);
    let controls = Controls::new(timer.state(), timer.stop_enabled());

    app.button_areas.clear();
    for (action, area) in focus
        .button_areas(layout.focus_panel)
        .into_iter()
        .chain(brk.button_areas(layout.break_panel))
        .chain(controls.button_areas(layout.controls))
    {
        app.button_areas.insert(action, area);
    }

    f.render_widget(focus, layout.focus_panel);
    f.render_widget(brk, layout.break_panel);
    f.render_widget(controls, layout.controls);

    let view = ProgressView::from_timer(&app.timer, Local::now());
    f.render_widget(ProgressPanel::new(view.as_ref()), layout.progress);

    draw_help_bar(f, layout.help_bar, app);

    if app.help_menu_open {
        let area = HelpMenuWidget::calculate_area(f.area());
        f.render_widget(HelpMenuWidget::new(!app.timer.durations_editable()), area);
    }

    let toasts = app.toast_manager.visible_toasts();
    ToastWidget::new(&toasts).render(f, layout.progress);
}

fn draw_help_bar(f: &mut Frame, area: Rect, app: &App) {
    let (badge, color) = match app.timer.state() {
        TimerState::Idle => (" IDLE ", Color::Blue),
        TimerState::Running => (" RUNNING ", Color::Green),
        TimerState::Paused => (" PAUSED ", Color::Yellow),
    };
    let hints = match app.timer.state() {
        TimerState::Idle => " space start  k/j focus ±5  l/h break ±1  ? help  q quit",
        TimerState::Running => " space pause  s stop  ? help  q quit",
        TimerState::Paused => " space resume  s stop  ? help  q quit",
    };
    let msg = Paragraph::new(Line::from(vec![
        Span::styled(badge, Style::default().fg(Color::Black).bg(color)),
        Span::raw(hints),
    ]))
    .style(Style::default().bg(Color::DarkGray));
    f.render_widget(msg, area);
}

/// Draw one frame on any backend
pub fn draw<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw_ui(f, app))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Action;
    use crate::notify::Notifier;
    use crate::pomodoro::TimerRunConfig;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::with_notifier(TimerRunConfig::default(), Notifier::new())
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_idle_screen() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = app();
        draw(&mut terminal, &mut app).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Focus Duration: 00:25"));
        assert!(text.contains("Break Duration: 00:05"));
        assert!(text.contains("[ Start ]"));
        assert!(text.contains("IDLE"));
        assert!(!text.contains("remaining"));
        assert!(!text.contains("Focusing"));
    }

    #[test]
    fn test_paused_screen() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = app();
        let now = Instant::now();
        app.dispatch(Action::TogglePlayPause, now);
        app.dispatch(Action::TogglePlayPause, now);
        draw(&mut terminal, &mut app).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Focusing for 00:25 minutes"));
        assert!(text.contains("00:25:00 remaining"));
        assert!(text.contains("PAUSED"));
        assert!(text.contains("[ Resume ]"));
    }

    #[test]
    fn test_key_event_dispatches() {
        let mut app = app();
        let key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        handle_event(&mut app, Event::Key(key), Instant::now());
        assert_eq!(app.timer.state(), TimerState::Running);
        assert!(app.tick_scheduled());
    }

    #[test]
    fn test_click_buttons() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = app();
        draw(&mut terminal, &mut app).unwrap();

        // Focus "+" button
        let plus = app.button_areas.area(Action::IncreaseFocus).unwrap();
        handle_event(&mut app, click(plus.x, plus.y), Instant::now());
        assert_eq!(app.timer.config().focus_minutes, 30);

        // Start
        let start = app.button_areas.area(Action::TogglePlayPause).unwrap();
        handle_event(&mut app, click(start.x + 1, start.y), Instant::now());
        assert_eq!(app.timer.state(), TimerState::Running);

        // Duration buttons are inert while a session exists
        draw(&mut terminal, &mut app).unwrap();
        handle_event(&mut app, click(plus.x, plus.y), Instant::now());
        assert_eq!(app.timer.config().focus_minutes, 30);

        // Stop
        let stop = app.button_areas.area(Action::Stop).unwrap();
        handle_event(&mut app, click(stop.x, stop.y), Instant::now());
        assert_eq!(app.timer.state(), TimerState::Idle);
        assert!(!app.tick_scheduled());
    }

    #[test]
    fn test_help_overlay() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = app();
        app.dispatch(Action::ToggleHelp, Instant::now());
        draw(&mut terminal, &mut app).unwrap();
        let text = screen(&terminal);
        assert!(text.contains("Pomodoro keys"));
        assert!(!text.contains("stop the timer"));
    }
}
