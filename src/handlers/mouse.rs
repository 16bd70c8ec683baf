use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::{Action, ButtonAreas};

/// Map a left click on a drawn button to its action
pub fn mouse_to_action(areas: &ButtonAreas, mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => areas.hit(mouse.column, mouse.row),
        _ => None,
    }
}
