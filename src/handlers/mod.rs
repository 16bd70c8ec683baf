//! Translate terminal input into app actions.

pub mod keyboard;
pub mod mouse;

pub use keyboard::key_to_action;
pub use mouse::mouse_to_action;
