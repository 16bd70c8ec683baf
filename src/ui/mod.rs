//! Terminal UI components: duration panels, controls, progress, and overlays.

pub mod button;
pub mod controls;
pub mod durations;
pub mod help_menu;
pub mod layout;
pub mod progress;
pub mod toast;
pub mod toast_widget;

pub use controls::Controls;
pub use durations::DurationPanel;
pub use help_menu::HelpMenuWidget;
pub use progress::ProgressPanel;
pub use toast::{Toast, ToastManager, ToastType};
pub use toast_widget::ToastWidget;
