//! pomotui library crate.
//!
//! This library provides the core functionality for pomotui, including:
//! - The Pomodoro session state machine and duration settings
//! - The one-second tick schedule driving it
//! - Phase change notifications
//! - Terminal UI components

pub mod app;
pub mod cli;
pub mod config;
pub mod event;
pub mod event_loop;
pub mod handlers;
pub mod logging;
pub mod notify;
pub mod pomodoro;
pub mod schedule;
pub mod ui;
