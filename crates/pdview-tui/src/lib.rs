//! pdview-tui - Terminal UI for pdview
//!
//! This crate provides the ratatui-based terminal interface: it renders the
//! project details view from pdview-app, polls terminal events and runs the
//! main loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::{run, RunOptions};
