//! Screen layout for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Project details (header, targets heading, target sections)
    pub details: Rect,

    /// One-line status bar with key hints and the latest status message
    pub status: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);

    ScreenAreas {
        details: chunks[0],
        status: chunks[1],
    }
}
