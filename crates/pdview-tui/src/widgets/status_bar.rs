//! Status bar widget
//!
//! Key hints on the left (gated on the affordances the host provided), the
//! running-target count and the latest status message on the right.

use pdview_app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{icons::IconSet, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    /// `(key, action)` pairs shown for the current state
    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let affordances = self.state.details.affordances();
        let mut hints = vec![("↑↓", "select"), ("⏎", "toggle"), ("e/c", "all")];
        if affordances.project_graph {
            hints.push(("g", "graph"));
        }
        if affordances.task_graph {
            hints.push(("t", "tasks"));
        }
        if affordances.run_target {
            hints.push(("r", "run"));
        }
        hints.extend([("v", "layout"), ("?", "help"), ("q", "quit")]);
        hints
    }

    fn right_spans(&self) -> Vec<Span<'a>> {
        let mut spans = Vec::new();
        let running = self.state.running_targets.len();
        if running > 0 {
            spans.push(Span::styled(
                format!("{} {} running ", self.icons.play(), running),
                styles::running(),
            ));
        }
        if let Some(status) = &self.state.status {
            spans.push(Span::styled(status.text.as_str(), styles::status(status.level)));
        }
        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let right = self.right_spans();
        let right_width: usize = right.iter().map(|s| s.content.width()).sum();
        let available = usize::from(area.width).saturating_sub(right_width + 1);

        // Drop hints from the end until they fit beside the status
        let mut left = Vec::new();
        let mut used = 0;
        for (key, action) in self.hints() {
            let width = key.width() + action.width() + 5;
            if used + width > available {
                break;
            }
            used += width;
            left.push(Span::styled(format!("[{}]", key), styles::keybinding()));
            left.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }

        let padding = usize::from(area.width).saturating_sub(used + right_width);
        let mut spans = left;
        spans.push(Span::raw(" ".repeat(padding)));
        spans.extend(right);

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
