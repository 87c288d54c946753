//! Help popup: what targets are, plus the key bindings

use pdview_app::Affordances;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, styles};

/// Description shown for the "Targets" heading
pub const TARGETS_INFO: &str = "Targets are the actions you can run for a project, such as \
    build, test or lint. They come from the project configuration and from plugins that \
    infer them from tooling files.";

const POPUP_WIDTH: u16 = 60;

pub struct HelpPopup {
    affordances: Affordances,
    icons: IconSet,
}

impl HelpPopup {
    pub fn new(affordances: Affordances, icons: IconSet) -> Self {
        Self { affordances, icons }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} Targets", self.icons.info()),
                styles::heading(),
            )),
            Line::from(Span::styled(TARGETS_INFO, styles::text_secondary())),
            Line::default(),
        ];

        let mut bindings = vec![
            ("j/k ↑/↓", "select target"),
            ("Enter/Space", "expand or collapse"),
            ("e / c", "expand / collapse all"),
            ("v", "toggle compact layout"),
            ("R / F5", "reload project file"),
        ];
        if self.affordances.project_graph {
            bindings.push(("g", "view in project graph"));
        }
        if self.affordances.task_graph {
            bindings.push(("t", "view in task graph"));
        }
        if self.affordances.run_target {
            bindings.push(("r", "run target"));
        }
        bindings.push(("q / Esc", "quit"));

        lines.extend(bindings.into_iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{:>12}", key), styles::keybinding()),
                Span::styled(format!("  {}", action), styles::text_primary()),
            ])
        }));
        lines
    }
}

/// Center a fixed-size rect within an area, clamped to the area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

impl Widget for HelpPopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        // Description wraps to four rows inside the borders
        let height = lines.len() as u16 + 2 + 3;
        let popup = centered_rect(POPUP_WIDTH, height, area);

        Clear.render(popup, buf);
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(styles::popup_block("Help"))
            .render(popup, buf);
    }
}
