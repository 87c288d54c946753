//! Project details widget
//!
//! Renders the project header (name, tags, root, type), the "Targets"
//! heading and one [`TargetSection`] per target, scrolled so the focused
//! section stays visible.

use pdview_app::ProjectDetailsView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::TargetSection;
use crate::theme::{icons::IconSet, styles};

pub struct ProjectDetails<'a> {
    view: &'a ProjectDetailsView,
    icons: IconSet,
}

/// Vertical spacing for a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Spacing {
    /// Indent of the header body (tags, root, type)
    indent: usize,
    /// Blank rows between header, heading and the list
    block_gap: u16,
    /// Blank rows between sections
    section_gap: u16,
}

impl Spacing {
    fn for_view(view: &ProjectDetailsView) -> Self {
        if view.variant().is_compact() {
            Self {
                indent: 1,
                block_gap: 0,
                section_gap: 0,
            }
        } else {
            Self {
                indent: 2,
                block_gap: 1,
                section_gap: 1,
            }
        }
    }
}

impl<'a> ProjectDetails<'a> {
    pub fn new(view: &'a ProjectDetailsView, icons: IconSet) -> Self {
        Self { view, icons }
    }

    fn header_lines(&self, spacing: Spacing) -> Vec<Line<'a>> {
        let project = self.view.project();
        let indent = " ".repeat(spacing.indent);

        let mut title = vec![Span::styled(project.name.as_str(), styles::title())];
        if self.view.affordances().project_graph {
            title.push(Span::styled(
                format!("  {} [g]", self.icons.eye()),
                styles::keybinding(),
            ));
        }

        let mut lines = vec![Line::from(title)];
        lines.extend((0..spacing.block_gap).map(|_| Line::default()));

        if let Some(tags) = project.data.tags.as_ref().filter(|t| !t.is_empty()) {
            let mut spans = vec![Span::raw(indent.clone())];
            for tag in tags {
                spans.push(Span::styled(format!(" {} ", tag), styles::tag_pill()));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled("Root:", styles::label()),
            Span::styled(format!(" {}", project.data.root), styles::text_primary()),
        ]));

        if let Some(display_type) = self.view.display_type() {
            lines.push(Line::from(vec![
                Span::raw(indent),
                Span::styled("Type:", styles::label()),
                Span::styled(format!(" {}", display_type), styles::text_primary()),
            ]));
        }

        lines
    }

    fn heading_line(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled("Targets", styles::heading()),
            Span::styled(format!(" {} [?]", self.icons.info()), styles::text_muted()),
        ])
    }

    /// One section per registered target, in target order
    fn sections(&self) -> Vec<TargetSection<'a>> {
        let view = self.view;
        let selected = view.selected_target();
        let affordances = view.affordances();

        view.target_names()
            .iter()
            .filter_map(|name| {
                let config = view.target(name)?;
                Some(
                    TargetSection::new(name, config, view.source_map(), self.icons)
                        .expanded(view.is_target_expanded(name))
                        .selected(selected == Some(name.as_str()))
                        .affordances(affordances),
                )
            })
            .collect()
    }

    fn render_sections(&self, area: Rect, buf: &mut Buffer, spacing: Spacing) {
        let sections = self.sections();
        if sections.is_empty() {
            Paragraph::new(Span::styled("No targets", styles::text_muted())).render(area, buf);
            return;
        }

        let heights: Vec<u16> = sections.iter().map(TargetSection::height).collect();
        let start = first_visible(
            &heights,
            self.view.selected_index(),
            spacing.section_gap,
            area.height,
        );

        let mut y = area.y;
        let bottom = area.y + area.height;
        for (section, height) in sections.into_iter().zip(heights).skip(start) {
            if y >= bottom {
                break;
            }
            let rect = Rect::new(area.x, y, area.width, height.min(bottom - y));
            section.render(rect, buf);
            y = y.saturating_add(height).saturating_add(spacing.section_gap);
        }
    }
}

/// Index of the first section to draw so that `selected` ends inside a
/// viewport `available` rows tall
fn first_visible(heights: &[u16], selected: usize, gap: u16, available: u16) -> usize {
    let selected = selected.min(heights.len().saturating_sub(1));
    let mut start = 0;
    while start < selected {
        let needed: u32 = heights[start..=selected]
            .iter()
            .map(|h| u32::from(*h) + u32::from(gap))
            .sum::<u32>()
            - u32::from(gap);
        if needed <= u32::from(available) {
            break;
        }
        start += 1;
    }
    start
}

impl Widget for ProjectDetails<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let spacing = Spacing::for_view(self.view);

        // Header with its bottom rule
        let header_lines = self.header_lines(spacing);
        let header_height = (header_lines.len() as u16 + 1).min(area.height);
        let header_area = Rect::new(area.x, area.y, area.width, header_height);
        Paragraph::new(header_lines)
            .block(styles::header_rule())
            .render(header_area, buf);

        let mut y = area.y + header_height + spacing.block_gap;
        let bottom = area.y + area.height;
        if y >= bottom {
            return;
        }

        Paragraph::new(self.heading_line()).render(Rect::new(area.x, y, area.width, 1), buf);
        y += 1 + spacing.block_gap;
        if y >= bottom {
            return;
        }

        self.render_sections(Rect::new(area.x, y, area.width, bottom - y), buf, spacing);
    }
}
