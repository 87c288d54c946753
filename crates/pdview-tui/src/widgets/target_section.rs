//! Target section widget
//!
//! One collapsible section per target: a header line with the toggle icon,
//! the target name and a one-line summary, followed (when expanded) by the
//! target configuration as `key: value` lines with source-map provenance.

use pdview_app::Affordances;
use pdview_core::{SourceMap, TargetConfiguration};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use serde_json::Value;

use crate::theme::{icons::IconSet, styles};

/// Keys shown first, in this order; remaining keys follow in document order
const LEADING_KEYS: &[&str] = &[
    "executor",
    "command",
    "options",
    "inputs",
    "outputs",
    "dependsOn",
    "cache",
    "configurations",
];

pub struct TargetSection<'a> {
    target_name: &'a str,
    config: &'a TargetConfiguration,
    source_map: &'a SourceMap,
    expanded: bool,
    selected: bool,
    affordances: Affordances,
    icons: IconSet,
}

impl<'a> TargetSection<'a> {
    pub fn new(
        target_name: &'a str,
        config: &'a TargetConfiguration,
        source_map: &'a SourceMap,
        icons: IconSet,
    ) -> Self {
        Self {
            target_name,
            config,
            source_map,
            expanded: false,
            selected: false,
            affordances: Affordances::default(),
            icons,
        }
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn affordances(mut self, affordances: Affordances) -> Self {
        self.affordances = affordances;
        self
    }

    /// Rows this section occupies
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines().len()).unwrap_or(u16::MAX)
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![self.header_line()];
        if self.expanded {
            lines.extend(self.body_lines());
        }
        lines
    }

    fn header_line(&self) -> Line<'a> {
        let name_style = if self.selected {
            styles::focused_selected()
        } else {
            styles::label()
        };

        let mut spans = vec![
            Span::styled(format!("{} ", self.icons.section(self.expanded)), styles::accent()),
            Span::styled(self.target_name, name_style),
        ];

        if let Some(summary) = summary(self.config) {
            spans.push(Span::styled(format!("  {}", summary), styles::text_muted()));
        }

        if self.selected {
            if self.affordances.task_graph {
                spans.push(Span::styled(
                    format!("  {} [t]", self.icons.graph()),
                    styles::keybinding(),
                ));
            }
            if self.affordances.run_target {
                spans.push(Span::styled(
                    format!("  {} [r]", self.icons.play()),
                    styles::keybinding(),
                ));
            }
        }

        Line::from(spans)
    }

    fn body_lines(&self) -> Vec<Line<'a>> {
        let Value::Object(map) = self.config else {
            return vec![Line::from(Span::styled(
                "    (no configuration)",
                styles::text_muted(),
            ))];
        };

        let leading = LEADING_KEYS
            .iter()
            .filter_map(|key| map.get_key_value(*key));
        let rest = map
            .iter()
            .filter(|(key, _)| !LEADING_KEYS.contains(&key.as_str()));

        leading
            .chain(rest)
            .map(|(key, value)| self.property_line(key, value))
            .collect()
    }

    fn property_line(&self, key: &str, value: &Value) -> Line<'a> {
        let mut spans = vec![
            Span::raw("    "),
            Span::styled(format!("{}:", key), styles::property_key()),
            Span::styled(format!(" {}", display_value(value)), styles::text_secondary()),
        ];

        if let Some(file) = provenance(self.source_map, self.target_name, key) {
            spans.push(Span::styled(
                format!("  {} {}", self.icons.file(), file),
                styles::provenance(),
            ));
        }

        Line::from(spans)
    }
}

impl Widget for TargetSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        Paragraph::new(self.lines()).render(area, buf);
    }
}

/// `executor` or `command` of the target, used on the header line
fn summary(config: &TargetConfiguration) -> Option<String> {
    ["executor", "command"]
        .iter()
        .find_map(|key| config.get(*key))
        .map(display_value)
}

/// Strings print bare; everything else as compact JSON
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// First file that contributed `targets.<target>.<key>`, falling back to the
/// file that contributed the target itself
fn provenance<'s>(source_map: &'s SourceMap, target_name: &str, key: &str) -> Option<&'s str> {
    source_map
        .get(&format!("targets.{}.{}", target_name, key))
        .or_else(|| source_map.get(&format!("targets.{}", target_name)))
        .and_then(|files| files.first())
        .map(String::as_str)
}
