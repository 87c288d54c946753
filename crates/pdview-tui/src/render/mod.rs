//! Main render/view function (View in TEA pattern)

use pdview_app::AppState;
use ratatui::style::Style;
use ratatui::widgets::{Block, Padding};
use ratatui::Frame;

use crate::layout;
use crate::theme::{icons::IconSet, palette};
use crate::widgets::{HelpPopup, ProjectDetails, StatusBar};

/// Render the complete UI. Pure: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    let card = Block::default()
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette::CARD_BG));
    let details_area = card.inner(areas.details);
    frame.render_widget(card, areas.details);
    frame.render_widget(ProjectDetails::new(&state.details, icons), details_area);

    frame.render_widget(StatusBar::new(state, icons), areas.status);

    if state.show_help {
        frame.render_widget(HelpPopup::new(state.details.affordances(), icons), area);
    }
}
