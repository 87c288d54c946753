//! Semantic style builders.

use pdview_app::StatusLevel;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn label() -> Style {
    text_primary().add_modifier(Modifier::BOLD)
}

// --- Headings ---
pub fn title() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn heading() -> Style {
    text_primary().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Target sections ---
pub fn tag_pill() -> Style {
    Style::default().fg(palette::TAG_FG).bg(palette::TAG_BG)
}

pub fn property_key() -> Style {
    Style::default().fg(palette::PROPERTY_KEY)
}

pub fn provenance() -> Style {
    Style::default()
        .fg(palette::PROVENANCE)
        .add_modifier(Modifier::ITALIC)
}

/// "Black on Cyan" - focused target header
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status ---
pub fn status(level: StatusLevel) -> Style {
    let color = match level {
        StatusLevel::Info => palette::STATUS_GREEN,
        StatusLevel::Warning => palette::STATUS_YELLOW,
        StatusLevel::Error => palette::STATUS_RED,
    };
    Style::default().fg(color)
}

pub fn running() -> Style {
    Style::default().fg(palette::STATUS_BLUE)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            palette::BORDER_ACTIVE
        } else {
            palette::BORDER_DIM
        }))
}

/// Bottom rule under the project header
pub fn header_rule() -> Block<'static> {
    Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette::BORDER_DIM))
}

pub fn popup_block(title: &str) -> Block<'static> {
    glass_block(true)
        .title(format!(" {} ", title))
        .style(Style::default().bg(palette::POPUP_BG))
}
