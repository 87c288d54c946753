//! Custom widget components

mod help_popup;
mod project_details;
mod status_bar;
mod target_section;

pub use help_popup::{centered_rect, HelpPopup, TARGETS_INFO};
pub use project_details::ProjectDetails;
pub use status_bar::StatusBar;
pub use target_section::TargetSection;
