//! Theme for the project details TUI.
//!
//! - `palette`: Raw color constants
//! - `styles`: Semantic style builder functions
//! - `icons`: Icon slots with Unicode and Nerd Font variants

pub mod icons;
pub mod palette;
pub mod styles;
