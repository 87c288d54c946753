//! Abstract input key event, independent of terminal library.
//!
//! `pdview-app` never sees crossterm types; the TUI converts its key events
//! into [`InputKey`] at the boundary.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    Home,
    End,

    Enter,
    Esc,
    Tab,
    BackTab,

    /// Function key (F1-F12)
    F(u8),
}
