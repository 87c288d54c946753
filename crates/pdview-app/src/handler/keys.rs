//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.show_help {
        return handle_key_help(key);
    }

    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Navigation
        InputKey::Char('j') | InputKey::Down | InputKey::Tab => Some(Message::SelectNext),
        InputKey::Char('k') | InputKey::Up | InputKey::BackTab => Some(Message::SelectPrevious),
        InputKey::Home => Some(Message::SelectFirst),
        InputKey::End => Some(Message::SelectLast),

        // Sections
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleSelected),
        InputKey::Char('e') => Some(Message::ExpandAll),
        InputKey::Char('c') => Some(Message::CollapseAll),

        // View
        InputKey::Char('v') => Some(Message::ToggleVariant),
        InputKey::Char('?') => Some(Message::ToggleHelp),

        // Affordances
        InputKey::Char('g') => Some(Message::ViewInProjectGraph),
        InputKey::Char('t') => Some(Message::ViewInTaskGraph),
        InputKey::Char('r') => Some(Message::RunSelectedTarget),

        // Reload
        InputKey::Char('R') | InputKey::F(5) => Some(Message::ReloadProject),

        _ => None,
    }
}

/// While the help popup is open only closing keys are live
fn handle_key_help(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('?') | InputKey::Esc | InputKey::Char('q') => Some(Message::ToggleHelp),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
