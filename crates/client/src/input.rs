//! Input processing for the terminal client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use duel_core::Phase;

/// Weapon stat targeted by a numeric edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeaponField {
    Damage,
    Accuracy,
}

/// Whether keys are interpreted as commands or as text being typed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Text,
}

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// Switch the robot whose loadout is selected.
    ToggleRobot,
    /// Move the weapon cursor by the given number of rows.
    MoveWeapon(isize),
    /// Fire the weapon under the cursor.
    Fire,
    /// Fire a weapon by slot number.
    FireSlot(usize),
    Start,
    Restart,
    BeginEdit(WeaponField),
    BeginRename,
    Type(char),
    Backspace,
    Commit,
    Cancel,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands for the current screen.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key(&self, key: KeyEvent, mode: InputMode, phase: Phase) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match mode {
            InputMode::Text => self.handle_text(key),
            InputMode::Browse => self.handle_browse(key, phase),
        }
    }

    fn handle_text(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => KeyAction::Type(ch),
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Enter => KeyAction::Commit,
            KeyCode::Esc => KeyAction::Cancel,
            _ => KeyAction::None,
        }
    }

    fn handle_browse(&self, key: KeyEvent, phase: Phase) -> KeyAction {
        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Up => KeyAction::MoveWeapon(-1),
            KeyCode::Down => KeyAction::MoveWeapon(1),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                KeyAction::ToggleRobot
            }
            KeyCode::Enter => match phase {
                Phase::Setup => KeyAction::Start,
                Phase::Fighting => KeyAction::Fire,
            },
            KeyCode::Char(ch) => self.handle_char(ch, phase),
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char, phase: Phase) -> KeyAction {
        let ch = raw.to_ascii_lowercase();
        match (ch, phase) {
            ('q', _) => KeyAction::Quit,
            ('k', _) => KeyAction::MoveWeapon(-1),
            ('j', _) => KeyAction::MoveWeapon(1),
            ('h' | 'l', _) => KeyAction::ToggleRobot,
            ('d', _) => KeyAction::BeginEdit(WeaponField::Damage),
            ('a', _) => KeyAction::BeginEdit(WeaponField::Accuracy),
            ('n', _) => KeyAction::BeginRename,
            ('s', Phase::Setup) => KeyAction::Start,
            (' ', Phase::Fighting) => KeyAction::Fire,
            ('r', Phase::Fighting) => KeyAction::Restart,
            ('1'..='9', Phase::Fighting) => {
                // '1' is the first slot
                KeyAction::FireSlot(ch as usize - '1' as usize)
            }
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_starts_in_setup_and_fires_in_fight() {
        let input = InputHandler::new();
        assert_eq!(
            input.handle_key(key(KeyCode::Enter), InputMode::Browse, Phase::Setup),
            KeyAction::Start
        );
        assert_eq!(
            input.handle_key(key(KeyCode::Enter), InputMode::Browse, Phase::Fighting),
            KeyAction::Fire
        );
    }

    #[test]
    fn digits_fire_slots_only_while_fighting() {
        let input = InputHandler::new();
        assert_eq!(
            input.handle_key(key(KeyCode::Char('3')), InputMode::Browse, Phase::Fighting),
            KeyAction::FireSlot(2)
        );
        assert_eq!(
            input.handle_key(key(KeyCode::Char('3')), InputMode::Browse, Phase::Setup),
            KeyAction::None
        );
        assert_eq!(
            input.handle_key(key(KeyCode::Char('r')), InputMode::Browse, Phase::Setup),
            KeyAction::None
        );
    }

    #[test]
    fn text_mode_captures_command_letters() {
        let input = InputHandler::new();
        assert_eq!(
            input.handle_key(key(KeyCode::Char('q')), InputMode::Text, Phase::Setup),
            KeyAction::Type('q')
        );
        assert_eq!(
            input.handle_key(key(KeyCode::Esc), InputMode::Text, Phase::Setup),
            KeyAction::Cancel
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            input.handle_key(ctrl_c, InputMode::Text, Phase::Fighting),
            KeyAction::Quit
        );
    }
}
