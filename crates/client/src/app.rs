//! Application state driven by key actions.
//!
//! The [`App`] translates [`KeyAction`]s into duel [`Action`]s, dispatches
//! them through the [`DuelSession`] and keeps the presentation-only state
//! (cursor, text editor, status line) the renderer needs.
use duel_core::{Action, DuelConfig, DuelState, EditWeaponAction, Phase, Side};

use client_bootstrap::DuelSession;

use crate::input::{InputMode, KeyAction, WeaponField};

/// Text being typed by the user before it is committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Editor {
    Weapon { field: WeaponField, buffer: String },
    Name { side: Side, buffer: String },
}

impl Editor {
    pub fn buffer(&self) -> &str {
        match self {
            Editor::Weapon { buffer, .. } | Editor::Name { buffer, .. } => buffer,
        }
    }

    fn buffer_mut(&mut self) -> &mut String {
        match self {
            Editor::Weapon { buffer, .. } | Editor::Name { buffer, .. } => buffer,
        }
    }
}

/// One-line feedback shown under the duel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

impl Status {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

pub struct App {
    session: DuelSession,
    robot: Side,
    weapon: usize,
    editor: Option<Editor>,
    status: Option<Status>,
    should_quit: bool,
}

impl App {
    pub fn new(session: DuelSession) -> Self {
        Self {
            session,
            robot: Side::Alpha,
            weapon: 0,
            editor: None,
            status: None,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &DuelState {
        self.session.state()
    }

    pub fn config(&self) -> &DuelConfig {
        self.session.config()
    }

    pub fn editor(&self) -> Option<&Editor> {
        self.editor.as_ref()
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn input_mode(&self) -> InputMode {
        if self.editor.is_some() {
            InputMode::Text
        } else {
            InputMode::Browse
        }
    }

    /// Robot the cursor is on. Edits and renames apply to it.
    pub fn selected_robot(&self) -> Side {
        self.robot
    }

    /// Robot that fires on the next attack.
    ///
    /// Under turn-enforcing rules this is always the turn holder, wherever
    /// the cursor is.
    pub fn attacker(&self) -> Side {
        let state = self.state();
        if state.phase == Phase::Fighting && self.config().ruleset.enforces_turns() {
            state.turn.current
        } else {
            self.robot
        }
    }

    /// Weapon cursor, clamped to the selected robot's loadout.
    pub fn selected_weapon(&self) -> usize {
        let count = self.state().combatant(self.robot).weapons.len();
        self.weapon.min(count.saturating_sub(1))
    }

    pub fn handle(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::ToggleRobot => self.robot = self.robot.opponent(),
            KeyAction::MoveWeapon(step) => self.move_weapon(step),
            KeyAction::Fire => self.fire(self.selected_weapon()),
            KeyAction::FireSlot(slot) => {
                self.weapon = slot;
                self.fire(slot);
            }
            KeyAction::Start => {
                if self.dispatch(Action::start()) {
                    self.status = Some(Status::info("Fight!"));
                }
            }
            KeyAction::Restart => {
                if self.dispatch(Action::restart()) {
                    self.robot = Side::Alpha;
                    self.status = Some(Status::info("Duel restarted"));
                }
            }
            KeyAction::BeginEdit(field) => self.begin_edit(field),
            KeyAction::BeginRename => {
                let side = self.robot;
                let buffer = self.state().combatant(side).name.clone();
                self.editor = Some(Editor::Name { side, buffer });
            }
            KeyAction::Type(ch) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.buffer_mut().push(ch);
                }
            }
            KeyAction::Backspace => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.buffer_mut().pop();
                }
            }
            KeyAction::Commit => self.commit(),
            KeyAction::Cancel => self.editor = None,
            KeyAction::None => {}
        }
    }

    fn move_weapon(&mut self, step: isize) {
        let count = self.state().combatant(self.robot).weapons.len();
        if count == 0 {
            return;
        }
        let current = self.selected_weapon() as isize;
        self.weapon = (current + step).rem_euclid(count as isize) as usize;
    }

    fn fire(&mut self, weapon: usize) {
        let attacker = self.attacker();
        if self.dispatch(Action::attack(attacker, weapon)) {
            // Results show up in the history panel.
            self.status = None;
            // The cursor follows the turn under enforced turns.
            if self.config().ruleset.enforces_turns() {
                self.robot = self.state().turn.current;
            }
        }
    }

    fn begin_edit(&mut self, field: WeaponField) {
        let side = self.robot;
        let Some(weapon) = self.state().combatant(side).weapon(self.selected_weapon()) else {
            self.status = Some(Status::error("No weapon selected"));
            return;
        };

        let current = match field {
            WeaponField::Damage => Some(weapon.damage),
            WeaponField::Accuracy => weapon.accuracy,
        };
        self.editor = Some(Editor::Weapon {
            field,
            buffer: current.map(|value| value.to_string()).unwrap_or_default(),
        });
    }

    fn commit(&mut self) {
        let Some(editor) = self.editor.take() else {
            return;
        };

        let action = match editor {
            Editor::Name { side, buffer } => Action::rename(side, buffer),
            Editor::Weapon { field, buffer } => {
                let Ok(value) = buffer.trim().parse::<u32>() else {
                    self.status = Some(Status::error(format!(
                        "'{}' is not a whole number",
                        buffer.trim()
                    )));
                    return;
                };

                let index = self.selected_weapon();
                // Setup edits change the shared loadout; inline edits only the robot in play.
                let edit = match self.state().phase {
                    Phase::Setup => EditWeaponAction::shared(index),
                    Phase::Fighting => EditWeaponAction::for_side(self.robot, index),
                };
                let edit = match field {
                    WeaponField::Damage => edit.damage(value),
                    WeaponField::Accuracy => edit.accuracy(value),
                };
                Action::from(edit)
            }
        };

        if self.dispatch(action) {
            self.status = Some(Status::info("Saved"));
        }
    }

    /// Returns `true` when the action was applied; rejections land in the status line.
    fn dispatch(&mut self, action: Action) -> bool {
        match self.session.dispatch(action) {
            Ok(_) => true,
            Err(error) => {
                self.status = Some(Status::error(error.to_string()));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_bootstrap::DuelSession;
    use duel_content::WeaponRegistry;
    use duel_core::ScriptedRng;

    fn app(config: DuelConfig, rolls: &[u32]) -> App {
        let session = DuelSession::new(
            config,
            WeaponRegistry::builtin(),
            0,
            Box::new(ScriptedRng::new(rolls.to_vec())),
        );
        App::new(session)
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle(KeyAction::Type(ch));
        }
    }

    #[test]
    fn setup_edit_then_fight() {
        let mut app = app(DuelConfig::accuracy(), &[10]);
        assert_eq!(app.state().phase, Phase::Setup);

        app.handle(KeyAction::BeginEdit(WeaponField::Damage));
        assert_eq!(app.editor().map(Editor::buffer), Some("20"));
        app.handle(KeyAction::Backspace);
        app.handle(KeyAction::Backspace);
        type_text(&mut app, "45");
        app.handle(KeyAction::Commit);

        for side in Side::BOTH {
            assert_eq!(app.state().combatant(side).weapons[0].damage, 45);
        }

        app.handle(KeyAction::Start);
        assert_eq!(app.state().phase, Phase::Fighting);

        app.handle(KeyAction::Fire);
        assert_eq!(app.state().combatant(Side::Beta).health, 55);
    }

    #[test]
    fn bad_number_reports_error_and_keeps_weapon() {
        let mut app = app(DuelConfig::accuracy(), &[]);
        app.handle(KeyAction::BeginEdit(WeaponField::Accuracy));
        app.handle(KeyAction::Cancel);
        assert!(app.editor().is_none());

        app.handle(KeyAction::BeginEdit(WeaponField::Accuracy));
        type_text(&mut app, "x");
        app.handle(KeyAction::Commit);

        assert!(app.status().is_some_and(|status| status.is_error));
        assert_eq!(app.state().combatant(Side::Alpha).weapons[0].accuracy, Some(70));
    }

    #[test]
    fn dice_rules_follow_the_turn_holder() {
        let mut app = app(DuelConfig::dice(), &[5, 12]);
        assert_eq!(app.state().phase, Phase::Fighting);
        assert_eq!(app.attacker(), Side::Alpha);

        app.handle(KeyAction::FireSlot(0));
        assert_eq!(app.state().combatant(Side::Beta).health, 88);
        assert_eq!(app.selected_robot(), Side::Beta);

        // Toggling moves the cursor but cannot steal the turn.
        app.handle(KeyAction::ToggleRobot);
        assert_eq!(app.selected_robot(), Side::Alpha);
        assert_eq!(app.attacker(), Side::Beta);
    }

    #[test]
    fn dice_edits_reach_the_robot_off_turn() {
        let mut app = app(DuelConfig::dice(), &[5, 12, 1]);
        app.handle(KeyAction::FireSlot(0));
        assert_eq!(app.attacker(), Side::Beta);

        app.handle(KeyAction::ToggleRobot);
        app.handle(KeyAction::BeginRename);
        for _ in 0.."Robot Alpha".len() {
            app.handle(KeyAction::Backspace);
        }
        type_text(&mut app, "Rusty");
        app.handle(KeyAction::Commit);
        assert_eq!(app.state().combatant(Side::Alpha).name, "Rusty");

        app.handle(KeyAction::BeginEdit(WeaponField::Damage));
        app.handle(KeyAction::Backspace);
        app.handle(KeyAction::Backspace);
        type_text(&mut app, "30");
        app.handle(KeyAction::Commit);
        assert_eq!(app.state().combatant(Side::Alpha).weapons[0].damage, 30);
        assert_eq!(app.state().combatant(Side::Beta).weapons[0].damage, 20);

        // Firing still belongs to the turn holder: Beta misses with a 1.
        app.handle(KeyAction::Fire);
        let last = app.state().log.latest().map(|entry| entry.attacker);
        assert_eq!(last, Some(Side::Beta));
        assert_eq!(app.selected_robot(), Side::Alpha);
    }

    #[test]
    fn rejected_actions_land_in_status() {
        let mut app = app(DuelConfig::accuracy(), &[]);
        app.handle(KeyAction::Fire);

        assert!(app.status().is_some_and(|status| status.is_error));
        assert!(app.state().log.is_empty());
    }

    #[test]
    fn weapon_cursor_wraps() {
        let mut app = app(DuelConfig::accuracy(), &[]);
        app.handle(KeyAction::MoveWeapon(-1));
        assert_eq!(app.selected_weapon(), 2);
        app.handle(KeyAction::MoveWeapon(1));
        assert_eq!(app.selected_weapon(), 0);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = app(DuelConfig::accuracy(), &[]);
        app.handle(KeyAction::Quit);
        assert!(app.should_quit());
    }
}
