//! Weapon rows shared by the setup screen and the robot panels.

use duel_core::{Combatant, Ruleset};
use ratatui::{
    text::{Line, Span},
    widgets::{List, ListItem},
};

use super::selection_style;
use crate::app::{App, Editor};
use crate::input::WeaponField;

/// Build the loadout list. Only the list with the cursor shows the edit buffer.
pub fn build<'a>(app: &App, combatant: &'a Combatant, has_cursor: bool) -> List<'a> {
    let selected = app.selected_weapon();
    let show_accuracy = app.config().ruleset == Ruleset::Accuracy;

    let items: Vec<ListItem> = combatant
        .weapons
        .iter()
        .enumerate()
        .map(|(index, weapon)| {
            let is_selected = has_cursor && index == selected;
            let editing = if is_selected { weapon_editor(app) } else { None };

            let damage = match editing {
                Some((WeaponField::Damage, buffer)) => format!("[{buffer}_]"),
                _ if show_accuracy => weapon.damage.to_string(),
                _ => format!("1-{}", weapon.damage),
            };
            let mut text = format!("{}. {:<16} dmg {:>6}", index + 1, weapon.name, damage);

            match editing {
                Some((WeaponField::Accuracy, buffer)) => {
                    text.push_str(&format!("  acc [{buffer}_]"));
                }
                _ if show_accuracy => {
                    let accuracy = weapon
                        .accuracy
                        .map(|value| format!("{value}%"))
                        .unwrap_or_else(|| "--".to_string());
                    text.push_str(&format!("  acc {accuracy:>4}"));
                }
                _ => {}
            }

            let marker = if is_selected { "▶ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(text, selection_style(is_selected)),
            ]))
        })
        .collect();

    List::new(items)
}

fn weapon_editor(app: &App) -> Option<(WeaponField, &str)> {
    match app.editor() {
        Some(editor @ Editor::Weapon { field, .. }) => Some((*field, editor.buffer())),
        _ => None,
    }
}
