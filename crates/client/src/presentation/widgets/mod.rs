//! Widgets for the duel screens.
//!
//! Each widget is a render function over a read-only [`App`](crate::app::App).

pub mod footer;
pub mod header;
pub mod history;
pub mod robot_panel;
pub mod setup;
pub mod weapon_list;

use duel_core::Side;
use ratatui::style::{Color, Modifier, Style};

use crate::app::{App, Editor};

fn selection_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// Robot name, or the rename buffer while that robot is being renamed.
fn name_or_editor(app: &App, side: Side) -> String {
    match app.editor() {
        Some(Editor::Name { side: editing, buffer }) if *editing == side => format!("[{buffer}_]"),
        _ => app.state().combatant(side).name.clone(),
    }
}
