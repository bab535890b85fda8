//! Per-robot fight panel with a health gauge and the loadout.

use duel_core::{Phase, Side};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
};

use super::{name_or_editor, selection_style, weapon_list};
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App, side: Side) {
    let state = app.state();
    let combatant = state.combatant(side);
    let is_selected = side == app.selected_robot();

    let mut title = if is_selected {
        format!(" ▶ {} ", name_or_editor(app, side))
    } else {
        format!(" {} ", combatant.name)
    };
    if state.phase == Phase::Fighting
        && app.config().ruleset.enforces_turns()
        && side == app.attacker()
        && !state.is_over()
    {
        title.push_str("(to fire) ");
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(selection_style(is_selected));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    frame.render_widget(health_gauge(app, side), chunks[0]);
    frame.render_widget(weapon_list::build(app, combatant, is_selected), chunks[1]);
}

fn health_gauge(app: &App, side: Side) -> Gauge<'static> {
    let combatant = app.state().combatant(side);
    let max = app.config().starting_health.max(1);
    let percent = (u64::from(combatant.health) * 100 / u64::from(max)).min(100) as u16;
    let label = if combatant.is_defeated() {
        "DESTROYED".to_string()
    } else {
        format!("{}/{}", combatant.health, app.config().starting_health)
    };

    Gauge::default()
        .gauge_style(Style::default().fg(health_color(percent)))
        .percent(percent)
        .label(label)
}

fn health_color(percent: u16) -> Color {
    match percent {
        0..=25 => Color::Red,
        26..=50 => Color::Yellow,
        _ => Color::Green,
    }
}
