//! Setup screen: both names and the shared weapon loadout.

use duel_core::Side;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{name_or_editor, selection_style, weapon_list};
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let selected_side = app.selected_robot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let mut names = Vec::new();
    for side in Side::BOTH {
        if side == Side::Beta {
            names.push(Span::raw("  vs  "));
        }
        let name = name_or_editor(app, side);
        names.push(Span::styled(name, selection_style(side == selected_side)));
    }
    let robots = Paragraph::new(Line::from(names))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Robots "));
    frame.render_widget(robots, chunks[0]);

    let loadout = app.state().combatant(selected_side);
    let list = weapon_list::build(app, loadout, true).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Weapon setup (shared by both robots) "),
    );
    frame.render_widget(list, chunks[1]);
}
