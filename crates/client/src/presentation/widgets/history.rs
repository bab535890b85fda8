//! Attack history and the end-of-duel banner.

use duel_core::Side;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::App;

/// Render the log, newest attack at the top.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let log = &app.state().log;

    let items: Vec<ListItem> = if log.is_empty() {
        vec![ListItem::new(Span::styled(
            "No attacks yet.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        log.entries()
            .map(|entry| {
                let color = if entry.result.is_hit() {
                    Color::Green
                } else {
                    Color::Gray
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:>3}. ", entry.sequence)),
                    Span::styled(entry.text().to_string(), Style::default().fg(color)),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" History "));
    frame.render_widget(list, area);
}

pub fn render_banner(frame: &mut Frame, area: Rect, app: &App, winner: Side) {
    let state = app.state();
    let loser = state.combatant(winner.opponent());
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} is destroyed! {} wins.", loser.name, state.combatant(winner).name),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  Press r to restart."),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, area);
}
