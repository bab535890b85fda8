//! Header widget: title, active ruleset and whose turn it is.

use duel_core::{Phase, Ruleset};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state();
    let config = app.config();

    let rules = match config.ruleset {
        Ruleset::Accuracy => "accuracy rules".to_string(),
        Ruleset::Dice => format!(
            "dice rules (d{}, hit on {}+)",
            config.dice.sides, config.dice.hit_threshold
        ),
    };

    let mut spans = vec![
        Span::styled(
            "Robot Duel",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  {rules}")),
    ];

    if state.phase == Phase::Fighting && config.ruleset.enforces_turns() && !state.is_over() {
        spans.push(Span::raw("  Turn: "));
        spans.push(Span::styled(
            state.combatant(app.attacker()).name.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}
