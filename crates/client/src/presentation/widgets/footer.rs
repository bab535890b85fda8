//! Footer widget: status line over context-sensitive key bindings.

use duel_core::{Phase, Ruleset};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

const SETUP_HELP: &str =
    "↑/↓ weapon  d damage  a accuracy  ←/→ robot  n rename  Enter start  q quit";
const FIGHT_HELP: &str = "↑/↓ weapon  ←/→ robot  Enter fire  1-9 fire slot  r restart  q quit";
const DICE_FIGHT_HELP: &str =
    "↑/↓ weapon  ←/→ robot  Enter fire  1-9 fire slot  d/n edit  r restart  q quit";
const EDIT_HELP: &str = "type a value  Enter save  Esc cancel";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from(Span::styled(
        help_text(app),
        Style::default().fg(Color::DarkGray),
    ))];
    if let Some(status) = app.status() {
        let color = if status.is_error {
            Color::Red
        } else {
            Color::Green
        };
        lines.insert(0, Line::from(Span::styled(status.text.clone(), Style::default().fg(color))));
    }

    let footer = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}

fn help_text(app: &App) -> &'static str {
    if app.editor().is_some() {
        return EDIT_HELP;
    }
    match (app.state().phase, app.config().ruleset) {
        (Phase::Setup, _) => SETUP_HELP,
        (Phase::Fighting, Ruleset::Dice) => DICE_FIGHT_HELP,
        (Phase::Fighting, Ruleset::Accuracy) => FIGHT_HELP,
    }
}
