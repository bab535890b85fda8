//! Frame layout for the setup and fight screens.
use duel_core::{Phase, Side};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{app::App, presentation::widgets};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], app);

    match app.state().phase {
        Phase::Setup => widgets::setup::render(frame, chunks[1], app),
        Phase::Fighting => render_fight(frame, chunks[1], app),
    }

    widgets::footer::render(frame, chunks[2], app);
}

fn render_fight(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state();

    let mut constraints = vec![Constraint::Length(9), Constraint::Min(4)];
    if state.winner().is_some() {
        constraints.insert(1, Constraint::Length(3));
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    for side in Side::BOTH {
        widgets::robot_panel::render(frame, panels[side.index()], app, side);
    }

    let history_area = match state.winner() {
        Some(winner) => {
            widgets::history::render_banner(frame, rows[1], app, winner);
            rows[2]
        }
        None => rows[1],
    };

    widgets::history::render(frame, history_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_bootstrap::DuelSession;
    use duel_content::WeaponRegistry;
    use duel_core::{DuelConfig, ScriptedRng};
    use ratatui::{Terminal, backend::TestBackend};

    use crate::input::KeyAction;

    fn app(config: DuelConfig, rolls: &[u32]) -> App {
        App::new(DuelSession::new(
            config,
            WeaponRegistry::builtin(),
            0,
            Box::new(ScriptedRng::new(rolls.to_vec())),
        ))
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn setup_screen_shows_shared_loadout() {
        let screen = screen(&app(DuelConfig::accuracy(), &[]));
        assert!(screen.contains("Weapon setup (shared by both robots)"));
        assert!(screen.contains("Robot Alpha  vs  Robot Beta"));
    }

    #[test]
    fn dice_fight_marks_cursor_and_turn_holder_separately() {
        let mut app = app(DuelConfig::dice(), &[5, 12]);
        app.handle(KeyAction::FireSlot(0));
        app.handle(KeyAction::ToggleRobot);

        let screen = screen(&app);
        assert!(screen.contains("▶ Robot Alpha"));
        assert!(screen.contains("Robot Beta (to fire)"));
        assert!(screen.contains("Turn: Robot Beta"));
        assert!(screen.contains("←/→ robot"));
    }
}
