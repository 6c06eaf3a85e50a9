use crate::app::App;
use crate::models::{AppState, Command};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Quit,
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Maps a key in the viewer to the navigation command it triggers.
pub fn viewer_command(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(Command::Previous),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::Next),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Flip),
        KeyCode::Char('s') => Some(Command::Shuffle),
        KeyCode::Char('r') => Some(Command::Reset),
        _ => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputOutcome {
    if is_ctrl_c(&key) {
        return InputOutcome::Quit;
    }

    match app.state {
        AppState::Menu => handle_menu_input(app, key),
        AppState::Viewer => handle_viewer_input(app, key),
    }
}

pub fn handle_menu_input(app: &mut App, key: KeyEvent) -> InputOutcome {
    match key.code {
        KeyCode::Up => {
            if app.selected_file_index > 0 {
                app.selected_file_index -= 1;
            }
            InputOutcome::Continue
        }
        KeyCode::Down => {
            if app.selected_file_index < app.deck_files.len().saturating_sub(1) {
                app.selected_file_index += 1;
            }
            InputOutcome::Continue
        }
        KeyCode::Enter => {
            app.open_selected();
            InputOutcome::Continue
        }
        KeyCode::Char('r') => {
            app.refresh_deck_files();
            InputOutcome::Continue
        }
        KeyCode::Char('q') | KeyCode::Esc => InputOutcome::Quit,
        _ => InputOutcome::Continue,
    }
}

pub fn handle_viewer_input(app: &mut App, key: KeyEvent) -> InputOutcome {
    if let Some(command) = viewer_command(key) {
        debug!("Viewer command {:?}", command);
        // The success banner only describes the load that just happened.
        app.status = None;
        app.dispatch(command);
        return InputOutcome::Continue;
    }

    match key.code {
        KeyCode::Esc => {
            app.return_to_menu();
            InputOutcome::Continue
        }
        KeyCode::Char('q') => InputOutcome::Quit,
        _ => InputOutcome::Continue,
    }
}
