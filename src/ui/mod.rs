pub mod layout;
mod menu;
mod viewer;

pub use layout::{calculate_menu_chunks, calculate_viewer_chunks};
pub use menu::draw_menu;
pub use viewer::draw_viewer;

use crate::app::App;
use crate::models::AppState;
use ratatui::Frame;

pub fn draw(f: &mut Frame, app: &App) {
    match app.state {
        AppState::Menu => draw_menu(f, app),
        AppState::Viewer => draw_viewer(f, &app.session, app.status.as_ref()),
    }
}
