pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod loader;
pub mod logger;
pub mod models;
pub mod parser;
pub mod terminal;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use app::App;
pub use config::{Cli, Config};
pub use error::LoadError;
pub use input::{handle_key, viewer_command, InputOutcome};
pub use loader::{get_deck_files, load_deck};
pub use models::{AppState, Card, Command, Deck, Session, StatusMessage};
pub use parser::{detect_format, parse_line, parse_lines, parse_text, LineFormat};
pub use ui::{draw, draw_menu, draw_viewer};
pub use utils::truncate_string;
