use crate::config::Config;
use crate::error::LoadError;
use crate::loader::{NO_CARDS_MESSAGE, get_deck_files, load_deck};
use crate::models::{AppState, Command, Deck, Session, StatusMessage};
use std::mem;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub config: Config,
    pub deck_files: Vec<PathBuf>,
    pub selected_file_index: usize,
    pub session: Session,
    pub status: Option<StatusMessage>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let deck_files = get_deck_files(&config.deck_dir);
        Self {
            state: AppState::Menu,
            config,
            deck_files,
            selected_file_index: 0,
            session: Session::default(),
            status: None,
        }
    }

    pub fn refresh_deck_files(&mut self) {
        self.deck_files = get_deck_files(&self.config.deck_dir);
        self.selected_file_index = self
            .selected_file_index
            .min(self.deck_files.len().saturating_sub(1));
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.deck_files
            .get(self.selected_file_index)
            .map(PathBuf::as_path)
    }

    /// Runs one navigation command against the session.
    pub fn dispatch(&mut self, command: Command) {
        let session = mem::take(&mut self.session);
        self.session = session.apply(command);
    }

    /// Replaces the session with `deck`. An empty deck keeps the user on the
    /// menu with an informational message.
    pub fn open_deck(&mut self, deck: Deck) {
        if deck.is_empty() {
            info!("Deck {:?} has no parseable cards", deck.name);
            self.status = Some(StatusMessage::Info(NO_CARDS_MESSAGE.to_string()));
            self.state = AppState::Menu;
            return;
        }

        let count = deck.len();
        self.dispatch(Command::Load(deck));
        if self.config.shuffle_on_open {
            self.dispatch(Command::Shuffle);
        }
        self.status = Some(StatusMessage::Success(format!("Found {} cards!", count)));
        self.state = AppState::Viewer;
    }

    /// Reads and opens a deck file. Read and decode failures are returned to
    /// the caller untouched.
    pub fn open_path(&mut self, path: &Path) -> Result<(), LoadError> {
        let deck = load_deck(path)?;
        self.open_deck(deck);
        Ok(())
    }

    /// Opens the file highlighted in the menu, reporting failures in the
    /// status line instead of aborting the session.
    pub fn open_selected(&mut self) {
        let Some(path) = self.selected_file().map(Path::to_path_buf) else {
            return;
        };

        if let Err(e) = self.open_path(&path) {
            warn!("{}", e);
            self.status = Some(StatusMessage::Error(e.to_string()));
        }
    }

    pub fn return_to_menu(&mut self) {
        self.state = AppState::Menu;
        self.status = None;
        self.refresh_deck_files();
    }
}
