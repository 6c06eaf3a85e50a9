use crate::error::LoadError;
use crate::models::Deck;
use crate::parser::parse_text;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_DECK_DIR: &str = "flashcards";
pub const DECK_EXTENSIONS: [&str; 2] = ["txt", "csv"];

pub const NO_CARDS_MESSAGE: &str = "No cards found. Use one of: Question|Answer, Q: Question A: Answer, Question: Answer or Question,Answer";

const BYTE_ORDER_MARK: char = '\u{feff}';

pub fn is_deck_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            DECK_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Lists `.txt`/`.csv` files directly inside `dir`, sorted by path. A missing
/// directory yields an empty list.
pub fn get_deck_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() && is_deck_file(&path) {
                files.push(path);
            }
        }
    }

    files.sort();
    debug!("Found {} deck files in {}", files.len(), dir.display());
    files
}

pub fn deck_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "deck".to_string())
}

/// Reads the whole file as strict UTF-8. Invalid bytes are an error rather
/// than being replaced.
pub fn read_deck_text(path: &Path) -> Result<String, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|source| LoadError::InvalidUtf8 {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match text.strip_prefix(BYTE_ORDER_MARK) {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

pub fn load_deck(path: &Path) -> Result<Deck, LoadError> {
    let text = read_deck_text(path)?;
    let cards = parse_text(&text);
    info!("Loaded {} cards from {}", cards.len(), path.display());
    Ok(Deck::new(deck_name(path), cards))
}
