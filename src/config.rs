use crate::loader::DEFAULT_DECK_DIR;
use crate::logger::DEFAULT_LOG_FILE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "flashcard-viewer")]
#[command(author, version, about = "Step through question/answer flashcards in the terminal", long_about = None)]
pub struct Cli {
    /// Deck file to open directly (.txt or .csv)
    pub path: Option<PathBuf>,

    /// Directory listed in the deck menu
    #[arg(short, long, default_value = DEFAULT_DECK_DIR)]
    pub dir: PathBuf,

    /// Shuffle each deck when it is opened
    #[arg(short, long)]
    pub shuffle: bool,

    /// Print the parsed deck as JSON and exit
    #[arg(long, requires = "path")]
    pub dump: bool,

    /// Where log output is appended
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub deck_dir: PathBuf,
    pub shuffle_on_open: bool,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deck_dir: PathBuf::from(DEFAULT_DECK_DIR),
            shuffle_on_open: false,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            deck_dir: cli.dir.clone(),
            shuffle_on_open: cli.shuffle,
            log_file: cli.log_file.clone(),
        }
    }
}
