use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::enable_raw_mode,
};
use flashcard_viewer::terminal::{restore_terminal, setup_terminal, Tui};
use flashcard_viewer::{App, Cli, Config, InputOutcome, draw, handle_key, load_deck, logger};
use std::io;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.dump {
        if let Some(path) = &cli.path {
            let deck = load_deck(path)?;
            println!("{}", serde_json::to_string_pretty(&deck)?);
        }
        return Ok(());
    }

    let config = Config::from(&cli);
    logger::init(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;
    info!("Starting flashcard viewer in {}", config.deck_dir.display());

    let mut app = App::new(config);
    if let Some(path) = &cli.path {
        app.open_path(path)?;
    }

    enable_raw_mode()?;
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal(&mut io::stdout())?;
            return Err(e.into());
        }
    };

    let result = run(&mut terminal, &mut app);

    restore_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;

    info!("Exiting flashcard viewer");
    result
}

fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && handle_key(app, key) == InputOutcome::Quit
        {
            return Ok(());
        }
    }
}
