use crate::app::App;
use crate::loader::{DECK_EXTENSIONS, deck_name};
use crate::models::StatusMessage;
use crate::ui::layout::calculate_menu_chunks;
use crate::utils::truncate_string;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn status_style(status: &StatusMessage) -> Style {
    match status {
        StatusMessage::Info(_) => Style::default().fg(Color::Yellow),
        StatusMessage::Success(_) => Style::default().fg(Color::Green),
        StatusMessage::Error(_) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

pub fn draw_menu(f: &mut Frame, app: &App) {
    let layout = calculate_menu_chunks(f.area());

    let title = Paragraph::new("Flashcard Viewer")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    let name_width = layout.list_area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = if app.deck_files.is_empty() {
        vec![ListItem::new(format!(
            "No .{} files in {}",
            DECK_EXTENSIONS.join("/."),
            app.config.deck_dir.display()
        ))
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        app.deck_files
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let name = truncate_string(&deck_name(path), name_width);
                let style = if i == app.selected_file_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(name).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Select a Deck"),
    );
    f.render_widget(list, layout.list_area);

    let status = match &app.status {
        Some(status) => Paragraph::new(status.text()).style(status_style(status)),
        None => Paragraph::new("Pick a deck file to start studying."),
    };
    f.render_widget(
        status
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Status")),
        layout.status_area,
    );

    let help_text = vec![Line::from(vec![
        Span::styled("↑/↓", key_style()),
        Span::from(" Navigate  "),
        Span::styled("Enter", key_style()),
        Span::from(" Open  "),
        Span::styled("r", key_style()),
        Span::from(" Rescan  "),
        Span::styled("q/Esc", key_style()),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
