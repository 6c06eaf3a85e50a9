use crate::loader::NO_CARDS_MESSAGE;
use crate::models::Session;
use crate::models::StatusMessage;
use crate::ui::layout::calculate_viewer_chunks;
use crate::ui::menu::status_style;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn draw_viewer(f: &mut Frame, session: &Session, status: Option<&StatusMessage>) {
    let layout = calculate_viewer_chunks(f.area());

    let Some((position, total)) = session.position() else {
        let empty = Paragraph::new(NO_CARDS_MESSAGE)
            .style(Style::default().fg(Color::Yellow))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, layout.card_area);
        return;
    };

    let progress = format!(
        "Card {} of {} - {}",
        position,
        total,
        session.deck().name
    );
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let (face_title, face_color) = if session.is_flipped() {
        ("Answer", Color::Green)
    } else {
        ("Question", Color::Yellow)
    };

    let mut card_text = Text::default();
    card_text.push_line(Line::from(Span::styled(
        face_title,
        Style::default()
            .fg(face_color)
            .add_modifier(Modifier::BOLD),
    )));
    card_text.push_line(Line::from(""));
    if let Some(text) = session.displayed_text() {
        card_text.push_line(Line::from(text));
    }

    let card = Paragraph::new(card_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(card, layout.card_area);

    if let Some(status) = status {
        let banner = Paragraph::new(status.text())
            .style(status_style(status))
            .alignment(Alignment::Center);
        f.render_widget(banner, layout.status_area);
    }

    let help_text = vec![Line::from(vec![
        Span::styled("←/h", key_style()),
        Span::from(" Previous  "),
        Span::styled("Space", key_style()),
        Span::from(" Flip  "),
        Span::styled("→/l", key_style()),
        Span::from(" Next  "),
        Span::styled("s", key_style()),
        Span::from(" Shuffle  "),
        Span::styled("r", key_style()),
        Span::from(" Reset  "),
        Span::styled("Esc", key_style()),
        Span::from(" Menu  "),
        Span::styled("q", key_style()),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
