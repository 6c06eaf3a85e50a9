use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MenuLayout {
    pub title_area: Rect,
    pub list_area: Rect,
    pub status_area: Rect,
    pub help_area: Rect,
}

pub struct ViewerLayout {
    pub header_area: Rect,
    pub card_area: Rect,
    pub status_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_menu_chunks(area: Rect) -> MenuLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(area);

    MenuLayout {
        title_area: chunks[0],
        list_area: chunks[1],
        status_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_viewer_chunks(area: Rect) -> ViewerLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    ViewerLayout {
        header_area: chunks[0],
        card_area: chunks[1],
        status_area: chunks[2],
        help_area: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_layout() {
        let area = Rect::new(0, 0, 80, 30);
        let layout = calculate_menu_chunks(area);

        // Margin 1 leaves 28 rows: 3 + 4 + 3 fixed, 18 for the list.
        assert_eq!(layout.title_area.height, 3);
        assert_eq!(layout.status_area.height, 4);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.list_area.height, 18);
    }

    #[test]
    fn test_viewer_layout() {
        let area = Rect::new(0, 0, 100, 100);
        let layout = calculate_viewer_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.card_area.height, 98 - 7);
        assert_eq!(layout.card_area.width, 98);
    }
}
