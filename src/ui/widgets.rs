//! Reusable visual components shared by the views.
//!
//! The fixed component set: post cards, user cards, a modal dialog, an
//! error banner, and a loading indicator. Views compose these rather than
//! styling raw paragraphs themselves.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Photo, UserSearchResult};

use super::styles;

/// Rows a post card occupies in a stacked list (2 text lines + borders).
pub const POST_CARD_HEIGHT: u16 = 4;

/// Rows a user card occupies in a stacked list (1 text line + borders).
pub const USER_CARD_HEIGHT: u16 = 3;

/// Render a photo post as a bordered card: title/author on the first
/// line, engagement and date on the second.
pub fn post_card(frame: &mut Frame, area: Rect, photo: &Photo, selected: bool) {
    let title_line = Line::from(vec![
        Span::styled(photo.display_title(), styles::title_style()),
        Span::styled(format!("  by {}", photo.username), styles::muted_style()),
    ]);

    let like_style = if photo.liked {
        styles::highlight_style()
    } else {
        styles::muted_style()
    };
    let detail_line = Line::from(vec![
        Span::styled(photo.engagement_line(), like_style),
        Span::styled(format!("  ·  {}", photo.posted_display()), styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(selected));

    let mut paragraph = Paragraph::new(vec![title_line, detail_line]).block(block);
    if selected {
        paragraph = paragraph.style(styles::selected_style());
    }
    frame.render_widget(paragraph, area);
}

/// Render a user search hit as a bordered card with a relationship tag.
pub fn user_card(frame: &mut Frame, area: Rect, user: &UserSearchResult, selected: bool) {
    let tag = user.relationship_tag();
    let mut spans = vec![Span::styled(user.username.clone(), styles::list_item_style())];
    if !tag.is_empty() {
        let tag_style = if user.banned {
            styles::error_style()
        } else {
            styles::success_style()
        };
        spans.push(Span::styled(format!("  [{}]", tag), tag_style));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(selected));

    let mut paragraph = Paragraph::new(Line::from(spans)).block(block);
    if selected {
        paragraph = paragraph.style(styles::selected_style());
    }
    frame.render_widget(paragraph, area);
}

/// Render a centered modal dialog over the current frame.
pub fn modal(frame: &mut Frame, width: u16, height: u16, lines: Vec<Line>) {
    let area = centered_rect_fixed(width, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render an error banner across the given area.
pub fn error_message(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(Span::styled(format!(" {}", message), styles::error_style()));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render a loading indicator centered in the given area.
pub fn loading_spinner(frame: &mut Frame, area: Rect, label: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("⣷ {}", label),
            styles::muted_style(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
        area,
    );
}

/// Create a centered rectangle with fixed dimensions
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside_parent() {
        let parent = Rect::new(0, 0, 80, 24);
        let rect = centered_rect_fixed(40, 10, parent);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 10);
        assert_eq!(rect.x, 20);
        assert_eq!(rect.y, 7);
    }

    #[test]
    fn test_centered_rect_clamps_to_small_parent() {
        let parent = Rect::new(0, 0, 20, 5);
        let rect = centered_rect_fixed(40, 10, parent);
        assert!(rect.width <= parent.width);
        assert!(rect.height <= parent.height);
    }
}
