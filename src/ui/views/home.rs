//! Home view: the authenticated user's feed.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::models::{Comment, Photo};
use crate::ui::styles;
use crate::ui::widgets::{self, POST_CARD_HEIGHT};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let area = match app.view_error.as_deref() {
        Some(message) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(4)])
                .split(area);
            widgets::error_message(frame, chunks[0], message);
            chunks[1]
        }
        None => area,
    };

    if app.feed_loading && app.feed.is_empty() {
        widgets::loading_spinner(frame, area, "Loading feed...");
        return;
    }

    if app.feed.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Your feed is empty.",
                styles::muted_style(),
            )),
            Line::from(Span::styled(
                "  Follow users from the Search view to fill it.",
                styles::muted_style(),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    if matches!(app.focus, Focus::Comments) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        photo_stack(frame, chunks[0], &app.feed, app.feed_selection, false);
        comments_pane(frame, chunks[1], &app.comments, app.comments_selection);
    } else {
        photo_stack(frame, area, &app.feed, app.feed_selection, true);
    }
}

/// Render a windowed vertical stack of post cards, keeping the selection
/// visible.
pub fn photo_stack(
    frame: &mut Frame,
    area: Rect,
    photos: &[Photo],
    selection: usize,
    focused: bool,
) {
    let visible = (area.height / POST_CARD_HEIGHT).max(1) as usize;
    let first = if selection >= visible {
        selection + 1 - visible
    } else {
        0
    };

    for (row, (i, photo)) in photos
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .enumerate()
    {
        let card_area = Rect::new(
            area.x,
            area.y + (row as u16) * POST_CARD_HEIGHT,
            area.width,
            POST_CARD_HEIGHT.min(area.height.saturating_sub((row as u16) * POST_CARD_HEIGHT)),
        );
        if card_area.height < 3 {
            break;
        }
        widgets::post_card(frame, card_area, photo, focused && i == selection);
    }
}

/// Render the comments pane for the selected photo.
pub fn comments_pane(frame: &mut Frame, area: Rect, comments: &[Comment], selection: usize) {
    let block = Block::default()
        .title(" Comments ")
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if comments.is_empty() {
        let lines = vec![
            Line::from(Span::styled("No comments yet.", styles::muted_style())),
            Line::from(vec![
                Span::styled("Press ", styles::muted_style()),
                Span::styled("a", styles::help_key_style()),
                Span::styled(" to add one.", styles::muted_style()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
        return;
    }

    // Two rows per comment: author line, content line
    let visible = (inner.height / 2).max(1) as usize;
    let first = if selection >= visible {
        selection + 1 - visible
    } else {
        0
    };

    let mut lines = Vec::new();
    for (i, comment) in comments.iter().enumerate().skip(first).take(visible) {
        let author_style = if i == selection {
            styles::selected_style()
        } else {
            styles::highlight_style()
        };
        lines.push(Line::from(vec![
            Span::styled(comment.username.clone(), author_style),
            Span::styled(
                format!("  {}", comment.created_at.format("%b %d, %Y")),
                styles::muted_style(),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", comment.content),
            styles::list_item_style(),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
