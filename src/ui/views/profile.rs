//! Profile view: user info, their photos, and relationship actions.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::ui::styles;
use crate::ui::widgets;

use super::home::{comments_pane, photo_stack};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Profile header
            Constraint::Min(4),    // Photos
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_photos(frame, app, chunks[1]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(profile) = app.profile.as_ref() else {
        if app.profile_loading {
            widgets::loading_spinner(frame, inner, "Loading profile...");
        }
        return;
    };

    let mut name_spans = vec![Span::styled(
        profile.username.clone(),
        styles::title_style(),
    )];
    if app.viewing_own_profile() {
        name_spans.push(Span::styled("  (you)", styles::muted_style()));
    }
    if let Some(followed) = app.profile_followed {
        if followed {
            name_spans.push(Span::styled("  [following]", styles::success_style()));
        }
    }
    if profile.banned != 0 {
        name_spans.push(Span::styled("  [banned]", styles::error_style()));
    }

    let actions = if app.viewing_own_profile() {
        vec![
            Span::styled("[e]", styles::help_key_style()),
            Span::styled(" rename  ", styles::muted_style()),
            Span::styled("[d]", styles::help_key_style()),
            Span::styled(" delete photo  ", styles::muted_style()),
            Span::styled("[x]", styles::help_key_style()),
            Span::styled(" logout", styles::muted_style()),
        ]
    } else {
        vec![
            Span::styled("[f]", styles::help_key_style()),
            Span::styled(" follow/unfollow  ", styles::muted_style()),
            Span::styled("[b]", styles::help_key_style()),
            Span::styled(" ban/unban", styles::muted_style()),
        ]
    };

    let lines = vec![
        Line::from(name_spans),
        Line::from(Span::styled(profile.counts_line(), styles::list_item_style())),
        Line::from(actions),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_photos(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = app.view_error.as_deref() {
        widgets::error_message(frame, area, message);
        return;
    }

    if app.profile_loading && app.profile_photos.is_empty() {
        widgets::loading_spinner(frame, area, "Loading photos...");
        return;
    }

    if app.profile_photos.is_empty() {
        let line = Line::from(Span::styled("  No photos posted.", styles::muted_style()));
        frame.render_widget(Paragraph::new(vec![Line::from(""), line]), area);
        return;
    }

    if matches!(app.focus, Focus::Comments) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        photo_stack(
            frame,
            chunks[0],
            &app.profile_photos,
            app.profile_selection,
            false,
        );
        comments_pane(frame, chunks[1], &app.comments, app.comments_selection);
    } else {
        photo_stack(
            frame,
            area,
            &app.profile_photos,
            app.profile_selection,
            true,
        );
    }
}
