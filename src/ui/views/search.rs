//! Search view: incremental username query over the user directory.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::styles;
use crate::ui::widgets::{self, USER_CARD_HEIGHT};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query input
            Constraint::Min(3),    // Results
        ])
        .split(area);

    render_query(frame, app, chunks[0]);
    render_results(frame, app, chunks[1]);
}

fn render_query(frame: &mut Frame, app: &App, area: Rect) {
    let cursor = if app.search_editing { "▌" } else { "" };
    let line = Line::from(vec![
        Span::styled("/ ", styles::highlight_style()),
        Span::styled(
            format!("{}{}", app.search_query, cursor),
            styles::input_style(app.search_editing),
        ),
    ]);

    let hint = if app.search_editing {
        " Search users — Enter to run "
    } else {
        " Search users — / to edit "
    };
    let block = Block::default()
        .title(hint)
        .borders(Borders::ALL)
        .border_style(styles::border_style(app.search_editing));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = app.view_error.as_deref() {
        widgets::error_message(frame, area, message);
        return;
    }

    if app.search_loading {
        widgets::loading_spinner(frame, area, "Searching...");
        return;
    }

    if app.search_results.is_empty() {
        let line = Line::from(Span::styled(
            "  No results. Type a username and press Enter.",
            styles::muted_style(),
        ));
        frame.render_widget(Paragraph::new(vec![Line::from(""), line]), area);
        return;
    }

    let visible = (area.height / USER_CARD_HEIGHT).max(1) as usize;
    let first = if app.search_selection >= visible {
        app.search_selection + 1 - visible
    } else {
        0
    };

    for (row, (i, user)) in app
        .search_results
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .enumerate()
    {
        let card_area = Rect::new(
            area.x,
            area.y + (row as u16) * USER_CARD_HEIGHT,
            area.width,
            USER_CARD_HEIGHT.min(area.height.saturating_sub((row as u16) * USER_CARD_HEIGHT)),
        );
        if card_area.height < 3 {
            break;
        }
        widgets::user_card(
            frame,
            card_area,
            user,
            !app.search_editing && i == app.search_selection,
        );
    }
}
