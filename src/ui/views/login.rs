//! Login view: username entry plus the remember-me scope toggle.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, LoginFocus};
use crate::ui::styles;
use crate::ui::widgets::centered_rect_fixed;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let height = if app.login_error.is_some() { 13 } else { 11 };
    let area = centered_rect_fixed(46, height, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "            g r a m l i n e",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "        sign in with a username",
            styles::muted_style(),
        )),
        Line::from(""),
    ];

    // Username field
    let username_focused = app.login_focus == LoginFocus::Username;
    let username_display = format!("{:<20}", app.login_username);
    let cursor = if username_focused { "▌" } else { "" };
    lines.push(Line::from(vec![
        Span::raw("   "),
        Span::styled("Username: [", styles::muted_style()),
        Span::styled(
            format!("{}{}", username_display, cursor),
            styles::input_style(username_focused),
        ),
        Span::styled("]", styles::muted_style()),
    ]));
    lines.push(Line::from(""));

    // Remember-me toggle: chooses persistent over session-lifetime storage
    let remember_focused = app.login_focus == LoginFocus::Remember;
    let checkbox = if app.login_remember { "[x]" } else { "[ ]" };
    lines.push(Line::from(vec![
        Span::raw("   "),
        Span::styled(checkbox, styles::input_style(remember_focused)),
        Span::styled(" Remember me on this device", styles::list_item_style()),
    ]));
    lines.push(Line::from(""));

    // Login button
    let button_focused = app.login_focus == LoginFocus::Button;
    let button = if button_focused {
        " ▶ Login ◀ "
    } else {
        "   Login   "
    };
    lines.push(Line::from(vec![
        Span::raw("              ["),
        Span::styled(button, styles::input_style(button_focused)),
        Span::raw("]"),
    ]));

    if let Some(ref error) = app.login_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            styles::error_style(),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
