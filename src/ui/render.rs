use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, AppState};
use crate::router::Route;

use super::styles;
use super::views::{home, login, profile, search};
use super::widgets;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Nav bar
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_nav_bar(frame, app, chunks[1]);
    render_main_content(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    // Render overlays
    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame);
    }

    if let AppState::Prompting(kind) = app.state {
        render_prompt_overlay(frame, app, kind.label());
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = "  gramline";
    let path = app.route.path();
    let help_hint = "[?] Help";

    let padding = (area.width as usize)
        .saturating_sub(title.len() + path.len() + help_hint.len() + 6);

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw("  "),
        Span::styled(path, styles::muted_style()),
        Span::raw(" ".repeat(padding)),
        Span::styled(help_hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(title_line).block(block), area);
}

fn render_nav_bar(frame: &mut Frame, app: &App, area: Rect) {
    let entries = vec![
        ("[1] Home", matches!(app.route, Route::Home)),
        ("[2] Search", matches!(app.route, Route::Search)),
        ("[3] Login", matches!(app.route, Route::Login)),
        ("Profile", matches!(app.route, Route::Profile { .. })),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (i, (label, selected)) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        if *selected {
            spans.push(Span::styled(*label, styles::nav_style(true)));
        } else {
            spans.push(Span::styled(*label, styles::muted_style()));
        }
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.route {
        Route::Home => home::render(frame, app, area),
        Route::Login => login::render(frame, app, area),
        Route::Search => search::render(frame, app, area),
        Route::Profile { .. } => profile::render(frame, app, area),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = "[:] go to path | [r]eload | [q]uit";

    let left_text = if let Some(ref msg) = app.status_message {
        format!(" {} ", msg)
    } else if app.is_authenticated() {
        match &app.current_user {
            Some(user) => format!(" Signed in as {} ", user.username),
            None => " Signed in ".to_string(),
        }
    } else {
        " Not signed in ".to_string()
    };

    let right_text = format!(" {} ", shortcuts);
    let padding = (area.width as usize)
        .saturating_sub(left_text.len())
        .saturating_sub(right_text.len());

    let status_line = Line::from(vec![
        Span::styled(left_text, styles::muted_style()),
        Span::raw(" ".repeat(padding)),
        Span::styled(right_text, styles::muted_style()),
    ]);

    frame.render_widget(
        Paragraph::new(status_line).style(styles::status_bar_style()),
        area,
    );
}

fn render_help_overlay(frame: &mut Frame) {
    let version = env!("CARGO_PKG_VERSION");

    let help_text = vec![
        Line::from(Span::styled(
            "                 g r a m l i n e",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            format!("                  version {}", version),
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Navigation", styles::highlight_style())),
        Line::from(vec![
            Span::styled("  1/2/3     ", styles::help_key_style()),
            Span::styled("Home / Search / Login", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  :         ", styles::help_key_style()),
            Span::styled("Go to a path (e.g. /users/42)", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  ↑/↓ j/k   ", styles::help_key_style()),
            Span::styled("Navigate list", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  Enter     ", styles::help_key_style()),
            Span::styled("Open the selected user's profile", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  Esc       ", styles::help_key_style()),
            Span::styled("Go back / close pane", styles::help_desc_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(" Actions", styles::highlight_style())),
        Line::from(vec![
            Span::styled("  Space     ", styles::help_key_style()),
            Span::styled("Like / unlike the selected photo", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  c / a     ", styles::help_key_style()),
            Span::styled("View / add comments", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  f / b     ", styles::help_key_style()),
            Span::styled("Follow / ban on a profile", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  e / d     ", styles::help_key_style()),
            Span::styled("Rename / delete photo (own profile)", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  r / x     ", styles::help_key_style()),
            Span::styled("Reload view / log out", styles::help_desc_style()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("       Press ", styles::muted_style()),
            Span::styled("?", styles::help_key_style()),
            Span::styled(" or ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to close", styles::muted_style()),
        ]),
    ];

    widgets::modal(frame, 52, help_text.len() as u16 + 2, help_text);
}

fn render_prompt_overlay(frame: &mut Frame, app: &App, label: &str) {
    let lines = vec![
        Line::from(Span::styled(format!(" {}:", label), styles::highlight_style())),
        Line::from(""),
        Line::from(vec![
            Span::raw(" > "),
            Span::styled(
                format!("{}▌", app.prompt_input),
                styles::input_style(true),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Enter", styles::help_key_style()),
            Span::styled(" to confirm, ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    widgets::modal(frame, 50, 7, lines);
}

fn render_quit_overlay(frame: &mut Frame) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Are you sure you want to quit?",
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to quit, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    widgets::modal(frame, 42, 7, lines);
}
