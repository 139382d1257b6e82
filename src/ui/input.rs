//! Keyboard input handling for the TUI.
//!
//! This module handles all keyboard events and translates them into
//! application state changes. Dispatch order matters: overlay states
//! first, then the view that owns text entry, then global keys.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{
    can_add_query_char, can_add_username_char, App, AppState, Focus, LoginFocus, PromptKind,
    PAGE_SCROLL_SIZE,
};
use crate::router::Route;

/// Handle keyboard input. Returns true if the app should quit.
pub async fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // A keypress consumes any transient status message
    app.status_message = None;

    // Handle text prompt overlay
    if matches!(app.state, AppState::Prompting(_)) {
        match key.code {
            KeyCode::Esc => {
                app.prompt_input.clear();
                app.state = AppState::Normal;
            }
            KeyCode::Enter => app.submit_prompt(),
            KeyCode::Backspace => {
                app.prompt_input.pop();
            }
            KeyCode::Char(c) => app.push_prompt_char(c),
            _ => {}
        }
        return Ok(false);
    }

    // Handle help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.state = AppState::Normal;
        }
        return Ok(false);
    }

    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return Ok(true);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return Ok(false);
    }

    // The login view owns text entry while active
    if matches!(app.route, Route::Login) {
        return handle_login_input(app, key).await;
    }

    // The search view owns text entry while the query is being edited
    if matches!(app.route, Route::Search) && app.search_editing {
        handle_search_entry(app, key);
        return Ok(false);
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
            return Ok(false);
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
            return Ok(false);
        }
        KeyCode::Char(':') => {
            app.open_prompt(PromptKind::Path);
            return Ok(false);
        }
        KeyCode::Char('1') => {
            app.navigate("/");
            return Ok(false);
        }
        KeyCode::Char('2') => {
            app.navigate("/search");
            return Ok(false);
        }
        KeyCode::Char('3') => {
            app.navigate("/login");
            return Ok(false);
        }
        KeyCode::Char('r') => {
            app.reload();
            return Ok(false);
        }
        KeyCode::Char('x') => {
            app.logout();
            return Ok(false);
        }
        _ => {}
    }

    // View-specific keys
    match app.route {
        Route::Home | Route::Profile { .. } => handle_photo_view_input(app, key),
        Route::Search => handle_search_browse(app, key),
        Route::Login => {}
    }

    Ok(false)
}

/// Keys shared by the photo-list views (home feed and profile photos).
fn handle_photo_view_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-(PAGE_SCROLL_SIZE as isize)),
        KeyCode::PageDown => app.move_selection(PAGE_SCROLL_SIZE as isize),
        KeyCode::Char(' ') => app.toggle_like(),
        KeyCode::Char('c') => app.open_comments(),
        KeyCode::Char('a') => {
            if app.selected_photo().is_some() {
                app.open_prompt(PromptKind::Comment);
            }
        }
        KeyCode::Char('d') if matches!(app.focus, Focus::Comments) => {
            app.delete_selected_comment();
        }
        KeyCode::Enter => {
            // Open the author's profile from the feed
            if matches!(app.route, Route::Home) {
                if let Some(photo) = app.selected_photo() {
                    let path = format!("/users/{}", photo.user_id);
                    app.navigate(&path);
                }
            }
        }
        KeyCode::Esc => {
            if matches!(app.focus, Focus::Comments) {
                app.focus = Focus::List;
            } else if matches!(app.route, Route::Profile { .. }) {
                app.navigate("/");
            }
        }
        _ => {}
    }

    // Profile-only actions, inactive while the comment pane is focused
    if matches!(app.route, Route::Profile { .. }) && matches!(app.focus, Focus::List) {
        match key.code {
            KeyCode::Char('f') => app.toggle_follow(),
            KeyCode::Char('b') => app.toggle_ban(),
            KeyCode::Char('e') => {
                if app.viewing_own_profile() {
                    app.open_prompt(PromptKind::Rename);
                }
            }
            KeyCode::Char('d') => app.delete_selected_photo(),
            _ => {}
        }
    }
}

/// Query editing on the search view.
fn handle_search_entry(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Tab => app.search_editing = false,
        KeyCode::Enter => {
            app.search_editing = false;
            app.run_search();
        }
        KeyCode::Backspace => {
            app.search_query.pop();
        }
        KeyCode::Char(c) => {
            if can_add_query_char(app.search_query.len(), c) {
                app.search_query.push(c);
            }
        }
        _ => {}
    }
}

/// Result browsing on the search view.
fn handle_search_browse(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-(PAGE_SCROLL_SIZE as isize)),
        KeyCode::PageDown => app.move_selection(PAGE_SCROLL_SIZE as isize),
        KeyCode::Char('/') | KeyCode::Tab => app.search_editing = true,
        KeyCode::Enter => {
            if let Some(user) = app.search_results.get(app.search_selection) {
                let path = format!("/users/{}", user.id);
                app.navigate(&path);
            }
        }
        KeyCode::Esc => app.search_editing = true,
        _ => {}
    }
}

/// Login form input: focus cycling, username entry, remember toggle.
async fn handle_login_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.login_focus = match app.login_focus {
                LoginFocus::Username => LoginFocus::Remember,
                LoginFocus::Remember => LoginFocus::Button,
                LoginFocus::Button => LoginFocus::Username,
            };
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.login_focus = match app.login_focus {
                LoginFocus::Username => LoginFocus::Button,
                LoginFocus::Remember => LoginFocus::Username,
                LoginFocus::Button => LoginFocus::Remember,
            };
        }
        KeyCode::Enter => {
            // On the toggle Enter flips it; anywhere else it submits
            if app.login_focus == LoginFocus::Remember {
                app.login_remember = !app.login_remember;
            } else {
                let _ = app.attempt_login().await;
            }
        }
        KeyCode::Char(' ') if app.login_focus == LoginFocus::Remember => {
            app.login_remember = !app.login_remember;
        }
        KeyCode::Backspace if app.login_focus == LoginFocus::Username => {
            app.login_username.pop();
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
        }
        KeyCode::Char(':') => {
            app.open_prompt(PromptKind::Path);
        }
        KeyCode::Char(c) if app.login_focus == LoginFocus::Username => {
            if can_add_username_char(app.login_username.len(), c) {
                app.login_username.push(c);
            }
        }
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
        }
        KeyCode::Esc => {
            // Already-authenticated users can leave the login view
            if app.is_authenticated() {
                app.navigate("/");
            }
        }
        _ => {}
    }
    Ok(false)
}
