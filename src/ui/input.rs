use crate::ui::app::App;
use crate::ui::history::HistoryIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Raw mode swallows SIGINT, so Ctrl+C quits as well.
    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.history().is_visible() {
        handle_history_key(app, key);
        return;
    }

    if is_ctrl_char(key, 't') || is_plain_char(key, 't') {
        app.toggle_theme();
        return;
    }
    if is_ctrl_char(key, 'h') || is_plain_char(key, 'h') {
        app.dispatch_history(HistoryIntent::Open);
        return;
    }
    if is_ctrl_char(key, 'r') || is_plain_char(key, 'r') {
        app.reset_search();
        return;
    }
    if is_plain_char(key, 'q') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Enter => {
            app.submit();
        }
        KeyCode::Backspace => app.delete_digit(),
        KeyCode::Char(ch) if ch.is_ascii_digit() && !has_ctrl(key) => app.type_digit(ch),
        KeyCode::PageUp | KeyCode::Char('<') | KeyCode::Char('[') => {
            app.previous_page();
        }
        KeyCode::PageDown | KeyCode::Char('>') | KeyCode::Char(']') => {
            app.next_page();
        }
        KeyCode::Left => app.move_selection(-1, 0),
        KeyCode::Right => app.move_selection(1, 0),
        KeyCode::Up => app.move_selection(0, -1),
        KeyCode::Down => app.move_selection(0, 1),
        _ => {}
    }
}

fn handle_history_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'd') {
        app.dispatch_history(HistoryIntent::Clear);
        return;
    }
    if is_ctrl_char(key, 'h') || is_plain_char(key, 'h') {
        app.dispatch_history(HistoryIntent::Close);
        return;
    }
    match key.code {
        KeyCode::Esc => app.dispatch_history(HistoryIntent::Close),
        KeyCode::Up => app.dispatch_history(HistoryIntent::MoveUp),
        KeyCode::Down => app.dispatch_history(HistoryIntent::MoveDown),
        KeyCode::Enter => {
            app.search_history_selection();
        }
        _ => {}
    }
}

fn has_ctrl(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

fn is_plain_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
