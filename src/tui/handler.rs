//! Event handler for the TUI
//!
//! Routes key events to the current screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Screen};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => {}
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.screen {
        Screen::MainMenu => handle_menu_key(app, key),
        Screen::Chart => handle_chart_key(app, key),
        Screen::Categories | Screen::Expenses | Screen::Savings => handle_form_key(app, key),
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.menu_down(),
        KeyCode::Char('k') | KeyCode::Up => app.menu_up(),
        KeyCode::Enter => app.activate_menu(),
        KeyCode::Char(c @ '1'..='5') => {
            app.menu_index = (c as usize) - ('1' as usize);
            app.activate_menu();
        }
        _ => {}
    }
}

fn handle_chart_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('b') => app.go_back(),
        KeyCode::Char('m') | KeyCode::Tab => app.toggle_chart_metric(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => app.go_back(),
        KeyCode::Enter => app.submit(),
        KeyCode::Char('d') if ctrl => app.deposit(),
        KeyCode::Tab => app.form.next_field(),
        KeyCode::BackTab => app.form.prev_field(),
        KeyCode::Up if app.screen == Screen::Expenses && app.form.focus == 0 => {
            app.cycle_category(false)
        }
        KeyCode::Down if app.screen == Screen::Expenses && app.form.focus == 0 => {
            app.cycle_category(true)
        }
        KeyCode::Up => app.form.prev_field(),
        KeyCode::Down => app.form.next_field(),
        code => {
            if let Some(field) = app.form.focused_mut() {
                match code {
                    KeyCode::Char(c) if !ctrl => field.insert(c),
                    KeyCode::Backspace => field.backspace(),
                    KeyCode::Delete => field.delete(),
                    KeyCode::Left => field.move_left(),
                    KeyCode::Right => field.move_right(),
                    KeyCode::Home => field.move_start(),
                    KeyCode::End => field.move_end(),
                    _ => {}
                }
            }
        }
    }
}
