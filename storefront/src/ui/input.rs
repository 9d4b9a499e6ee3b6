//! Key handling
//!
//! Keys are translated into [`Message`]s for the state machine or into
//! purely visual changes of [`App`] (selection, log panel, search box).

use super::{App, InputMode};
use crate::core::{AppState, Message};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;
use tui_logger::TuiWidgetEvent;

/// What the event loop should do after a key
#[derive(Debug, Clone)]
pub enum Command {
    Dispatch(Message),
    Quit,
}

pub fn handle_key(app: &mut App, state: &AppState, key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal(app, state, key),
        InputMode::Editing => handle_editing(app, state, key),
    }
}

fn handle_normal(app: &mut App, state: &AppState, key: KeyEvent) -> Option<Command> {
    let shown = state.window().len();
    let page = state.window().page_size();

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Command::Quit),
        KeyCode::Char('/') => app.input_mode = InputMode::Editing,

        KeyCode::Char('c') => return cycle_category(state, 1),
        KeyCode::Char('C') => return cycle_category(state, -1),
        KeyCode::Char('s') => return Some(Command::Dispatch(Message::SortSelected(state.query().sort.next()))),
        KeyCode::Char('S') => return Some(Command::Dispatch(Message::SortSelected(state.query().sort.prev()))),
        KeyCode::Char('t') => return Some(Command::Dispatch(Message::ToggleTheme)),
        KeyCode::Char('r') => return Some(Command::Dispatch(Message::Reload)),

        KeyCode::Char(' ') | KeyCode::Enter => {
            let selected = app.list_state.selected()?;
            let product = state.displayed_at(selected)?;
            return Some(Command::Dispatch(Message::ToggleCart(product.id)));
        }

        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1, shown),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1, shown),
        KeyCode::PageDown => app.move_selection(page as isize, shown),
        KeyCode::PageUp => app.move_selection(-(page as isize), shown),
        KeyCode::Home => app.move_selection(isize::MIN, shown),
        KeyCode::End => app.move_selection(isize::MAX, shown),

        KeyCode::Char('l') => app.show_logs = !app.show_logs,
        KeyCode::Char('[') => app.logger_state.transition(TuiWidgetEvent::PrevPageKey),
        KeyCode::Char(']') => app.logger_state.transition(TuiWidgetEvent::NextPageKey),
        _ => {}
    }
    None
}

fn handle_editing(app: &mut App, state: &AppState, key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            None
        }
        _ => {
            app.input.handle_event(&Event::Key(key));
            let value = app.input.value();
            if value != state.query().search {
                Some(Command::Dispatch(Message::SearchChanged(value.to_string())))
            } else {
                None
            }
        }
    }
}

fn cycle_category(state: &AppState, step: isize) -> Option<Command> {
    let options = state.category_options();
    let current = options
        .iter()
        .position(|o| *o == state.query().category)
        .unwrap_or(0) as isize;
    let next = (current + step).rem_euclid(options.len() as isize) as usize;
    let category = options.into_iter().nth(next)?;
    Some(Command::Dispatch(Message::CategorySelected(category)))
}
