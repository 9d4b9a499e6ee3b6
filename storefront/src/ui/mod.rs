//! Terminal UI
//!
//! Run: cargo run -p storefront

pub mod input;
pub mod palette;
pub mod render;

use crate::core::{AppState, Message};
use crate::runtime::Dispatcher;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use input::Command;
use ratatui::{prelude::*, widgets::ListState};
use std::io::{self, Stdout};
use std::time::Duration;
use tui_input::Input;
use tui_logger::TuiWidgetState;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Presentation state that is not part of [`AppState`]
pub struct App {
    /// Search box
    pub(crate) input: Input,
    pub(crate) input_mode: InputMode,
    /// Selection and scroll offset of the product list
    pub(crate) list_state: ListState,
    pub(crate) show_logs: bool,
    pub(crate) logger_state: TuiWidgetState,
    /// Set by the last draw
    pub(crate) sentinel_visible: bool,
    pub(crate) tick: usize,
    /// Window generation seen at the last sync; a change means the list was reset
    seen_generation: u64,
}

impl App {
    pub fn new() -> Self {
        Self {
            input: Input::default(),
            input_mode: InputMode::default(),
            list_state: ListState::default(),
            show_logs: false,
            logger_state: TuiWidgetState::new(),
            sentinel_visible: false,
            tick: 0,
            seen_generation: 0,
        }
    }

    /// Keep the selection inside the revealed window; jump to the top after a reset
    pub fn sync_selection(&mut self, state: &AppState) {
        let shown = state.window().len();
        let generation = state.window().generation();

        if generation != self.seen_generation {
            self.seen_generation = generation;
            *self.list_state.offset_mut() = 0;
            self.list_state.select(if shown == 0 { None } else { Some(0) });
            return;
        }

        match self.list_state.selected() {
            _ if shown == 0 => self.list_state.select(None),
            None => self.list_state.select(Some(0)),
            Some(i) if i >= shown => self.list_state.select(Some(shown - 1)),
            Some(_) => {}
        }
    }

    /// Move the selection by `delta`, clamped to `[0, shown)`
    pub fn move_selection(&mut self, delta: isize, shown: usize) {
        if shown == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let target = current.saturating_add(delta).clamp(0, shown as isize - 1);
        self.list_state.select(Some(target as usize));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Take over the terminal and run until the user quits
pub async fn run(mut dispatcher: Dispatcher) -> anyhow::Result<()> {
    let mut terminal = with_raw_mode(enable_raw_mode, disable_raw_mode, || {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        })
    })?;

    dispatcher.start();
    let res = run_app(&mut terminal, &mut dispatcher).await;
    dispatcher.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Turn raw mode on and run `setup`; raw mode is switched back off if `setup` fails
fn with_raw_mode<T>(
    enable: impl FnOnce() -> io::Result<()>,
    disable: impl FnOnce() -> io::Result<()>,
    setup: impl FnOnce() -> io::Result<T>,
) -> io::Result<T> {
    enable()?;
    setup().inspect_err(|_| {
        let _ = disable();
    })
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    dispatcher: &mut Dispatcher,
) -> anyhow::Result<()> {
    let mut app = App::new();

    loop {
        app.sync_selection(dispatcher.state());
        terminal.draw(|f| render::draw(f, &mut app, dispatcher.state()))?;
        app.tick = app.tick.wrapping_add(1);

        if app.sentinel_visible {
            dispatcher.dispatch(Message::SentinelVisible);
        }

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            match input::handle_key(&mut app, dispatcher.state(), key) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Dispatch(message)) => dispatcher.dispatch(message),
                None => {}
            }
        }

        // Background results (catalog, page delay)
        dispatcher.drain();
        tokio::task::yield_now().await;
    }
}
