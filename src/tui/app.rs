use crate::catalog::SearchResult;
use crate::session::{SearchSession, TriggerOutcome};
use crate::tui::results::ResultsGrid;
use crate::tui::search::SearchInput;
use crate::tui::ui;
use crate::{logging, AppConfig, TimeMachineError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::time::Instant;

pub struct App {
    pub session: SearchSession,

    // Sub-states
    pub search: SearchInput,
    pub grid: ResultsGrid,

    pub config: AppConfig,
    pub status_message: String,

    clipboard: Option<arboard::Clipboard>,

    // Quit flag
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: config.session(),
            search: SearchInput::default(),
            grid: ResultsGrid::default(),
            config,
            status_message: "Ready".to_string(),
            clipboard: None,
            should_quit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> crate::Result<()> {
        let tick_rate = self.config.tick_rate;
        let mut last_tick = Instant::now();

        loop {
            terminal
                .draw(|frame| ui::draw(frame, self))
                .map_err(|e| TimeMachineError::terminal("draw", e))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.process_messages();
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Apply finished searches and keep the card selection valid
    pub fn process_messages(&mut self) {
        if self.session.process_messages() == 0 {
            return;
        }

        let total = self.session.state.results.len();
        self.grid.reset(total);
        self.status_message = if self.session.in_flight() > 0 {
            format!(
                "{} results ({} searches still pending)",
                total,
                self.session.in_flight()
            )
        } else {
            format!("{} results", total)
        };
    }

    pub fn trigger_search(&mut self) {
        if self.session.trigger() == TriggerOutcome::Scheduled {
            self.status_message = format!("Searching for '{}'", self.session.state.query);
        }
    }

    /// The card under the cursor, if cards are currently shown
    pub fn selected_result(&self) -> Option<&SearchResult> {
        if !self.session.state.shows_results() {
            return None;
        }
        self.grid
            .selected
            .and_then(|i| self.session.state.results.get(i))
    }

    fn open_selected(&mut self) {
        let Some(link) = self.selected_result().map(|r| r.link) else {
            return;
        };

        if !self.config.open_links_in_browser {
            self.status_message = format!("Link: {}", link);
            return;
        }

        match crate::open_link(link) {
            Ok(()) => self.status_message = format!("Opened {}", link),
            Err(e) => self.report(e),
        }
    }

    fn copy_selected(&mut self) {
        let Some(link) = self.selected_result().map(|r| r.link) else {
            return;
        };

        match self.copy_to_clipboard(link) {
            Ok(()) => self.status_message = format!("Copied {}", link),
            Err(e) => self.report(e),
        }
    }

    fn copy_to_clipboard(&mut self, text: &str) -> crate::Result<()> {
        if self.clipboard.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| TimeMachineError::Clipboard(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }
        if let Some(clipboard) = self.clipboard.as_mut() {
            clipboard
                .set_text(text.to_string())
                .map_err(|e| TimeMachineError::Clipboard(e.to_string()))?;
        }
        Ok(())
    }

    fn report(&mut self, err: TimeMachineError) {
        if err.is_recoverable() {
            logging::warn("TUI", &err.to_string());
        } else {
            logging::error("TUI", &err.to_string());
        }
        self.status_message = err.to_string();
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                // The query is left as typed; Esc only walks focus outwards
                if self.search.focused {
                    self.search.focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            _ => {}
        }

        if self.search.focused {
            self.handle_search_key(key);
        } else {
            self.handle_results_key(key);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let query = &mut self.session.state.query;
        match key.code {
            KeyCode::Enter => self.trigger_search(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.insert(query, c);
            }
            KeyCode::Backspace => self.search.backspace(query),
            KeyCode::Delete => self.search.delete(query),
            KeyCode::Left => self.search.move_left(query),
            KeyCode::Right => self.search.move_right(query),
            KeyCode::Home => self.search.home(),
            KeyCode::End => self.search.end(query),
            KeyCode::Tab | KeyCode::Down => {
                if self.session.state.shows_results() {
                    self.search.focused = false;
                    self.grid.clamp(self.session.state.results.len());
                    if self.grid.selected.is_none() {
                        self.grid.reset(self.session.state.results.len());
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        let total = if self.session.state.shows_results() {
            self.session.state.results.len()
        } else {
            0
        };

        match key.code {
            KeyCode::Right | KeyCode::Char('l') => self.grid.select_next(total),
            KeyCode::Left | KeyCode::Char('h') => self.grid.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.grid.select_down(total),
            KeyCode::Up | KeyCode::Char('k') => {
                if self.grid.on_top_row() {
                    self.search.focused = true;
                } else {
                    self.grid.select_up();
                }
            }
            KeyCode::Enter | KeyCode::Char('o') => self.open_selected(),
            KeyCode::Char('y') => self.copy_selected(),
            KeyCode::Tab | KeyCode::Char('/') => {
                self.search.focused = true;
            }
            _ => {}
        }
    }
}
