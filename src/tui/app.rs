//! Application state and logic.

use crossterm::event::KeyCode;
use strictly_jeopardy::{BoardEvent, BoardView};
use tracing::debug;

use super::input::{Cursor, move_cursor};

/// What the player asked the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Fetch a new board.
    Start,
    /// Advance the clue at these coordinates.
    Reveal {
        /// Column index.
        category: usize,
        /// Row index.
        clue: usize,
    },
    /// Leave the game.
    Quit,
}

/// Main application state.
#[derive(Debug, Default)]
pub struct App {
    view: Option<BoardView>,
    cursor: Cursor,
    loading: bool,
    started: bool,
    status_message: String,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            status_message: "Press 's' to start a game, 'q' to quit.".to_string(),
            ..Self::default()
        }
    }

    /// Gets the board as last rendered by the session.
    pub fn view(&self) -> Option<&BoardView> {
        self.view.as_ref()
    }

    /// Gets the selected cell.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns `true` while a board is being fetched.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Label for the start control.
    pub fn start_label(&self) -> &'static str {
        if self.loading {
            "Loading..."
        } else if self.started {
            "Restart"
        } else {
            "Start"
        }
    }

    /// Full text of the selected cell, if revealed.
    pub fn selected_text(&self) -> Option<&str> {
        self.view
            .as_ref()?
            .cell(self.cursor.category, self.cursor.clue)?
            .text
            .as_deref()
    }

    /// Handles an update from the session.
    pub fn handle_event(&mut self, event: BoardEvent) {
        debug!(?event, "Handling board event");

        match event {
            BoardEvent::Loading => {
                self.loading = true;
                self.started = true;
                self.view = None;
                self.cursor = Cursor::default();
                self.status_message = "Loading...".to_string();
            }
            BoardEvent::Ready => {
                self.loading = false;
            }
            BoardEvent::BoardLoaded(view) => {
                self.status_message = if view.columns() == 0 {
                    "No categories could be loaded. Press 'r' to try again.".to_string()
                } else if view.is_complete() {
                    "Arrows move, Enter reveals, 'r' restarts, 'q' quits.".to_string()
                } else {
                    format!(
                        "Only {} of {} categories loaded. Press 'r' for a new board.",
                        view.columns(),
                        view.columns() + view.missing_categories
                    )
                };
                self.cursor = Cursor::default();
                self.view = Some(view);
            }
            BoardEvent::Revealed {
                category,
                clue,
                text,
                disabled,
            } => {
                if let Some(view) = self.view.as_mut() {
                    view.apply_reveal(category, clue, text, disabled);
                }
            }
        }
    }

    /// Handles a key press, returning a command for the session if any.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<PlayerCommand> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(PlayerCommand::Quit),
            KeyCode::Char('s') | KeyCode::Char('r') => {
                if self.loading {
                    None
                } else {
                    Some(PlayerCommand::Start)
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let view = self.view.as_ref()?;
                let cell = view.cell(self.cursor.category, self.cursor.clue)?;
                if cell.disabled {
                    return None;
                }
                Some(PlayerCommand::Reveal {
                    category: self.cursor.category,
                    clue: self.cursor.clue,
                })
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                if let Some(view) = &self.view {
                    self.cursor = move_cursor(self.cursor, key, view);
                }
                None
            }
            _ => None,
        }
    }
}
