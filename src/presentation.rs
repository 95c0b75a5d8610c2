//! Presentation seam between the session engine and whatever draws the board.
//!
//! The engine calls a [`Presentation`] when the board loads and when a clue
//! changes. Implementations only ever see read-only views.

use crate::games::jeopardy::Board;
use serde::Serialize;
use std::io::Write;
use std::sync::{Mutex, PoisonError};
use tokio::sync::mpsc;
use tracing::{debug, instrument, warn};

/// Receives display updates from a [`GameSession`](crate::GameSession).
pub trait Presentation: Send + Sync {
    /// Draws a freshly loaded board with every clue hidden.
    fn render_board(&self, board: &Board);

    /// Updates one cell after a reveal.
    fn render_reveal(&self, category_index: usize, clue_index: usize, text: &str, disabled: bool);

    /// Shows that a board is being fetched.
    fn show_loading(&self);

    /// Shows that loading finished.
    fn show_ready(&self);
}

/// Headless presentation.
impl Presentation for () {
    fn render_board(&self, _board: &Board) {}
    fn render_reveal(
        &self,
        _category_index: usize,
        _clue_index: usize,
        _text: &str,
        _disabled: bool,
    ) {
    }
    fn show_loading(&self) {}
    fn show_ready(&self) {}
}

/// What a single cell shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Text on the cell, `None` while hidden.
    pub text: Option<String>,
    /// Whether the cell stopped accepting activations.
    pub disabled: bool,
}

/// A presentation-side copy of the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Column headers.
    pub titles: Vec<String>,
    /// Cells indexed `[category][clue]`.
    pub cells: Vec<Vec<CellView>>,
    /// Categories the board fell short by.
    pub missing_categories: usize,
    /// Categories that came back with fewer clues than asked for.
    pub short_categories: usize,
}

impl BoardView {
    /// Builds a view of `board` as it currently stands.
    pub fn from_board(board: &Board) -> Self {
        let summary = board.summary();
        Self {
            titles: board.categories().iter().map(|c| c.title().to_string()).collect(),
            cells: board
                .categories()
                .iter()
                .map(|category| {
                    category
                        .clues()
                        .iter()
                        .map(|clue| CellView {
                            text: clue.display_text().map(str::to_string),
                            disabled: clue.state().is_terminal(),
                        })
                        .collect()
                })
                .collect(),
            missing_categories: board.shortfall(),
            short_categories: summary.short_categories,
        }
    }

    /// Number of category columns.
    pub fn columns(&self) -> usize {
        self.cells.len()
    }

    /// Number of clues in column `category`.
    pub fn rows_in(&self, category: usize) -> usize {
        self.cells.get(category).map_or(0, Vec::len)
    }

    /// Tallest column.
    pub fn rows(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the cell at the given coordinates.
    pub fn cell(&self, category: usize, clue: usize) -> Option<&CellView> {
        self.cells.get(category)?.get(clue)
    }

    /// Applies a reveal. Unknown coordinates are ignored.
    pub fn apply_reveal(&mut self, category: usize, clue: usize, text: String, disabled: bool) {
        if let Some(cell) = self.cells.get_mut(category).and_then(|c| c.get_mut(clue)) {
            cell.text = Some(text);
            cell.disabled = disabled;
        }
    }

    /// Returns `true` if no slot is missing.
    pub fn is_complete(&self) -> bool {
        self.missing_categories == 0 && self.short_categories == 0
    }
}

/// Messages sent from the engine to a UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// A board is being fetched.
    Loading,
    /// Loading finished.
    Ready,
    /// A new board is available.
    BoardLoaded(BoardView),
    /// A clue changed.
    Revealed {
        /// Column index.
        category: usize,
        /// Row index.
        clue: usize,
        /// Text to show.
        text: String,
        /// Whether the cell is now inert.
        disabled: bool,
    },
}

/// Forwards engine updates to a channel.
#[derive(Debug, Clone)]
pub struct ChannelPresentation {
    event_tx: mpsc::UnboundedSender<BoardEvent>,
}

impl ChannelPresentation {
    /// Creates a presentation that sends every update on `event_tx`.
    pub fn new(event_tx: mpsc::UnboundedSender<BoardEvent>) -> Self {
        Self { event_tx }
    }

    fn send(&self, event: BoardEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("Board event receiver dropped");
        }
    }
}

impl Presentation for ChannelPresentation {
    #[instrument(skip_all, fields(categories = board.len()))]
    fn render_board(&self, board: &Board) {
        self.send(BoardEvent::BoardLoaded(BoardView::from_board(board)));
    }

    fn render_reveal(&self, category_index: usize, clue_index: usize, text: &str, disabled: bool) {
        self.send(BoardEvent::Revealed {
            category: category_index,
            clue: clue_index,
            text: text.to_string(),
            disabled,
        });
    }

    fn show_loading(&self) {
        self.send(BoardEvent::Loading);
    }

    fn show_ready(&self) {
        self.send(BoardEvent::Ready);
    }
}

/// Writes the board as plain text.
#[derive(Debug)]
pub struct TextPresentation<W> {
    out: Mutex<W>,
    show_answers: bool,
}

impl<W: Write + Send> TextPresentation<W> {
    /// Creates a text presentation writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            show_answers: false,
        }
    }

    /// Prints questions and answers for every clue when rendering the board.
    pub fn with_answers(mut self, show_answers: bool) -> Self {
        self.show_answers = show_answers;
        self
    }

    /// Consumes the presentation and returns the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            warn!(error = %e, "Failed to write board text");
        }
    }

    fn format_board(&self, board: &Board) -> String {
        let mut text = String::new();
        for (ci, category) in board.categories().iter().enumerate() {
            text.push_str(&format!("[{}] {}\n", ci, category.title()));
            for (qi, clue) in category.clues().iter().enumerate() {
                if self.show_answers {
                    text.push_str(&format!("  {}-{}  {}\n", ci, qi, clue.question()));
                    text.push_str(&format!("        => {}\n", clue.answer()));
                } else {
                    let shown = clue.display_text().unwrap_or("?");
                    text.push_str(&format!("  {}-{}  {}\n", ci, qi, shown));
                }
            }
        }

        let missing = board.shortfall();
        if missing > 0 {
            text.push_str(&format!(
                "({} of {} categories could not be loaded)\n",
                missing,
                board.shape().categories_per_board
            ));
        }
        text
    }
}

impl<W: Write + Send> Presentation for TextPresentation<W> {
    fn render_board(&self, board: &Board) {
        let text = self.format_board(board);
        self.write(&text);
    }

    fn render_reveal(&self, category_index: usize, clue_index: usize, text: &str, disabled: bool) {
        let marker = if disabled { " (done)" } else { "" };
        self.write(&format!("{}-{}  {}{}\n", category_index, clue_index, text, marker));
    }

    fn show_loading(&self) {
        self.write("Loading...\n");
    }

    fn show_ready(&self) {}
}
