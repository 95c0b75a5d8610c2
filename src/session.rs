//! Game session: board setup, restart, and clue reveals.

use crate::api::CategoryApi;
use crate::games::jeopardy::{Board, BoardShape, BoardSummary, Reveal};
use crate::presentation::Presentation;
use crate::repository::CategoryRepository;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Lifecycle of a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// No board requested yet.
    #[default]
    Idle,
    /// A board is being fetched.
    Loading,
    /// A board is available.
    Ready,
}

/// What a call to [`GameSession::start`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new board was built.
    Started(BoardSummary),
    /// Another start was already loading; nothing happened.
    AlreadyLoading,
}

#[derive(Debug, Default)]
struct SessionState {
    status: SessionStatus,
    board: Option<Board>,
}

/// One player's game.
///
/// All mutation goes through [`start`](Self::start) and
/// [`reveal`](Self::reveal). Both take `&self`, so a session can be shared
/// between a UI loop and a background loader.
#[derive(Debug)]
pub struct GameSession<A, P> {
    repository: CategoryRepository<A>,
    presentation: P,
    state: Mutex<SessionState>,
}

impl<A: CategoryApi, P: Presentation> GameSession<A, P> {
    /// Creates an idle session.
    #[instrument(skip_all, fields(shape = ?repository.shape()))]
    pub fn new(repository: CategoryRepository<A>, presentation: P) -> Self {
        info!("Creating game session");
        Self {
            repository,
            presentation,
            state: Mutex::new(SessionState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the current status.
    pub fn status(&self) -> SessionStatus {
        self.lock().status
    }

    /// Returns a snapshot of the current board, if ready.
    pub fn board(&self) -> Option<Board> {
        self.lock().board.clone()
    }

    /// Returns the shape new boards are built to.
    pub fn shape(&self) -> &BoardShape {
        self.repository.shape()
    }

    /// Returns the repository.
    pub fn repository(&self) -> &CategoryRepository<A> {
        &self.repository
    }

    /// Returns the presentation.
    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    /// Consumes the session, returning its repository and presentation.
    pub fn into_parts(self) -> (CategoryRepository<A>, P) {
        (self.repository, self.presentation)
    }

    /// Builds a new board, discarding the current one.
    ///
    /// Does nothing if a previous call is still loading. Categories that
    /// fail to load are skipped, so the board may come back short or empty;
    /// the session still becomes [`SessionStatus::Ready`].
    ///
    /// Dropping the returned future before it completes puts the session
    /// back to [`SessionStatus::Idle`], so a cancelled load never blocks the
    /// next one.
    #[instrument(skip(self))]
    pub async fn start(&self) -> StartOutcome {
        let guard = {
            let mut state = self.lock();
            if state.status == SessionStatus::Loading {
                debug!("Start ignored, board already loading");
                return StartOutcome::AlreadyLoading;
            }
            state.status = SessionStatus::Loading;
            state.board = None;
            LoadingGuard::new(&self.state)
        };
        self.presentation.show_loading();

        let shape = *self.repository.shape();
        let ids = self
            .repository
            .fetch_category_ids(shape.category_pool_size, shape.categories_per_board)
            .await;

        let mut categories = Vec::with_capacity(ids.len());
        for id in ids {
            match self.repository.fetch_category(id).await {
                Some(category) => categories.push(category),
                None => warn!(category_id = id, "Skipping category"),
            }
        }

        let board = Board::new(shape, categories);
        let summary = board.summary();
        {
            let mut state = self.lock();
            state.status = SessionStatus::Ready;
            state.board = Some(board.clone());
        }
        guard.disarm();

        if summary.is_complete() {
            info!(categories = summary.categories, "Board ready");
        } else {
            warn!(
                categories = summary.categories,
                expected = summary.expected_categories,
                short_categories = summary.short_categories,
                "Board ready but incomplete"
            );
        }

        self.presentation.show_ready();
        self.presentation.render_board(&board);
        StartOutcome::Started(summary)
    }

    /// Advances the clue at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if no board is ready or the coordinates are
    /// outside the current board.
    #[instrument(skip(self))]
    pub fn reveal(&self, category_index: usize, clue_index: usize) -> Result<Reveal, SessionError> {
        let reveal = {
            let mut state = self.lock();
            if state.status != SessionStatus::Ready {
                return Err(SessionError::new(SessionErrorKind::NotReady(state.status)));
            }
            let clue = state
                .board
                .as_mut()
                .and_then(|board| board.clue_mut(category_index, clue_index))
                .ok_or_else(|| {
                    warn!("Reveal outside the board");
                    SessionError::new(SessionErrorKind::OutOfBounds {
                        category: category_index,
                        clue: clue_index,
                    })
                })?;
            clue.reveal()
        };

        debug!(state = %reveal.state, disabled = reveal.disabled, "Revealed clue");
        self.presentation
            .render_reveal(category_index, clue_index, &reveal.text, reveal.disabled);
        Ok(reveal)
    }
}

/// Resets a `Loading` session to `Idle` if the load is abandoned.
struct LoadingGuard<'a> {
    state: &'a Mutex<SessionState>,
    armed: bool,
}

impl<'a> LoadingGuard<'a> {
    fn new(state: &'a Mutex<SessionState>) -> Self {
        Self { state, armed: true }
    }

    /// Keeps whatever status the load installed.
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.status == SessionStatus::Loading {
            warn!("Board load abandoned, session back to idle");
            state.status = SessionStatus::Idle;
            state.board = None;
        }
    }
}

/// Ways a reveal can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SessionErrorKind {
    /// The session has no board yet.
    #[display("no board ready (session is {})", _0)]
    NotReady(SessionStatus),
    /// The coordinates are not on the board.
    #[display("no clue at {}-{}", category, clue)]
    OutOfBounds {
        /// Requested column.
        category: usize,
        /// Requested row.
        clue: usize,
    },
}

/// Rejected session operation.
#[derive(Debug, Clone, Display, Error)]
#[display("Session error: {} at {}:{}", kind, file, line)]
pub struct SessionError {
    /// What went wrong.
    pub kind: SessionErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: SessionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
