//! Strictly Jeopardy library - a single-player trivia board engine
//!
//! Fetches a random slate of categories and clues from a remote clue service,
//! lays them out as a board, and walks each clue from hidden to question to
//! answer.
//!
//! # Architecture
//!
//! - **Sampler**: duplicate-free random draws from variable-size pools
//! - **Api**: HTTP client for the clue service
//! - **Repository**: trims remote pools to the board shape, absorbing failures
//! - **Session**: setup/restart guard, board ownership, clue reveals
//! - **Presentation**: the seam a UI implements to draw the board
//!
//! # Example
//!
//! ```no_run
//! use strictly_jeopardy::{CategoryRepository, GameConfig, GameSession, JeopardyApiClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let api = JeopardyApiClient::new(config.api_url())?;
//! let session = GameSession::new(CategoryRepository::new(api, config.shape()), ());
//!
//! session.start().await;
//! let reveal = session.reveal(0, 0)?;
//! println!("{}", reveal.text);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod config;
mod games;
mod presentation;
mod repository;
mod session;

// Crate-level exports - Clue service client
pub use api::{
    CategoryApi, CategoryRecord, CategorySummary, ClueRecord, FetchError, JeopardyApiClient,
};

// Crate-level exports - Configuration
pub use config::{API_URL_ENV, ConfigError, GameConfig};

// Crate-level exports - Board types
pub use games::jeopardy::{
    Board, BoardShape, BoardSummary, Category, CategoryId, Clue, ClueState, Reveal, sample,
    sample_without_replacement,
};

// Crate-level exports - Presentation
pub use presentation::{
    BoardEvent, BoardView, CellView, ChannelPresentation, Presentation, TextPresentation,
};

// Crate-level exports - Repository and session
pub use repository::CategoryRepository;
pub use session::{GameSession, SessionError, SessionErrorKind, SessionStatus, StartOutcome};
