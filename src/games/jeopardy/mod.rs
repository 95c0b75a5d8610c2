//! Trivia board domain: clues, categories, boards and sampling.

mod clue;
mod sampler;
mod types;

pub use clue::{Clue, ClueState, Reveal};
pub use sampler::{sample, sample_without_replacement};
pub use types::{Board, BoardShape, BoardSummary, Category, CategoryId};
