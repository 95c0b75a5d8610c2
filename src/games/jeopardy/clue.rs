//! Clues and the per-clue reveal state machine.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How much of a clue the player has seen.
///
/// Transitions only move forward: `Hidden` → `Question` → `Answer`.
/// `Answer` is terminal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum ClueState {
    /// Nothing shown yet.
    #[default]
    Hidden,
    /// The question is showing.
    Question,
    /// The answer is showing; the cell no longer responds.
    Answer,
}

impl ClueState {
    /// Returns the state after one reveal.
    pub fn advance(self) -> Self {
        match self {
            Self::Hidden => Self::Question,
            Self::Question | Self::Answer => Self::Answer,
        }
    }

    /// Returns `true` once the clue can no longer change.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }
}

/// Result of revealing a clue, handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    /// State after the transition.
    pub state: ClueState,
    /// Text the cell should display.
    pub text: String,
    /// Whether the cell should stop accepting activations.
    pub disabled: bool,
}

/// A single question/answer pair on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    state: ClueState,
}

impl Clue {
    /// Creates a hidden clue.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            state: ClueState::Hidden,
        }
    }

    /// Returns the question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Returns the answer text.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns the current reveal state.
    pub fn state(&self) -> ClueState {
        self.state
    }

    /// Text for the current state, `None` while hidden.
    pub fn display_text(&self) -> Option<&str> {
        match self.state {
            ClueState::Hidden => None,
            ClueState::Question => Some(&self.question),
            ClueState::Answer => Some(&self.answer),
        }
    }

    /// Advances the clue one step and returns what to display.
    ///
    /// Revealing an answered clue changes nothing and returns the same
    /// output as the reveal that showed the answer.
    #[instrument(skip(self), fields(from = %self.state))]
    pub fn reveal(&mut self) -> Reveal {
        let next = self.state.advance();
        if next != self.state {
            debug!(to = %next, "Clue advanced");
        }
        self.state = next;

        let text = match next {
            ClueState::Answer => self.answer.clone(),
            _ => self.question.clone(),
        };

        Reveal {
            state: next,
            text,
            disabled: next.is_terminal(),
        }
    }
}
