//! Core domain types for the trivia board.

use derive_new::new;
use serde::{Deserialize, Serialize};

use super::clue::Clue;

/// Identifier of a category on the remote clue service.
pub type CategoryId = u64;

/// Dimensions a board is built to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct BoardShape {
    /// Number of category columns.
    pub categories_per_board: usize,
    /// Number of clues in each column.
    pub clues_per_category: usize,
    /// How many candidate categories to request before sampling.
    pub category_pool_size: usize,
}

impl Default for BoardShape {
    fn default() -> Self {
        Self::new(6, 5, 100)
    }
}

/// A titled column of clues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    /// Creates a category from already-sampled clues.
    pub fn new(id: CategoryId, title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            id,
            title: title.into(),
            clues,
        }
    }

    /// Returns the remote identifier.
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Returns the category title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the clues in display order.
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Returns the clue at `index`.
    pub fn clue(&self, index: usize) -> Option<&Clue> {
        self.clues.get(index)
    }

    pub(crate) fn clue_mut(&mut self, index: usize) -> Option<&mut Clue> {
        self.clues.get_mut(index)
    }

    /// Returns `true` if the category has as many clues as `shape` asks for.
    pub fn is_complete(&self, shape: &BoardShape) -> bool {
        self.clues.len() >= shape.clues_per_category
    }
}

/// Counts describing how close a board came to its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    /// Categories the shape asked for.
    pub expected_categories: usize,
    /// Categories actually on the board.
    pub categories: usize,
    /// Categories with fewer clues than the shape asked for.
    pub short_categories: usize,
}

impl BoardSummary {
    /// Returns `true` if every category and clue slot is filled.
    pub fn is_complete(&self) -> bool {
        self.categories >= self.expected_categories && self.short_categories == 0
    }
}

/// The grid of categories for one session.
///
/// Column order is fixed once built; `(category_index, clue_index)`
/// coordinates stay valid until the session restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    shape: BoardShape,
    categories: Vec<Category>,
}

impl Board {
    /// Creates a board from categories in column order.
    pub fn new(shape: BoardShape, categories: Vec<Category>) -> Self {
        Self { shape, categories }
    }

    /// Returns the shape this board was built for.
    pub fn shape(&self) -> &BoardShape {
        &self.shape
    }

    /// Returns the categories in column order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the category at `index`.
    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Returns the clue at the given coordinates.
    pub fn clue(&self, category_index: usize, clue_index: usize) -> Option<&Clue> {
        self.category(category_index)?.clue(clue_index)
    }

    pub(crate) fn clue_mut(
        &mut self,
        category_index: usize,
        clue_index: usize,
    ) -> Option<&mut Clue> {
        self.categories.get_mut(category_index)?.clue_mut(clue_index)
    }

    /// Number of category columns.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns `true` if no category loaded.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of rows needed to draw the board.
    pub fn row_count(&self) -> usize {
        self.categories
            .iter()
            .map(|c| c.clues().len())
            .max()
            .unwrap_or(0)
    }

    /// How many categories are missing compared to the shape.
    pub fn shortfall(&self) -> usize {
        self.shape
            .categories_per_board
            .saturating_sub(self.categories.len())
    }

    /// Returns `true` if nothing is missing.
    pub fn is_complete(&self) -> bool {
        self.summary().is_complete()
    }

    /// Summarizes how much of the shape was filled.
    pub fn summary(&self) -> BoardSummary {
        BoardSummary {
            expected_categories: self.shape.categories_per_board,
            categories: self.categories.len(),
            short_categories: self
                .categories
                .iter()
                .filter(|c| !c.is_complete(&self.shape))
                .count(),
        }
    }
}
