//! Shared fakes for session and repository tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use strictly_jeopardy::{
    Board, CategoryApi, CategoryId, CategoryRecord, CategorySummary, ClueRecord, FetchError,
    Presentation,
};

/// In-memory clue service.
///
/// Every call yields to the scheduler once before answering, so overlapping
/// callers interleave the way they would against a real network.
#[derive(Debug, Default)]
pub struct FakeApi {
    categories: Vec<(CategoryId, CategoryRecord)>,
    failing: HashSet<CategoryId>,
    listing_fails: bool,
    listing_repeats: usize,
    list_calls: AtomicUsize,
    requested: Mutex<Vec<CategoryId>>,
}

impl FakeApi {
    /// Creates `count` categories with ids `1..=count`, each holding `clues` clues.
    pub fn with_categories(count: u64, clues: usize) -> Self {
        let categories = (1..=count)
            .map(|id| {
                let record = CategoryRecord {
                    title: format!("Category {id}"),
                    clues: (0..clues)
                        .map(|j| ClueRecord {
                            question: format!("Q{id}-{j}"),
                            answer: format!("A{id}-{j}"),
                        })
                        .collect(),
                };
                (id, record)
            })
            .collect();
        Self {
            categories,
            ..Self::default()
        }
    }

    /// Makes `get_category` fail for these ids.
    pub fn failing(mut self, ids: impl IntoIterator<Item = CategoryId>) -> Self {
        self.failing.extend(ids);
        self
    }

    /// Makes `list_categories` fail.
    pub fn failing_listing(mut self) -> Self {
        self.listing_fails = true;
        self
    }

    /// Makes `list_categories` return every id `times` times.
    pub fn repeating_listing(mut self, times: usize) -> Self {
        self.listing_repeats = times;
        self
    }

    /// Number of `list_categories` calls so far.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Ids passed to `get_category`, in call order.
    pub fn requested(&self) -> Vec<CategoryId> {
        self.requested.lock().expect("requested lock").clone()
    }
}

#[async_trait::async_trait]
impl CategoryApi for FakeApi {
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>, FetchError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;

        if self.listing_fails {
            return Err(FetchError::new("listing unavailable"));
        }
        let repeats = self.listing_repeats.max(1);
        Ok(self
            .categories
            .iter()
            .take(count)
            .flat_map(|(id, record)| {
                std::iter::repeat_n(
                    CategorySummary {
                        id: *id,
                        title: record.title.clone(),
                    },
                    repeats,
                )
            })
            .collect())
    }

    async fn get_category(&self, id: CategoryId) -> Result<CategoryRecord, FetchError> {
        self.requested.lock().expect("requested lock").push(id);
        tokio::task::yield_now().await;

        if self.failing.contains(&id) {
            return Err(FetchError::new(format!("category {id} unavailable")));
        }
        self.categories
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, record)| record.clone())
            .ok_or_else(|| FetchError::new(format!("category {id} not found")))
    }
}

/// Something the session asked the presentation to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Loading,
    Ready,
    Board(Vec<CategoryId>),
    Reveal(usize, usize, String, bool),
}

/// Presentation that records every call.
#[derive(Debug, Default)]
pub struct RecordingPresentation {
    calls: Mutex<Vec<Rendered>>,
}

impl RecordingPresentation {
    /// Calls received so far.
    pub fn calls(&self) -> Vec<Rendered> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn push(&self, rendered: Rendered) {
        self.calls.lock().expect("calls lock").push(rendered);
    }
}

impl Presentation for RecordingPresentation {
    fn render_board(&self, board: &Board) {
        self.push(Rendered::Board(
            board.categories().iter().map(|c| c.id()).collect(),
        ));
    }

    fn render_reveal(&self, category_index: usize, clue_index: usize, text: &str, disabled: bool) {
        self.push(Rendered::Reveal(
            category_index,
            clue_index,
            text.to_string(),
            disabled,
        ));
    }

    fn show_loading(&self) {
        self.push(Rendered::Loading);
    }

    fn show_ready(&self) {
        self.push(Rendered::Ready);
    }
}
