//! Category repository: remote pools trimmed to the board shape.
//!
//! Remote failures stop here. A failed listing becomes an empty id list and a
//! failed category becomes `None`, each logged once at `error`.

use crate::api::CategoryApi;
use crate::games::jeopardy::{BoardShape, Category, CategoryId, Clue, sample_without_replacement};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, error, info, instrument};

/// Fetches categories and samples them down to the board shape.
#[derive(Debug)]
pub struct CategoryRepository<A> {
    api: A,
    shape: BoardShape,
    rng: Mutex<StdRng>,
}

impl<A: CategoryApi> CategoryRepository<A> {
    /// Creates a repository drawing from OS entropy.
    #[instrument(skip(api))]
    pub fn new(api: A, shape: BoardShape) -> Self {
        Self {
            api,
            shape,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a repository with a reproducible draw sequence.
    #[instrument(skip(api))]
    pub fn with_seed(api: A, shape: BoardShape, seed: u64) -> Self {
        Self {
            api,
            shape,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Returns the underlying API.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Returns the shape categories are trimmed to.
    pub fn shape(&self) -> &BoardShape {
        &self.shape
    }

    fn draw<T: Clone>(&self, pool: &[T], k: usize) -> Vec<T> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        sample_without_replacement(pool, k, &mut *rng)
    }

    /// Requests `pool_size` candidates and picks `count` distinct ids.
    ///
    /// Returns an empty list if the service cannot be reached or answers
    /// with something unreadable.
    #[instrument(skip(self))]
    pub async fn fetch_category_ids(&self, pool_size: usize, count: usize) -> Vec<CategoryId> {
        let candidates = match self.api.list_categories(pool_size).await {
            Ok(candidates) => candidates,
            Err(e) => {
                error!(error = %e, "Failed to fetch category ids");
                return Vec::new();
            }
        };

        let mut ids: Vec<CategoryId> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if !ids.contains(&candidate.id) {
                ids.push(candidate.id);
            }
        }

        let chosen = self.draw(&ids, count);
        info!(pool = ids.len(), chosen = chosen.len(), "Sampled category ids");
        chosen
    }

    /// Fetches one category and samples its clues.
    ///
    /// Returns `None` if the category cannot be fetched.
    #[instrument(skip(self))]
    pub async fn fetch_category(&self, id: CategoryId) -> Option<Category> {
        let record = match self.api.get_category(id).await {
            Ok(record) => record,
            Err(e) => {
                error!(category_id = id, error = %e, "Failed to fetch category");
                return None;
            }
        };

        let pool_len = record.clues.len();
        let clues: Vec<Clue> = self
            .draw(&record.clues, self.shape.clues_per_category)
            .into_iter()
            .map(|c| Clue::new(c.question, c.answer))
            .collect();

        debug!(
            category_id = id,
            title = %record.title,
            pool = pool_len,
            kept = clues.len(),
            "Loaded category"
        );
        Some(Category::new(id, record.title, clues))
    }
}
