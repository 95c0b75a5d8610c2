//! Tests for trimming remote pools to the board shape.

mod common;

use std::collections::HashSet;

use common::FakeApi;
use strictly_jeopardy::{BoardShape, CategoryRepository, ClueState};

fn shape(categories: usize, clues: usize) -> BoardShape {
    BoardShape::new(categories, clues, 100)
}

#[tokio::test]
async fn test_fetch_category_ids_samples_distinct_ids() {
    let repo = CategoryRepository::with_seed(FakeApi::with_categories(10, 5), shape(6, 5), 3);

    let ids = repo.fetch_category_ids(100, 6).await;

    assert_eq!(ids.len(), 6);
    let distinct: HashSet<_> = ids.iter().collect();
    assert_eq!(distinct.len(), 6);
    assert!(ids.iter().all(|id| (1..=10).contains(id)));
}

#[tokio::test]
async fn test_fetch_category_ids_small_pool_returns_all() {
    let repo = CategoryRepository::with_seed(FakeApi::with_categories(4, 5), shape(6, 5), 3);

    let mut ids = repo.fetch_category_ids(100, 6).await;

    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_fetch_category_ids_ignores_repeated_listing_ids() {
    let api = FakeApi::with_categories(4, 5).repeating_listing(3);
    let repo = CategoryRepository::with_seed(api, shape(6, 5), 5);

    let mut ids = repo.fetch_category_ids(100, 6).await;

    assert_eq!(ids.len(), 4);
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_fetch_category_ids_absorbs_failure() {
    let repo = CategoryRepository::new(
        FakeApi::with_categories(10, 5).failing_listing(),
        shape(6, 5),
    );

    let ids = repo.fetch_category_ids(100, 6).await;

    assert!(ids.is_empty());
    assert_eq!(repo.api().list_calls(), 1);
}

#[tokio::test]
async fn test_fetch_category_samples_five_of_seven_hidden_clues() {
    let repo = CategoryRepository::with_seed(FakeApi::with_categories(1, 7), shape(1, 5), 11);

    let category = repo.fetch_category(1).await.expect("category should load");

    assert_eq!(category.id(), 1);
    assert_eq!(category.title(), "Category 1");
    assert_eq!(category.clues().len(), 5);

    let questions: HashSet<_> = category.clues().iter().map(|c| c.question()).collect();
    assert_eq!(questions.len(), 5);
    for clue in category.clues() {
        let j = clue
            .question()
            .strip_prefix("Q1-")
            .and_then(|n| n.parse::<usize>().ok())
            .expect("question from the pool");
        assert!(j < 7);
        assert_eq!(clue.answer(), format!("A1-{j}"));
        assert_eq!(clue.state(), ClueState::Hidden);
    }
}

#[tokio::test]
async fn test_fetch_category_keeps_short_pool() {
    let repo = CategoryRepository::new(FakeApi::with_categories(1, 3), shape(1, 5));

    let category = repo.fetch_category(1).await.expect("category should load");

    assert_eq!(category.clues().len(), 3);
    assert!(!category.is_complete(repo.shape()));
}

#[tokio::test]
async fn test_fetch_category_absorbs_failure() {
    let repo = CategoryRepository::new(FakeApi::with_categories(3, 5).failing([2]), shape(3, 5));

    assert!(repo.fetch_category(2).await.is_none());
    assert!(repo.fetch_category(99).await.is_none());
    assert!(repo.fetch_category(1).await.is_some());
}
