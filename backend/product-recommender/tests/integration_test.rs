use product_recommender::{recommend, ProductId};
use proptest::prelude::*;
use std::collections::HashSet;

fn laptop_pool() -> Vec<(ProductId, Vec<&'static str>)> {
    vec![
        (1, vec!["laptop", "gaming", "rgb"]),
        (2, vec!["laptop"]),
        (3, vec!["shoes"]),
    ]
}

fn ids(raw: &[ProductId]) -> HashSet<ProductId> {
    raw.iter().copied().collect()
}

#[test]
fn test_basic_workflow() {
    let result = recommend(&["laptop", "gaming"], &laptop_pool(), &ids(&[]), &ids(&[]));
    assert_eq!(result, vec![1, 2]);
}

#[test]
fn test_disliked_product_is_dropped() {
    let result = recommend(&["laptop", "gaming"], &laptop_pool(), &ids(&[]), &ids(&[1]));
    assert_eq!(result, vec![2]);
}

#[test]
fn test_liked_product_is_promoted() {
    let result = recommend(&["laptop", "gaming"], &laptop_pool(), &ids(&[2]), &ids(&[]));
    assert_eq!(result, vec![2, 1]);
}

#[test]
fn test_liked_wins_equal_adjusted_score() {
    let target = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
    let pool = vec![
        (1, vec!["a", "b", "c", "d", "e", "f", "g", "h", "i"]),
        (2, vec!["a", "b", "c", "d", "e", "f"]),
    ];
    let result = recommend(&target, &pool, &ids(&[2]), &ids(&[]));
    assert_eq!(result, vec![2, 1]);
}

#[test]
fn test_conflicting_feedback_resolves_to_dislike() {
    let result = recommend(&["laptop", "gaming"], &laptop_pool(), &ids(&[1, 2]), &ids(&[2]));
    assert_eq!(result, vec![1]);
}

#[test]
fn test_empty_candidate_pool() {
    let pool: Vec<(ProductId, Vec<String>)> = Vec::new();
    assert!(recommend(&["x"], &pool, &ids(&[]), &ids(&[])).is_empty());
}

#[test]
fn test_empty_target_tags() {
    let target: [&str; 0] = [];
    assert!(recommend(&target, &laptop_pool(), &ids(&[]), &ids(&[])).is_empty());
    assert!(recommend(&["", "  "], &laptop_pool(), &ids(&[2]), &ids(&[])).is_empty());
}

#[test]
fn test_raw_tags_are_normalized() {
    let pool = vec![
        (10, vec![" LAPTOP ".to_string(), "".to_string(), "Gaming".to_string()]),
        (11, vec!["laptop".to_string(), "laptop".to_string()]),
    ];
    let result = recommend(&["Laptop", "gaming ", ""], &pool, &ids(&[]), &ids(&[]));
    assert_eq!(result, vec![10, 11]);
}

#[test]
fn test_at_most_three_results() {
    let pool: Vec<(ProductId, Vec<&str>)> = (0..50).map(|id| (id, vec!["laptop"])).collect();
    let result = recommend(&["laptop"], &pool, &ids(&[]), &ids(&[]));
    assert_eq!(result, vec![0, 1, 2]);
}

fn pool_strategy() -> impl Strategy<Value = Vec<(ProductId, Vec<String>)>> {
    prop::collection::vec(prop::collection::vec("[a-e]{1,2}", 0..5), 0..20).prop_map(|tag_lists| {
        tag_lists
            .into_iter()
            .enumerate()
            .map(|(i, tags)| (i as ProductId, tags))
            .collect()
    })
}

fn id_set() -> impl Strategy<Value = HashSet<ProductId>> {
    prop::collection::hash_set(0..20i64, 0..6)
}

proptest! {
    #[test]
    fn result_never_exceeds_three(
        target in prop::collection::vec("[a-e]{1,2}", 0..5),
        pool in pool_strategy(),
        liked in id_set(),
        disliked in id_set(),
    ) {
        let result = recommend(&target, &pool, &liked, &disliked);
        prop_assert!(result.len() <= 3);
    }

    #[test]
    fn disliked_never_recommended(
        target in prop::collection::vec("[a-e]{1,2}", 0..5),
        pool in pool_strategy(),
        liked in id_set(),
        disliked in id_set(),
    ) {
        let result = recommend(&target, &pool, &liked, &disliked);
        prop_assert!(result.iter().all(|id| !disliked.contains(id)));
    }

    #[test]
    fn recommend_is_idempotent(
        target in prop::collection::vec("[a-e]{1,2}", 0..5),
        pool in pool_strategy(),
        liked in id_set(),
        disliked in id_set(),
    ) {
        prop_assert_eq!(
            recommend(&target, &pool, &liked, &disliked),
            recommend(&target, &pool, &liked, &disliked)
        );
    }

    #[test]
    fn results_are_unique_pool_members(
        target in prop::collection::vec("[a-e]{1,2}", 0..5),
        pool in pool_strategy(),
        liked in id_set(),
    ) {
        let result = recommend(&target, &pool, &liked, &HashSet::new());
        let unique: HashSet<ProductId> = result.iter().copied().collect();
        prop_assert_eq!(unique.len(), result.len());
        prop_assert!(result.iter().all(|id| pool.iter().any(|(pid, _)| pid == id)));
    }
}
