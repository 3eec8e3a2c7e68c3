//! Product recommendations for the storefront's product detail page.
//!
//! Candidates are scored by Jaccard similarity of their tags against the
//! target product, adjusted by the viewing user's likes and dislikes, and
//! the best three are returned.
//!
//! ```
//! use std::collections::HashSet;
//!
//! let recommended = product_recommender::recommend(
//!     &["Laptop", " gaming"],
//!     &[(1, vec!["laptop", "gaming", "rgb"]), (2, vec!["laptop"]), (3, vec!["shoes"])],
//!     &HashSet::new(),
//!     &HashSet::new(),
//! );
//! assert_eq!(recommended, vec![1, 2]);
//! ```

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(feature = "python")]
mod python;

use std::collections::HashSet;

pub use config::{Config, ConfigError, RankingConfig};
pub use models::{
    CandidateProduct, FeedbackError, FeedbackKind, FeedbackSets, FeedbackSignal, ProductId,
    ScoredCandidate, TagSet,
};
pub use services::{similarity, FeedbackAdjuster, RecommendationRanker};

/// Fast-path entry point: up to three recommended product ids, best first.
///
/// Tags may be in any case, padded, or empty; they are normalized here.
/// `candidates` must not contain the target product itself. An id present in
/// both `liked_ids` and `disliked_ids` is treated as disliked.
pub fn recommend<T, C>(
    target_tags: &[T],
    candidates: &[(ProductId, Vec<C>)],
    liked_ids: &HashSet<ProductId>,
    disliked_ids: &HashSet<ProductId>,
) -> Vec<ProductId>
where
    T: AsRef<str>,
    C: AsRef<str>,
{
    let target = TagSet::new(target_tags);
    let pool: Vec<CandidateProduct> = candidates
        .iter()
        .map(|(id, tags)| CandidateProduct::new(*id, TagSet::new(tags)))
        .collect();
    let feedback = FeedbackSets::borrowed(liked_ids, disliked_ids);

    RecommendationRanker::new().rank(&target, &pool, &feedback)
}
