//! Recommendation Ranker
//!
//! Scores every candidate in the pool against the target product's tags,
//! applies the user's feedback, filters weak matches and keeps the top few.
//!
//! # Workflow
//! 1. Drop disliked candidates
//! 2. Jaccard similarity against the target tags
//! 3. Liked bonus (clamped to 1.0)
//! 4. Keep scores strictly above the threshold
//! 5. Sort: score desc, liked first, then input order
//! 6. Truncate to `max_results`

use crate::models::{
    CandidateProduct, FeedbackSets, FeedbackSignal, ProductId, ScoredCandidate, TagSet,
};
use crate::services::feedback::FeedbackAdjuster;
use crate::services::similarity::similarity;
use std::cmp::Ordering;
use tracing::debug;

/// Scores must be strictly greater than this to be recommended
pub const MIN_SCORE_THRESHOLD: f64 = 0.1;

/// Maximum number of recommended products per page view
pub const MAX_RECOMMENDATIONS: usize = 3;

#[derive(Debug, Clone)]
pub struct RecommendationRanker {
    min_score_threshold: f64,
    max_results: usize,
    adjuster: FeedbackAdjuster,
}

impl Default for RecommendationRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationRanker {
    pub fn new() -> Self {
        Self {
            min_score_threshold: MIN_SCORE_THRESHOLD,
            max_results: MAX_RECOMMENDATIONS,
            adjuster: FeedbackAdjuster::default(),
        }
    }

    /// Set minimum score threshold, clamped to [0.0, 1.0]; NaN keeps the default.
    pub fn with_min_threshold(mut self, threshold: f64) -> Self {
        self.min_score_threshold = if threshold.is_nan() {
            MIN_SCORE_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_liked_bonus(mut self, bonus: f64) -> Self {
        self.adjuster = FeedbackAdjuster::new(bonus);
        self
    }

    pub fn min_score_threshold(&self) -> f64 {
        self.min_score_threshold
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn liked_bonus(&self) -> f64 {
        self.adjuster.liked_bonus()
    }

    /// Recommended product ids, best first.
    ///
    /// The target product must not be part of `candidates`.
    pub fn rank(
        &self,
        target: &TagSet,
        candidates: &[CandidateProduct],
        feedback: &FeedbackSets<'_>,
    ) -> Vec<ProductId> {
        self.rank_scored(target, candidates, feedback)
            .into_iter()
            .map(|scored| scored.id)
            .collect()
    }

    /// Same as [`rank`](Self::rank) but keeps the adjusted scores.
    pub fn rank_scored(
        &self,
        target: &TagSet,
        candidates: &[CandidateProduct],
        feedback: &FeedbackSets<'_>,
    ) -> Vec<ScoredCandidate> {
        // An untagged target matches nothing, liked or not
        if candidates.is_empty() || target.is_empty() || self.max_results == 0 {
            return Vec::new();
        }

        let mut scored: Vec<ScoredCandidate> = candidates
            .iter()
            .enumerate()
            .filter_map(|(position, candidate)| self.score(target, candidate, feedback, position))
            .collect();

        // sort_by is stable: remaining ties keep input order
        scored.sort_by(compare_ranked);
        scored.truncate(self.max_results);

        debug!(
            candidate_count = candidates.len(),
            target_tags = target.len(),
            liked = feedback.liked().len(),
            disliked = feedback.disliked().len(),
            recommended = scored.len(),
            top_score = scored.first().map(|c| c.score),
            "Recommendations ranked"
        );

        scored
    }

    fn score(
        &self,
        target: &TagSet,
        candidate: &CandidateProduct,
        feedback: &FeedbackSets<'_>,
        position: usize,
    ) -> Option<ScoredCandidate> {
        let signal = feedback.signal(candidate.id);
        if signal == FeedbackSignal::Disliked {
            return None;
        }

        let raw = similarity(target, &candidate.tags);
        let score = self.adjuster.adjust(raw, signal)?;

        (score > self.min_score_threshold).then_some(ScoredCandidate {
            id: candidate.id,
            score,
            liked: signal == FeedbackSignal::Liked,
            position,
        })
    }
}

/// Score descending, liked before not liked on equal scores.
fn compare_ranked(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.liked.cmp(&a.liked))
}
