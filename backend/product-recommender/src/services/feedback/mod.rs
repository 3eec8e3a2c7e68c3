use crate::models::FeedbackSignal;

/// Default score bonus for products the user liked
pub const DEFAULT_LIKED_BONUS: f64 = 0.3;

/// Adjusted scores are compared at this precision (1e-9)
const SCORE_SCALE: f64 = 1e9;

/// Round to `SCORE_SCALE` so equal ratios reached by different float paths
/// (e.g. 6/10 + 0.3 and 9/10) compare equal.
pub fn round_score(score: f64) -> f64 {
    (score * SCORE_SCALE).round() / SCORE_SCALE
}

/// Feedback adjustment applied to raw similarity before thresholding
///
/// - Liked: `min(raw + liked_bonus, 1.0)`
/// - Disliked: excluded outright, whatever the raw score
/// - Neutral: raw score unchanged
///
/// Kept scores are rounded with [`round_score`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackAdjuster {
    liked_bonus: f64,
}

impl Default for FeedbackAdjuster {
    fn default() -> Self {
        Self::new(DEFAULT_LIKED_BONUS)
    }
}

impl FeedbackAdjuster {
    /// Negative or non-finite bonuses are treated as 0.0; liked items are never penalized.
    pub fn new(liked_bonus: f64) -> Self {
        let liked_bonus = if liked_bonus.is_finite() {
            liked_bonus.max(0.0)
        } else {
            0.0
        };
        Self { liked_bonus }
    }

    pub fn liked_bonus(&self) -> f64 {
        self.liked_bonus
    }

    /// Returns `None` when the candidate must not be recommended.
    pub fn adjust(&self, raw_score: f64, signal: FeedbackSignal) -> Option<f64> {
        match signal {
            FeedbackSignal::Disliked => None,
            FeedbackSignal::Liked => Some(round_score((raw_score + self.liked_bonus).min(1.0))),
            FeedbackSignal::Neutral => Some(round_score(raw_score)),
        }
    }
}
