pub mod request;

use crate::utils::{normalize_tags, parse_tag_list};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

pub use request::{CandidateInput, RecommendRequest, RecommendResponse, TagsInput};

/// Product primary key as supplied by the storefront
pub type ProductId = i64;

/// Normalized set of product tags (lowercase, trimmed, non-empty, unique)
///
/// Tokens are kept sorted so intersection/union sizes can be counted
/// without building temporary sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: normalize_tags(raw),
        }
    }

    /// Build from the comma-separated storage form, e.g. `"electronics,laptop,gaming"`
    pub fn parse(raw: &str) -> Self {
        Self {
            tags: parse_tag_list(raw),
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Case- and whitespace-insensitive membership
    pub fn contains(&self, tag: &str) -> bool {
        let needle = tag.trim().to_lowercase();
        self.tags.binary_search(&needle).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub(crate) fn as_sorted_slice(&self) -> &[String] {
        &self.tags
    }
}

impl From<Vec<String>> for TagSet {
    fn from(raw: Vec<String>) -> Self {
        Self::new(raw)
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.tags
    }
}

/// A product eligible for recommendation against some target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProduct {
    pub id: ProductId,
    pub tags: TagSet,
}

impl CandidateProduct {
    pub fn new(id: ProductId, tags: TagSet) -> Self {
        Self { id, tags }
    }
}

/// Stored feedback code on a user's product record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum FeedbackKind {
    Like,
    Dislike,
}

impl FeedbackKind {
    pub fn code(self) -> i32 {
        match self {
            FeedbackKind::Like => 1,
            FeedbackKind::Dislike => -1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Like => "like",
            FeedbackKind::Dislike => "dislike",
        }
    }
}

impl TryFrom<i32> for FeedbackKind {
    type Error = FeedbackError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(FeedbackKind::Like),
            -1 => Ok(FeedbackKind::Dislike),
            other => Err(FeedbackError::UnknownKind(other)),
        }
    }
}

impl From<FeedbackKind> for i32 {
    fn from(kind: FeedbackKind) -> Self {
        kind.code()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("Unknown feedback code: {0} (expected 1 for like, -1 for dislike)")]
    UnknownKind(i32),
}

/// How a user's feedback applies to a single candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackSignal {
    Liked,
    Disliked,
    Neutral,
}

/// Per-user liked/disliked product ids
///
/// Either owns its sets or borrows the caller's, so the per-request entry
/// point never copies them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackSets<'a> {
    liked: Cow<'a, HashSet<ProductId>>,
    disliked: Cow<'a, HashSet<ProductId>>,
}

impl FeedbackSets<'static> {
    /// Sets may overlap; `disliked` wins for any id present in both.
    pub fn new(liked: HashSet<ProductId>, disliked: HashSet<ProductId>) -> Self {
        Self {
            liked: Cow::Owned(liked),
            disliked: Cow::Owned(disliked),
        }
    }

    /// Build from per-product feedback records in the order they were written.
    ///
    /// One feedback per product: a later record for the same product replaces
    /// the earlier one, so the resulting sets are disjoint.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (ProductId, FeedbackKind)>,
    {
        let latest: HashMap<ProductId, FeedbackKind> = records.into_iter().collect();

        let mut liked = HashSet::new();
        let mut disliked = HashSet::new();
        for (product_id, kind) in latest {
            match kind {
                FeedbackKind::Like => liked.insert(product_id),
                FeedbackKind::Dislike => disliked.insert(product_id),
            };
        }
        Self::new(liked, disliked)
    }
}

impl<'a> FeedbackSets<'a> {
    /// Borrow the caller's sets; same precedence rules as [`FeedbackSets::new`].
    pub fn borrowed(liked: &'a HashSet<ProductId>, disliked: &'a HashSet<ProductId>) -> Self {
        Self {
            liked: Cow::Borrowed(liked),
            disliked: Cow::Borrowed(disliked),
        }
    }

    pub fn liked(&self) -> &HashSet<ProductId> {
        &self.liked
    }

    pub fn disliked(&self) -> &HashSet<ProductId> {
        &self.disliked
    }

    pub fn is_empty(&self) -> bool {
        self.liked.is_empty() && self.disliked.is_empty()
    }

    pub fn signal(&self, id: ProductId) -> FeedbackSignal {
        if self.disliked.contains(&id) {
            FeedbackSignal::Disliked
        } else if self.liked.contains(&id) {
            FeedbackSignal::Liked
        } else {
            FeedbackSignal::Neutral
        }
    }
}

/// Candidate paired with its feedback-adjusted score; only lives during ranking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    pub id: ProductId,
    pub score: f64,
    pub liked: bool,
    /// Index in the input pool, used to keep ties in first-seen order
    pub position: usize,
}
