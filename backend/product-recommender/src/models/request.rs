use super::{CandidateProduct, FeedbackSets, ProductId, TagSet};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tags as stored on the product (`"laptop, gaming"`) or as a list
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
    Csv(String),
    List(Vec<String>),
}

impl From<TagsInput> for TagSet {
    fn from(input: TagsInput) -> Self {
        match input {
            TagsInput::Csv(raw) => TagSet::parse(&raw),
            TagsInput::List(tags) => TagSet::new(tags),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateInput {
    pub id: ProductId,
    pub tags: TagsInput,
}

/// JSON request accepted by the command-line front end
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    pub target_tags: TagsInput,
    #[serde(default)]
    pub candidates: Vec<CandidateInput>,
    #[serde(default)]
    pub liked_ids: HashSet<ProductId>,
    #[serde(default)]
    pub disliked_ids: HashSet<ProductId>,
}

impl RecommendRequest {
    /// Normalized target tags, candidate pool and feedback
    pub fn into_parts(self) -> (TagSet, Vec<CandidateProduct>, FeedbackSets<'static>) {
        let target = TagSet::from(self.target_tags);
        let pool = self
            .candidates
            .into_iter()
            .map(|c| CandidateProduct::new(c.id, c.tags.into()))
            .collect();
        let feedback = FeedbackSets::new(self.liked_ids, self.disliked_ids);

        (target, pool, feedback)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendResponse {
    pub recommended_ids: Vec<ProductId>,
}
