// Utility functions for product-recommender

/// Normalize raw tag tokens: trim, lowercase, drop empties, dedupe.
///
/// Returned tokens are sorted so two tag sets can be compared by a linear merge.
pub fn normalize_tags<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags: Vec<String> = raw
        .into_iter()
        .filter_map(|tag| {
            let trimmed = tag.as_ref().trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect();

    tags.sort_unstable();
    tags.dedup();
    tags
}

/// Split the comma-separated storage form of a product's tags
/// (e.g. `"electronics,laptop,gaming"`) into normalized tokens.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    normalize_tags(raw.split(','))
}
