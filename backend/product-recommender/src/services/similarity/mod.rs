// ============================================
// Tag Similarity Scorer
// ============================================
//
// Jaccard index over normalized tag sets:
//   J(A, B) = |A ∩ B| / |A ∪ B|
//
// Both sets are sorted, so the intersection is counted with a single
// merge pass and |A ∪ B| = |A| + |B| - |A ∩ B|. No allocation.

use crate::models::TagSet;
use std::cmp::Ordering;

/// Jaccard similarity of two tag sets, in [0.0, 1.0].
///
/// Two empty sets have an empty union and score 0.0.
pub fn similarity(a: &TagSet, b: &TagSet) -> f64 {
    let union = a.len() + b.len();
    if union == 0 {
        return 0.0;
    }

    let intersection = intersection_count(a.as_sorted_slice(), b.as_sorted_slice());
    intersection as f64 / (union - intersection) as f64
}

fn intersection_count(a: &[String], b: &[String]) -> usize {
    let (mut i, mut j, mut count) = (0, 0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tags(raw: &[&str]) -> TagSet {
        TagSet::new(raw.iter().copied())
    }

    #[test]
    fn test_identical_sets() {
        let a = tags(&["laptop", "gaming"]);
        assert_eq!(similarity(&a, &a), 1.0);
    }

    #[test]
    fn test_partial_overlap() {
        let target = tags(&["laptop", "gaming"]);

        let full = similarity(&target, &tags(&["laptop", "gaming", "rgb"]));
        assert!((full - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(similarity(&target, &tags(&["laptop"])), 0.5);
        assert!((similarity(&target, &tags(&["laptop", "bag"])) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_sets() {
        assert_eq!(similarity(&tags(&["laptop", "gaming"]), &tags(&["shoes"])), 0.0);
    }

    #[test]
    fn test_empty_sets() {
        let empty = TagSet::default();
        assert_eq!(similarity(&empty, &empty), 0.0);
        assert_eq!(similarity(&empty, &tags(&["laptop"])), 0.0);
    }

    #[test]
    fn test_normalization_before_scoring() {
        let a = tags(&[" Laptop", "GAMING", ""]);
        let b = tags(&["laptop ", "gaming", "gaming"]);
        assert_eq!(similarity(&a, &b), 1.0);
    }

    fn tag_set() -> impl Strategy<Value = TagSet> {
        prop::collection::vec("[a-dA-D ]{0,3}", 0..8).prop_map(TagSet::new)
    }

    proptest! {
        #[test]
        fn similarity_is_symmetric(a in tag_set(), b in tag_set()) {
            prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
        }

        #[test]
        fn similarity_is_bounded(a in tag_set(), b in tag_set()) {
            let score = similarity(&a, &b);
            prop_assert!((0.0..=1.0).contains(&score));
        }

        #[test]
        fn similarity_with_self_is_one(a in tag_set()) {
            prop_assume!(!a.is_empty());
            prop_assert_eq!(similarity(&a, &a), 1.0);
        }
    }
}
