//! Native extension module for the storefront.
//!
//! Build: `maturin develop --release --features python`
//! Usage in Python: `from product_recommender import get_recommendations`

use crate::models::ProductId;
use pyo3::prelude::*;
use std::collections::HashSet;

/// get_recommendations(target_tags, candidates, liked_ids, disliked_ids) -> list[int]
///
/// `candidates` is a list of `(product_id, tags)` tuples that excludes the
/// target product. Returns at most three ids, best first.
#[pyfunction]
#[pyo3(signature = (
    target_tags,
    candidates,
    liked_ids = HashSet::new(),
    disliked_ids = HashSet::new(),
))]
fn get_recommendations(
    py: Python<'_>,
    target_tags: Vec<String>,
    candidates: Vec<(ProductId, Vec<String>)>,
    liked_ids: HashSet<ProductId>,
    disliked_ids: HashSet<ProductId>,
) -> Vec<ProductId> {
    // Inputs are already owned Rust values; rank without holding the GIL
    py.allow_threads(|| crate::recommend(&target_tags, &candidates, &liked_ids, &disliked_ids))
}

#[pymodule]
fn product_recommender(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(get_recommendations, m)?)?;
    Ok(())
}
