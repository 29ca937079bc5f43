//! Distinct facet values for populating the filter controls.
//!
//! Always computed from the whole dataset, never the filtered subset, so a
//! user can broaden a narrowed search again.

use std::collections::BTreeSet;

use crate::photographer::Photographer;

/// Distinct non-empty locations in lexicographic order.
pub fn locations(dataset: &[Photographer]) -> BTreeSet<String> {
    dataset.iter().map(|p| p.location.clone()).filter(|l| !l.is_empty()).collect()
}

/// Distinct styles in lexicographic order.
pub fn styles(dataset: &[Photographer]) -> BTreeSet<String> {
    dataset.iter().flat_map(|p| p.styles.iter().cloned()).filter(|s| !s.is_empty()).collect()
}
