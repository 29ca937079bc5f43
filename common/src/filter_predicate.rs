//! Evaluates one photographer against the current query and filters.

use crate::filter_state::FilterState;
use crate::photographer::Photographer;
use crate::text_match::matches_any;

/// Pure predicate: every non-empty check must pass.
pub fn passes(record: &Photographer, query: &str, filters: &FilterState) -> bool {
    let query = query.trim();
    if !query.is_empty() && !matches_any(&record.searchable_fields(), query) {
        return false;
    }

    if let Some(location) = &filters.location {
        if record.location.is_empty() || &record.location != location {
            return false;
        }
    }

    if filters.price_min > 0.0 && record.price < filters.price_min {
        return false;
    }
    if let Some(price_max) = filters.price_max {
        if record.price > price_max {
            return false;
        }
    }

    if !filters.ratings.is_empty() && !filters.ratings.iter().any(|t| record.rating >= t.stars()) {
        return false;
    }

    if !filters.styles.is_empty() && !record.styles.iter().any(|s| filters.styles.contains(s)) {
        return false;
    }

    true
}
