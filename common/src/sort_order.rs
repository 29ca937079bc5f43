//! Ordering of filtered results by the selected sort option.

use std::cmp::Ordering;

use crate::filter_state::SortOption;
use crate::photographer::Photographer;

pub fn compare(a: &Photographer, b: &Photographer, sort: SortOption) -> Ordering {
    match sort {
        SortOption::Default => Ordering::Equal,
        SortOption::PriceAsc => a.price.total_cmp(&b.price),
        SortOption::RatingDesc => b.rating.total_cmp(&a.rating),
        SortOption::Recent => b.id.numeric().total_cmp(&a.id.numeric()),
    }
}

/// Stable in-place sort; equal keys keep their relative order.
pub fn sort_stable(records: &mut [Photographer], sort: SortOption) {
    if sort == SortOption::Default {
        return;
    }
    records.sort_by(|a, b| compare(a, b, sort));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(id: u64, rating: f64) -> Photographer {
        Photographer { id: id.into(), rating, ..Default::default() }
    }

    fn priced(id: u64, price: f64) -> Photographer {
        Photographer { id: id.into(), price, ..Default::default() }
    }

    fn ids(records: &[Photographer]) -> Vec<String> {
        records.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn default_keeps_order() {
        let mut v = vec![priced(3, 1.0), priced(1, 9.0), priced(2, 5.0)];
        sort_stable(&mut v, SortOption::Default);
        assert_eq!(ids(&v), vec!["3", "1", "2"]);
    }

    #[test]
    fn rating_desc_is_stable() {
        let mut v = vec![rated(1, 3.0), rated(2, 5.0), rated(3, 5.0)];
        sort_stable(&mut v, SortOption::RatingDesc);
        assert_eq!(ids(&v), vec!["2", "3", "1"]);
    }

    #[test]
    fn price_asc_twice_is_a_no_op() {
        let mut v = vec![priced(1, 500.0), priced(2, 100.0), priced(3, 500.0), priced(4, 0.0)];
        sort_stable(&mut v, SortOption::PriceAsc);
        let once = ids(&v);
        assert_eq!(once, vec!["4", "2", "1", "3"]);
        sort_stable(&mut v, SortOption::PriceAsc);
        assert_eq!(ids(&v), once);
    }

    #[test]
    fn recent_uses_numeric_id() {
        let mut v = vec![priced(2, 0.0), priced(10, 0.0), Photographer { id: "x".into(), ..Default::default() }, priced(9, 0.0)];
        sort_stable(&mut v, SortOption::Recent);
        assert_eq!(ids(&v), vec!["10", "9", "2", "x"]);
    }
}
