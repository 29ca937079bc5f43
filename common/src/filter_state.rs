//! Filter, sort and query state owned by the listing page.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::search_const::PAGE_SIZE;

/// A rating threshold in tenths of a star, so it can live in a set.
/// `RatingThreshold::from_stars(4.0)` means "4★ & up".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RatingThreshold(pub u16);

impl RatingThreshold {
    pub fn from_stars(stars: f64) -> Self {
        let tenths = if stars.is_finite() && stars > 0.0 { (stars * 10.0).round() as u16 } else { 0 };
        RatingThreshold(tenths)
    }

    pub fn stars(&self) -> f64 {
        self.0 as f64 / 10.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub price_min: f64,
    /// `None` means unbounded.
    pub price_max: Option<f64>,
    /// OR-combined: a record passes if it meets any selected threshold.
    pub ratings: BTreeSet<RatingThreshold>,
    /// OR-combined against the record's style list.
    pub styles: BTreeSet<String>,
    /// Exact-match location facet.
    pub location: Option<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self { price_min: 0.0, price_max: None, ratings: BTreeSet::new(), styles: BTreeSet::new(), location: None }
    }
}

impl FilterState {
    /// Sets the price floor from raw user input; anything that is not a
    /// non-negative number becomes 0.
    pub fn set_price_min_input(&mut self, raw: &str) {
        self.price_min = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0).unwrap_or(0.0);
    }

    /// Sets the price ceiling from raw user input; empty or unusable input
    /// leaves the range unbounded.
    pub fn set_price_max_input(&mut self, raw: &str) {
        self.price_max = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0);
    }

    pub fn toggle_rating(&mut self, threshold: RatingThreshold) {
        if !self.ratings.remove(&threshold) {
            self.ratings.insert(threshold);
        }
    }

    pub fn toggle_style(&mut self, style: &str) {
        if !self.styles.remove(style) {
            self.styles.insert(style.to_string());
        }
    }

    pub fn set_location(&mut self, location: Option<String>) {
        self.location = location.filter(|l| !l.is_empty());
    }

    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterState::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Relevance: keeps the order in which records passed the filter.
    #[default]
    Default,
    PriceAsc,
    RatingDesc,
    Recent,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [SortOption::Default, SortOption::PriceAsc, SortOption::RatingDesc, SortOption::Recent];

    pub fn key(&self) -> &'static str {
        match self {
            SortOption::Default => "default",
            SortOption::PriceAsc => "price_asc",
            SortOption::RatingDesc => "rating_desc",
            SortOption::Recent => "recent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Default => "Relevance",
            SortOption::PriceAsc => "Price: Low → High",
            SortOption::RatingDesc => "Rating: High → Low",
            SortOption::Recent => "Recently added",
        }
    }
}

impl FromStr for SortOption {
    type Err = std::convert::Infallible;

    /// Unknown keys fall back to relevance ordering.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortOption::ALL.into_iter().find(|o| o.key() == s).unwrap_or_default())
    }
}

/// Free-text term (from the `q` URL parameter), sort choice and the
/// pagination cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    pub query: String,
    pub sort: SortOption,
    pub visible_count: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self { query: String::new(), sort: SortOption::Default, visible_count: PAGE_SIZE }
    }
}

/// Everything a recomputation depends on besides the dataset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PipelineInput {
    pub query: String,
    pub filters: FilterState,
    pub sort: SortOption,
}
