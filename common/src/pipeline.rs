//! The listing pipeline: filter, then sort, then a "load more" window.
//!
//! [`QueryPipeline`] is the state a listing page owns for its mounted
//! lifetime. It is driven by four kinds of events:
//!
//! - dataset fetch issued / settled ([`QueryPipeline::begin_fetch`],
//!   [`QueryPipeline::finish_fetch`]),
//! - an input change, which arms the debounce slot ([`QueryPipeline::request`]),
//! - the debounce timer firing ([`QueryPipeline::settle`]),
//! - "load more" ([`QueryPipeline::load_more`]).
//!
//! Timers are owned by the caller; the pipeline only decides whether a fired
//! timer is still current.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::debounce::{DebounceSlot, DebounceTicket};
use crate::error::FetchError;
use crate::filter_predicate::passes;
use crate::filter_state::{FilterState, PipelineInput, QueryState, SortOption};
use crate::photographer::Photographer;
use crate::search_const::{DEBOUNCE_QUIET_PERIOD_MS, LOAD_ERROR_MESSAGE, PAGE_SIZE};
use crate::sort_order::sort_stable;

/// Filters the whole dataset, then orders what passed. Sorting never changes
/// which records are included.
pub fn recompute(dataset: &[Photographer], query: &str, filters: &FilterState, sort: SortOption) -> Vec<Photographer> {
    let mut results = dataset.iter().filter(|p| passes(p, query, filters)).cloned().collect::<Vec<_>>();
    sort_stable(&mut results, sort);
    results
}

/// The first `visible_count` results.
pub fn page(results: &[Photographer], visible_count: usize) -> &[Photographer] {
    &results[..visible_count.min(results.len())]
}

pub fn result_summary(count: usize) -> String {
    if count == 1 { "1 result found".to_string() } else { format!("{count} results found") }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PipelineStatus {
    /// Initial dataset fetch in flight.
    Loading,
    /// Fetch failed; holds the message to display.
    Error(String),
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct QueryPipeline {
    status: PipelineStatus,
    dataset: Vec<Photographer>,
    results: Vec<Photographer>,
    page_size: usize,
    visible_count: usize,
    fetch_generation: u64,
    debounce: DebounceSlot<PipelineInput>,
    /// Most recent input seen, applied or not.
    latest_input: PipelineInput,
    /// Input the current results were computed from.
    applied_input: PipelineInput,
    recompute_count: u64,
}

impl Default for QueryPipeline {
    fn default() -> Self {
        Self::new(PAGE_SIZE, Duration::from_millis(DEBOUNCE_QUIET_PERIOD_MS as u64))
    }
}

impl QueryPipeline {
    pub fn new(page_size: usize, quiet_period: Duration) -> Self {
        let page_size = page_size.max(1);
        Self {
            status: PipelineStatus::Loading,
            dataset: Vec::new(),
            results: Vec::new(),
            page_size,
            visible_count: page_size,
            fetch_generation: 0,
            debounce: DebounceSlot::new(quiet_period),
            latest_input: PipelineInput::default(),
            applied_input: PipelineInput::default(),
            recompute_count: 0,
        }
    }

    pub fn status(&self) -> &PipelineStatus {
        &self.status
    }

    pub fn is_ready(&self) -> bool {
        self.status == PipelineStatus::Ready
    }

    /// The unfiltered dataset; facet options are derived from this.
    pub fn dataset(&self) -> &[Photographer] {
        &self.dataset
    }

    pub fn results(&self) -> &[Photographer] {
        &self.results
    }

    pub fn visible(&self) -> &[Photographer] {
        page(&self.results, self.visible_count)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// False once every result is visible ("no more results").
    pub fn has_more(&self) -> bool {
        self.visible_count < self.results.len()
    }

    pub fn quiet_period(&self) -> Duration {
        self.debounce.quiet_period()
    }

    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    pub fn applied_input(&self) -> &PipelineInput {
        &self.applied_input
    }

    /// Query, sort and pagination cursor of the results currently shown.
    pub fn query_state(&self) -> QueryState {
        QueryState {
            query: self.applied_input.query.clone(),
            sort: self.applied_input.sort,
            visible_count: self.visible().len(),
        }
    }

    /// Marks a new dataset fetch as in flight. Any earlier fetch still
    /// outstanding becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetch_generation += 1;
        self.debounce.cancel();
        self.status = PipelineStatus::Loading;
        FetchTicket(self.fetch_generation)
    }

    /// Applies a settled fetch. Returns false and changes nothing when the
    /// ticket is stale (a newer fetch was issued or the page was torn down).
    ///
    /// On success the latest requested input is applied right away, so the
    /// first rendered list already reflects the current query.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, outcome: Result<Vec<Photographer>, FetchError>) -> bool {
        if ticket.0 != self.fetch_generation {
            return false;
        }
        match outcome {
            Ok(dataset) => {
                self.dataset = dataset;
                self.status = PipelineStatus::Ready;
                let input = self.latest_input.clone();
                self.recompute_now(input);
            }
            Err(_) => {
                self.dataset.clear();
                self.results.clear();
                self.visible_count = self.page_size;
                self.status = PipelineStatus::Error(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    /// Records an input change and arms the debounce slot, superseding any
    /// pending input. Returns the ticket to settle once the quiet period has
    /// elapsed, or `None` while no dataset is present (inputs are inert, the
    /// latest input is still remembered for when the dataset arrives).
    pub fn request(&mut self, input: PipelineInput) -> Option<DebounceTicket> {
        self.latest_input = input.clone();
        if !self.is_ready() {
            return None;
        }
        Some(self.debounce.arm(input))
    }

    /// Called when a debounce timer fires. Recomputes only when `ticket` is
    /// the most recent one; returns whether a recomputation happened.
    pub fn settle(&mut self, ticket: DebounceTicket) -> bool {
        if !self.is_ready() {
            return false;
        }
        match self.debounce.settle(ticket) {
            Some(input) => {
                self.recompute_now(input);
                true
            }
            None => false,
        }
    }

    /// Runs the pipeline immediately and resets the cursor to one page.
    pub fn recompute_now(&mut self, input: PipelineInput) {
        self.results = recompute(&self.dataset, &input.query, &input.filters, input.sort);
        self.visible_count = self.page_size;
        self.latest_input = input.clone();
        self.applied_input = input;
        self.recompute_count += 1;
    }

    /// Reveals one more page, clamped to the result count. Returns false when
    /// there was nothing more to show.
    pub fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.visible_count = (self.visible_count + self.page_size).min(self.results.len());
        true
    }

    /// Cancels the pending recomputation and invalidates the outstanding
    /// fetch, if any.
    pub fn teardown(&mut self) {
        self.debounce.cancel();
        self.fetch_generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_state::RatingThreshold;
    use crate::test_fixtures::{alex, bhavna};

    fn ids(records: &[Photographer]) -> Vec<String> {
        records.iter().map(|p| p.id.to_string()).collect()
    }

    fn numbered(n: u64) -> Vec<Photographer> {
        (1..=n).map(|i| Photographer { id: i.into(), name: format!("P{i}"), ..Default::default() }).collect()
    }

    fn ready(dataset: Vec<Photographer>) -> QueryPipeline {
        let mut pipeline = QueryPipeline::new(6, Duration::from_millis(300));
        let ticket = pipeline.begin_fetch();
        assert!(pipeline.finish_fetch(ticket, Ok(dataset)));
        pipeline
    }

    #[test]
    fn query_matches_name_substring() {
        let results = recompute(&[alex(), bhavna()], "al", &FilterState::default(), SortOption::Default);
        assert_eq!(ids(&results), vec!["1"]);
    }

    #[test]
    fn rating_threshold_scenario() {
        let mut filters = FilterState::default();
        filters.toggle_rating(RatingThreshold::from_stars(4.0));
        let results = recompute(&[alex(), bhavna()], "", &filters, SortOption::Default);
        assert_eq!(ids(&results), vec!["1"]);
    }

    #[test]
    fn price_floor_scenario() {
        let filters = FilterState { price_min: 6000.0, ..Default::default() };
        let results = recompute(&[alex(), bhavna()], "", &filters, SortOption::Default);
        assert_eq!(ids(&results), vec!["2"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut filters = FilterState::default();
        filters.set_price_max_input("7000");
        let dataset = vec![alex(), bhavna(), Photographer { id: 3u64.into(), price: 100.0, ..Default::default() }];
        let once = recompute(&dataset, "", &filters, SortOption::Default);
        let twice = recompute(&once, "", &filters, SortOption::Default);
        assert_eq!(once, twice);
        assert_eq!(ids(&once), vec!["1", "3"]);
    }

    #[test]
    fn sort_does_not_change_membership() {
        let dataset = vec![bhavna(), alex()];
        let a = recompute(&dataset, "", &FilterState::default(), SortOption::PriceAsc);
        let b = recompute(&dataset, "", &FilterState::default(), SortOption::RatingDesc);
        assert_eq!(ids(&a), vec!["1", "2"]);
        assert_eq!(ids(&b), vec!["1", "2"]);
        let c = recompute(&dataset, "", &FilterState::default(), SortOption::Recent);
        assert_eq!(ids(&c), vec!["2", "1"]);
    }

    #[test]
    fn load_more_until_exhausted() {
        let mut pipeline = ready(numbered(10));
        assert_eq!(ids(pipeline.visible()), vec!["1", "2", "3", "4", "5", "6"]);
        assert!(pipeline.has_more());
        assert!(pipeline.load_more());
        assert_eq!(pipeline.visible().len(), 10);
        assert_eq!(pipeline.visible_count(), 10);
        assert!(!pipeline.has_more());
        assert!(!pipeline.load_more());
        assert_eq!(pipeline.visible_count(), 10);
    }

    #[test]
    fn page_clamps_to_length() {
        let results = numbered(3);
        assert_eq!(page(&results, 6).len(), 3);
        assert_eq!(page(&results, 0).len(), 0);
    }

    #[test]
    fn rapid_changes_recompute_once_with_final_state() {
        let mut pipeline = ready(vec![alex(), bhavna()]);
        let before = pipeline.recompute_count();

        let mut input = PipelineInput::default();
        input.filters.set_price_min_input("1000");
        let t1 = pipeline.request(input.clone()).unwrap();
        input.filters.toggle_style("studio");
        let t2 = pipeline.request(input.clone()).unwrap();
        input.filters.toggle_style("studio");
        input.filters.toggle_style("candid");
        let t3 = pipeline.request(input.clone()).unwrap();

        // timers for superseded tickets fire first and do nothing
        assert!(!pipeline.settle(t1));
        assert!(!pipeline.settle(t2));
        assert!(pipeline.settle(t3));
        assert_eq!(pipeline.recompute_count(), before + 1);
        assert_eq!(ids(pipeline.results()), vec!["1"]);
        assert_eq!(pipeline.applied_input(), &input);
        // facet options still come from every record, not the narrowed results
        assert_eq!(ids(pipeline.dataset()), vec!["1", "2"]);
        let styles = crate::facets::styles(pipeline.dataset());
        assert!(styles.contains("candid") && styles.contains("studio"));
    }

    #[test]
    fn recompute_resets_cursor() {
        let mut pipeline = ready(numbered(20));
        pipeline.load_more();
        pipeline.load_more();
        assert_eq!(pipeline.visible_count(), 18);
        let ticket = pipeline.request(PipelineInput { sort: SortOption::Recent, ..Default::default() }).unwrap();
        assert!(pipeline.settle(ticket));
        assert_eq!(pipeline.visible_count(), 6);
        assert_eq!(pipeline.visible()[0].id.to_string(), "20");
    }

    #[test]
    fn query_state_follows_applied_input() {
        let mut pipeline = ready(numbered(8));
        let input = PipelineInput { query: "p".into(), sort: SortOption::PriceAsc, ..Default::default() };
        let ticket = pipeline.request(input).unwrap();
        // requested but not yet settled
        assert_eq!(pipeline.query_state().sort, SortOption::Default);
        assert!(pipeline.settle(ticket));
        pipeline.load_more();
        let state = pipeline.query_state();
        assert_eq!(state.query, "p");
        assert_eq!(state.sort, SortOption::PriceAsc);
        assert_eq!(state.visible_count, 8);
    }

    #[test]
    fn inputs_are_inert_while_loading() {
        let mut pipeline = QueryPipeline::default();
        let fetch = pipeline.begin_fetch();
        assert_eq!(pipeline.status(), &PipelineStatus::Loading);
        let input = PipelineInput { query: "al".into(), ..Default::default() };
        assert_eq!(pipeline.request(input), None);
        assert_eq!(pipeline.recompute_count(), 0);

        // the remembered query is applied as soon as data arrives
        assert!(pipeline.finish_fetch(fetch, Ok(vec![alex(), bhavna()])));
        assert_eq!(ids(pipeline.results()), vec!["1"]);
    }

    #[test]
    fn fetch_error_is_absorbed() {
        let mut pipeline = QueryPipeline::default();
        let fetch = pipeline.begin_fetch();
        assert!(pipeline.finish_fetch(fetch, Err(FetchError::UpstreamStatus { status: 502 })));
        assert_eq!(pipeline.status(), &PipelineStatus::Error(LOAD_ERROR_MESSAGE.to_string()));
        assert!(pipeline.results().is_empty());
        assert!(pipeline.visible().is_empty());
        assert_eq!(pipeline.request(PipelineInput::default()), None);
    }

    #[test]
    fn late_fetch_after_teardown_is_discarded() {
        let mut pipeline = QueryPipeline::default();
        let fetch = pipeline.begin_fetch();
        pipeline.teardown();
        assert!(!pipeline.finish_fetch(fetch, Ok(vec![alex()])));
        assert_eq!(pipeline.status(), &PipelineStatus::Loading);
        assert!(pipeline.dataset().is_empty());
    }

    #[test]
    fn teardown_cancels_pending_recompute() {
        let mut pipeline = ready(vec![alex(), bhavna()]);
        let ticket = pipeline.request(PipelineInput { query: "bh".into(), ..Default::default() }).unwrap();
        pipeline.teardown();
        assert!(!pipeline.settle(ticket));
        assert_eq!(ids(pipeline.results()), vec!["1", "2"]);
    }

    #[test]
    fn superseded_fetch_is_discarded() {
        let mut pipeline = QueryPipeline::default();
        let first = pipeline.begin_fetch();
        let second = pipeline.begin_fetch();
        assert!(!pipeline.finish_fetch(first, Ok(vec![alex()])));
        assert!(pipeline.finish_fetch(second, Ok(vec![bhavna()])));
        assert_eq!(ids(pipeline.dataset()), vec!["2"]);
    }

    #[test]
    fn summary_text() {
        assert_eq!(result_summary(0), "0 results found");
        assert_eq!(result_summary(1), "1 result found");
        assert_eq!(result_summary(12), "12 results found");
    }
}
