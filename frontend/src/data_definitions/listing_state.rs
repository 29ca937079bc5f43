//! State shared by the listing page components.
//!
//! The page owns one [`QueryPipeline`] for its mounted lifetime. Changes to
//! the URL query, the filters or the sort option arm the pipeline's debounce
//! slot and (re)start a single timer task; when the timer fires the pipeline
//! recomputes only if no newer change arrived in the meantime.

use common::{
    error::FetchError,
    filter_state::{FilterState, PipelineInput, SortOption},
    pipeline::QueryPipeline,
};
use dioxus::{logger::tracing, prelude::*};
use gloo_timers::future::TimeoutFuture;

use crate::api::photographers_api::list_photographers;

#[derive(Copy, Clone)]
pub struct ListingState {
    /// Search term from the `q` URL parameter, read-only here.
    pub query: ReadSignal<String>,
    pub pipeline: Signal<QueryPipeline>,
    pub filters: Signal<FilterState>,
    pub sort: Signal<SortOption>,
    /// Bumped by "Clear filters" so inputs holding raw text can reset.
    pub clear_count: Signal<u64>,
}

impl ListingState {
    pub fn clear_filters(mut self) {
        self.filters.write().clear();
        *self.clear_count.write() += 1;
    }

    pub fn load_more(mut self) {
        self.pipeline.write().load_more();
    }
}

/// Creates the listing state for one mounted page and provides it as context.
pub fn use_listing_state(query: ReadSignal<String>) -> ListingState {
    let mut pipeline = use_signal(QueryPipeline::default);
    let filters = use_signal(FilterState::default);
    let sort = use_signal(SortOption::default);
    let clear_count = use_signal(|| 0_u64);
    let mut pending_timer: Signal<Option<Task>> = use_signal(|| None);

    // dataset fetch, once per mount
    use_future(move || async move {
        let ticket = pipeline.write().begin_fetch();
        let outcome = list_photographers(None).await.map_err(|e| {
            tracing::error!("fetch error: {e:#?}");
            FetchError::Server(e.to_string())
        });
        if let Ok(records) = &outcome {
            tracing::info!("Loaded {} photographers", records.len());
        }
        if !pipeline.write().finish_fetch(ticket, outcome) {
            tracing::info!("Discarding stale photographer dataset");
        }
    });

    use_effect(move || {
        let input = PipelineInput {
            query: query.read().trim().to_string(),
            filters: filters.read().clone(),
            sort: *sort.read(),
        };
        if let Some(task) = pending_timer.write().take() {
            task.cancel();
        }
        let Some(ticket) = pipeline.write().request(input) else {
            return;
        };
        let quiet_ms = pipeline.peek().quiet_period().as_millis() as u32;
        let task = spawn(async move {
            TimeoutFuture::new(quiet_ms).await;
            if pipeline.write().settle(ticket) {
                let pipeline = pipeline.peek();
                let state = pipeline.query_state();
                tracing::info!(
                    "Recomputed listing for {:?} sorted by {}: {} results",
                    state.query,
                    state.sort.key(),
                    pipeline.results().len()
                );
            }
            pending_timer.set(None);
        });
        pending_timer.set(Some(task));
    });

    use_drop(move || {
        if let Ok(mut timer) = pending_timer.try_write() {
            if let Some(task) = timer.take() {
                task.cancel();
            }
        }
        if let Ok(mut pipeline) = pipeline.try_write() {
            pipeline.teardown();
        }
    });

    use_context_provider(move || ListingState { query, pipeline, filters, sort, clear_count })
}
