//! Listing header: title, result count and the sort selector.

use common::{filter_state::SortOption, pipeline::{PipelineStatus, result_summary}};
use dioxus::prelude::*;

use crate::data_definitions::listing_state::ListingState;

#[component]
pub fn ListingControls() -> Element {
    rsx! {
        header {
            id: "x-listing-title-row",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                justify-content: space-between;
                gap: 12px;
                margin-bottom: 20px;
            ",
            div {
                h1 { class: "page-title", "Photographers" }
                p {
                    style: "font-size: 14px; color: #6B7280; margin-top: 4px;",
                    ResultCountString {}
                }
            }
            SortSelector {}
        }
    }
}

#[component]
fn ResultCountString() -> Element {
    let pipeline = use_context::<ListingState>().pipeline;
    let pipeline = pipeline.read();
    match pipeline.status() {
        PipelineStatus::Loading => rsx! { "Loading results…" },
        PipelineStatus::Error(_) => rsx! { "0 results found" },
        PipelineStatus::Ready => rsx! { "{result_summary(pipeline.results().len())}" },
    }
}

#[component]
fn SortSelector() -> Element {
    let mut sort = use_context::<ListingState>().sort;
    let current = *sort.read();
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px; font-size: 14px;",
            span { style: "color: #6B7280;", "Sort by" }
            select {
                class: "input",
                style: "max-width: 180px; padding-top: 4px; padding-bottom: 4px;",
                value: "{current.key()}",
                onchange: move |e: Event<FormData>| {
                    sort.set(e.value().parse::<SortOption>().unwrap_or_default());
                },
                for choice in SortOption::ALL {
                    option {
                        key: "{choice.key()}",
                        value: "{choice.key()}",
                        selected: choice == current,
                        "{choice.label()}"
                    }
                }
            }
        }
    }
}
