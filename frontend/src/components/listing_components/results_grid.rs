//! Result grid with loading, error and empty states plus "load more".

use common::pipeline::PipelineStatus;
use dioxus::prelude::*;

use crate::{
    components::{error_boundary::ComponentErrorDisplay, listing_components::photographer_card::PhotographerCard},
    data_definitions::listing_state::ListingState,
};

#[component]
pub fn ResultsGrid() -> Element {
    let listing = use_context::<ListingState>();
    let query = listing.query;
    let pipeline = listing.pipeline.read();

    match pipeline.status() {
        PipelineStatus::Loading => rsx! { LoadingSkeleton {} },
        PipelineStatus::Error(message) => rsx! {
            ComponentErrorDisplay {
                error_txt: message.clone(),
                p {
                    style: "font-size: 14px; color: #4B5563;",
                    "Please refresh the page to try again."
                }
            }
        },
        PipelineStatus::Ready if pipeline.results().is_empty() => rsx! {
            div {
                class: "card",
                style: "padding: 24px; color: #4B5563;",
                "No photographers found for \""
                strong { "{query}" }
                "\""
            }
        },
        PipelineStatus::Ready => {
            let visible = pipeline.visible().to_vec();
            rsx! {
                div {
                    id: "x-listing-results-grid",
                    class: "grid-cols-responsive",
                    for photographer in visible {
                        div {
                            key: "{photographer.id}",
                            PhotographerCard { photographer: photographer.clone(), query: query.read().clone() }
                        }
                    }
                }
                LoadMoreControl {}
            }
        }
    }
}

#[component]
fn LoadMoreControl() -> Element {
    let listing = use_context::<ListingState>();
    let has_more = listing.pipeline.read().has_more();
    rsx! {
        div {
            style: "margin-top: 24px; display: flex; justify-content: center;",
            if has_more {
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    style: "font-size: 14px;",
                    onclick: move |_| listing.load_more(),
                    "Load more"
                }
            } else {
                div {
                    style: "font-size: 12px; color: #6B7280;",
                    "No more results"
                }
            }
        }
    }
}

#[component]
fn LoadingSkeleton() -> Element {
    rsx! {
        div {
            class: "grid-cols-responsive",
            for i in 0..common::search_const::PAGE_SIZE {
                div {
                    key: "{i}",
                    class: "card skeleton",
                    style: "height: 224px;",
                }
            }
        }
    }
}
