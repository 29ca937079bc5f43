//! Filters sidebar: location, price range, rating thresholds and styles.

use std::collections::BTreeSet;

use common::{facets, filter_state::RatingThreshold, search_const::RATING_THRESHOLD_CHOICES};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};

use crate::data_definitions::listing_state::ListingState;

#[component]
pub fn FiltersSidebar() -> Element {
    let listing = use_context::<ListingState>();
    let pipeline = listing.pipeline;
    // options come from the whole dataset so a narrowed search can be widened again
    let locations = use_memo(move || facets::locations(pipeline.read().dataset()));
    let styles = use_memo(move || facets::styles(pipeline.read().dataset()));

    rsx! {
        aside {
            class: "card lift",
            style: "padding: 16px; background: white;",
            h3 {
                style: "font-size: 18px; font-weight: 600; margin-bottom: 12px;",
                "Filters"
            }

            LocationFilter { locations: locations() }
            PriceFilter {}
            RatingFilter {}
            StyleFilter { styles: styles() }

            div {
                style: "display: flex; gap: 8px; margin-top: 16px;",
                button {
                    r#type: "button",
                    class: "btn btn-ghost",
                    style: "width: 100%; font-size: 14px;",
                    onclick: move |_| listing.clear_filters(),
                    "Clear filters"
                }
            }
        }
    }
}

#[component]
fn FilterSection(label: String, children: Element) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px;",
            label {
                class: "x-filter-label",
                "{label}"
            }
            div {
                style: "margin-top: 8px;",
                {children}
            }
        }
    }
}

#[component]
fn LocationFilter(locations: BTreeSet<String>) -> Element {
    let mut filters = use_context::<ListingState>().filters;
    let selected = filters.read().location.clone().unwrap_or_default();
    rsx! {
        FilterSection {
            label: "Location".to_string(),
            select {
                class: "input",
                value: "{selected}",
                onchange: move |e: Event<FormData>| {
                    filters.write().set_location(Some(e.value()));
                },
                option { value: "", "All locations" }
                for location in locations {
                    option {
                        key: "{location}",
                        value: "{location}",
                        selected: location == selected,
                        "{location}"
                    }
                }
            }
        }
    }
}

#[component]
fn PriceFilter() -> Element {
    let listing = use_context::<ListingState>();
    let mut filters = listing.filters;
    let clear_count = listing.clear_count;
    // raw text is kept so partially typed numbers are not rewritten under the cursor
    let mut min_text = use_signal(String::new);
    let mut max_text = use_signal(String::new);
    use_effect(move || {
        let _ = clear_count.read();
        min_text.set(String::new());
        max_text.set(String::new());
    });

    rsx! {
        FilterSection {
            label: "Price (₹)".to_string(),
            div {
                style: "display: flex; gap: 8px;",
                input {
                    r#type: "number",
                    placeholder: "Min",
                    class: "input",
                    style: "font-size: 14px;",
                    value: "{min_text}",
                    oninput: move |e: Event<FormData>| {
                        let raw = e.value();
                        filters.write().set_price_min_input(&raw);
                        min_text.set(raw);
                    },
                }
                input {
                    r#type: "number",
                    placeholder: "Max",
                    class: "input",
                    style: "font-size: 14px;",
                    value: "{max_text}",
                    oninput: move |e: Event<FormData>| {
                        let raw = e.value();
                        filters.write().set_price_max_input(&raw);
                        max_text.set(raw);
                    },
                }
            }
        }
    }
}

#[component]
fn RatingFilter() -> Element {
    rsx! {
        FilterSection {
            label: "Rating".to_string(),
            div {
                style: "display: flex; flex-direction: column; gap: 8px; font-size: 14px;",
                for stars in RATING_THRESHOLD_CHOICES {
                    RatingCheckbox { key: "{stars}", threshold: RatingThreshold::from_stars(stars as f64) }
                }
            }
        }
    }
}

#[component]
fn RatingCheckbox(threshold: RatingThreshold) -> Element {
    let mut filters = use_context::<ListingState>().filters;
    let is_checked = use_memo(move || filters.read().ratings.contains(&threshold));
    rsx! {
        div {
            class: "x-filter-checkbox",
            onclick: move |_| {
                filters.write().toggle_rating(threshold);
            },
            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: #2563EB; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; color: #374151; flex-shrink: 0;" }
            }
            span { "{threshold.stars()}★ & up" }
        }
    }
}

#[component]
fn StyleFilter(styles: BTreeSet<String>) -> Element {
    let mut filters = use_context::<ListingState>().filters;
    rsx! {
        FilterSection {
            label: "Styles".to_string(),
            div {
                style: "display: flex; flex-wrap: wrap; gap: 8px;",
                if styles.is_empty() {
                    div {
                        style: "font-size: 14px; color: #6B7280;",
                        "No styles"
                    }
                }
                for style in styles {
                    button {
                        key: "{style}",
                        r#type: "button",
                        class: if filters.read().styles.contains(&style) { "badge badge-active" } else { "badge" },
                        onclick: {
                            let style = style.clone();
                            move |_| filters.write().toggle_style(&style)
                        },
                        "{style}"
                    }
                }
            }
        }
    }
}
