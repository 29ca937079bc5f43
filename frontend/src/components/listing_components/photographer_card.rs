//! Photographer card shown in the listing grid.

use common::photographer::Photographer;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_communication_icons::MdLocationOn, md_toggle_icons::MdStar}};

use crate::{components::highlighted_text::HighlightedText, routes::Route};

#[component]
pub fn PhotographerCard(photographer: ReadSignal<Photographer>, query: ReadSignal<String>) -> Element {
    let p = photographer.read().clone();
    let profile_route = Route::ProfilePage { id: p.id.to_string() };
    let query = query.read().clone();
    let price_label = p.price_label();
    let rating_label = p.rating_label();

    rsx! {
        div {
            class: "card lift",
            style: "
                display: flex;
                flex-direction: column;
                background: white;
                overflow: hidden;
                cursor: pointer;
            ",
            // PICTURE
            Link {
                to: profile_route.clone(),
                div {
                    style: "height: 160px; background: #F3F4F6; overflow: hidden;",
                    img {
                        src: "{p.profile_pic_or_default()}",
                        alt: "{p.name}",
                        style: "width: 100%; height: 100%; object-fit: cover;",
                    }
                }
            }
            div {
                class: "card-inner",
                // Row 1: NAME + LOCATION - PRICE + RATING
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: flex-start;
                        justify-content: space-between;
                        gap: 12px;
                    ",
                    div {
                        style: "min-width: 0;",
                        Link {
                            to: profile_route.clone(),
                            h3 {
                                style: "font-size: 16px; font-weight: 600; line-height: 1.25; color: #111827;",
                                HighlightedText { text: p.name.clone(), query: query.clone() }
                            }
                        }
                        p {
                            style: "display: flex; align-items: center; gap: 2px; font-size: 12px; margin-top: 4px; color: #6B7280;",
                            Icon { icon: MdLocationOn, style: "width: 14px; height: 14px;" }
                            "{p.location}"
                        }
                    }
                    div {
                        style: "text-align: right; font-size: 12px; flex-shrink: 0;",
                        div {
                            style: "font-weight: 600; color: #1F2937;",
                            "{price_label}"
                        }
                        div {
                            style: "display: inline-flex; align-items: center; gap: 2px; margin-top: 4px; color: #D97706; font-weight: 500;",
                            span { "{rating_label}" }
                            Icon { icon: MdStar, style: "width: 14px; height: 14px;" }
                        }
                    }
                }
                // Row 2: BIO
                p {
                    class: "two-line-truncate",
                    style: "margin-top: 12px; font-size: 14px; color: #374151;",
                    HighlightedText { text: p.bio.clone(), query: query.clone() }
                }
                // Row 3: TAGS - BUTTON
                div {
                    style: "
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        margin-top: 12px;
                    ",
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 4px;",
                        for (i, tag) in p.tags.iter().take(3).enumerate() {
                            span {
                                key: "{i}-{tag}",
                                class: "badge",
                                "{tag}"
                            }
                        }
                    }
                    Link {
                        to: profile_route,
                        class: "btn btn-primary",
                        style: "font-size: 12px;",
                        "View Profile"
                    }
                }
            }
        }
    }
}
