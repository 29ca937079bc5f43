use common::photographer::Review;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::MdStar};

#[component]
pub fn ReviewsList(reviews: ReadSignal<Vec<Review>>) -> Element {
    let reviews = reviews.read().clone();
    rsx! {
        section {
            style: "margin-top: 24px;",
            h2 { style: "font-size: 20px; font-weight: 600; margin-bottom: 12px;", "Reviews" }
            if reviews.is_empty() {
                p { style: "font-size: 14px; color: #6B7280;", "No reviews yet." }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 12px;",
                for (i, review) in reviews.into_iter().enumerate() {
                    ReviewItem { key: "{i}", review }
                }
            }
        }
    }
}

#[component]
fn ReviewItem(review: Review) -> Element {
    let rating = review.rating_label();
    rsx! {
        article {
            class: "card",
            style: "padding: 12px 16px; background: white;",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 8px;",
                strong { style: "font-size: 14px;", "{review.name}" }
                span {
                    style: "display: flex; align-items: center; gap: 2px; font-size: 13px; color: #374151;",
                    Icon { icon: MdStar, style: "width: 16px; height: 16px; color: #F59E0B;" }
                    "{rating}"
                }
            }
            if !review.date.is_empty() {
                div { style: "font-size: 12px; color: #6B7280; margin-top: 2px;", "{review.date}" }
            }
            p { style: "font-size: 14px; color: #374151; margin-top: 6px;", "{review.comment}" }
        }
    }
}
