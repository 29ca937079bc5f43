use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        Title { "Pixisphere - Not found" }
        div {
            class: "card",
            style: "padding: 32px; background: white; text-align: center;",
            h1 { class: "page-title", "Page not found" }
            p { style: "color: #6B7280; margin-top: 8px;", "Nothing lives at /{path}." }
            Link {
                to: Route::category_page_from_query(""),
                class: "btn btn-primary",
                style: "display: inline-block; margin-top: 16px;",
                "Browse photographers"
            }
        }
    }
}
