use dioxus::prelude::*;

use crate::routes::Route;

/// Copyright year shown in the footer; fixed at build time.
const COPYRIGHT_YEAR: u16 = 2025;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer {
            id: "x-site-footer",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                justify-content: space-between;
                gap: 12px;
                padding: 16px 24px;
                border-top: 1px solid #E5E7EB;
                background-color: white;
                font-size: 13px;
                color: #6B7280;
            ",
            span { "© {COPYRIGHT_YEAR} Pixisphere" }
            nav {
                style: "display: flex; gap: 16px;",
                Link { to: Route::category_page_from_query(""), "Photographers" }
                a { href: "mailto:hello@pixisphere.example", "Contact" }
            }
        }
    }
}
