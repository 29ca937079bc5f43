//! Top bar with the brand link and the search box.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::routes::Route;

#[component]
pub fn SiteHeader(original_query: ReadSignal<String>) -> Element {
    rsx! {
        header {
            id: "x-site-header",
            style: "
                position: sticky;
                top: 0;
                z-index: 10;
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 16px;
                padding: 12px 24px;
                background-color: white;
                border-bottom: 1px solid #E5E7EB;
            ",
            Link {
                to: Route::category_page_from_query(""),
                style: "font-size: 22px; font-weight: 700; color: #111827; text-decoration: none;",
                "Pixisphere"
            }
            div { style: "flex-grow: 1;" }
            HeaderSearchBox { original_query }
        }
    }
}

#[component]
fn HeaderSearchBox(original_query: ReadSignal<String>) -> Element {
    let mut typed_query = use_signal(|| original_query.read().clone());
    // navigation does not remount the header, so follow the URL by hand
    use_effect(move || {
        typed_query.set(original_query.read().clone());
    });
    let query_has_changed = use_memo(move || typed_query.read().trim() != original_query.read().trim());
    let search_button_color = use_memo(move || if query_has_changed() { "#2563EB" } else { "#6B7280" });
    let trigger_search = move |_: ()| {
        navigator().push(Route::category_page_from_query(&typed_query.read()));
    };

    rsx! {
        form {
            id: "x-header-search-box",
            role: "search",
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                width: min(420px, 60vw);
                height: 40px;
                padding: 6px 12px;
                border: 1px solid #D1D5DB;
                border-radius: 9999px;
                background-color: white;
            ",
            onsubmit: move |e: Event<FormData>| {
                e.prevent_default();
                trigger_search(());
            },
            input {
                r#type: "search",
                placeholder: "Search photographers, styles, cities…",
                aria_label: "Search photographers",
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 15px;
                ",
                value: "{typed_query}",
                oninput: move |e: Event<FormData>| typed_query.set(e.value()),
            }
            button {
                r#type: "submit",
                aria_label: "Search",
                style: "border: none; background: none; cursor: pointer; display: flex;",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: {search_button_color()};" }
            }
        }
    }
}
