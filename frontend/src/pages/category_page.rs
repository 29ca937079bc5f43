use dioxus::prelude::*;

use crate::{
    components::listing_components::{filters_sidebar::FiltersSidebar, listing_controls::ListingControls, results_grid::ResultsGrid},
    data_definitions::listing_state::use_listing_state,
};

fn title_ellipsis(title: &str) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title.to_string()
    }
}

/// Category listing page; `q` is the free-text term from the URL.
#[component]
pub fn CategoryPage(q: String) -> Element {
    let title = if q.trim().is_empty() {
        "Pixisphere - Photographers".to_string()
    } else {
        format!("Pixisphere: {}", title_ellipsis(q.trim()))
    };
    rsx! {
        Title { "{title}" }
        CategoryPageRootComponent { query: q }
    }
}

#[component]
fn CategoryPageRootComponent(query: ReadSignal<String>) -> Element {
    use_listing_state(query);

    rsx! {
        div {
            id: "x-category-page-root-component",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: flex-start;
                gap: 24px;
                width: 100%;
            ",
            div {
                id: "x-category-filters-panel",
                style: "flex: 1 1 240px; max-width: 300px;",
                FiltersSidebar {}
            }
            section {
                id: "x-category-results-panel",
                style: "flex: 3 1 480px; min-width: 0;",
                ListingControls {}
                ResultsGrid {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_titles_are_shortened() {
        assert_eq!(title_ellipsis("candid"), "candid");
        assert_eq!(title_ellipsis("wedding photographers in mumbai"), "wedding photograph...");
    }
}
