//! Page chrome shared by every route: header, outlet and footer.

use dioxus::prelude::*;

use crate::{
    components::{error_boundary::GlobalErrorBoundary, site_footer::SiteFooter, site_header::SiteHeader},
    routes::Route,
};

#[component]
pub fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    // only the listing carries a search term; other pages start the box empty
    let current_query = match route {
        Route::CategoryPage { q } => q,
        _ => String::new(),
    };

    rsx! {
        div {
            id: "x-site-container",
            style: "
                display: flex;
                flex-direction: column;
                min-height: 100vh;
                background-color: #F9FAFB;
            ",
            SiteHeader { original_query: current_query }
            main {
                id: "x-page-container",
                style: "flex-grow: 1; width: 100%; max-width: 1200px; margin: 0 auto; padding: 24px 16px;",
                GlobalErrorBoundary {
                    boundary_name: "SiteLayout".to_string(),
                    Outlet::<Route> {}
                }
            }
            SiteFooter {}
        }
    }
}
