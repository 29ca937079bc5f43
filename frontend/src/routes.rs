use dioxus::prelude::*;

use crate::components::site_layout::SiteLayout;
use crate::pages::category_page::CategoryPage;
use crate::pages::not_found_page::NotFoundPage;
use crate::pages::profile_page::ProfilePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]


    // the free-text query lives in the URL so searches can be shared
    #[route("/?:q")]
    CategoryPage { q: String },


    #[route("/photographer/:id")]
    ProfilePage { id: String },


    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },

}

impl Route {
    /// Listing page for a search term; a blank term lists everyone.
    pub fn category_page_from_query(q: &str) -> Self {
        Self::CategoryPage { q: q.trim().to_string() }
    }
}
