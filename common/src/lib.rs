//! Photographer directory core shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod error;
pub mod photographer;
pub mod filter_state;
pub mod text_match;
pub mod text_highlight;
pub mod filter_predicate;
pub mod sort_order;
pub mod debounce;
pub mod pipeline;
pub mod facets;
pub mod inquiry;

#[cfg(test)]
pub(crate) mod test_fixtures;
