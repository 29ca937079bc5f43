//! Photographer directory API functions and module exports.

mod photographers;
pub use photographers::{get_photographer_by_id, legacy_query_filter, list_photographers};

mod inquiry;
pub use inquiry::submit_inquiry;
