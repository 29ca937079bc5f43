//! Listing page building blocks.

pub mod filters_sidebar;
pub mod listing_controls;
pub mod photographer_card;
pub mod results_grid;
