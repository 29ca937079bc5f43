//! Profile page building blocks.

pub mod inquiry_modal;
pub mod portfolio_gallery;
pub mod reviews_list;
