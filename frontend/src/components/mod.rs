pub mod error_boundary;
pub mod highlighted_text;
pub mod listing_components;
pub mod profile_components;
pub mod site_footer;
pub mod site_header;
pub mod site_layout;
pub mod suspend_boundary;
