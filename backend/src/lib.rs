//! Server side of the photographer directory: upstream document access and
//! the handlers the frontend's server functions call into.

pub mod api;
pub mod config;
pub mod server_extra;
pub(crate) mod source_utils;
