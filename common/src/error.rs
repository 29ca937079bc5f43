//! Error taxonomy for dataset loading.

use serde::{Deserialize, Serialize};

/// Failure to obtain the photographer collection from upstream.
///
/// Never fatal: the listing pipeline absorbs it into its error state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum FetchError {
    #[error("upstream source unreachable: {0}")]
    Unreachable(String),
    #[error("upstream source returned status {status}")]
    UpstreamStatus { status: u16 },
    #[error("upstream document could not be decoded: {0}")]
    Decode(String),
    #[error("server error: {0}")]
    Server(String),
}
