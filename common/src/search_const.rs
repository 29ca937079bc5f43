//! Constants shared by the listing pipeline and the pages that render it.

/// Number of cards revealed per "load more" step.
pub const PAGE_SIZE: usize = 6;

/// Quiet period before a query/filter/sort change is recomputed.
pub const DEBOUNCE_QUIET_PERIOD_MS: u32 = 300;

/// Rating thresholds offered by the filters sidebar ("4★ & up" ...).
pub const RATING_THRESHOLD_CHOICES: [u8; 3] = [4, 3, 2];

pub const DEFAULT_PROFILE_PIC: &str = "https://placehold.co/300x200";

/// User-facing message shown when the dataset cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load photographers.";
