//! Bookworm application surface
//!
//! Wires the UI crate into the app: logging setup and the design-time
//! previews the frontend shows in its component gallery.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_ui;

use app_ui::{ConstantBinding, RatingControl, RatingView};
use tracing_subscriber::EnvFilter;

/// Rating the preview is pinned to
pub const PREVIEW_RATING: i64 = 4;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "BOOKWORM_LOG";

/// Install the global tracing subscriber
///
/// The filter comes from `BOOKWORM_LOG` and defaults to `info`. Returns
/// `false` when a subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Default rating control pinned to a constant rating of 4
pub fn preview() -> RatingView {
    RatingControl::default().render(&ConstantBinding::new(PREVIEW_RATING))
}
