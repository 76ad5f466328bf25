//! Pure resolution services.
//!
//! Each tick of the driver runs, in order:
//!
//! 1. [`matcher`] — find the sub-interval containing the current minute
//! 2. [`progress`] — derive remaining time and completion percentage
//! 3. [`upcoming`] — resolve the chronologically next sub-interval
//!
//! [`resolution`] composes the three into one [`ResolvedView`] per tick.
//! Everything here is synchronous, allocation-light, and free of side
//! effects beyond `log` output; timing lives in [`crate::driver`].
//!
//! [`ResolvedView`]: crate::core::view::ResolvedView

pub mod matcher;
pub mod progress;
pub mod resolution;
pub mod upcoming;

pub use matcher::find_active;
pub use resolution::{resolve_at, resolve_view};
pub use upcoming::next_preview;
