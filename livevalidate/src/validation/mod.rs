//! Field validation: rule resolution, per-field verdicts, label projection.
//!
//! The verdict is stored on the field as an explicit tagged value; the
//! success/error class tokens are a pure rendering projection of it.
//! Aggregation reads verdicts, never class lists.

mod field;
mod pattern;
mod summary;

pub use field::{apply_verdict, validate_field};
pub use pattern::{Pattern, resolve};
pub use summary::ErrorSummary;
