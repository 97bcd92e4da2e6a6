//! Asynchronous file intake: read, classify, conditionally downsize,
//! deliver.
//!
//! Each selection becomes one task tagged with the field's generation at
//! spawn time. A later selection on the same field bumps the generation,
//! so a superseded task's completion is discarded instead of delivering a
//! stale payload.

pub mod payload;
pub mod resize;
mod task;

pub use task::{DeliveredFile, handle_file_selected};
