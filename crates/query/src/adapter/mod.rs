//! Lazy cursor adapters.
//!
//! Each adapter wraps an inner cursor and computes its skip or transform
//! behavior on demand, without materializing anything. Adapters are related
//! structurally, not semantically: anything implementing `Cursor` composes
//! with anything else.

mod distinct;
mod filter;
mod project;
mod take;

pub use distinct::DistinctCursor;
pub use filter::FilterCursor;
pub use project::ProjectCursor;
pub use take::TakeCursor;
