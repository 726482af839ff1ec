//! Sequin Query - the composable query pipeline.
//!
//! This crate provides the query surface of Sequin:
//!
//! - `adapter`: lazy cursors (filter, project, distinct, take)
//! - `Query`: the chainable handle over any cursor
//! - `Ordered`: stable multi-key refinement after a primary sort
//! - `Grouping`: keyed member sequences produced by `group_by`
//!
//! Lazy operators wrap the current cursor and cost O(1) to build; eager
//! operators (sorting, grouping, set algebra, reversal) snapshot the current
//! results into a fresh shared buffer; terminal operators drive a fresh
//! pass over the cursor, so a query handle stays reusable after any of
//! them — including a retained `distinct()` handle, whose seen set is
//! snapshotted per pass rather than shared across passes.
//!
//! # Example
//!
//! ```rust
//! use sequin_query::from;
//!
//! let numbers = [1, 2, 3, 4, 5];
//! let query = from(&numbers);
//!
//! assert_eq!(query.filter(|x| x > &2).to_vec(), [3, 4, 5]);
//! assert_eq!(query.project(|x| x * x).sum(), 55);
//! assert_eq!(query.count(), 5);
//! ```

#![no_std]

extern crate alloc;

pub mod adapter;
mod collect;
mod eager;
mod fold;
mod group;
mod ordered;
mod query;
mod setops;
mod terminal;

pub use fold::ToF64;
pub use group::Grouping;
pub use ordered::Ordered;
pub use query::{from, from_vec, Query};
pub use sequin_core::{BufferCursor, Cursor, CursorIter, Error, Result, SliceCursor, Source};
