//! Sequin Core - foundational capabilities for the Sequin query library.
//!
//! This crate provides the pieces every query adapter is built on:
//!
//! - `Cursor`: a position over a sequence supporting read, advance, and end
//!   detection
//! - `CursorIter`: bridge from any cursor to `core::iter::Iterator`
//! - `Source`: the boundary trait for collections a query can be built from
//! - `SliceCursor` / `BufferCursor`: the borrowed and shared-buffer cursors
//! - `Error`: error types for terminal query operations
//!
//! # Example
//!
//! ```rust
//! use sequin_core::{Cursor, Source};
//!
//! let data = [10, 20, 30];
//! let mut cursor = data.as_slice().cursor();
//!
//! assert_eq!(cursor.current(), Some(10));
//! cursor.advance();
//! assert_eq!(cursor.current(), Some(20));
//!
//! // Cursors are restartable: ask the source again.
//! assert_eq!(data.as_slice().cursor().current(), Some(10));
//! ```

#![no_std]

extern crate alloc;

mod cursor;
mod error;
mod source;

pub use cursor::{Cursor, CursorIter};
pub use error::{Error, Result};
pub use source::{BufferCursor, SliceCursor, Source};
