//! Take adapter - bounds a sequence to a maximum element count.

use sequin_core::Cursor;

/// A cursor that ends after yielding at most `remaining` more elements.
///
/// The bound is a count carried with the cursor rather than a snapshotted
/// end position; over an immutable source the two are observationally the
/// same, and the count keeps construction O(1).
#[derive(Clone)]
pub struct TakeCursor<C> {
    inner: C,
    remaining: usize,
}

impl<C: Cursor> TakeCursor<C> {
    /// Bounds the given cursor to at most `count` elements.
    pub fn new(inner: C, count: usize) -> Self {
        Self {
            inner,
            remaining: count,
        }
    }
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn current(&self) -> Option<C::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.inner.current()
    }

    fn advance(&mut self) {
        if self.remaining > 0 {
            self.remaining -= 1;
            self.inner.advance();
        }
    }

    fn fresh(&self) -> Self {
        Self {
            inner: self.inner.fresh(),
            remaining: self.remaining,
        }
    }
}
