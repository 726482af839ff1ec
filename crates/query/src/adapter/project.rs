//! Projection adapter - transforms elements on read.

use sequin_core::Cursor;

/// A cursor that applies a transform lazily when the element is read.
///
/// Stateless beyond the wrapped position: advancing delegates to the inner
/// cursor, since a projection cannot fail to match. The yielded value is a
/// fresh one; no identity with the source element is preserved.
#[derive(Clone)]
pub struct ProjectCursor<C, F> {
    inner: C,
    transform: F,
}

impl<C, F> ProjectCursor<C, F> {
    /// Wraps a cursor with the given transform.
    pub fn new(inner: C, transform: F) -> Self {
        Self { inner, transform }
    }
}

impl<C, F, U> Cursor for ProjectCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U + Clone,
{
    type Item = U;

    fn current(&self) -> Option<U> {
        self.inner.current().map(&self.transform)
    }

    fn advance(&mut self) {
        self.inner.advance();
    }

    fn fresh(&self) -> Self {
        Self {
            inner: self.inner.fresh(),
            transform: self.transform.clone(),
        }
    }
}
