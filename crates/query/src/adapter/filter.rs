//! Filter adapter - skips elements that fail a predicate.

use sequin_core::Cursor;

/// A cursor that rests only on elements matching its predicate.
///
/// Construction and every advance skip forward until the predicate holds or
/// the sequence ends, so `current` is always safe to call and never sees a
/// non-matching element.
#[derive(Clone)]
pub struct FilterCursor<C, P> {
    inner: C,
    predicate: P,
}

impl<C, P> FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool + Clone,
{
    /// Wraps a cursor, skipping ahead to the first matching element.
    pub fn new(inner: C, predicate: P) -> Self {
        let mut cursor = Self { inner, predicate };
        cursor.settle();
        cursor
    }

    /// Steps forward until the predicate holds or the sequence ends.
    fn settle(&mut self) {
        while let Some(item) = self.inner.current() {
            if (self.predicate)(&item) {
                break;
            }
            self.inner.advance();
        }
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool + Clone,
{
    type Item = C::Item;

    fn current(&self) -> Option<C::Item> {
        self.inner.current()
    }

    fn advance(&mut self) {
        self.inner.advance();
        self.settle();
    }

    fn fresh(&self) -> Self {
        // Already settled; the fresh inner pass keeps the position.
        Self {
            inner: self.inner.fresh(),
            predicate: self.predicate.clone(),
        }
    }
}
