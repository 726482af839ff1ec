//! Deduplication adapter - drops values already observed in this pass.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::hash::Hash;
use hashbrown::HashSet;
use sequin_core::Cursor;

/// A cursor that yields each distinct value once, in first-occurrence order.
///
/// The seen set is allocated once per `new` and shared by every clone of the
/// cursor, so siblings observe one logical pass: advancing one clone hides
/// the element from the others.
pub struct DistinctCursor<C: Cursor> {
    inner: C,
    seen: Rc<RefCell<HashSet<C::Item>>>,
}

impl<C> Clone for DistinctCursor<C>
where
    C: Cursor,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            seen: self.seen.clone(),
        }
    }
}

impl<C> DistinctCursor<C>
where
    C: Cursor,
    C::Item: Hash + Eq + Clone,
{
    /// Wraps a cursor with a fresh seen set, skipping ahead to the first
    /// unseen element.
    pub fn new(inner: C) -> Self {
        let mut cursor = Self {
            inner,
            seen: Rc::new(RefCell::new(HashSet::new())),
        };
        cursor.settle();
        cursor
    }

    /// Steps past already-seen elements; the element the cursor rests on is
    /// recorded as seen before it is yielded.
    fn settle(&mut self) {
        let mut seen = self.seen.borrow_mut();
        while let Some(item) = self.inner.current() {
            if seen.insert(item) {
                break;
            }
            self.inner.advance();
        }
    }
}

impl<C> Cursor for DistinctCursor<C>
where
    C: Cursor,
    C::Item: Hash + Eq + Clone,
{
    type Item = C::Item;

    fn current(&self) -> Option<C::Item> {
        self.inner.current()
    }

    fn advance(&mut self) {
        self.inner.advance();
        self.settle();
    }

    /// A fresh pass snapshots the seen set: elements recorded so far stay
    /// hidden from it, but whatever it observes is private and never leaks
    /// back into this cursor's history.
    fn fresh(&self) -> Self {
        Self {
            inner: self.inner.fresh(),
            seen: Rc::new(RefCell::new(self.seen.borrow().clone())),
        }
    }
}
