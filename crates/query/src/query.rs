//! The query handle: construction and lazy operators.

use crate::adapter::{DistinctCursor, FilterCursor, ProjectCursor, TakeCursor};
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::hash::Hash;
use sequin_core::{BufferCursor, Cursor, CursorIter, Source};

/// A composable view over a sequence of elements.
///
/// The borrowed/owned duality lives in the cursor type parameter: a query
/// over a `SliceCursor` borrows caller-owned data and cannot outlive it,
/// while a query over a `BufferCursor` shares ownership of a buffer an eager
/// operator materialized. A handle can never hold both states, or a dangling
/// borrow, by construction.
///
/// Every operator takes `&self` and leaves the handle reusable: lazy
/// operators wrap a fresh pass over the cursor in an adapter, eager
/// operators snapshot the current results into a new shared buffer,
/// terminal operators drive a fresh pass of their own. Nothing a derived
/// chain or a scan does can disturb the state stored in this handle.
#[derive(Clone)]
pub struct Query<C> {
    cursor: C,
}

/// Builds a query over the given source.
pub fn from<S: Source>(source: S) -> Query<S::Cursor> {
    Query::new(source.cursor())
}

/// Builds a query that takes ownership of the given elements.
pub fn from_vec<T: Clone>(items: Vec<T>) -> Query<BufferCursor<T>> {
    Query::over_buffer(Rc::new(items))
}

impl<C: Cursor> Query<C> {
    /// Wraps an existing cursor.
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Returns an iterator over the elements of this query.
    ///
    /// Each call begins its own pass, so iterating never disturbs the
    /// handle or any other pass in flight.
    pub fn iter(&self) -> CursorIter<C> {
        CursorIter::new(self.cursor.fresh())
    }

    /// Keeps only elements matching the predicate.
    pub fn filter<P>(&self, predicate: P) -> Query<FilterCursor<C, P>>
    where
        P: Fn(&C::Item) -> bool + Clone,
    {
        Query::new(FilterCursor::new(self.cursor.fresh(), predicate))
    }

    /// Transforms every element through the given function.
    pub fn project<F, U>(&self, transform: F) -> Query<ProjectCursor<C, F>>
    where
        F: Fn(C::Item) -> U + Clone,
    {
        Query::new(ProjectCursor::new(self.cursor.fresh(), transform))
    }

    /// Drops duplicate values, keeping the first occurrence of each.
    pub fn distinct(&self) -> Query<DistinctCursor<C>>
    where
        C::Item: Hash + Eq + Clone,
    {
        Query::new(DistinctCursor::new(self.cursor.fresh()))
    }

    /// Skips the first `count` elements.
    ///
    /// The skip happens now, as a single forward scan over a fresh pass;
    /// the returned query starts at the snapshotted position.
    pub fn skip(&self, count: usize) -> Query<C> {
        let mut cursor = self.cursor.fresh();
        for _ in 0..count {
            if cursor.current().is_none() {
                break;
            }
            cursor.advance();
        }
        Query::new(cursor)
    }

    /// Bounds the query to at most `count` elements.
    pub fn take(&self, count: usize) -> Query<TakeCursor<C>> {
        Query::new(TakeCursor::new(self.cursor.fresh(), count))
    }
}

impl<T: Clone> Query<BufferCursor<T>> {
    /// Wraps a freshly materialized buffer.
    pub(crate) fn over_buffer(buffer: Rc<Vec<T>>) -> Self {
        Query::new(BufferCursor::new(buffer))
    }
}

impl<'a, C: Cursor> IntoIterator for &'a Query<C> {
    type Item = C::Item;
    type IntoIter = CursorIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
