//! Eager operators that snapshot the current results into a fresh buffer.

use crate::ordered::Ordered;
use crate::query::Query;
use alloc::rc::Rc;
use alloc::vec::Vec;
use sequin_core::{BufferCursor, Cursor};

impl<C: Cursor> Query<C>
where
    C::Item: Clone,
{
    /// Copies the current results into an owned vector.
    pub(crate) fn materialize(&self) -> Vec<C::Item> {
        self.iter().collect()
    }

    /// Sorts ascending by the given key.
    ///
    /// The primary pass is unstable: the relative order of elements with
    /// equal keys is unspecified until pinned down by a `then_by`
    /// refinement on the returned handle.
    pub fn order_by<K, F>(&self, key: F) -> Ordered<C::Item>
    where
        K: Ord,
        F: Fn(&C::Item) -> K,
    {
        Ordered::sort(self.materialize(), move |a, b| key(a).cmp(&key(b)))
    }

    /// Sorts descending by the given key; otherwise as
    /// [`order_by`](Self::order_by).
    pub fn order_by_descending<K, F>(&self, key: F) -> Ordered<C::Item>
    where
        K: Ord,
        F: Fn(&C::Item) -> K,
    {
        Ordered::sort(self.materialize(), move |a, b| key(b).cmp(&key(a)))
    }

    /// Copies the current results and reverses their order.
    pub fn reverse(&self) -> Query<BufferCursor<C::Item>> {
        let mut data = self.materialize();
        data.reverse();
        Query::over_buffer(Rc::new(data))
    }
}
