//! Grouping: keyed member sequences produced by `group_by`.

use crate::query::Query;
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::vec::Vec;
use sequin_core::{BufferCursor, Cursor};

/// A key paired with the members that share it.
///
/// A grouping is itself queryable: `query()` ranges over the members in
/// their first-seen order. The member buffer is shared, so groupings clone
/// cheaply and can flow through further query chains as values.
#[derive(Clone)]
pub struct Grouping<K, T> {
    key: K,
    members: Rc<Vec<T>>,
}

impl<K, T: Clone> Grouping<K, T> {
    pub(crate) fn new(key: K, members: Vec<T>) -> Self {
        Self {
            key,
            members: Rc::new(members),
        }
    }

    /// The key shared by every member of this group.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns a query over the members.
    pub fn query(&self) -> Query<BufferCursor<T>> {
        Query::over_buffer(self.members.clone())
    }

    /// Number of members. Never zero: a group only exists because at least
    /// one element produced its key.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<C: Cursor> Query<C>
where
    C::Item: Clone,
{
    /// Partitions the elements by key in a single pass.
    ///
    /// Groups come back in ascending key order; members keep their
    /// encounter order within each group.
    pub fn group_by<K, F>(&self, key: F) -> Query<BufferCursor<Grouping<K, C::Item>>>
    where
        K: Ord + Clone,
        F: Fn(&C::Item) -> K,
    {
        let mut groups: BTreeMap<K, Vec<C::Item>> = BTreeMap::new();
        for item in self.iter() {
            groups.entry(key(&item)).or_default().push(item);
        }

        let groups: Vec<Grouping<K, C::Item>> = groups
            .into_iter()
            .map(|(key, members)| Grouping::new(key, members))
            .collect();
        Query::over_buffer(Rc::new(groups))
    }
}
