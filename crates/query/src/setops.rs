//! Set algebra over queries.
//!
//! Each operation materializes its result: membership tests need the whole
//! other side, and the output is deduplicated with a second set while
//! first-seen order is preserved.

use crate::query::Query;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::hash::Hash;
use hashbrown::HashSet;
use sequin_core::{BufferCursor, Cursor};

impl<C: Cursor> Query<C>
where
    C::Item: Hash + Eq + Clone,
{
    /// Elements of `self` followed by unseen elements of `other`,
    /// deduplicated, in first-seen order.
    pub fn union<C2>(&self, other: &Query<C2>) -> Query<BufferCursor<C::Item>>
    where
        C2: Cursor<Item = C::Item>,
    {
        let mut seen: HashSet<C::Item> = HashSet::new();
        let mut data = Vec::new();
        for item in self.iter().chain(other.iter()) {
            if seen.insert(item.clone()) {
                data.push(item);
            }
        }
        Query::over_buffer(Rc::new(data))
    }

    /// Distinct elements of `self` that also appear in `other`, in `self`'s
    /// first-seen order.
    pub fn intersect<C2>(&self, other: &Query<C2>) -> Query<BufferCursor<C::Item>>
    where
        C2: Cursor<Item = C::Item>,
    {
        let membership: HashSet<C::Item> = other.iter().collect();
        let mut seen: HashSet<C::Item> = HashSet::new();
        let mut data = Vec::new();
        for item in self.iter() {
            if membership.contains(&item) && seen.insert(item.clone()) {
                data.push(item);
            }
        }
        Query::over_buffer(Rc::new(data))
    }

    /// Distinct elements of `self` that do not appear in `other`, in
    /// `self`'s first-seen order.
    pub fn except<C2>(&self, other: &Query<C2>) -> Query<BufferCursor<C::Item>>
    where
        C2: Cursor<Item = C::Item>,
    {
        let membership: HashSet<C::Item> = other.iter().collect();
        let mut seen: HashSet<C::Item> = HashSet::new();
        let mut data = Vec::new();
        for item in self.iter() {
            if !membership.contains(&item) && seen.insert(item.clone()) {
                data.push(item);
            }
        }
        Query::over_buffer(Rc::new(data))
    }
}

impl<C: Cursor> Query<C>
where
    C::Item: Clone,
{
    /// Elements of `self` followed by elements of `other`; duplicates kept.
    pub fn concat<C2>(&self, other: &Query<C2>) -> Query<BufferCursor<C::Item>>
    where
        C2: Cursor<Item = C::Item>,
    {
        let data: Vec<C::Item> = self.iter().chain(other.iter()).collect();
        Query::over_buffer(Rc::new(data))
    }
}
