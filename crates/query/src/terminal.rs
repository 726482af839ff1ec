//! Terminal operators: boolean scans, cardinality, positional lookup.
//!
//! All of these consume nothing: they drive a fresh pass over the query's
//! cursor and leave the handle reusable. Failures are fail-fast `Error`
//! values, surfaced at the call, never retried or recovered internally.

use crate::query::Query;
use sequin_core::{Cursor, Error, Result};

impl<C: Cursor> Query<C> {
    /// True when the query yields at least one element.
    pub fn any(&self) -> bool {
        self.iter().next().is_some()
    }

    /// True when any element matches the predicate. Short-circuits.
    pub fn any_matching<P>(&self, predicate: P) -> bool
    where
        P: Fn(&C::Item) -> bool,
    {
        self.iter().any(|item| predicate(&item))
    }

    /// True when every element matches the predicate. Short-circuits.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&C::Item) -> bool,
    {
        self.iter().all(|item| predicate(&item))
    }

    /// Number of elements. O(n): no size is cached anywhere in a chain.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Number of elements matching the predicate.
    pub fn count_matching<P>(&self, predicate: P) -> usize
    where
        P: Fn(&C::Item) -> bool,
    {
        self.iter().filter(|item| predicate(item)).count()
    }

    /// First element, or `EmptySequence`.
    pub fn first(&self) -> Result<C::Item> {
        self.first_opt().ok_or(Error::EmptySequence)
    }

    /// First element matching the predicate, or `EmptySequence`.
    pub fn first_matching<P>(&self, predicate: P) -> Result<C::Item>
    where
        P: Fn(&C::Item) -> bool + Clone,
    {
        self.filter(predicate).first()
    }

    /// First element, if any.
    pub fn first_opt(&self) -> Option<C::Item> {
        self.iter().next()
    }

    /// First element matching the predicate, if any.
    pub fn first_matching_opt<P>(&self, predicate: P) -> Option<C::Item>
    where
        P: Fn(&C::Item) -> bool + Clone,
    {
        self.filter(predicate).first_opt()
    }

    /// Last element, or `EmptySequence`.
    ///
    /// Linear scan to the end; no reverse cursor is assumed anywhere.
    pub fn last(&self) -> Result<C::Item> {
        self.last_opt().ok_or(Error::EmptySequence)
    }

    /// Last element matching the predicate, or `EmptySequence`.
    pub fn last_matching<P>(&self, predicate: P) -> Result<C::Item>
    where
        P: Fn(&C::Item) -> bool + Clone,
    {
        self.filter(predicate).last()
    }

    /// Last element, if any.
    pub fn last_opt(&self) -> Option<C::Item> {
        self.iter().last()
    }

    /// Last element matching the predicate, if any.
    pub fn last_matching_opt<P>(&self, predicate: P) -> Option<C::Item>
    where
        P: Fn(&C::Item) -> bool + Clone,
    {
        self.filter(predicate).last_opt()
    }

    /// The only element: `EmptySequence` on zero elements,
    /// `MultipleElements` on more than one.
    pub fn single(&self) -> Result<C::Item> {
        match self.single_opt()? {
            Some(item) => Ok(item),
            None => Err(Error::EmptySequence),
        }
    }

    /// The only element matching the predicate, with the same cardinality
    /// failures as [`single`](Self::single).
    pub fn single_matching<P>(&self, predicate: P) -> Result<C::Item>
    where
        P: Fn(&C::Item) -> bool + Clone,
    {
        self.filter(predicate).single()
    }

    /// The only element, or `None` on zero. Still fails with
    /// `MultipleElements` on more than one.
    pub fn single_opt(&self) -> Result<Option<C::Item>> {
        let mut iter = self.iter();
        let first = iter.next();
        if first.is_some() && iter.next().is_some() {
            return Err(Error::MultipleElements);
        }
        Ok(first)
    }

    /// The only element matching the predicate, or `None` on zero matches.
    pub fn single_matching_opt<P>(&self, predicate: P) -> Result<Option<C::Item>>
    where
        P: Fn(&C::Item) -> bool + Clone,
    {
        self.filter(predicate).single_opt()
    }

    /// Element at the given position, or `OutOfRange` past the end.
    /// Positional lookup is a linear walk.
    pub fn element_at(&self, index: usize) -> Result<C::Item> {
        self.element_at_opt(index)
            .ok_or_else(|| Error::out_of_range(index))
    }

    /// Element at the given position, if the sequence reaches it.
    pub fn element_at_opt(&self, index: usize) -> Option<C::Item> {
        self.iter().nth(index)
    }
}
