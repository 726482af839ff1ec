//! Collectors: vectors, owned slices, ordered and unordered maps.

use crate::query::Query;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;
use hashbrown::HashMap;
use sequin_core::{Cursor, Error, Result};

impl<C: Cursor> Query<C>
where
    C::Item: Clone,
{
    /// Copies the current view into an owned vector.
    pub fn to_vec(&self) -> Vec<C::Item> {
        self.iter().collect()
    }

    /// Copies the current view into an owned heap slice.
    ///
    /// The slice length is the element count; an empty query yields an
    /// empty slice rather than any kind of null handle.
    pub fn to_boxed_slice(&self) -> Box<[C::Item]> {
        self.to_vec().into_boxed_slice()
    }

    /// Builds an ordered key → element map.
    ///
    /// On a key collision the FIRST occurrence wins; later elements with
    /// the same key are silently dropped. Use
    /// [`try_to_map`](Self::try_to_map) to fail on collisions instead.
    pub fn to_map<K, F>(&self, key: F) -> BTreeMap<K, C::Item>
    where
        K: Ord,
        F: Fn(&C::Item) -> K,
    {
        let mut map = BTreeMap::new();
        for item in self.iter() {
            map.entry(key(&item)).or_insert(item);
        }
        map
    }

    /// Builds an ordered key → value map; same first-wins collision policy
    /// as [`to_map`](Self::to_map).
    pub fn to_map_with<K, V, FK, FV>(&self, key: FK, value: FV) -> BTreeMap<K, V>
    where
        K: Ord,
        FK: Fn(&C::Item) -> K,
        FV: Fn(&C::Item) -> V,
    {
        let mut map = BTreeMap::new();
        for item in self.iter() {
            map.entry(key(&item)).or_insert_with(|| value(&item));
        }
        map
    }

    /// Builds an ordered key → element map, failing with `KeyCollision` on
    /// the first duplicate key.
    pub fn try_to_map<K, F>(&self, key: F) -> Result<BTreeMap<K, C::Item>>
    where
        K: Ord + Debug,
        F: Fn(&C::Item) -> K,
    {
        let mut map = BTreeMap::new();
        for item in self.iter() {
            let k = key(&item);
            if map.contains_key(&k) {
                return Err(Error::key_collision(format!("{:?}", k)));
            }
            map.insert(k, item);
        }
        Ok(map)
    }

    /// Unordered variant of [`to_map`](Self::to_map): same first-wins
    /// semantics, no iteration-order guarantee.
    pub fn to_hash_map<K, F>(&self, key: F) -> HashMap<K, C::Item>
    where
        K: Hash + Eq,
        F: Fn(&C::Item) -> K,
    {
        let mut map = HashMap::new();
        for item in self.iter() {
            map.entry(key(&item)).or_insert(item);
        }
        map
    }

    /// Unordered variant of [`to_map_with`](Self::to_map_with).
    pub fn to_hash_map_with<K, V, FK, FV>(&self, key: FK, value: FV) -> HashMap<K, V>
    where
        K: Hash + Eq,
        FK: Fn(&C::Item) -> K,
        FV: Fn(&C::Item) -> V,
    {
        let mut map = HashMap::new();
        for item in self.iter() {
            map.entry(key(&item)).or_insert_with(|| value(&item));
        }
        map
    }
}
