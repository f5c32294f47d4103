/*!
# Generalized Maps

This module provides an abstraction over `Map` data structures, so that the payload stores of a
[`FactorGraph`](crate::factor_graph::FactorGraph) can use whichever container fits the workload.

The module includes:
- [`Map<K, V>`]: the capability set every payload store needs
  (insert, get, remove, has-key, size and iteration),
- native implementations for `HashMap` (and therefore `FxHashMap`) and `BTreeMap`,
- [`VecMap`]: an adapter that turns a plain sorted `Vec<(K, V)>` into a [`Map`].

Containers that do not provide this interface themselves can be used in the same way as
[`VecMap`]: wrap them in a newtype and implement [`Map`] for it.
*/

use std::{
    collections::{BTreeMap, HashMap, btree_map, hash_map},
    hash::{BuildHasher, Hash},
    iter,
    slice,
};

/// Minimalist trait for map-like collections.
///
/// Supports insertion, removal, lookup, iteration, clearing, and size queries.
pub trait Map<K, V> {
    /// Inserts an `(key, value)` pair into the map.
    /// If the key was present before, returns the previous value, otherwise returns `None`.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Removes a key from the map and returns the associated value if it existed.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Returns a reference to the value corresponding to the given key, or `None` if the key is not present.
    fn get(&self, key: &K) -> Option<&V>;

    /// Returns `true` if the key is present in the map.
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Iterator over `(key, value)` pairs.
    ///
    /// Returned by [`Map::iter`].
    type MapIter<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// Returns an iterator over all `(key, value)` pairs in the map.
    /// The order is implementation defined.
    fn iter(&self) -> Self::MapIter<'_>;

    /// Returns an iterator over all keys in the map.
    fn keys<'a>(&'a self) -> impl Iterator<Item = &'a K> + 'a
    where
        K: 'a,
        V: 'a,
    {
        self.iter().map(|(k, _)| k)
    }

    /// Clears all elements from the map.
    fn clear(&mut self);

    /// Returns the number of elements currently stored in the map.
    fn len(&self) -> usize;

    /// Returns `true` if the map is empty. Default implementation uses `len()`.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> Map<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    type MapIter<'a>
        = hash_map::Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn iter(&self) -> Self::MapIter<'_> {
        HashMap::iter(self)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K, V> Map<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    type MapIter<'a>
        = btree_map::Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn iter(&self) -> Self::MapIter<'_> {
        BTreeMap::iter(self)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

/// Adapter exposing a `Vec<(K, V)>` kept sorted by key as a [`Map`].
///
/// Lookups are `O(log n)` by binary search, insertions and removals `O(n)`.
/// Iteration yields entries in increasing key order. This is a compact choice for
/// small payload stores or stores that are filled in increasing key order, which
/// is the case for the node stores of a factor graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecMap<K, V>(Vec<(K, V)>);

impl<K, V> Default for VecMap<K, V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<K: Ord, V> VecMap<K, V> {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    fn position(&self, key: &K) -> Result<usize, usize> {
        self.0.binary_search_by(|(k, _)| k.cmp(key))
    }

    /// Returns the entries as a slice sorted by key
    pub fn as_slice(&self) -> &[(K, V)] {
        &self.0
    }

    /// Unwraps the sorted entries
    pub fn into_inner(self) -> Vec<(K, V)> {
        self.0
    }
}

impl<K: Ord, V> From<Vec<(K, V)>> for VecMap<K, V> {
    /// Sorts the entries by key. For duplicate keys, the last entry wins.
    fn from(mut entries: Vec<(K, V)>) -> Self {
        entries.reverse();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries.dedup_by(|(a, _), (b, _)| a == b);
        Self(entries)
    }
}

fn split_entry<K, V>(entry: &(K, V)) -> (&K, &V) {
    (&entry.0, &entry.1)
}

impl<K: Ord, V> Map<K, V> for VecMap<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Ok(pos) => Some(std::mem::replace(&mut self.0[pos].1, value)),
            Err(pos) => {
                self.0.insert(pos, (key, value));
                None
            }
        }
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let pos = self.position(key).ok()?;
        Some(self.0.remove(pos).1)
    }

    fn get(&self, key: &K) -> Option<&V> {
        let pos = self.position(key).ok()?;
        Some(&self.0[pos].1)
    }

    type MapIter<'a>
        = iter::Map<slice::Iter<'a, (K, V)>, fn(&(K, V)) -> (&K, &V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn iter(&self) -> Self::MapIter<'_> {
        self.0.iter().map(split_entry as fn(&(K, V)) -> (&K, &V))
    }

    fn clear(&mut self) {
        self.0.clear();
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod test {
    use fxhash::FxHashMap;
    use itertools::Itertools;

    use super::*;

    fn check_map<M: Map<u32, &'static str> + Default>() {
        let mut map = M::default();
        assert!(map.is_empty());

        assert_eq!(map.insert(5, "five"), None);
        assert_eq!(map.insert(1, "one"), None);
        assert_eq!(map.insert(3, "three"), None);
        assert_eq!(map.insert(3, "drei"), Some("three"));

        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&3), Some(&"drei"));
        assert_eq!(map.get(&4), None);
        assert!(map.contains_key(&1));
        assert!(!map.contains_key(&2));

        assert_eq!(map.keys().copied().sorted().collect_vec(), vec![1, 3, 5]);
        assert_eq!(
            map.iter().map(|(k, v)| (*k, *v)).sorted().collect_vec(),
            vec![(1, "one"), (3, "drei"), (5, "five")]
        );

        assert_eq!(map.remove(&1), Some("one"));
        assert_eq!(map.remove(&1), None);
        assert_eq!(map.len(), 2);

        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.iter().count(), 0);
    }

    #[test]
    fn hash_map() {
        check_map::<HashMap<u32, &'static str>>();
    }

    #[test]
    fn fx_hash_map() {
        check_map::<FxHashMap<u32, &'static str>>();
    }

    #[test]
    fn btree_map() {
        check_map::<BTreeMap<u32, &'static str>>();
    }

    #[test]
    fn vec_map() {
        check_map::<VecMap<u32, &'static str>>();
    }

    #[test]
    fn vec_map_stays_sorted() {
        let map = VecMap::from(vec![(4, 'a'), (2, 'b'), (4, 'c'), (1, 'd')]);
        assert_eq!(map.as_slice(), &[(1, 'd'), (2, 'b'), (4, 'c')]);
        assert_eq!(map.keys().copied().collect_vec(), vec![1, 2, 4]);
    }
}
