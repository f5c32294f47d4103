/*!
# Utilities

Provides the container abstractions behind the payload stores of a factor graph:
- [`Map`] abstracts over map-like containers, with [`VecMap`] as an adapter for plain vectors,
- [`MapBackend`] selects the container implementation used for all payload stores,
- [`FromCapacity`] creates containers with a capacity hint,
- utility types for returning one of several iterators from a single function.

Apart from `Map` and the backends, you probably do not need to interact with this module directly.
*/

use std::{
    collections::{BTreeMap, HashMap},
    hash::RandomState,
};

use fxhash::{FxBuildHasher, FxHashMap};

pub mod backend;
pub mod map;
pub mod multi_traits;

// Only export most important traits / structs

pub use backend::*;
pub use map::{Map, VecMap};

/// Helper trait for datastructure that can be initialized with capacity.
///
/// Note that this should mainly be used in conjunction with [`Map`] datastructures: the
/// capacity is the number of entries expected to be stored.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self;
}

impl<K, V> FromCapacity for HashMap<K, V, RandomState> {
    fn from_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }
}

impl<K, V> FromCapacity for FxHashMap<K, V> {
    fn from_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher::default())
    }
}

impl<K, V> FromCapacity for BTreeMap<K, V> {
    fn from_capacity(_capacity: usize) -> Self {
        // `BTreeMap` does not preallocate
        Self::new()
    }
}

impl<K: Ord, V> FromCapacity for VecMap<K, V> {
    fn from_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }
}
