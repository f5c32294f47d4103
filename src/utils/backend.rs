/*!
# Map Backends

A [`MapBackend`] decides which [`Map`] implementation a
[`FactorGraph`](crate::factor_graph::FactorGraph) uses for all three payload stores.
It is a factory that can create a map for any key and value type.

Backends are usually chosen at the type level:
- [`FxBackend`] (default): `FxHashMap`, fast hashing of integer keys,
- [`StdBackend`]: `HashMap` with the randomized std hasher,
- [`BTreeBackend`]: `BTreeMap`, iteration in increasing identifier order,
- [`VecMapBackend`]: the [`VecMap`] adapter over sorted vectors.

A type that does not implement [`MapBackend`] is rejected by the compiler. If the container
must be chosen at runtime (e.g. from a configuration value), use [`DynBackend`] together with
[`BackendKind`], which parses backend names and rejects unknown ones with
[`FactorGraphError::InvalidArgument`].
*/

use std::{
    collections::{BTreeMap, HashMap, btree_map, hash_map},
    fmt::{Debug, Display},
    hash::Hash,
    str::FromStr,
};

use fxhash::FxHashMap;

use super::{multi_traits::QuadIter, *};
use crate::error::FactorGraphError;

/// Requirements on keys of payload stores.
/// Covered by [`NodeId`](crate::NodeId) and [`EdgeKey`](crate::EdgeKey).
pub trait MapKey: Copy + Eq + Hash + Ord + Debug {}

impl<T> MapKey for T where T: Copy + Eq + Hash + Ord + Debug {}

/// Factory for the maps backing the payload stores
pub trait MapBackend {
    /// The map type used for keys `K` and values `V`
    type Store<K: MapKey, V>: Map<K, V>;

    /// Creates an empty map expected to hold about `capacity` entries
    fn new_map<K: MapKey, V>(&self, capacity: usize) -> Self::Store<K, V>;

    /// Returns which container this backend creates
    fn kind(&self) -> BackendKind;
}

macro_rules! static_backend {
    ($(#[$meta:meta])* $name:ident => $map:ident, $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name;

        impl MapBackend for $name {
            type Store<K: MapKey, V> = $map<K, V>;

            fn new_map<K: MapKey, V>(&self, capacity: usize) -> Self::Store<K, V> {
                FromCapacity::from_capacity(capacity)
            }

            fn kind(&self) -> BackendKind {
                BackendKind::$kind
            }
        }
    };
}

static_backend!(
    /// Backend using `FxHashMap` for all payload stores
    FxBackend => FxHashMap, Fx
);

static_backend!(
    /// Backend using `std::collections::HashMap` with `RandomState` for all payload stores
    StdBackend => HashMap, Std
);

static_backend!(
    /// Backend using `BTreeMap` for all payload stores
    BTreeBackend => BTreeMap, BTree
);

static_backend!(
    /// Backend using the [`VecMap`] adapter for all payload stores
    VecMapBackend => VecMap, VecMap
);

/// Names of the available container implementations
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// `FxHashMap`
    #[default]
    Fx,
    /// `std::collections::HashMap`
    Std,
    /// `BTreeMap`
    BTree,
    /// [`VecMap`]
    VecMap,
}

impl BackendKind {
    /// All available kinds
    pub const ALL: [BackendKind; 4] = [
        BackendKind::Fx,
        BackendKind::Std,
        BackendKind::BTree,
        BackendKind::VecMap,
    ];

    /// Canonical name, accepted by [`BackendKind::from_str`]
    pub const fn name(&self) -> &'static str {
        match self {
            BackendKind::Fx => "fx",
            BackendKind::Std => "std",
            BackendKind::BTree => "btree",
            BackendKind::VecMap => "vecmap",
        }
    }
}

impl Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BackendKind {
    type Err = FactorGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fx" | "fxhash" | "fxhashmap" => Ok(BackendKind::Fx),
            "std" | "hash" | "hashmap" => Ok(BackendKind::Std),
            "btree" | "btreemap" => Ok(BackendKind::BTree),
            "vec" | "vecmap" => Ok(BackendKind::VecMap),
            _ => Err(FactorGraphError::unsupported_container(s)),
        }
    }
}

/// Backend whose container is chosen at runtime
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DynBackend(pub BackendKind);

impl MapBackend for DynBackend {
    type Store<K: MapKey, V> = BackendMap<K, V>;

    fn new_map<K: MapKey, V>(&self, capacity: usize) -> Self::Store<K, V> {
        match self.0 {
            BackendKind::Fx => BackendMap::Fx(FromCapacity::from_capacity(capacity)),
            BackendKind::Std => BackendMap::Std(FromCapacity::from_capacity(capacity)),
            BackendKind::BTree => BackendMap::BTree(FromCapacity::from_capacity(capacity)),
            BackendKind::VecMap => BackendMap::VecMap(FromCapacity::from_capacity(capacity)),
        }
    }

    fn kind(&self) -> BackendKind {
        self.0
    }
}

impl FromStr for DynBackend {
    type Err = FactorGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(DynBackend)
    }
}

/// A map whose implementation is selected at runtime, created by [`DynBackend`]
#[derive(Debug, Clone)]
pub enum BackendMap<K, V> {
    Fx(FxHashMap<K, V>),
    Std(HashMap<K, V>),
    BTree(BTreeMap<K, V>),
    VecMap(VecMap<K, V>),
}

macro_rules! dispatch {
    ($self:ident, $map:ident => $expr:expr) => {
        match $self {
            BackendMap::Fx($map) => $expr,
            BackendMap::Std($map) => $expr,
            BackendMap::BTree($map) => $expr,
            BackendMap::VecMap($map) => $expr,
        }
    };
}

impl<K: MapKey, V> Map<K, V> for BackendMap<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        dispatch!(self, map => Map::insert(map, key, value))
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        dispatch!(self, map => Map::remove(map, key))
    }

    fn get(&self, key: &K) -> Option<&V> {
        dispatch!(self, map => Map::get(map, key))
    }

    fn contains_key(&self, key: &K) -> bool {
        dispatch!(self, map => Map::contains_key(map, key))
    }

    type MapIter<'a>
        = QuadIter<
        (&'a K, &'a V),
        hash_map::Iter<'a, K, V>,
        hash_map::Iter<'a, K, V>,
        btree_map::Iter<'a, K, V>,
        <VecMap<K, V> as Map<K, V>>::MapIter<'a>,
    >
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn iter(&self) -> Self::MapIter<'_> {
        match self {
            BackendMap::Fx(map) => QuadIter::IterA(map.iter()),
            BackendMap::Std(map) => QuadIter::IterB(map.iter()),
            BackendMap::BTree(map) => QuadIter::IterC(map.iter()),
            BackendMap::VecMap(map) => QuadIter::IterD(Map::iter(map)),
        }
    }

    fn clear(&mut self) {
        dispatch!(self, map => Map::clear(map))
    }

    fn len(&self) -> usize {
        dispatch!(self, map => Map::len(map))
    }
}
