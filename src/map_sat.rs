//! Ordered map over `u64` keys, built as a thin wrapper around
//! [`crate::ssets_sat::SsetsSat`] plus a [`crate::list_pair::ListPair`]
//! tracking which node indexes are currently in use.
//!
//! A `Map_sat` / `TreeMap`: the free/used split
//! follows the same pattern `hash_map` uses for its pair-index pool, itself
//! grounded on the original source's `UiSetPair`-backed node pools.

use crate::list_pair::ListPair;
use crate::ssets_sat::{Bst, SsetsSat};
use crate::UNDEF_VAL;

/// An ordered map from `u64` keys to `i32` values.
pub struct MapSat {
    tree: SsetsSat,
    root: Bst,
    nodes: ListPair,
    vals: Vec<i32>,
}

impl MapSat {
    /// Create an empty map with room for up to `n` entries.
    pub fn new(n: usize) -> Self {
        MapSat {
            tree: SsetsSat::new(n),
            root: 0,
            nodes: ListPair::new(n),
            vals: vec![UNDEF_VAL; n + 1],
        }
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.nodes.num_in()
    }

    /// `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value at `key`, or `UNDEF_VAL` if absent.
    pub fn get(&mut self, key: u64) -> i32 {
        let node = self.tree.access(key, &mut self.root);
        if node == 0 {
            UNDEF_VAL
        } else {
            self.vals[node]
        }
    }

    /// `true` if `key` is present.
    pub fn contains(&mut self, key: u64) -> bool {
        self.tree.access(key, &mut self.root) != 0
    }

    /// Insert or update `key -> val`. Returns `false` only when `key` is
    /// absent and no free node slot remains (a legitimate refusal).
    pub fn put(&mut self, key: u64, val: i32) -> bool {
        let existing = self.tree.access(key, &mut self.root);
        if existing != 0 {
            self.vals[existing] = val;
            return true;
        }
        let idx = self.nodes.first_out();
        if idx == 0 {
            return false;
        }
        self.nodes.swap(idx);
        self.tree.setkey(idx, key);
        self.vals[idx] = val;
        let inserted = self.tree.insert(idx, &mut self.root);
        debug_assert!(inserted, "access() already established key is absent");
        true
    }

    /// Remove `key` if present; returns `true` if it was.
    pub fn remove(&mut self, key: u64) -> bool {
        let node = self.tree.access(key, &mut self.root);
        if node == 0 {
            return false;
        }
        self.tree.remove(node, &mut self.root);
        self.nodes.swap(node);
        self.vals[node] = UNDEF_VAL;
        true
    }
}
