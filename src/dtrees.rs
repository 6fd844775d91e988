//! Link-cut trees: a forest of rooted trees built from [`crate::path_set`]
//! preferred paths glued together by `successor` pointers.
//!
//! Grounded on `cpp/include/Dtrees.h`'s `Dtrees` class (`parentOf`,
//! `successor`, a `PathSet *ps`; public `findroot/findcost/addcost/link/cut`,
//! private `expose`). Only `successor` is kept: it alone carries the cross-path
//! link ("successor(p) gives the node in the parent
//! path that is the logical parent of p's head"), keyed by whichever node is
//! *currently* a path's head — a property stable across splays, unlike "the
//! current splay-tree root". The original's separate `parentOf` cache has no
//! counterpart operation in this contract and is dropped (noted in
//! DESIGN.md).

use crate::path_set::{Path, PathCostPair, PathSet};

/// A forest of rooted, cost-labeled trees over `1..=n`.
pub struct Dtrees {
    path_set: PathSet,
    successor: Vec<usize>,
}

impl Dtrees {
    /// Create `n` singleton one-node trees, every node at cost 0.
    pub fn new(n: usize) -> Self {
        Dtrees {
            path_set: PathSet::new(n),
            successor: vec![0; n + 1],
        }
    }

    /// The index universe `n`.
    pub fn n(&self) -> usize {
        self.successor.len() - 1
    }

    /// Grow the universe to `n1 >= n`, adding fresh singleton trees.
    pub fn expand(&mut self, n1: usize) {
        self.path_set.expand(n1);
        if n1 + 1 > self.successor.len() {
            self.successor.resize(n1 + 1, 0);
        }
    }

    /// Reset every index to its own singleton tree at cost 0.
    pub fn clear(&mut self) {
        self.path_set.clear();
        for s in &mut self.successor {
            *s = 0;
        }
    }

    /// Walk to the in-order first node of the splay tree rooted at (or
    /// containing) `x`, without restructuring. Used to locate a path's head.
    fn head_of(&self, mut x: usize) -> usize {
        while self.path_set.left(x) != 0 {
            x = self.path_set.left(x);
        }
        x
    }

    /// Rebuild the preferred path from `u` up to its tree's root. Afterward
    /// `u` is the head (in-order first node) of the returned path, and that
    /// path's tail (in-order last node) is `u`'s tree root.
    fn expose(&mut self, u: usize) -> Path {
        let mut combined: Path = 0;
        let mut w = u;
        loop {
            self.path_set.findpath(w); // splay w to the root of its current path
            let h = self.head_of(w);
            let succ = self.successor[h];
            self.successor[h] = 0;
            let pair = self.path_set.split(w);
            if pair.p1 != 0 {
                // h is still p1's head; w remains its logical tree-parent.
                self.successor[h] = w;
            }
            combined = self.path_set.join(combined, w, pair.p2);
            if succ == 0 {
                break;
            }
            w = succ;
        }
        combined
    }

    /// The root of the tree containing `u`.
    pub fn findroot(&mut self, u: usize) -> usize {
        let p = self.expose(u);
        self.path_set.findtail(p)
    }

    /// The node of minimum cost on the path from `u` to its tree's root, and
    /// that cost.
    pub fn findcost(&mut self, u: usize) -> PathCostPair {
        let p = self.expose(u);
        self.path_set.findpathcost(p)
    }

    /// Add `c` to the true cost of every node from `u` up to its tree's root.
    pub fn addcost(&mut self, u: usize, c: i64) {
        let p = self.expose(u);
        // after expose, p is exactly {u, ..., root}: u is p's head, so adding
        // to p's cost already restricts to u..root, with nothing further
        // to splay.
        self.path_set.addpathcost(p, c);
    }

    /// The true cost of `u`, walking to its tree's current splay-tree root.
    /// Exposed mainly for tests; callers wanting amortized O(log n) should
    /// prefer `findcost`.
    pub fn node_cost(&self, u: usize) -> i64 {
        self.path_set.node_cost(u)
    }

    /// Make tree `t` (which must currently be a root) a child of `u` (which
    /// must be in a different tree).
    pub fn link(&mut self, t: usize, u: usize) {
        debug_assert!(self.findroot(t) == t, "link: t must be a tree root");
        debug_assert!(
            self.findroot(t) != self.findroot(u),
            "link: t and u must be in different trees"
        );
        let p = self.expose(t);
        debug_assert_eq!(p, t, "link: exposing a root always yields a singleton path");
        self.successor[t] = u;
    }

    /// Detach `u`'s subtree from its parent. `u` must not already be a root.
    pub fn cut(&mut self, u: usize) {
        debug_assert!(self.findroot(u) != u, "cut: u must not be a tree root");
        let p = self.expose(u);
        let pair = self.path_set.split(u);
        debug_assert_eq!(pair.p1, 0, "expose(u) always leaves u as its path's head");
        // pair.p2 (u's former ancestors) remains a valid path reaching the
        // old tree root on its own; u becomes a fresh singleton root.
        let _ = p;
        debug_assert_eq!(self.successor[u], 0);
    }
}
