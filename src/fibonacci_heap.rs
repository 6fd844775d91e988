//! Fibonacci heaps: root and child lists are circular doubly-linked sibling
//! cycles, in the same style as [`crate::dlists`] but embedded directly in
//! the node arena (each node is simultaneously a tree and a member of its
//! parent's child cycle).
//!
//! Grounded on `cpp/dataStructures/heaps/Fheaps.cpp`'s `meld`, `insert`,
//! `decreasekey` (with cascading cut), and `deletemin` (rank-bucket
//! consolidation via `rvec[MAXRANK+1]`).

/// The empty heap.
pub const EMPTY: usize = 0;
/// Rank-bucket table size used during `deletemin` consolidation.
pub const MAXRANK: usize = 32;

struct Node {
    left: usize,  // sibling cycle
    right: usize, // sibling cycle
    parent: usize,
    child: usize, // an arbitrary child, or 0
    rank: u32,
    key: i64,
    mark: bool,
}

/// A forest of Fibonacci heaps over `1..=n`.
pub struct FibonacciHeap {
    node: Vec<Node>,
}

impl FibonacciHeap {
    /// Create `n` singleton heaps, each at key 0.
    pub fn new(n: usize) -> Self {
        FibonacciHeap {
            node: (0..=n).map(|i| Self::fresh(i)).collect(),
        }
    }

    fn fresh(i: usize) -> Node {
        Node {
            left: i,
            right: i,
            parent: 0,
            child: 0,
            rank: 0,
            key: 0,
            mark: false,
        }
    }

    /// The index universe `n`.
    pub fn n(&self) -> usize {
        self.node.len() - 1
    }

    /// Grow the universe to `n1 >= n`, adding fresh singletons.
    pub fn expand(&mut self, n1: usize) {
        let n = self.n();
        if n1 <= n {
            return;
        }
        for i in (n + 1)..=n1 {
            self.node.push(Self::fresh(i));
        }
    }

    /// Reset every index to a singleton heap at key 0.
    pub fn clear(&mut self) {
        let n = self.n();
        for i in 0..=n {
            self.node[i] = Self::fresh(i);
        }
    }

    /// The key of `x`.
    pub fn key(&self, x: usize) -> i64 {
        self.node[x].key
    }

    /// Assign `x`'s key. Caller's responsibility to do this before melding a
    /// fresh singleton in via `insert`.
    pub fn setkey(&mut self, x: usize, k: i64) {
        self.node[x].key = k;
    }

    /// The rank of `x` (number of children).
    pub fn rank(&self, x: usize) -> u32 {
        self.node[x].rank
    }

    /// `true` if every non-root whose parent hasn't lost a child since
    /// acquiring it is unmarked (exposed for testing the heap invariant).
    pub fn is_marked(&self, x: usize) -> bool {
        self.node[x].mark
    }

    fn splice_cycles(&mut self, a: usize, b: usize) {
        let an = self.node[a].right;
        let bn = self.node[b].right;
        self.node[a].right = bn;
        self.node[bn].left = a;
        self.node[b].right = an;
        self.node[an].left = b;
    }

    /// Detach `u` from its sibling cycle; returns a remaining member of that
    /// cycle, or `0` if `u` was alone.
    fn remove_from_cycle(&mut self, u: usize) -> usize {
        let r = self.node[u].right;
        if r == u {
            self.node[u].left = u;
            self.node[u].right = u;
            return 0;
        }
        let l = self.node[u].left;
        self.node[l].right = r;
        self.node[r].left = l;
        self.node[u].left = u;
        self.node[u].right = u;
        r
    }

    /// Merge two heaps in O(1); returns whichever root has the smaller key.
    pub fn meld(&mut self, h1: usize, h2: usize) -> usize {
        if h1 == 0 {
            return h2;
        }
        if h2 == 0 {
            return h1;
        }
        self.splice_cycles(h1, h2);
        if self.node[h2].key < self.node[h1].key {
            h2
        } else {
            h1
        }
    }

    /// Insert singleton `x` (key already set via `setkey`) into heap `h`.
    pub fn insert(&mut self, x: usize, h: usize) -> usize {
        self.node[x].left = x;
        self.node[x].right = x;
        self.node[x].parent = 0;
        self.node[x].child = 0;
        self.node[x].rank = 0;
        self.node[x].mark = false;
        self.meld(x, h)
    }

    fn cascading_cut(&mut self, mut pu: usize, h: &mut usize) {
        loop {
            if self.node[pu].parent == 0 {
                break;
            }
            if !self.node[pu].mark {
                self.node[pu].mark = true;
                break;
            }
            let ppu = self.node[pu].parent;
            let rep = self.remove_from_cycle(pu);
            if self.node[ppu].child == pu {
                self.node[ppu].child = rep;
            }
            self.node[ppu].rank -= 1;
            self.node[pu].parent = 0;
            *h = self.meld(*h, pu);
            self.node[pu].mark = false;
            pu = ppu;
        }
    }

    /// Decrease `u`'s key by `delta` and restore heap order, cutting `u`
    /// from its parent (and cascading further up) if needed. O(1) amortized.
    pub fn decreasekey(&mut self, u: usize, delta: i64, h: usize) -> usize {
        self.node[u].key -= delta;
        let pu = self.node[u].parent;
        if pu == 0 {
            return if self.node[u].key < self.node[h].key {
                u
            } else {
                h
            };
        }
        let rep = self.remove_from_cycle(u);
        if self.node[pu].child == u {
            self.node[pu].child = rep;
        }
        self.node[pu].rank -= 1;
        self.node[u].parent = 0;
        let mut h2 = self.meld(h, u);
        self.node[u].mark = false;
        self.cascading_cut(pu, &mut h2);
        h2
    }

    fn link_trees(&mut self, a: usize, b: usize) -> usize {
        let (small, large) = if self.node[a].key <= self.node[b].key {
            (a, b)
        } else {
            (b, a)
        };
        self.node[large].parent = small;
        self.node[large].mark = false;
        if self.node[small].child == 0 {
            self.node[small].child = large;
        } else {
            let c = self.node[small].child;
            self.splice_cycles(c, large);
        }
        self.node[small].rank += 1;
        small
    }

    fn consolidate(&mut self, start: usize) -> usize {
        let mut roots = Vec::new();
        let mut x = start;
        loop {
            roots.push(x);
            x = self.node[x].right;
            if x == start {
                break;
            }
        }
        let mut rvec = [0usize; MAXRANK + 1];
        for r in roots {
            let mut cur = r;
            self.node[cur].left = cur;
            self.node[cur].right = cur;
            loop {
                let rk = self.node[cur].rank as usize;
                debug_assert!(rk <= MAXRANK);
                if rvec[rk] == 0 {
                    rvec[rk] = cur;
                    break;
                }
                let other = rvec[rk];
                rvec[rk] = 0;
                cur = self.link_trees(cur, other);
            }
        }
        let mut result = 0usize;
        for slot in rvec {
            if slot == 0 {
                continue;
            }
            result = self.meld(result, slot);
        }
        result
    }

    /// Remove and return the root of `h` (the minimum), along with the
    /// resulting heap.
    pub fn deletemin(&mut self, h: usize) -> (usize, usize) {
        let c = self.node[h].child;
        if c != 0 {
            let mut x = c;
            loop {
                self.node[x].parent = 0;
                x = self.node[x].right;
                if x == c {
                    break;
                }
            }
            self.splice_cycles(h, c);
        }
        let rep = self.remove_from_cycle(h);
        self.node[h].child = 0;
        self.node[h].rank = 0;
        self.node[h].mark = false;
        self.node[h].parent = 0;
        if rep == 0 {
            return (h, 0);
        }
        (h, self.consolidate(rep))
    }

    /// Remove `u` (not necessarily the minimum) from `h`.
    pub fn remove(&mut self, u: usize, h: usize) -> (usize, usize) {
        let delta = self.node[u].key - self.node[h].key + 1;
        let h2 = self.decreasekey(u, delta, h);
        debug_assert_eq!(h2, u);
        self.deletemin(h2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(n: usize, keys: &[(usize, i64)]) -> FibonacciHeap {
        let mut h = FibonacciHeap::new(n);
        for &(x, k) in keys {
            h.setkey(x, k);
        }
        h
    }

    #[test]
    fn insert_then_deletemin_yields_sorted_order() {
        let mut h = make(5, &[(1, 5), (2, 3), (3, 8), (4, 1), (5, 9)]);
        let mut root = 0;
        for i in 1..=5 {
            root = h.insert(i, root);
        }
        let mut out = Vec::new();
        while root != 0 {
            let (m, rest) = h.deletemin(root);
            out.push(h.key(m));
            root = rest;
        }
        assert_eq!(out, vec![1, 3, 5, 8, 9]);
    }

    #[test]
    fn decreasekey_below_root_becomes_new_root() {
        let mut h = make(3, &[(1, 10), (2, 20), (3, 30)]);
        let mut root = h.insert(1, 0);
        root = h.insert(2, root);
        root = h.insert(3, root);
        root = h.decreasekey(3, 25, root); // 30 -> 5, smaller than everything
        assert_eq!(h.key(root), 5);
    }

    #[test]
    fn decreasekey_cut_detaches_child_and_marks_parent() {
        // Consolidate a few singletons into trees with
        // real parent/child structure, then cut a child out from under its
        // parent via decreasekey and confirm the parent gets marked (first
        // cut) while the cut node itself is clean (no parent, unmarked).
        let mut h = make(6, &[(1, 1), (2, 10), (3, 20), (4, 30), (5, 40), (6, 50)]);
        let mut root = 0;
        for i in 1..=6 {
            root = h.insert(i, root);
        }
        let (_min, after) = h.deletemin(root); // forces rank-bucket consolidation
        root = after;

        let victim = (1..=6)
            .find(|&i| h.node[i].parent != 0)
            .expect("consolidation should have produced at least one child");
        let parent = h.node[victim].parent;
        assert!(!h.is_marked(parent));

        let below_everything = h.key(victim) - (h.key(root) - 1);
        root = h.decreasekey(victim, below_everything, root);

        assert_eq!(h.node[victim].parent, 0);
        assert!(!h.is_marked(victim));
        assert!(h.is_marked(parent) || h.node[parent].parent == 0);
        assert_eq!(root, victim);

        let mut out = Vec::new();
        while root != 0 {
            let (m, rest) = h.deletemin(root);
            out.push(h.key(m));
            root = rest;
        }
        let mut sorted = out.clone();
        sorted.sort_unstable();
        assert_eq!(out, sorted);
    }

    #[test]
    fn remove_arbitrary_node_shrinks_heap() {
        let mut h = make(4, &[(1, 5), (2, 3), (3, 8), (4, 1)]);
        let mut root = 0;
        for i in 1..=4 {
            root = h.insert(i, root);
        }
        let (removed, rest) = h.remove(3, root);
        assert_eq!(removed, 3);
        let mut out = Vec::new();
        let mut r = rest;
        while r != 0 {
            let (m, next) = h.deletemin(r);
            out.push(h.key(m));
            r = next;
        }
        assert_eq!(out, vec![1, 3, 5]);
    }
}
