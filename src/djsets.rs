//! Disjoint Set Union (union-by-rank, path compression).
//!
//! Grounded on `Djsets_flt`'s node layout (`cpp/include/Djsets_flt.h`:
//! `struct pnode { index p; int rank; }`), reproduced here in plain
//! single-threaded index-arena form: plain fields, no atomics.

/// Classical union-find over `1..=n`.
pub struct Djsets {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl Djsets {
    /// Create `n` singleton classes, each its own root of rank 0.
    pub fn new(n: usize) -> Self {
        let mut d = Djsets {
            parent: vec![0; n + 1],
            rank: vec![0; n + 1],
        };
        for i in 0..=n {
            d.parent[i] = i;
        }
        d
    }

    /// The index universe `n`.
    pub fn n(&self) -> usize {
        self.parent.len() - 1
    }

    /// Grow the universe to `n1 >= n`, adding fresh singletons.
    pub fn expand(&mut self, n1: usize) {
        let n = self.n();
        if n1 <= n {
            return;
        }
        self.parent.resize(n1 + 1, 0);
        self.rank.resize(n1 + 1, 0);
        for i in (n + 1)..=n1 {
            self.parent[i] = i;
        }
    }

    /// Reset every index to a singleton class.
    pub fn clear_all(&mut self) {
        for i in 0..=self.n() {
            self.parent[i] = i;
            self.rank[i] = 0;
        }
    }

    /// Reset a single index to a singleton class of rank 0.
    pub fn clear(&mut self, x: usize) {
        debug_assert!(x <= self.n());
        self.parent[x] = x;
        self.rank[x] = 0;
    }

    /// The canonical element of `x`'s class, compressing every node on the
    /// find path to be a direct child of the root.
    pub fn find(&mut self, x: usize) -> usize {
        debug_assert!(x != 0 && x <= self.n());
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Unite the classes of canonical elements `a` and `b` (distinct
    /// classes, both already canonical) by rank, breaking ties toward `a`.
    /// Returns the canonical element of the merged class.
    pub fn link(&mut self, a: usize, b: usize) -> usize {
        debug_assert!(a != b);
        debug_assert!(self.parent[a] == a && self.parent[b] == b);
        if self.rank[a] < self.rank[b] {
            self.parent[a] = b;
            b
        } else if self.rank[a] > self.rank[b] {
            self.parent[b] = a;
            a
        } else {
            self.parent[b] = a;
            self.rank[a] += 1;
            a
        }
    }

    /// The rank recorded for a canonical element (for testing the
    /// `rank <= log2(class size)` invariant).
    pub fn rank_of(&self, root: usize) -> u32 {
        self.rank[root]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_find_sequence() {
        // link(1,2), link(3,4), link(1,3), link(5,6) over 10 singletons
        let mut d = Djsets::new(10);
        let r = d.find(1);
        let r2 = d.find(2);
        d.link(r, r2);
        let r3 = d.find(3);
        let r4 = d.find(4);
        d.link(r3, r4);
        let r1 = d.find(1);
        let r3b = d.find(3);
        d.link(r1, r3b);
        let r5 = d.find(5);
        let r6 = d.find(6);
        d.link(r5, r6);

        assert_eq!(d.find(1), d.find(4));
        assert_ne!(d.find(1), d.find(5));

        let class_of_1 = d.find(1);
        let members: Vec<usize> = (1..=10).filter(|&x| d.find(x) == class_of_1).collect();
        assert_eq!(members.len(), 4);
    }

    #[test]
    fn rank_bounds_log2_class_size() {
        let mut d = Djsets::new(64);
        let mut root = d.find(1);
        for i in 2..=64 {
            let ri = d.find(i);
            root = d.link(root, ri);
        }
        let class_size = 64u32;
        let max_rank = 32 - (class_size - 1).leading_zeros(); // floor(log2(63))+1
        assert!(d.rank_of(root) <= max_rank);
    }

    #[test]
    fn clear_restores_singleton() {
        let mut d = Djsets::new(5);
        let a = d.find(1);
        let b = d.find(2);
        d.link(a, b);
        assert_eq!(d.find(1), d.find(2));
        let root = d.find(1);
        d.clear(root);
        // after clearing the root to a fresh singleton, 2 no longer points
        // at a valid canonical chain through the cleared node in general
        // use, but the cleared node itself is its own singleton class.
        assert_eq!(d.find(root), root);
    }

    #[test]
    fn n_zero_and_one() {
        let mut d0 = Djsets::new(0);
        assert_eq!(d0.n(), 0);
        let mut d1 = Djsets::new(1);
        assert_eq!(d1.find(1), 1);
    }

    #[test]
    fn expand_preserves_existing_classes() {
        let mut d = Djsets::new(2);
        let a = d.find(1);
        let b = d.find(2);
        d.link(a, b);
        d.expand(5);
        assert_eq!(d.find(1), d.find(2));
        assert_eq!(d.find(5), 5);
    }
}
