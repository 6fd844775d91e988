//! Self-adjusting and amortized data structures for graph algorithms.
//!
//! `pathcore` provides the index-addressed structures that graph algorithm
//! implementations (max-flow, matching, shortest paths, MST, ...) build on
//! top of: a disjoint-set union, a self-adjusting (splay) search tree, a
//! path set of such trees used to represent dynamic (link-cut) trees,
//! leftist and Fibonacci heaps, a d-ary array heap, and a two-choice
//! fingerprint hash map.
//!
//! Every structure is parameterized by an index universe `1..=n` (`0` is a
//! reserved "no such element" sentinel) and is single-threaded and
//! non-suspending: see the crate's `SPEC_FULL.md` for the full contract.

pub mod dlists;
pub mod list_pair;
pub mod djsets;
pub mod djsets_flt;
pub mod ssets_sat;
pub mod path_set;
pub mod dtrees;
pub mod leftist_heap;
pub mod lazy_leftist_heap;
pub mod fibonacci_heap;
pub mod heap_d;
pub mod hash_map;
pub mod map_sat;
pub mod graph;

mod error;

pub use error::Error;

/// Sentinel returned by map/search operations when a key is absent.
pub const UNDEF_VAL: i32 = i32::MIN;

/// An index into one of this crate's structures. `0` means "no such element".
pub type Index = usize;
