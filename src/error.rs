use thiserror::Error as ThisError;

/// Recoverable construction-time failures.
///
/// Per `SPEC_FULL.md` §2, precondition violations and invalid handles remain
/// panics/assertions (they are programmer errors), but a capacity ceiling
/// chosen by the caller is a setup mistake a caller can reasonably recover
/// from, so structures with a hard capacity limit return this instead.
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum Error {
    /// The requested index universe exceeds a structure's hard capacity limit.
    #[error("requested capacity {requested} exceeds the maximum of {max}")]
    CapacityExceeded {
        /// The `n` the caller asked for.
        requested: usize,
        /// The hard ceiling the structure enforces.
        max: usize,
    },
}
