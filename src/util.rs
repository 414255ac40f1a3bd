//! Small helpers shared across filter widths.

use alloc::collections::BTreeSet;

/// Checks a collection of keys has all distinct values. Only used behind
/// `debug_assertions` — a release build trusts the caller's documented
/// uniqueness contract rather than paying for the check.
#[cfg(debug_assertions)]
pub(crate) fn all_distinct(keys: impl IntoIterator<Item = u64>) -> bool {
    let mut seen = BTreeSet::new();
    keys.into_iter().all(move |k| seen.insert(k))
}

/// Upper bound on supported hash segments. `s = 3` is the studied case;
/// this cap just keeps the per-query candidate-slot scratch space on the
/// stack instead of the heap.
pub(crate) const MAX_SEGMENTS: usize = 8;
