//! Recursive sort coordinator: decides per call whether the two child ranges
//! of a partition run inline or fork as schedulable tasks.

use crate::joiner::Joiner;
use crate::partition::partition;
use crate::Sortable;

/// Sorts `v`, forking child ranges while the sub-problem size `len - 1` is at
/// least `cutoff`.
///
/// The child slices come from `split_at_mut`, so sibling tasks hold disjoint
/// `&mut` borrows and can never read or write the same index; the buffer
/// needs no locks. `J::join` does not return until both subtrees are fully
/// sorted, which makes the return of the top-level call the only barrier the
/// caller needs.
///
/// Below the cutoff the whole subtree is handed to the sequential sort: once
/// sub-problems are small, task scheduling would dominate the actual work.
pub(crate) fn quicksort<T: Sortable, J: Joiner>(v: &mut [T], cutoff: usize) {
    let len = v.len();
    if len < 2 {
        return;
    }

    let (lt_len, ge_start) = partition(v);

    if len - 1 < cutoff {
        quicksort_seq(&mut v[..lt_len]);
        quicksort_seq(&mut v[ge_start..]);
        return;
    }

    let (head, rest) = v.split_at_mut(ge_start);
    let left = &mut head[..lt_len];

    J::join(
        || quicksort::<T, J>(left, cutoff),
        || quicksort::<T, J>(rest, cutoff),
    );
}

/// Sequential quicksort over `v`, the single-threaded baseline and the
/// below-cutoff leaf of the parallel sort.
///
/// Recurses into the smaller child and loops on the larger one, which bounds
/// stack depth by `log2(len)` even when the deterministic midpoint pivot
/// degenerates.
pub(crate) fn quicksort_seq<T: Sortable>(mut v: &mut [T]) {
    while v.len() >= 2 {
        let (lt_len, ge_start) = partition(v);

        let (head, rest) = v.split_at_mut(ge_start);
        let left = &mut head[..lt_len];

        if left.len() <= rest.len() {
            quicksort_seq(left);
            v = rest;
        } else {
            quicksort_seq(rest);
            v = left;
        }
    }
}
