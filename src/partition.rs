//! In-place Hoare partition around a deterministic midpoint pivot.

use crate::Sortable;

/// Partitions `v` around the value at its midpoint index `(len - 1) / 2`.
///
/// Returns `(lt_len, ge_start)` with `lt_len <= ge_start`: every element of
/// `v[..lt_len]` is `<= pivot` and every element of `v[ge_start..]` is
/// `>= pivot`. Elements between the two (at most a small crossing gap) equal
/// the pivot and are already in final position. Because the child ranges
/// never overlap, sibling sorts can run concurrently without touching the
/// same index.
///
/// Two cursors sweep inward, swapping out-of-order pairs, until they cross.
/// `lt_len`/`ge_start` are the half-open rendition of the classic inclusive
/// `(i, j)` result, which keeps the cursors in `usize` and maps directly onto
/// `split_at_mut`.
///
/// O(len) time, O(1) space, no allocation. Callers must not pass slices
/// shorter than 2 elements, there would be nothing to partition.
pub(crate) fn partition<T: Sortable>(v: &mut [T]) -> (usize, usize) {
    debug_assert!(v.len() >= 2);

    let pivot = v[(v.len() - 1) / 2];

    let mut l = 0;
    let mut r = v.len();

    loop {
        while l < r && v[l] < pivot {
            l += 1;
        }

        while l < r && v[r - 1] > pivot {
            r -= 1;
        }

        if l >= r {
            break;
        }

        // Both scans stopped on a swappable pair: v[l] >= pivot <= v[r - 1].
        r -= 1;
        v.swap(l, r);
        l += 1;
    }

    // The first pass always stops both cursors at or before the pivot index
    // and swaps at least once, so l >= 1 and r <= len - 1 here. Both child
    // ranges are strictly smaller than the parent, recursion terminates.
    (r, l)
}
