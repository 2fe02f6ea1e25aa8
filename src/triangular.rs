//! Triangular-number arithmetic for packed symmetric storage.

use std::ops::Range;

/// Returns T(n) = 0 + 1 + ... + n, the number of stored cells in the first
/// `n` rows of a packed lower triangle (diagonal included).
pub(crate) fn triangular(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Returns the largest `n` such that `triangular(n) <= k`, i.e. the packed
/// row that linear position `k` falls in.
pub(crate) fn triangular_inv_floor(k: usize) -> usize {
    // n^2 + n - 2k = 0, solved for the positive root and rounded down.
    ((8 * k + 1).isqrt() - 1) / 2
}

/// Linear positions of packed row `n`, which holds the cells `(0, n)` through
/// `(n, n)`.
pub(crate) fn packed_row(n: usize) -> Range<usize> {
    triangular(n)..triangular(n + 1)
}
