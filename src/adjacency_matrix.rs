use std::fmt::{Debug, Formatter};

use bitvec::vec::BitVec;

use crate::triangular::{packed_row, triangular, triangular_inv_floor};

/// Rows beyond this are elided from debug output.
const DEBUG_ROW_LIMIT: usize = 20;

/// Symmetric boolean matrix stored as a packed lower triangle of bits.
///
/// Cells `(i, j)` and `(j, i)` share a single bit at linear position
/// `triangular(max(i, j)) + min(i, j)`, so symmetry holds by construction.
/// The diagonal is stored, which permits self-loops.
///
/// The position of a cell does not depend on the matrix size, so growing the
/// matrix only appends zeroed storage and never moves existing cells.
///
/// ```text
/// ⎛ 0 1 3 6 ⎞
/// ⎟ 1 2 4 7 ⎟
/// ⎟ 3 4 5 8 ⎟
/// ⎝ 6 7 8 9 ⎠
/// ```
#[derive(Clone)]
pub struct SymmetricBitMatrix {
    bits: BitVec,
    /// Side length of the square matrix.
    size: usize,
}

impl SymmetricBitMatrix {
    /// Creates a `size` × `size` matrix with every cell unset.
    pub fn with_size(size: usize) -> Self {
        let storage_size = triangular(size);
        let mut bits = BitVec::with_capacity(storage_size);
        bits.resize(storage_size, false);
        Self { bits, size }
    }

    /// Side length of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    fn position(&self, i: usize, j: usize) -> Option<usize> {
        (i < self.size && j < self.size).then(|| Self::unchecked_position(i, j))
    }

    fn unchecked_position(i: usize, j: usize) -> usize {
        triangular(i.max(j)) + i.min(j)
    }

    /// Returns whether cell `(i, j)` is set.  Cells outside the matrix read
    /// as unset.
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.position(i, j).is_some_and(|pos| self.bits[pos])
    }

    /// Sets cell `(i, j)` (and therefore `(j, i)`) to `value`, returning the
    /// previous value.
    ///
    /// # Panics
    ///
    /// Panics if either index is not less than [`size`](Self::size).
    pub fn set(&mut self, i: usize, j: usize, value: bool) -> bool {
        assert!(
            i < self.size && j < self.size,
            "cell ({i}, {j}) outside {0}x{0} matrix",
            self.size
        );
        self.bits.replace(Self::unchecked_position(i, j), value)
    }

    /// Enlarges the matrix to `new_size` × `new_size`.  Existing cells keep
    /// their values and new cells are unset.  Does nothing if the matrix is
    /// already at least that large.
    pub fn grow(&mut self, new_size: usize) {
        if new_size <= self.size {
            return;
        }
        self.bits.resize(triangular(new_size), false);
        self.size = new_size;
    }

    /// Unsets the cells `(n, 0)` through `(n, n)`.
    pub fn clear_lower_row(&mut self, n: usize) {
        self.bits[packed_row(n)].fill(false);
    }

    /// Removes row and column `k` from the leading `len` × `len` block,
    /// shifting every higher row and column down by one.  Cells not in row
    /// or column `k` keep their values under the shifted indices, and the
    /// vacated last row of the block is unset.
    pub fn remove_row_and_column(&mut self, k: usize, len: usize) {
        debug_assert!(k < len && len <= self.size);
        let old_index = |x: usize| if x < k { x } else { x + 1 };
        // Targets are visited in increasing linear order and every source
        // lies at or after its target, so no source is overwritten before it
        // is read.
        for hi in k..len - 1 {
            for lo in 0..=hi {
                let from = Self::unchecked_position(old_index(lo), hi + 1);
                let bit = self.bits[from];
                self.bits.set(triangular(hi) + lo, bit);
            }
        }
        self.clear_lower_row(len - 1);
    }

    /// Columns `j < len` whose cell in row `i` is set, in increasing order.
    pub fn row(&self, i: usize, len: usize) -> impl Iterator<Item = usize> + '_ {
        (0..len.min(self.size)).filter(move |&j| self.get(i, j))
    }

    /// Iterates over set cells as `(i, j)` with `i <= j`, ordered by `j`
    /// then `i`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.bits.iter_ones().map(|pos| {
            let hi = triangular_inv_floor(pos);
            (pos - triangular(hi), hi)
        })
    }

    /// Number of set cells, counting each symmetric pair once.
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Unsets every cell without changing the size.
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }
}

impl Debug for SymmetricBitMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SymmetricBitMatrix {{")?;
        let write_row = |f: &mut Formatter<'_>, n: usize| -> std::fmt::Result {
            for (j, pos) in packed_row(n).enumerate() {
                if f.alternate() && j > 0 && j % 5 == 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", if self.bits[pos] { '1' } else { '0' })?;
            }
            Ok(())
        };
        if f.alternate() {
            writeln!(f)?;
            for n in 0..self.size {
                write!(f, "    ")?;
                if n >= DEBUG_ROW_LIMIT {
                    writeln!(f, "...")?;
                    break;
                }
                write_row(f, n)?;
                writeln!(f)?;
            }
            write!(f, "}}")
        } else {
            for n in 0..self.size.min(DEBUG_ROW_LIMIT) {
                write!(f, " ")?;
                write_row(f, n)?;
            }
            if self.size > DEBUG_ROW_LIMIT {
                write!(f, " ...")?;
            }
            write!(f, " }}")
        }
    }
}
