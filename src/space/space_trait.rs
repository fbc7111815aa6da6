// ======================================================================================
/*                                   Space Trait                                       */
// ======================================================================================
/*
Read/write access to a square, periodic, binary lattice.

Coordinates are `isize`; every index is resolved with a Euclidean modulo, so
negative and out-of-range indices **wrap** onto the torus instead of failing.

- `side()` returns `n` for an `n × n` lattice. The total site count is `n^2`.
- `linear_size()` equals `side() * side()`.
- Cell values are `0` (dead) or `1` (alive); writes store any non-zero value as `1`.
*/

/// Moore-neighborhood offsets as `(d_row, d_col)`.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

pub trait Space {
    /// Borrow the row-major backing slice (length `n^2`).
    fn data(&self) -> &[u8];
    /// Side length `n`.
    fn side(&self) -> usize;
    /// `n^2`: total number of sites.
    fn linear_size(&self) -> usize;

    /// Read the cell at `(i, j)` after wrapping both indices.
    fn get(&self, i: isize, j: isize) -> u8;
    /// Write the cell at `(i, j)` after wrapping both indices.
    fn set(&mut self, i: isize, j: isize, val: u8);

    /// Fill every site with `val` (parallel).
    fn set_all(&mut self, val: u8);

    /// Sum of the 8 toroidally wrapped Moore neighbors of `(i, j)`.
    ///
    /// On lattices with `n < 3` some wrapped offsets land on the same site (or on
    /// `(i, j)` itself); each offset is still counted once, as a shifted-sum would.
    #[inline]
    fn count_live_neighbors(&self, i: isize, j: isize) -> u8 {
        MOORE_OFFSETS
            .iter()
            .map(|&(di, dj)| self.get(i + di, j + dj))
            .sum()
    }

    /// Number of live cells, in `0..=n^2`.
    #[inline]
    fn total_live(&self) -> usize {
        self.data().iter().map(|&c| c as usize).sum()
    }
}
