// ============================================================
// Distance Matrix
// ============================================================
// Grid of (m+1) rows by (n+1) columns, stored row-major in one
// Vec<usize>:
//
//          ""  b0  b1  b2 ...
//     ""    0   1   2   3
//     a0    1   .   .   .
//     a1    2   .   .   .
//
// Row 0 and column 0 are the base cases (distance to/from the
// empty sequence is the index). Every other cell is
//
//   min( cell(i-1, j)   + 1,        deletion of a[i-1]
//        cell(i,   j-1) + 1,        insertion of b[j-1]
//        cell(i-1, j-1) + subst )   subst = 0 if a[i-1] == b[j-1]
//
// Counts are integers, so the matrix is exact for any length.

/// The fully populated Wagner–Fischer matrix for one pair of sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows:  usize,
    cols:  usize,
    cells: Vec<usize>,
}

impl DistanceMatrix {
    /// Number of rows, `len(a) + 1`
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `len(b) + 1`
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell (i, j): the distance between `a[..i]` and `b[..j]`.
    ///
    /// # Panics
    /// If `i >= rows()` or `j >= cols()`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({i}, {j}) outside {}x{} matrix",
            self.rows,
            self.cols
        );
        self.cells[i * self.cols + j]
    }

    /// The bottom-right cell: the edit distance of the full sequences
    pub fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }

    /// Borrow row `i` as a slice
    pub fn row(&self, i: usize) -> &[usize] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }
}

/// Build the full distance matrix between `a` and `b`.
pub fn distance_matrix<T: Eq>(a: &[T], b: &[T]) -> DistanceMatrix {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut cells = vec![0usize; rows * cols];

    // ── Base cases ────────────────────────────────────────────────────────────
    for (j, cell) in cells[..cols].iter_mut().enumerate() {
        *cell = j;
    }
    for i in 0..rows {
        cells[i * cols] = i;
    }

    // ── Recurrence ────────────────────────────────────────────────────────────
    for i in 1..rows {
        for j in 1..cols {
            let subst    = usize::from(a[i - 1] != b[j - 1]);
            let deletion = cells[(i - 1) * cols + j] + 1;
            let insert   = cells[i * cols + j - 1] + 1;
            let diagonal = cells[(i - 1) * cols + j - 1] + subst;
            cells[i * cols + j] = deletion.min(insert).min(diagonal);
        }
    }

    DistanceMatrix { rows, cols, cells }
}
