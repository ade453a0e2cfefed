use serde::{Deserialize, Serialize};

use super::{scoring::Scoring, AlignmentMode};

/// The dynamic programming score matrix `H`, with `m + 1` rows and `n + 1`
/// columns for sequences of length `m` (seq1) and `n` (seq2).  `H[i][j]`
/// holds the best alignment score between the length-`i` prefix of seq1 and
/// the length-`j` prefix of seq2 under the active mode's policy.  Row 0 and
/// column 0 are the empty-prefix boundary.  Stored row-major; built once per
/// run and read-only thereafter.
#[derive(Default, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct ScoreMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<i32>,
}

impl ScoreMatrix {
    /// Creates a zero-filled matrix for sequences of length `m` and `n`.
    pub fn new(m: usize, n: usize) -> Self {
        let rows = m + 1;
        let cols = n + 1;
        ScoreMatrix {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        debug_assert!(i < self.rows);
        debug_assert!(j < self.cols);
        self.cells[i * self.cols + j]
    }

    #[inline(always)]
    pub fn set(&mut self, i: usize, j: usize, v: i32) {
        debug_assert!(i < self.rows);
        debug_assert!(j < self.cols);
        self.cells[i * self.cols + j] = v;
    }

    /// Fills the matrix for `seq1` versus `seq2`.
    ///
    /// Both modes share the recurrence over the diagonal, up, and left
    /// neighbors; they differ only in the boundary initialization and in
    /// whether interior cells are floored at zero:
    /// - `Local`: zero boundary, `H[i][j] = max(0, diag, up, left)`.  The
    ///   floor is what makes the alignment local: a negative-scoring region
    ///   restarts rather than being extended.
    /// - `Global`: cumulative gap boundary (`H[0][j] = j * gap`,
    ///   `H[i][0] = i * gap`), `H[i][j] = max(diag, up, left)` with no floor.
    ///
    /// Runs in `O(m * n)` time and space; empty sequences yield a degenerate
    /// single-row or single-column matrix.  Pure: identical inputs produce an
    /// identical matrix.
    pub fn build(seq1: &[u8], seq2: &[u8], scoring: Scoring, mode: AlignmentMode) -> Self {
        let (m, n) = (seq1.len(), seq2.len());
        let mut h = Self::new(m, n);
        if mode == AlignmentMode::Global {
            for j in 1..=n {
                h.set(0, j, j as i32 * scoring.gap_penalty);
            }
            for i in 1..=m {
                h.set(i, 0, i as i32 * scoring.gap_penalty);
            }
        }
        // Row-major fill: every interior cell depends only on its up, left,
        // and diagonal-up-left neighbors, which are already finalized.
        for i in 1..=m {
            for j in 1..=n {
                let diag = h.get(i - 1, j - 1) + scoring.substitution(seq1[i - 1], seq2[j - 1]);
                let up = h.get(i - 1, j) + scoring.gap_penalty;
                let left = h.get(i, j - 1) + scoring.gap_penalty;
                let best = diag.max(up).max(left);
                let score = match mode {
                    AlignmentMode::Local => best.max(0),
                    AlignmentMode::Global => best,
                };
                h.set(i, j, score);
            }
        }
        h
    }
}
