use std::fmt;

use serde::{Deserialize, Serialize};

use super::AlignmentMode;

/// Placeholder symbol for an inserted/deleted position in one sequence
/// relative to the other.
pub const GAP: u8 = b'-';

/// We consider alignment between two sequences x and y, where x is seq1 and
/// y is seq2.  An alignment consists of a score, the start and end positions
/// of the aligned region on each sequence, the original sequence lengths,
/// and the two equal-length gapped sequences produced by traceback, in
/// start-to-end orientation.
///
/// The end positions `(xend, yend)` are the matrix cell from which traceback
/// started: the best cell anywhere in the matrix (local) or the best cell in
/// the last column (global).
#[derive(Debug, Eq, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct Alignment {
    /// Alignment score, i.e. the score matrix value at the starting cell.
    pub score: i32,

    /// Start position of the aligned region in seq1 (0-based).
    pub xstart: usize,

    /// End position of the aligned region in seq1 (0-based exclusive).
    pub xend: usize,

    /// Start position of the aligned region in seq2 (0-based).
    pub ystart: usize,

    /// End position of the aligned region in seq2 (0-based exclusive).
    pub yend: usize,

    /// Length of the original seq1.
    pub xlen: usize,

    /// Length of the original seq2.
    pub ylen: usize,

    /// seq1 with gap markers, start-to-end.
    pub gapped_x: Vec<u8>,

    /// seq2 with gap markers, start-to-end.
    pub gapped_y: Vec<u8>,

    pub mode: AlignmentMode,
}

impl Alignment {
    /// The matrix cell from which traceback started.
    pub fn starting_cell(&self) -> (usize, usize) {
        (self.xend, self.yend)
    }

    /// The number of alignment columns, gaps included.
    pub fn len(&self) -> usize {
        self.gapped_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gapped_x.is_empty()
    }

    /// The aligned region of seq1 with gap markers removed.
    pub fn ungapped_x(&self) -> Vec<u8> {
        self.gapped_x.iter().copied().filter(|&b| b != GAP).collect()
    }

    /// The aligned region of seq2 with gap markers removed.
    pub fn ungapped_y(&self) -> Vec<u8> {
        self.gapped_y.iter().copied().filter(|&b| b != GAP).collect()
    }

    // Validate that the gapped pair and the spans are mutually consistent.
    pub fn validate(&self) {
        assert_eq!(self.gapped_x.len(), self.gapped_y.len());
        assert_eq!(self.xend - self.xstart, self.ungapped_x().len(), "x span");
        assert_eq!(self.yend - self.ystart, self.ungapped_y().len(), "y span");
        assert!(self.xend <= self.xlen);
        assert!(self.yend <= self.ylen);
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x-span: {}-{}/{} y-span: {}-{}/{} score: {} mode: {} x: {} y: {}",
            self.xstart,
            self.xend,
            self.xlen,
            self.ystart,
            self.yend,
            self.ylen,
            self.score,
            self.mode,
            String::from_utf8_lossy(&self.gapped_x),
            String::from_utf8_lossy(&self.gapped_y),
        )
    }
}
