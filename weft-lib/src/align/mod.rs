pub mod alignment;
pub mod io;
pub mod matrix;
pub mod presenter;
pub mod scoring;
pub mod traceback;

pub use alignment::{Alignment, GAP};
pub use matrix::ScoreMatrix;
pub use scoring::Scoring;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// The modes of alignment supported by the engine.
///
/// Local alignment finds the best-scoring alignment of any substring pair;
/// scores are floored at zero so negative-scoring regions restart instead of
/// being extended.  Global alignment charges every prefix pair in full,
/// anchored on complete consumption of the second sequence.
///
/// The default alignment mode is Local.
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum AlignmentMode {
    /// Aligns the best-scoring substring of seq1 versus the best-scoring
    /// substring of seq2.
    #[default]
    Local,
    /// Aligns a prefix of seq1 versus the full seq2.
    Global,
}

impl Display for AlignmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Global => write!(f, "global"),
        }
    }
}

impl FromStr for AlignmentMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(AlignmentMode::Local),
            "global" => Ok(AlignmentMode::Global),
            _ => Err(anyhow!("Invalid alignment mode: {}", s)),
        }
    }
}

/// Aligns `seq1` against `seq2` under the given scoring parameters and mode.
///
/// Builds the score matrix, selects the traceback starting cell, and
/// reconstructs one optimal alignment.  The matrix is returned alongside the
/// alignment so callers can render or inspect it.
pub fn align(
    seq1: &[u8],
    seq2: &[u8],
    scoring: Scoring,
    mode: AlignmentMode,
) -> (ScoreMatrix, Alignment) {
    let matrix = ScoreMatrix::build(seq1, seq2, scoring, mode);
    let start = traceback::starting_cell(&matrix, mode);
    let alignment = traceback::traceback(&matrix, seq1, seq2, scoring, mode, start);
    (matrix, alignment)
}
