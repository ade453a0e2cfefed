use serde::{Deserialize, Serialize};

/// Details of scoring are encapsulated in this structure.
///
/// A linear gap model is used, so that the score of a gap of length `k` is
/// `gap_penalty * k`.  All quantities are integers; traceback relies on
/// exact equality when re-deriving a cell from its predecessors, so the
/// engine never touches floating point.
///
/// The engine performs no range validation: a non-negative mismatch or gap
/// score is unusual but legal, and exercised by the tie-break tests.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
pub struct Scoring {
    /// Score applied when the two symbols are equal (typically positive).
    pub match_score: i32,
    /// Score applied when the two symbols differ (typically negative).
    pub mismatch_score: i32,
    /// Score applied per inserted or deleted symbol (typically negative).
    pub gap_penalty: i32,
}

impl Scoring {
    pub fn new(match_score: i32, mismatch_score: i32, gap_penalty: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_penalty,
        }
    }

    /// The substitution score for aligning symbol `a` against symbol `b`.
    #[inline]
    pub fn substitution(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}
