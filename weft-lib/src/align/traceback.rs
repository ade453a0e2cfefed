use super::{
    alignment::{Alignment, GAP},
    matrix::ScoreMatrix,
    scoring::Scoring,
    AlignmentMode,
};

/// Returns the cell from which traceback starts for the given mode.
///
/// - `Local`: the maximum value anywhere in the matrix, scanning interior
///   cells row-major with a greater-or-equal update, so the LAST cell
///   holding the running maximum wins.  An all-zero matrix leaves the start
///   at `(0, 0)`, where traceback terminates immediately.
/// - `Global`: the maximum value in the last column, rows top to bottom with
///   a strictly-greater update, so the FIRST maximal row wins.
///
/// The two tie-break rules are deliberate, reproducible contracts; do not
/// unify them.  Global mode scans only the last column, never the last row:
/// the alignment must consume all of seq2, while any suffix of seq1 may be
/// left unaligned by starting from a higher row.
pub fn starting_cell(h: &ScoreMatrix, mode: AlignmentMode) -> (usize, usize) {
    match mode {
        AlignmentMode::Local => best_cell_overall(h),
        AlignmentMode::Global => best_cell_in_last_column(h),
    }
}

fn best_cell_overall(h: &ScoreMatrix) -> (usize, usize) {
    let mut best = 0;
    let mut cell = (0, 0);
    for i in 1..h.rows() {
        for j in 1..h.cols() {
            if h.get(i, j) >= best {
                best = h.get(i, j);
                cell = (i, j);
            }
        }
    }
    cell
}

fn best_cell_in_last_column(h: &ScoreMatrix) -> (usize, usize) {
    let n = h.cols() - 1;
    let mut best = h.get(0, n);
    let mut row = 0;
    for i in 1..h.rows() {
        if h.get(i, n) > best {
            best = h.get(i, n);
            row = i;
        }
    }
    (row, n)
}

/// Walks backward from `start`, reconstructing one optimal alignment
/// consistent with the recurrence that produced each score.
///
/// At every step the three candidate predecessor scores are re-derived from
/// the scoring parameters and matched against the current cell by exact
/// integer equality.  The match priority differs by mode (diagonal, up,
/// left for local; diagonal, left, up for global) and both orders are
/// behavioral contracts.
///
/// If no candidate matches (possible only with an inconsistent matrix), the
/// walk stops immediately and the partial alignment built so far is
/// returned; callers must treat a truncated alignment as a valid outcome.
pub fn traceback(
    h: &ScoreMatrix,
    seq1: &[u8],
    seq2: &[u8],
    scoring: Scoring,
    mode: AlignmentMode,
    start: (usize, usize),
) -> Alignment {
    match mode {
        AlignmentMode::Local => traceback_local(h, seq1, seq2, scoring, start),
        AlignmentMode::Global => traceback_global(h, seq1, seq2, scoring, start),
    }
}

/// Local walk: a zero cell is the local-alignment boundary, so termination
/// is intrinsic to the floor applied during the fill.
fn traceback_local(
    h: &ScoreMatrix,
    seq1: &[u8],
    seq2: &[u8],
    scoring: Scoring,
    start: (usize, usize),
) -> Alignment {
    let (mut i, mut j) = start;
    let mut gapped_x: Vec<u8> = Vec::with_capacity(i + j);
    let mut gapped_y: Vec<u8> = Vec::with_capacity(i + j);
    while h.get(i, j) != 0 {
        if i == 0 || j == 0 {
            break;
        }
        let cur = h.get(i, j);
        if cur == h.get(i - 1, j - 1) + scoring.substitution(seq1[i - 1], seq2[j - 1]) {
            gapped_x.push(seq1[i - 1]);
            gapped_y.push(seq2[j - 1]);
            i -= 1;
            j -= 1;
        } else if cur == h.get(i - 1, j) + scoring.gap_penalty {
            gapped_x.push(seq1[i - 1]);
            gapped_y.push(GAP);
            i -= 1;
        } else if cur == h.get(i, j - 1) + scoring.gap_penalty {
            gapped_x.push(GAP);
            gapped_y.push(seq2[j - 1]);
            j -= 1;
        } else {
            break;
        }
    }
    finish(h, start, (i, j), gapped_x, gapped_y, AlignmentMode::Local, seq1.len(), seq2.len())
}

/// Global walk: after the main loop any remaining seq1 prefix is consumed as
/// deletions and any remaining seq2 prefix as insertions, so the alignment
/// spans the full chosen prefixes with no leftover symbols.
fn traceback_global(
    h: &ScoreMatrix,
    seq1: &[u8],
    seq2: &[u8],
    scoring: Scoring,
    start: (usize, usize),
) -> Alignment {
    let (mut i, mut j) = start;
    let mut gapped_x: Vec<u8> = Vec::with_capacity(i + j);
    let mut gapped_y: Vec<u8> = Vec::with_capacity(i + j);
    let mut consistent = true;
    while i > 0 && j > 0 {
        let cur = h.get(i, j);
        if cur == h.get(i - 1, j - 1) + scoring.substitution(seq1[i - 1], seq2[j - 1]) {
            gapped_x.push(seq1[i - 1]);
            gapped_y.push(seq2[j - 1]);
            i -= 1;
            j -= 1;
        } else if cur == h.get(i, j - 1) + scoring.gap_penalty {
            gapped_x.push(GAP);
            gapped_y.push(seq2[j - 1]);
            j -= 1;
        } else if cur == h.get(i - 1, j) + scoring.gap_penalty {
            gapped_x.push(seq1[i - 1]);
            gapped_y.push(GAP);
            i -= 1;
        } else {
            consistent = false;
            break;
        }
    }
    if consistent {
        while i > 0 {
            gapped_x.push(seq1[i - 1]);
            gapped_y.push(GAP);
            i -= 1;
        }
        while j > 0 {
            gapped_x.push(GAP);
            gapped_y.push(seq2[j - 1]);
            j -= 1;
        }
    }
    finish(h, start, (i, j), gapped_x, gapped_y, AlignmentMode::Global, seq1.len(), seq2.len())
}

fn finish(
    h: &ScoreMatrix,
    start: (usize, usize),
    stop: (usize, usize),
    mut gapped_x: Vec<u8>,
    mut gapped_y: Vec<u8>,
    mode: AlignmentMode,
    xlen: usize,
    ylen: usize,
) -> Alignment {
    // The walk emits columns back-to-front.
    gapped_x.reverse();
    gapped_y.reverse();
    Alignment {
        score: h.get(start.0, start.1),
        xstart: stop.0,
        xend: start.0,
        ystart: stop.1,
        yend: start.1,
        xlen,
        ylen,
        gapped_x,
        gapped_y,
        mode,
    }
}

#[cfg(test)]
mod tests {
    use super::{starting_cell, traceback};
    use crate::align::{align, AlignmentMode, ScoreMatrix, Scoring};
    use rstest::rstest;

    #[rstest]
    // The classic worked example: one gap on each side of the pair.
    #[case::local_classic(
        AlignmentMode::Local, "ACACACTA", "AGCACACA", 2, -1, -1,
        (8, 8), 12, "A-CACACTA", "AGCACAC-A"
    )]
    // Global consumes all of seq2; the best last-column row (6) leaves the
    // final symbol of seq1 unaligned.
    #[case::global_classic(
        AlignmentMode::Global, "GATTACA", "GCATGCU", 1, -1, -1,
        (6, 7), 0, "G-ATTAC-", "GCA-TGCU"
    )]
    #[case::local_perfect(AlignmentMode::Local, "AAAA", "AAAA", 1, -1, -1, (4, 4), 4, "AAAA", "AAAA")]
    #[case::global_perfect(AlignmentMode::Global, "AAAA", "AAAA", 1, -1, -1, (4, 4), 4, "AAAA", "AAAA")]
    // Empty seq1: all of seq2 aligns against gaps at cumulative gap cost.
    #[case::global_empty_x(AlignmentMode::Global, "", "ACGT", 1, -1, -1, (0, 4), -4, "----", "ACGT")]
    // Empty seq2: the last column is column 0, whose best row is 0.
    #[case::global_empty_y(AlignmentMode::Global, "ACGT", "", 1, -1, -1, (0, 0), 0, "", "")]
    #[case::local_empty_x(AlignmentMode::Local, "", "ACGT", 1, -1, -1, (0, 0), 0, "", "")]
    #[case::local_empty_y(AlignmentMode::Local, "ACGT", "", 1, -1, -1, (0, 0), 0, "", "")]
    // No common symbols: every local cell is floored to zero and the
    // alignment is empty.
    #[case::local_disjoint(AlignmentMode::Local, "TTTT", "GGGG", 1, -1, -2, (4, 4), 0, "", "")]
    #[case::global_leading_gap(AlignmentMode::Global, "TACG", "ACG", 1, -1, -1, (4, 3), 2, "TACG", "-ACG")]
    #[case::global_inner_gap(AlignmentMode::Global, "GAT", "GCAT", 1, -1, -1, (3, 4), 2, "G-AT", "GCAT")]
    #[case::global_shifted(AlignmentMode::Global, "ATAT", "TATA", 1, -1, -1, (3, 4), 2, "-ATA", "TATA")]
    fn test_align(
        #[case] mode: AlignmentMode,
        #[case] seq1: &str,
        #[case] seq2: &str,
        #[case] match_score: i32,
        #[case] mismatch_score: i32,
        #[case] gap_penalty: i32,
        #[case] start: (usize, usize),
        #[case] score: i32,
        #[case] gapped_x: &str,
        #[case] gapped_y: &str,
    ) {
        let scoring = Scoring::new(match_score, mismatch_score, gap_penalty);
        let (h, aln) = align(seq1.as_bytes(), seq2.as_bytes(), scoring, mode);
        aln.validate();
        assert_eq!(aln.starting_cell(), start, "starting cell");
        assert_eq!(aln.score, score, "score");
        assert_eq!(aln.score, h.get(start.0, start.1), "score matches matrix");
        assert_eq!(aln.gapped_x, gapped_x.as_bytes(), "gapped seq1");
        assert_eq!(aln.gapped_y, gapped_y.as_bytes(), "gapped seq2");
        // Stripping gap markers reproduces the aligned spans of the inputs.
        assert_eq!(aln.ungapped_x(), &seq1.as_bytes()[aln.xstart..aln.xend]);
        assert_eq!(aln.ungapped_y(), &seq2.as_bytes()[aln.ystart..aln.yend]);
        if mode == AlignmentMode::Global {
            // Global alignments always consume all of seq2 and a prefix of seq1.
            assert_eq!(aln.yend, seq2.len());
            assert_eq!(aln.ystart, 0);
            assert_eq!(aln.xstart, 0);
        }
    }

    /// Local selection updates on greater-or-equal, so of the two cells that
    /// hold the maximum (3) in this matrix, the later one in row-major order
    /// wins.
    #[test]
    fn test_local_selector_last_max_wins() {
        let scoring = Scoring::new(1, -1, -1);
        let h = ScoreMatrix::build(b"ATAT", b"TATA", scoring, AlignmentMode::Local);
        assert_eq!(h.get(3, 4), 3);
        assert_eq!(h.get(4, 3), 3);
        assert_eq!(starting_cell(&h, AlignmentMode::Local), (4, 3));
        let aln = traceback(&h, b"ATAT", b"TATA", scoring, AlignmentMode::Local, (4, 3));
        assert_eq!(aln.gapped_x, b"TAT");
        assert_eq!(aln.gapped_y, b"TAT");
    }

    /// Global selection updates on strictly-greater, so of the two rows that
    /// hold the last-column maximum (1), the earlier one wins.
    #[test]
    fn test_global_selector_first_max_row_wins() {
        let scoring = Scoring::new(1, -1, 0);
        let h = ScoreMatrix::build(b"AA", b"A", scoring, AlignmentMode::Global);
        assert_eq!(h.get(1, 1), 1);
        assert_eq!(h.get(2, 1), 1);
        assert_eq!(starting_cell(&h, AlignmentMode::Global), (1, 1));
        let aln = traceback(&h, b"AA", b"A", scoring, AlignmentMode::Global, (1, 1));
        assert_eq!(aln.gapped_x, b"A");
        assert_eq!(aln.gapped_y, b"A");
    }

    /// A cell value no predecessor formula can produce terminates the local
    /// walk at that point; the partial alignment is returned, not a panic.
    #[test]
    fn test_local_traceback_tolerates_inconsistent_matrix() {
        let scoring = Scoring::new(1, -1, -1);
        let mut h = ScoreMatrix::new(1, 1);
        h.set(1, 1, 5);
        let aln = traceback(&h, b"A", b"A", scoring, AlignmentMode::Local, (1, 1));
        assert!(aln.is_empty());
        assert_eq!(aln.score, 5);
        assert_eq!(aln.starting_cell(), (1, 1));
    }

    /// The global walk likewise stops on an unmatchable cell, without
    /// draining the remaining prefixes.
    #[test]
    fn test_global_traceback_tolerates_inconsistent_matrix() {
        let scoring = Scoring::new(1, -1, -1);
        let mut h = ScoreMatrix::new(1, 1);
        h.set(0, 1, -1);
        h.set(1, 0, -1);
        h.set(1, 1, 7);
        let aln = traceback(&h, b"A", b"A", scoring, AlignmentMode::Global, (1, 1));
        assert!(aln.is_empty());
        assert_eq!(aln.xstart, 1);
        assert_eq!(aln.ystart, 1);
    }
}
