use anyhow::{Context, Result};
use itertools::Itertools;
use std::io::Write;

use super::{alignment::Alignment, matrix::ScoreMatrix, scoring::Scoring};

const RULE: &str = "============================================================";

/// Renders the score matrix as a text table, seq2 across the top and seq1
/// down the side.  Row 0 and column 0 (the empty-prefix boundary) carry
/// blank labels.  Cells are right-aligned to the widest value so negative
/// scores line up.
pub fn format_matrix(h: &ScoreMatrix, seq1: &[u8], seq2: &[u8]) -> String {
    let width = (0..h.rows())
        .cartesian_product(0..h.cols())
        .map(|(i, j)| h.get(i, j).to_string().len())
        .max()
        .unwrap_or(1);
    let mut out = String::new();
    let mut header = String::from(" ");
    for j in 0..h.cols() {
        header.push(' ');
        if j == 0 {
            header.push_str(&format!("{:>width$}", ""));
        } else {
            header.push_str(&format!("{:>width$}", char::from(seq2[j - 1])));
        }
    }
    out.push_str(header.trim_end());
    out.push('\n');
    for i in 0..h.rows() {
        let label = if i == 0 { ' ' } else { char::from(seq1[i - 1]) };
        let row = (0..h.cols())
            .map(|j| format!("{:>width$}", h.get(i, j)))
            .join(" ");
        out.push_str(&format!("{label} {row}\n"));
    }
    out
}

/// Renders the full report: the score matrix, the best score and its cell,
/// the scoring parameters, and the gapped sequence pair with symbols
/// separated by single spaces.
pub fn format_report(
    h: &ScoreMatrix,
    alignment: &Alignment,
    scoring: Scoring,
    seq1: &[u8],
    seq2: &[u8],
) -> String {
    let (i, j) = alignment.starting_cell();
    let mut out = String::new();
    out.push_str("** score matrix **\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format_matrix(h, seq1, seq2));
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("score = {} at ({i}, {j})\n", alignment.score));
    out.push_str(&format!(
        "match = {} | mismatch = {} | gap = {}\n",
        scoring.match_score, scoring.mismatch_score, scoring.gap_penalty
    ));
    out.push_str(&format!("alignment ({} mode):\n", alignment.mode));
    out.push_str(&spaced(&alignment.gapped_x));
    out.push('\n');
    out.push_str(&spaced(&alignment.gapped_y));
    out.push('\n');
    out
}

/// Writes the rendered report to the given writer.
pub fn write_report<W: Write>(
    writer: &mut W,
    h: &ScoreMatrix,
    alignment: &Alignment,
    scoring: Scoring,
    seq1: &[u8],
    seq2: &[u8],
) -> Result<()> {
    writer
        .write_all(format_report(h, alignment, scoring, seq1, seq2).as_bytes())
        .context("Error writing report")
}

fn spaced(symbols: &[u8]) -> String {
    symbols.iter().map(|&b| char::from(b)).join(" ")
}

#[cfg(test)]
mod tests {
    use super::{format_matrix, format_report, spaced};
    use crate::align::{align, AlignmentMode, ScoreMatrix, Scoring};

    #[test]
    fn test_format_matrix() {
        let scoring = Scoring::new(1, -1, -1);
        let h = ScoreMatrix::build(b"AT", b"T", scoring, AlignmentMode::Local);
        let expected = "    T\n  0 0\nA 0 0\nT 0 1\n";
        assert_eq!(format_matrix(&h, b"AT", b"T"), expected);
    }

    #[test]
    fn test_format_matrix_aligns_negative_scores() {
        let scoring = Scoring::new(1, -1, -1);
        let h = ScoreMatrix::build(b"AT", b"T", scoring, AlignmentMode::Global);
        let expected = "      T\n   0 -1\nA -1 -1\nT -2  0\n";
        assert_eq!(format_matrix(&h, b"AT", b"T"), expected);
    }

    #[test]
    fn test_format_report() {
        let scoring = Scoring::new(2, -1, -1);
        let (h, aln) = align(b"ACACACTA", b"AGCACACA", scoring, AlignmentMode::Local);
        let report = format_report(&h, &aln, scoring, b"ACACACTA", b"AGCACACA");
        assert!(report.contains("score = 12 at (8, 8)"));
        assert!(report.contains("match = 2 | mismatch = -1 | gap = -1"));
        assert!(report.contains("alignment (local mode):"));
        assert!(report.contains("A - C A C A C T A"));
        assert!(report.contains("A G C A C A C - A"));
    }

    #[test]
    fn test_spaced() {
        assert_eq!(spaced(b"A-C"), "A - C");
        assert_eq!(spaced(b""), "");
    }
}
