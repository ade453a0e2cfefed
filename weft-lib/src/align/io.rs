use anyhow::{ensure, Context, Result};
use std::{fs, path::Path};

use super::scoring::Scoring;

/// A parsed alignment task: the two sequences to align and the scoring
/// parameters to use for the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignmentTask {
    pub seq1: Vec<u8>,
    pub seq2: Vec<u8>,
    pub scoring: Scoring,
}

/// Reads a five-line task file:
/// ```text
/// <seq1>
/// <seq2>
/// <gap penalty>
/// <mismatch score>
/// <match score>
/// ```
/// Lines are whitespace-trimmed; the three scores are signed integers.
pub fn read_task<P: AsRef<Path>>(path: P) -> Result<AlignmentTask> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Error opening input: {}", path.display()))?;
    parse_task(&contents).with_context(|| format!("Error parsing input: {}", path.display()))
}

/// Parses the five-line task format from an in-memory string.
pub fn parse_task(contents: &str) -> Result<AlignmentTask> {
    let lines: Vec<&str> = contents.lines().map(str::trim).collect();
    ensure!(
        lines.len() >= 5,
        "expected five lines (seq1, seq2, gap penalty, mismatch score, match score), found {}",
        lines.len()
    );
    let seq1 = lines[0].as_bytes().to_vec();
    let seq2 = lines[1].as_bytes().to_vec();
    let gap_penalty = parse_score(lines[2], "gap penalty on line 3")?;
    let mismatch_score = parse_score(lines[3], "mismatch score on line 4")?;
    let match_score = parse_score(lines[4], "match score on line 5")?;
    Ok(AlignmentTask {
        seq1,
        seq2,
        scoring: Scoring::new(match_score, mismatch_score, gap_penalty),
    })
}

fn parse_score(value: &str, what: &str) -> Result<i32> {
    value
        .parse::<i32>()
        .with_context(|| format!("invalid {what}: {value:?}"))
}
