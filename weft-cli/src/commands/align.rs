use super::command::{Command, ValueEnum};
use anyhow::{bail, Context, Result};
use clap::{
    builder::{PossibleValuesParser, TypedValueParser as _},
    Parser,
};
use itertools::Itertools;
use log::info;
use std::{
    env,
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};
use weft::align::{
    self,
    io::{read_task, AlignmentTask},
    presenter, AlignmentMode, Scoring,
};

impl ValueEnum for AlignmentMode {
    const VARIANTS: &'static [Self] = &[Self::Local, Self::Global];
}

/// Computes an optimal pairwise alignment of two symbol sequences.
///
/// The input is either a five-line task file (seq1, seq2, gap penalty,
/// mismatch score, match score) given with `--input`, or the two sequences
/// given with `--seq1`/`--seq2` together with the scoring flags.
///
/// Local mode finds the best-scoring alignment of any substring pair;
/// scores are floored at zero, so the result never extends through a
/// negative-scoring region.  Global mode consumes all of seq2, charging
/// leading and trailing gaps in full, and picks the best row of the last
/// matrix column as the alignment end.
///
/// The output is the filled score matrix followed by the best score, the
/// scoring parameters, and the gapped sequence pair, written to stdout or
/// to `--output`.
#[derive(Parser, Debug, Clone)]
#[clap(version, term_width = 0)]
pub struct Align {
    /// The path to the input task file (five lines: seq1, seq2, gap penalty,
    /// mismatch score, match score).
    #[clap(long, short = 'i', conflicts_with_all = ["seq1", "seq2"], display_order = 1)]
    input: Option<PathBuf>,

    /// The first sequence to align (requires --seq2).
    #[clap(long, requires = "seq2", display_order = 2)]
    seq1: Option<String>,

    /// The second sequence to align (requires --seq1).
    #[clap(long, requires = "seq1", display_order = 3)]
    seq2: Option<String>,

    /// Score for a symbol match.
    #[clap(long, short = 'A', default_value = "2", display_order = 4)]
    match_score: i32,

    /// Score for a symbol mismatch (typically negative).
    #[clap(
        long,
        short = 'B',
        default_value = "-1",
        allow_hyphen_values = true,
        display_order = 5
    )]
    mismatch_score: i32,

    /// Score per inserted or deleted symbol (typically negative).
    #[clap(
        long,
        short = 'G',
        default_value = "-1",
        allow_hyphen_values = true,
        display_order = 6
    )]
    gap_penalty: i32,

    /// The alignment mode:
    /// - Local: the best-scoring alignment of any substring pair.
    /// - Global: an alignment consuming all of seq2, gaps charged in full.
    #[clap(
        long,
        short = 'm',
        value_parser = PossibleValuesParser::new(AlignmentMode::possible_values())
            .map(|s| s.parse::<AlignmentMode>().unwrap()),
        default_value_t = AlignmentMode::Local,
        ignore_case = true,
        display_order = 7,
        verbatim_doc_comment
    )]
    mode: AlignmentMode,

    /// Write the report to this path instead of stdout.
    #[clap(long, short = 'o', display_order = 8)]
    output: Option<PathBuf>,
}

impl Align {
    /// Executes the align command
    pub fn execute(&self) -> Result<()> {
        info!("Command line: {}", env::args().join(" "));
        let task = match (&self.input, &self.seq1, &self.seq2) {
            (Some(path), None, None) => {
                info!("Reading task from {}", path.display());
                read_task(path)?
            }
            (None, Some(seq1), Some(seq2)) => AlignmentTask {
                seq1: seq1.as_bytes().to_vec(),
                seq2: seq2.as_bytes().to_vec(),
                scoring: Scoring::new(self.match_score, self.mismatch_score, self.gap_penalty),
            },
            _ => bail!("specify either --input or both --seq1 and --seq2"),
        };

        info!(
            "Aligning {} x {} symbols in {} mode",
            task.seq1.len(),
            task.seq2.len(),
            self.mode
        );
        let (matrix, alignment) = align::align(&task.seq1, &task.seq2, task.scoring, self.mode);
        let (i, j) = alignment.starting_cell();
        info!("Best score {} at ({}, {})", alignment.score, i, j);

        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Error creating output: {}", path.display()))?;
                let mut writer = BufWriter::new(file);
                presenter::write_report(
                    &mut writer,
                    &matrix,
                    &alignment,
                    task.scoring,
                    &task.seq1,
                    &task.seq2,
                )?;
                writer
                    .flush()
                    .with_context(|| format!("Error writing output: {}", path.display()))?;
            }
            None => {
                let mut stdout = io::stdout().lock();
                presenter::write_report(
                    &mut stdout,
                    &matrix,
                    &alignment,
                    task.scoring,
                    &task.seq1,
                    &task.seq2,
                )?;
            }
        }

        Ok(())
    }
}

impl Command for Align {
    fn execute(&self) -> Result<()> {
        Align::execute(self)
    }
}
