use std::ops::Range;

use bitvec::vec::BitVec;
use serde::{Deserialize, Serialize};

use crate::{
    aligned_group::AlignedGroup,
    error::{Error, Result},
    graph::{RowOrigin, Strand},
};


/// A maximal run of columns in which the same rows are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaplessRun {
    pub columns: Range<usize>,
    /// Bit `i` is set if row `i` is not a gap in these columns.
    pub rows: BitVec,
}

/// Aligned pieces of sequences that form one gapless block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentBlock {
    pub entries: Vec<AlignmentBlockEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentBlockEntry {
    pub sequence: String,
    pub strand: Strand,
    /// The coordinate of the first character of the piece.
    pub position: i64,
    pub length: usize,
}

impl GaplessRun {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn member_count(&self) -> usize {
        self.rows.count_ones()
    }

    pub fn member_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter_ones()
    }
}

/// Splits the columns of the group into maximal runs with identical gap patterns.
///
/// The runs are ordered and partition all columns.
pub fn maximal_runs(group: &AlignedGroup) -> Vec<GaplessRun> {
    let mut runs = Vec::new();
    let mut start = 0;

    while start < group.column_count() {
        let rows: BitVec = (0..group.row_count())
            .map(|row| !group.is_gap(row, start))
            .collect();

        let mut end = start + 1;
        while end < group.column_count()
            && (0..group.row_count()).all(|row| rows[row] != group.is_gap(row, end))
        {
            end += 1;
        }

        runs.push(GaplessRun {
            columns: start..end,
            rows,
        });
        start = end;
    }

    runs
}

/// Extracts the gapless blocks of the group that have at least `min_block_rows` rows.
///
/// `origins[i]` locates the sequence of row `i`.
/// Positions count from the coordinate of the end away from it, in the direction of the strand.
pub fn alignment_blocks(
    group: &AlignedGroup,
    origins: &[RowOrigin],
    min_block_rows: usize,
) -> Result<Vec<AlignmentBlock>> {
    if origins.len() != group.row_count() {
        return Err(Error::OriginCountMismatch {
            rows: group.row_count(),
            origins: origins.len(),
        });
    }

    let mut offsets = vec![0i64; group.row_count()];
    let mut blocks = Vec::new();

    for run in maximal_runs(group) {
        let member_count = run.member_count();
        if member_count > 0 && member_count >= min_block_rows {
            blocks.push(AlignmentBlock {
                entries: run
                    .member_rows()
                    .map(|row| {
                        let origin = &origins[row];
                        AlignmentBlockEntry {
                            sequence: origin.name.clone(),
                            strand: origin.strand,
                            position: match origin.strand {
                                Strand::Positive => origin.coordinate + 1 + offsets[row],
                                Strand::Negative => origin.coordinate - 1 - offsets[row],
                            },
                            length: run.len(),
                        }
                    })
                    .collect(),
            });
        }

        for row in run.member_rows() {
            offsets[row] += run.len() as i64;
        }
    }

    Ok(blocks)
}

impl std::fmt::Display for AlignmentBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut once = true;
        for entry in &self.entries {
            if once {
                once = false;
            } else {
                write!(f, "; ")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for AlignmentBlockEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) at {}, length {}",
            self.sequence, self.strand, self.position, self.length
        )
    }
}
