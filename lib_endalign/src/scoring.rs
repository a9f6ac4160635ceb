use noisy_float::types::{R32, r32};

use crate::{
    aligned_group::AlignedGroup,
    alphabet::is_gap,
    error::{Error, Result},
};

#[cfg(test)]
mod tests;

/// The conservation score of each column of an [`AlignedGroup`].
///
/// A column scores the number of its non-gap characters.
/// Columns supported by fewer than `min_column_support` characters carry no alignment information and score zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnScores {
    scores: Vec<R32>,
}

/// An aligned group together with its current column scores.
#[derive(Debug, Clone)]
pub struct ScoredGroup {
    pub(crate) group: AlignedGroup,
    pub(crate) scores: ColumnScores,
}

impl ColumnScores {
    pub fn compute(group: &AlignedGroup, min_column_support: usize) -> Self {
        let scores = (0..group.column_count())
            .map(|column| {
                let support = (0..group.row_count())
                    .filter(|&row| !group.is_gap(row, column))
                    .count();
                if support < min_column_support {
                    r32(0.0)
                } else {
                    r32(support as f32)
                }
            })
            .collect();

        Self { scores }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn get(&self, column: usize) -> R32 {
        self.scores[column]
    }

    pub fn as_slice(&self) -> &[R32] {
        &self.scores
    }

    /// Account for one character of the column being masked.
    ///
    /// Scores never drop below zero.
    pub fn decrement(&mut self, column: usize) {
        let score = &mut self.scores[column];
        *score = (*score - 1.0).max(r32(0.0));
    }
}

/// Sums up the scores of the columns in which the given row has a character.
///
/// Entry `k` of the result is the sum over all columns up to and including the column holding
/// the `k`-th character of the row.
/// The result has exactly [`AlignedGroup::row_length`] entries, otherwise the matrix is corrupt and an error is returned.
pub fn cumulative_row_scores(
    group: &AlignedGroup,
    scores: &ColumnScores,
    row: usize,
) -> Result<Vec<R32>> {
    debug_assert_eq!(group.column_count(), scores.len());

    let mut cumulative_score = r32(0.0);
    let mut cumulative_scores = Vec::with_capacity(group.row_length(row));
    for (column, character) in group.row(row).iter().enumerate() {
        if !is_gap(*character) {
            cumulative_score += scores.get(column);
            cumulative_scores.push(cumulative_score);
        }
    }

    if cumulative_scores.len() != group.row_length(row) {
        return Err(Error::ScanLengthMismatch {
            row,
            expected: group.row_length(row),
            actual: cumulative_scores.len(),
        });
    }

    Ok(cumulative_scores)
}

impl ScoredGroup {
    pub fn new(group: AlignedGroup, min_column_support: usize) -> Self {
        let scores = ColumnScores::compute(&group, min_column_support);
        Self { group, scores }
    }

    pub fn group(&self) -> &AlignedGroup {
        &self.group
    }

    pub fn scores(&self) -> &ColumnScores {
        &self.scores
    }

    pub fn cumulative_row_scores(&self, row: usize) -> Result<Vec<R32>> {
        cumulative_row_scores(&self.group, &self.scores, row)
    }

    /// Masks all characters of the row starting from its `suffix_start`-th character.
    ///
    /// Returns the number of masked characters.
    pub fn trim_row_suffix(&mut self, row: usize, suffix_start: usize) -> usize {
        let mut sequence_index = 0;
        let mut masked = 0;

        for column in 0..self.group.column_count() {
            if self.group.is_gap(row, column) {
                continue;
            }

            if sequence_index >= suffix_start {
                self.group.mask(row, column);
                self.scores.decrement(column);
                masked += 1;
            }
            sequence_index += 1;
        }

        masked
    }

    pub fn into_group(self) -> AlignedGroup {
        self.group
    }
}
