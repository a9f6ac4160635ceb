use log::{debug, trace};
use noisy_float::types::R32;

use crate::{
    error::{Error, Result},
    graph::GroupRow,
    scoring::ScoredGroup,
};

#[cfg(test)]
mod tests;

/// Two rows that present the same sequence, each in its own orientation.
///
/// `first` presents the sequence in forward direction, `second` presents it from the other end,
/// so that a prefix of `second` corresponds to a suffix of `first`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharedSequenceLink {
    pub first: GroupRow,
    pub second: GroupRow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimOutcome {
    /// The ungapped length of the shared sequence.
    pub length: usize,
    /// The number of characters that the first row keeps.
    /// The second row keeps the remaining `length - cut_point` characters.
    pub cut_point: usize,
    pub masked_first: usize,
    pub masked_second: usize,
}

/// Chooses how many characters of a shared sequence the first alignment keeps.
///
/// The inputs are the cumulative row scores of both sides of the shared sequence.
/// Cut points are evaluated in increasing order and a later cut point only wins if it is strictly better,
/// so ties are resolved towards keeping less in the first alignment.
pub fn choose_cut_point(first: &[R32], second: &[R32]) -> usize {
    debug_assert_eq!(first.len(), second.len());
    let length = first.len();
    if length == 0 {
        return 0;
    }

    // Keep nothing of the first and everything of the second.
    let mut max_cut_score = second[length - 1];
    let mut max_cut_point = 0;

    for i in 0..length - 1 {
        // Keep the first `i + 1` characters of the first and the first `length - i - 1` characters of the second.
        let cut_score = first[i] + second[length - i - 2];
        trace!("Cut point {} scores {cut_score}", i + 1);

        if cut_score > max_cut_score {
            max_cut_point = i + 1;
            max_cut_score = cut_score;
        }
    }

    // Keep everything of the first and nothing of the second.
    if first[length - 1] > max_cut_score {
        max_cut_point = length;
    }

    max_cut_point
}

/// Makes the two alignments of a shared sequence consistent with each other.
///
/// After trimming, every character of the shared sequence is present in exactly one of the two rows.
/// The rows must have the same ungapped length, otherwise the input is corrupt and nothing is modified.
pub fn trim_shared_sequence(
    groups: &mut [ScoredGroup],
    link: SharedSequenceLink,
) -> Result<TrimOutcome> {
    let SharedSequenceLink { first, second } = link;
    debug_assert_ne!(first, second);

    let length = groups[first.end].group().row_length(first.row);
    let second_length = groups[second.end].group().row_length(second.row);
    if length != second_length {
        return Err(Error::SharedSequenceLengthMismatch {
            end: first.end,
            row: first.row,
            length,
            continuation_end: second.end,
            continuation_row: second.row,
            continuation_length: second_length,
        });
    }

    let first_scores = groups[first.end].cumulative_row_scores(first.row)?;
    let second_scores = groups[second.end].cumulative_row_scores(second.row)?;
    let cut_point = choose_cut_point(&first_scores, &second_scores);

    let masked_first = groups[first.end].trim_row_suffix(first.row, cut_point);
    let masked_second = groups[second.end].trim_row_suffix(second.row, length - cut_point);
    debug!(
        "Trimmed shared sequence of length {length} between {first} and {second} at {cut_point}"
    );

    Ok(TrimOutcome {
        length,
        cut_point,
        masked_first,
        masked_second,
    })
}
