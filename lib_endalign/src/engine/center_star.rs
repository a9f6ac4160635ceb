use std::{cmp::Reverse, iter};

use log::trace;

use crate::{alphabet::GAP, error::Result};

use super::{
    MsaEngine,
    pairwise::{AlignmentCosts, AlignmentMatrix, BaseAlignmentType},
};


/// Aligns every sequence globally against the longest one and merges the pairwise alignments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CenterStarEngine {
    costs: AlignmentCosts,
}

impl CenterStarEngine {
    pub fn new(costs: AlignmentCosts) -> Self {
        Self { costs }
    }

    pub fn costs(&self) -> &AlignmentCosts {
        &self.costs
    }
}

impl MsaEngine for CenterStarEngine {
    fn align(&self, sequences: &[Vec<u8>]) -> Result<Vec<Vec<u8>>> {
        let Some(center_index) = center_index(sequences) else {
            return Ok(Vec::new());
        };
        let center = &sequences[center_index];

        let alignments: Vec<_> = sequences
            .iter()
            .enumerate()
            .map(|(index, sequence)| {
                if index == center_index {
                    return None;
                }

                let mut matrix =
                    AlignmentMatrix::new(self.costs.clone(), center.len(), sequence.len());
                let cost = matrix.align(center, sequence);
                trace!("Aligned sequence {index} to center {center_index} with cost {cost}");
                Some(matrix.traceback())
            })
            .collect();

        Ok(merge_pairwise_alignments(
            center_index,
            sequences,
            &alignments,
        ))
    }
}

/// The index of the longest sequence, preferring the first one on ties.
pub(crate) fn center_index(sequences: &[Vec<u8>]) -> Option<usize> {
    sequences
        .iter()
        .enumerate()
        .min_by_key(|(_, sequence)| Reverse(sequence.len()))
        .map(|(index, _)| index)
}

/// Merges pairwise alignments against a common center into one matrix.
///
/// `alignments[i]` aligns `sequences[i]` as query to the center as reference, and is `None` for the center itself.
/// Before each center character and after the last one, every row gets as many columns as the longest insertion of any row there.
/// Shorter insertions are padded with gaps on their right.
pub(crate) fn merge_pairwise_alignments(
    center_index: usize,
    sequences: &[Vec<u8>],
    alignments: &[Option<Vec<BaseAlignmentType>>],
) -> Vec<Vec<u8>> {
    debug_assert_eq!(sequences.len(), alignments.len());
    let center = &sequences[center_index];

    let mut slot_widths = vec![0; center.len() + 1];
    for operations in alignments.iter().flatten() {
        let mut slot = 0;
        let mut width = 0;
        for operation in operations {
            if *operation == BaseAlignmentType::Insertion {
                width += 1;
            } else {
                slot_widths[slot] = slot_widths[slot].max(width);
                slot += 1;
                width = 0;
            }
        }
        slot_widths[slot] = slot_widths[slot].max(width);
    }

    let column_count = center.len() + slot_widths.iter().sum::<usize>();
    let center_operations = vec![BaseAlignmentType::Match; center.len()];

    sequences
        .iter()
        .zip(alignments)
        .map(|(sequence, operations)| {
            let operations = operations.as_deref().unwrap_or(&center_operations);
            let mut row = Vec::with_capacity(column_count);
            let mut slot = 0;
            let mut inserted = 0;
            let mut sequence_index = 0;

            for operation in operations {
                match operation {
                    BaseAlignmentType::Insertion => {
                        row.push(sequence[sequence_index]);
                        sequence_index += 1;
                        inserted += 1;
                        continue;
                    }
                    BaseAlignmentType::Deletion => {
                        row.extend(iter::repeat_n(GAP, slot_widths[slot] - inserted));
                        row.push(GAP);
                    }
                    BaseAlignmentType::Match | BaseAlignmentType::Substitution => {
                        row.extend(iter::repeat_n(GAP, slot_widths[slot] - inserted));
                        row.push(sequence[sequence_index]);
                        sequence_index += 1;
                    }
                    BaseAlignmentType::None => unreachable!("tracebacks do not contain the origin"),
                }
                slot += 1;
                inserted = 0;
            }
            row.extend(iter::repeat_n(GAP, slot_widths[slot] - inserted));

            debug_assert_eq!(row.len(), column_count);
            row
        })
        .collect()
}
