use bitvec::vec::BitVec;
use log::{debug, info};

use crate::{
    error::{Error, Result},
    graph::{AdjacencyTable, GroupRow},
    scoring::ScoredGroup,
    trim::{SharedSequenceLink, trim_shared_sequence},
};


/// Makes the alignments of all ends consistent with each other.
///
/// Each shared sequence appears in the adjacency table twice, once from each side.
/// It is trimmed exactly once, when visited from the side that comes first in end-row order.
/// Trimmed rows are remembered, so reconciling again does not trim anything twice.
pub struct Reconciler {
    groups: Vec<ScoredGroup>,
    adjacency: AdjacencyTable,
    trimmed: Vec<BitVec>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileStatistics {
    pub trimmed_links: usize,
    pub masked_characters: usize,
}

/// Returns true if the link between `at` and `continuation` should be trimmed when visiting `at`.
///
/// This holds for exactly one of the two sides of a link between distinct rows.
pub fn is_first_occurrence(at: GroupRow, continuation: GroupRow) -> bool {
    continuation.end > at.end || (continuation.end == at.end && continuation.row > at.row)
}

impl Reconciler {
    pub fn new(groups: Vec<ScoredGroup>, adjacency: AdjacencyTable) -> Result<Self> {
        if groups.len() != adjacency.end_count() {
            return Err(Error::AdjacencyEndCountMismatch {
                groups: groups.len(),
                ends: adjacency.end_count(),
            });
        }

        for (end, group) in groups.iter().enumerate() {
            if group.group().row_count() != adjacency.row_count(end) {
                return Err(Error::AdjacencyRowCountMismatch {
                    end,
                    group_rows: group.group().row_count(),
                    adjacency_rows: adjacency.row_count(end),
                });
            }
        }

        let trimmed = groups
            .iter()
            .map(|group| BitVec::repeat(false, group.group().row_count()))
            .collect();

        Ok(Self {
            groups,
            adjacency,
            trimmed,
        })
    }

    pub fn reconcile(&mut self) -> Result<ReconcileStatistics> {
        info!("Reconciling the alignments of {} ends", self.groups.len());
        let mut statistics = ReconcileStatistics::default();

        for end in 0..self.groups.len() {
            for row in 0..self.groups[end].group().row_count() {
                let at = GroupRow::new(end, row);
                let continuation = self.adjacency.continuation(at);

                if !is_first_occurrence(at, continuation) || self.trimmed[end][row] {
                    continue;
                }

                let outcome = trim_shared_sequence(
                    &mut self.groups,
                    SharedSequenceLink {
                        first: at,
                        second: continuation,
                    },
                )?;
                self.trimmed[at.end].set(at.row, true);
                self.trimmed[continuation.end].set(continuation.row, true);

                statistics.trimmed_links += 1;
                statistics.masked_characters += outcome.masked_first + outcome.masked_second;
            }
        }

        debug!(
            "Trimmed {} shared sequences, masking {} characters",
            statistics.trimmed_links, statistics.masked_characters
        );
        Ok(statistics)
    }

    pub fn groups(&self) -> &[ScoredGroup] {
        &self.groups
    }

    pub fn adjacency(&self) -> &AdjacencyTable {
        &self.adjacency
    }

    pub fn into_groups(self) -> Vec<ScoredGroup> {
        self.groups
    }
}
