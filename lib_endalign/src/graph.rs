use std::{fmt::Display, hash::Hash};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};


/// A row of the alignment of an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupRow {
    pub end: usize,
    pub row: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strand {
    Positive,
    Negative,
}

/// An oriented sequence incident to an end, as reported by the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentSequence<Identity> {
    /// Identifies this oriented sequence among all sequences of all ends.
    pub identity: Identity,
    /// The identity under which the same sequence is incident to the end at its other side.
    pub continuation: Identity,
    pub origin: RowOrigin,
    pub sequence: Vec<u8>,
}

/// Where the sequence of a row is located in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowOrigin {
    pub name: String,
    pub strand: Strand,
    /// The coordinate of the end the sequence is incident to.
    /// The first character of the sequence lies next to it.
    pub coordinate: i64,
}

/// The view of a genome graph that is needed to align its ends.
pub trait EndGraph {
    type Identity: Clone + Eq + Hash + Display;

    fn end_count(&self) -> usize;

    fn incident_sequences(&self, end: usize) -> Vec<IncidentSequence<Self::Identity>>;
}

/// For each row of each end, the row of the end at which its sequence continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyTable {
    continuations: Vec<Vec<GroupRow>>,
}

impl GroupRow {
    pub fn new(end: usize, row: usize) -> Self {
        Self { end, row }
    }
}

impl AdjacencyTable {
    /// Resolves the continuation identities of the given ends into rows.
    ///
    /// Fails if an identity occurs twice, if a continuation is not incident to any end,
    /// or if a continuation does not continue back.
    pub fn build<Identity: Eq + Hash + Display>(
        ends: &[Vec<IncidentSequence<Identity>>],
    ) -> Result<Self> {
        let mut rows = FxHashMap::default();
        for (end, sequences) in ends.iter().enumerate() {
            for (row, sequence) in sequences.iter().enumerate() {
                if rows
                    .insert(&sequence.identity, GroupRow::new(end, row))
                    .is_some()
                {
                    return Err(Error::DuplicateSequenceIdentity {
                        identity: sequence.identity.to_string(),
                    });
                }
            }
        }

        let continuations = ends
            .iter()
            .enumerate()
            .map(|(end, sequences)| {
                sequences
                    .iter()
                    .enumerate()
                    .map(|(row, sequence)| {
                        rows.get(&sequence.continuation).copied().ok_or_else(|| {
                            Error::UnknownContinuation {
                                end,
                                row,
                                continuation: sequence.continuation.to_string(),
                            }
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_continuations(continuations)
    }

    /// Fails if a continuation points outside of the table or does not continue back.
    pub fn from_continuations(continuations: Vec<Vec<GroupRow>>) -> Result<Self> {
        for (end, rows) in continuations.iter().enumerate() {
            for (row, continuation) in rows.iter().enumerate() {
                let Some(back) = continuations
                    .get(continuation.end)
                    .and_then(|rows| rows.get(continuation.row))
                else {
                    return Err(Error::UnknownContinuation {
                        end,
                        row,
                        continuation: continuation.to_string(),
                    });
                };

                if *back != GroupRow::new(end, row) {
                    return Err(Error::AsymmetricContinuation {
                        end,
                        row,
                        continuation_end: continuation.end,
                        continuation_row: continuation.row,
                    });
                }
            }
        }

        Ok(Self { continuations })
    }

    pub fn end_count(&self) -> usize {
        self.continuations.len()
    }

    pub fn row_count(&self, end: usize) -> usize {
        self.continuations[end].len()
    }

    pub fn continuation(&self, at: GroupRow) -> GroupRow {
        self.continuations[at.end][at.row]
    }
}

/// An [`EndGraph`] held in memory, e.g. deserialised from a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemoryEndGraph {
    #[serde(default)]
    pub ends: Vec<InMemoryEnd>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemoryEnd {
    #[serde(default)]
    pub sequences: Vec<InMemorySequence>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemorySequence {
    pub id: String,
    pub continuation: String,
    pub name: String,
    pub strand: Strand,
    pub coordinate: i64,
    #[serde(default)]
    pub sequence: String,
}

impl InMemoryEndGraph {
    pub fn read_toml(mut reader: impl std::io::Read) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Ok(toml::from_str(&input)?)
    }
}

impl EndGraph for InMemoryEndGraph {
    type Identity = String;

    fn end_count(&self) -> usize {
        self.ends.len()
    }

    fn incident_sequences(&self, end: usize) -> Vec<IncidentSequence<Self::Identity>> {
        self.ends[end]
            .sequences
            .iter()
            .map(|sequence| IncidentSequence {
                identity: sequence.id.clone(),
                continuation: sequence.continuation.clone(),
                origin: RowOrigin {
                    name: sequence.name.clone(),
                    strand: sequence.strand,
                    coordinate: sequence.coordinate,
                },
                sequence: sequence.sequence.as_bytes().to_vec(),
            })
            .collect()
    }
}

impl Display for GroupRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "end {} row {}", self.end, self.row)
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strand::Positive => write!(f, "+"),
            Strand::Negative => write!(f, "-"),
        }
    }
}
