use ndarray::{Array2, ArrayView1};

use crate::{
    alphabet::{GAP, is_gap},
    error::{Error, Result},
};


/// The multiple sequence alignment of the sequences incident to one end.
///
/// Each row of the matrix is one sequence expanded with gaps so that all rows have the same number of columns.
/// Once constructed, the only permitted mutation is replacing a character with a gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedGroup {
    sequences: Vec<Vec<u8>>,
    matrix: Array2<u8>,
    row_lengths: Vec<usize>,
}

impl AlignedGroup {
    /// Wrap the output of an alignment engine.
    ///
    /// `rows[i]` must be `sequences[i]` with gaps inserted.
    /// Fails if the rows have different lengths, if the number of rows does not match the number of sequences,
    /// or if a row contains a different amount of non-gap characters than its sequence.
    pub fn from_aligned_rows(sequences: Vec<Vec<u8>>, rows: Vec<Vec<u8>>) -> Result<Self> {
        if rows.len() != sequences.len() {
            return Err(Error::RowCountMismatch {
                expected: sequences.len(),
                actual: rows.len(),
            });
        }

        let column_count = rows.first().map(Vec::len).unwrap_or(0);
        let mut matrix = Array2::from_elem((rows.len(), column_count), GAP);
        let mut row_lengths = Vec::with_capacity(rows.len());

        for (row_index, (row, sequence)) in rows.iter().zip(&sequences).enumerate() {
            if row.len() != column_count {
                return Err(Error::InconsistentColumnCount {
                    row: row_index,
                    expected: column_count,
                    actual: row.len(),
                });
            }

            let non_gap_count = row.iter().filter(|character| !is_gap(**character)).count();
            if non_gap_count != sequence.len() {
                return Err(Error::RowLengthMismatch {
                    row: row_index,
                    expected: sequence.len(),
                    actual: non_gap_count,
                });
            }

            matrix.row_mut(row_index).assign(&ArrayView1::from(row.as_slice()));
            row_lengths.push(sequence.len());
        }

        Ok(Self {
            sequences,
            matrix,
            row_lengths,
        })
    }

    pub fn row_count(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn column_count(&self) -> usize {
        self.matrix.ncols()
    }

    pub fn sequences(&self) -> &[Vec<u8>] {
        &self.sequences
    }

    /// The ungapped lengths of the sequences as they were before any trimming.
    pub fn row_lengths(&self) -> &[usize] {
        &self.row_lengths
    }

    pub fn row_length(&self, row: usize) -> usize {
        self.row_lengths[row]
    }

    pub fn row(&self, row: usize) -> ArrayView1<'_, u8> {
        self.matrix.row(row)
    }

    pub fn column(&self, column: usize) -> ArrayView1<'_, u8> {
        self.matrix.column(column)
    }

    pub fn character(&self, row: usize, column: usize) -> u8 {
        self.matrix[[row, column]]
    }

    pub fn is_gap(&self, row: usize, column: usize) -> bool {
        is_gap(self.matrix[[row, column]])
    }

    /// The number of characters of the given row that are still present in the matrix.
    pub fn retained_length(&self, row: usize) -> usize {
        self.matrix
            .row(row)
            .iter()
            .filter(|character| !is_gap(**character))
            .count()
    }

    /// Replaces the character at the given position with a gap.
    ///
    /// Returns `true` if the position was not a gap before.
    pub fn mask(&mut self, row: usize, column: usize) -> bool {
        let character = &mut self.matrix[[row, column]];
        let was_present = !is_gap(*character);
        *character = GAP;
        was_present
    }

    pub fn row_to_string(&self, row: usize) -> String {
        self.matrix.row(row).iter().map(|c| char::from(*c)).collect()
    }

    #[cfg(test)]
    pub(crate) fn from_gapped_rows(rows: &[&str]) -> Self {
        let sequences = rows
            .iter()
            .map(|row| row.bytes().filter(|c| !is_gap(*c)).collect())
            .collect();
        let rows = rows.iter().map(|row| row.as_bytes().to_vec()).collect();
        Self::from_aligned_rows(sequences, rows).unwrap()
    }
}

impl core::fmt::Display for AlignedGroup {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for row in 0..self.row_count() {
            writeln!(f, "{}", self.row_to_string(row))?;
        }
        Ok(())
    }
}
