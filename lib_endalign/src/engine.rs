//! Multiple sequence alignment of the sequences incident to an end.

use crate::error::Result;

pub mod center_star;
pub mod pairwise;

/// Computes a multiple sequence alignment.
pub trait MsaEngine {
    /// Returns one row per input sequence, in input order.
    ///
    /// Each row is its sequence with gaps inserted, and all rows have the same length.
    fn align(&self, sequences: &[Vec<u8>]) -> Result<Vec<Vec<u8>>>;
}
