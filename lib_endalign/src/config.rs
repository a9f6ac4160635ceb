use serde::{Deserialize, Serialize};

use crate::{
    engine::pairwise::AlignmentCosts,
    error::{Error, Result},
};


/// Parameters of aligning the ends of a flower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EndAlignerConfig {
    /// Columns with fewer non-gap characters score zero.
    /// At least 2, since a single character carries no alignment information.
    pub min_column_support: usize,
    /// Gapless blocks with fewer rows are not reported.
    /// At least 2, since a block needs two aligned pieces.
    pub min_block_rows: usize,
    /// Align the ends in parallel.
    pub parallel: bool,

    // Edit costs of the default alignment engine.
    pub match_cost: u64,
    pub substitution_cost: u64,
    pub gap_cost: u64,
}

impl EndAlignerConfig {
    pub fn read_toml(mut reader: impl std::io::Read) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        let config: Self = toml::from_str(&input)?;
        config.verify()?;
        Ok(config)
    }

    /// Returns an error if a threshold is below its minimum.
    pub fn verify(&self) -> Result<()> {
        if self.min_column_support < 2 {
            Err(Error::ConfigValueTooSmall {
                name: "min_column_support",
                value: self.min_column_support,
                minimum: 2,
            })
        } else if self.min_block_rows < 2 {
            Err(Error::ConfigValueTooSmall {
                name: "min_block_rows",
                value: self.min_block_rows,
                minimum: 2,
            })
        } else {
            Ok(())
        }
    }

    pub fn alignment_costs(&self) -> AlignmentCosts {
        AlignmentCosts {
            match_cost: self.match_cost,
            substitution_cost: self.substitution_cost,
            insertion_cost: self.gap_cost,
            deletion_cost: self.gap_cost,
        }
    }
}

impl Default for EndAlignerConfig {
    fn default() -> Self {
        Self {
            min_column_support: 2,
            min_block_rows: 2,
            parallel: true,
            match_cost: 0,
            substitution_cost: 1,
            gap_cost: 1,
        }
    }
}
