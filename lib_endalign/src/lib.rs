use log::{debug, info};
use rayon::prelude::*;

use crate::{
    aligned_group::AlignedGroup,
    alphabet::normalise_sequence,
    blocks::{AlignmentBlock, alignment_blocks},
    config::EndAlignerConfig,
    engine::MsaEngine,
    error::Result,
    graph::{AdjacencyTable, EndGraph},
    reconcile::Reconciler,
    scoring::ScoredGroup,
};

pub mod aligned_group;
pub mod alphabet;
pub mod blocks;
pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod reconcile;
pub mod scoring;
pub mod trim;


/// Aligns the sequences at each end of the graph and extracts gapless blocks from the alignments.
///
/// Sequences shared by two ends are trimmed such that each of their characters ends up in the alignment of exactly one end.
/// The blocks are returned in end order, and each has at least two entries.
pub fn align_flower<Graph: EndGraph, Engine: MsaEngine + Sync>(
    graph: &Graph,
    engine: &Engine,
    config: &EndAlignerConfig,
) -> Result<Vec<AlignmentBlock>> {
    config.verify()?;

    info!("Collecting the sequences of {} ends", graph.end_count());
    let ends: Vec<_> = (0..graph.end_count())
        .map(|end| graph.incident_sequences(end))
        .collect();
    let adjacency = AdjacencyTable::build(&ends)?;

    let mut sequences = Vec::with_capacity(ends.len());
    let mut origins = Vec::with_capacity(ends.len());
    for end in ends {
        let (end_sequences, end_origins): (Vec<_>, Vec<_>) = end
            .into_iter()
            .map(|sequence| (normalise_sequence(&sequence.sequence), sequence.origin))
            .unzip();
        sequences.push(end_sequences);
        origins.push(end_origins);
    }

    info!("Aligning ends");
    let groups = if config.parallel {
        sequences
            .into_par_iter()
            .enumerate()
            .map(|(end, sequences)| build_group(end, sequences, engine, config))
            .collect::<Result<Vec<_>>>()?
    } else {
        sequences
            .into_iter()
            .enumerate()
            .map(|(end, sequences)| build_group(end, sequences, engine, config))
            .collect::<Result<Vec<_>>>()?
    };

    let mut reconciler = Reconciler::new(groups, adjacency)?;
    let statistics = reconciler.reconcile()?;
    info!(
        "Trimmed {} shared sequences, masking {} characters",
        statistics.trimmed_links, statistics.masked_characters
    );

    info!("Extracting alignment blocks");
    let mut blocks = Vec::new();
    for (group, origins) in reconciler.into_groups().into_iter().zip(&origins) {
        blocks.extend(alignment_blocks(
            &group.into_group(),
            origins,
            config.min_block_rows,
        )?);
    }
    info!("Extracted {} alignment blocks", blocks.len());

    Ok(blocks)
}

fn build_group(
    end: usize,
    sequences: Vec<Vec<u8>>,
    engine: &impl MsaEngine,
    config: &EndAlignerConfig,
) -> Result<ScoredGroup> {
    let rows = engine.align(&sequences)?;
    let group = AlignedGroup::from_aligned_rows(sequences, rows)?;
    debug!(
        "Aligned end {end} with {} rows into {} columns",
        group.row_count(),
        group.column_count()
    );
    Ok(ScoredGroup::new(group, config.min_column_support))
}
