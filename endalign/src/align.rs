use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use lib_endalign::{
    align_flower, blocks::AlignmentBlock, config::EndAlignerConfig,
    engine::center_star::CenterStarEngine, graph::InMemoryEndGraph,
};
use log::{LevelFilter, info};
use serde::{Deserialize, Serialize};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// Path to a toml file listing the ends of the flower with their incident sequences.
    #[clap(long, short = 'i')]
    input: PathBuf,

    /// The file to store the alignment blocks in toml format.
    ///
    /// If not given, the blocks are printed to stdout.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,

    /// A toml configuration file.
    ///
    /// Values missing from the file are set to their defaults.
    #[clap(long, short = 'c')]
    config: Option<PathBuf>,

    /// Align the ends one after the other instead of in parallel.
    #[clap(long)]
    sequential: bool,
}

/// The output file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlocksFile {
    pub blocks: Vec<AlignmentBlock>,
}

pub fn cli(cli: Cli) -> Result<()> {
    // Ignore failure if a logger is already set when running repeatedly within one process.
    TermLogger::init(
        cli.log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .ok();

    let mut config = if let Some(config) = &cli.config {
        info!("Loading configuration file {config:?}");
        let file = File::open(config)
            .with_context(|| format!("Error opening configuration file {config:?}"))?;
        EndAlignerConfig::read_toml(BufReader::new(file))?
    } else {
        EndAlignerConfig::default()
    };
    if cli.sequential {
        config.parallel = false;
    }

    info!("Loading flower file {:?}", cli.input);
    let file = File::open(&cli.input)
        .with_context(|| format!("Error opening input file {:?}", cli.input))?;
    let graph = InMemoryEndGraph::read_toml(BufReader::new(file))?;

    let engine = CenterStarEngine::new(config.alignment_costs());
    let blocks = BlocksFile {
        blocks: align_flower(&graph, &engine, &config)?,
    };

    if let Some(output) = &cli.output {
        info!("Writing {} alignment blocks to {output:?}", blocks.blocks.len());
        let mut output = BufWriter::new(
            File::create(output)
                .with_context(|| format!("Error creating output file {output:?}"))?,
        );
        write!(output, "{}", toml::to_string(&blocks)?)?;
        output.flush()?;
    } else {
        for block in &blocks.blocks {
            println!("{block}");
        }
    }

    Ok(())
}
