use std::{env, path::Path};

use anyhow::{Result, anyhow};
use clap::Parser;
use endalign::align;

pub fn run_in_repo_root(args: &str) -> Result<()> {
    // Simulate a call from the repo root, which is the parent of this crate.
    env::set_current_dir(
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .ok_or(anyhow!("No parent directory"))?,
    )?;

    let args = align::Cli::parse_from(args.split_whitespace());
    align::cli(args)
}
