use clap::Parser;
use endalign::align;

fn main() -> anyhow::Result<()> {
    align::cli(align::Cli::parse())
}
