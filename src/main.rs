use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tfgen",
    about = "Generate a seeded term-frequency fixture from a stopword list",
    version
)]
struct Cli {
    /// Stopword file, one word per line (.gz/.zst are decompressed)
    stopwords: PathBuf,

    /// Fixture file to create or overwrite
    output: PathBuf,
}

fn main() -> Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = tfgen::GeneratorConfig::default();
    tfgen::generate_file(&cli.stopwords, &cli.output, &config)?;
    Ok(())
}
