use anyhow::{Context, Result};
use clap::Parser;
use contagio::config::Config;
use contagio::engine::Engine;
use std::{fs::File, io::BufWriter, path::PathBuf};

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// Path to the TOML configuration file.
    #[arg(long)]
    config: PathBuf,

    /// Path of the JSON history file to write.
    #[arg(long)]
    output: PathBuf,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let cfg = Config::from_file(&args.config).context("failed to load config")?;
    log::info!("{cfg:#?}");

    let mut engine = Engine::new(cfg).context("failed to construct engine")?;
    let history = engine.run().context("failed to run simulation")?;

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {:?}", args.output))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &history).context("failed to serialize history")?;

    log::info!("wrote {} daily records to {:?}", history.len(), args.output);

    Ok(())
}
