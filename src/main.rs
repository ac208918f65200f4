use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fraglog::fraglog_reader::DEFAULT_LOG_PATH;
use fraglog::{DataSource, PlotConfig};

#[derive(Parser)]
#[command(name = "fraglog", about = "Plot allocator fragmentation from a malloc log")]
struct Cli {
    /// Log file to scan
    #[arg(long, default_value = DEFAULT_LOG_PATH)]
    log: PathBuf,

    /// Write the chart to this image (.svg or .png) instead of showing it
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Plot the built-in sample data instead of reading a log
    #[arg(long)]
    sample: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fraglog=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let source = if cli.sample {
        DataSource::Sample
    } else {
        DataSource::Log(cli.log.clone())
    };
    let config = PlotConfig {
        output: cli.output,
        ..PlotConfig::default()
    };

    fraglog::plot(&source, &config).with_context(|| format!("failed to plot {source:?}"))?;
    Ok(())
}
