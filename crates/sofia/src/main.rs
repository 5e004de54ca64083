use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use sofia::report::{self, OutputFormat};
use sofia::{scan, Config};

/// Sofia - Vue component API census
#[derive(Parser)]
#[command(name = "sofia")]
#[command(about = "Classify Vue single-file components by API style and score Options API complexity")]
#[command(version)]
struct Cli {
  /// Root directory to scan
  #[arg(long, value_name = "PATH", default_value = "./")]
  folder: PathBuf,

  /// Extra directory names to skip, comma separated
  #[arg(long, value_name = "NAMES", value_delimiter = ',')]
  blacklist: Vec<String>,

  /// Score Options API components and report complexity tiers
  #[arg(long)]
  complexity: bool,

  /// Output format
  #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
  format: OutputFormat,

  /// Configuration file path
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Log traversal details to stderr
  #[arg(short, long)]
  verbose: bool,
}

fn init_tracing(verbose: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    if verbose {
      EnvFilter::new("sofia=debug,warn")
    } else {
      EnvFilter::new("warn")
    }
  });

  tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let config = match &cli.config {
    Some(path) => Config::load_from_file(path),
    None => Config::load(),
  }
  .context("Failed to load configuration")?;

  let options = config.scan_options(&cli.blacklist, cli.complexity);
  let result = scan(&cli.folder, &options)?;

  print!("{}", report::render(&result, cli.format)?);
  Ok(())
}
