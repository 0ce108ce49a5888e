use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glossa_enricher::corpus::DEFAULT_OUTPUT_SUFFIX;
use glossa_enricher::{enrich_path, EnrichMode, EnrichOptions};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Add `gloss_index` to every analysis
    GlossIndexOnly,
    /// Derive all analysis fields and index word offsets
    FullEnrich,
}

impl From<Mode> for EnrichMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::GlossIndexOnly => EnrichMode::GlossIndexOnly,
            Mode::FullEnrich => EnrichMode::FullEnrich,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about = "Adds gloss indices and derived fields to corpus JSON files")]
struct Cli {
    /// Corpus file or directory of corpus files
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Output file, or output root when the input is a directory
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Mode::GlossIndexOnly)]
    mode: Mode,

    /// Appended to file names when no output path is given
    #[arg(long, default_value = DEFAULT_OUTPUT_SUFFIX)]
    suffix: String,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = EnrichOptions {
        mode: cli.mode.into(),
        output_suffix: cli.suffix,
    };

    info!("reading corpus from {}", cli.input.display());
    let summary = enrich_path(&cli.input, cli.output.as_deref(), &options)?;

    info!(
        "{} files processed, {} skipped, {} failed: {}",
        summary.files_processed,
        summary.files_skipped,
        summary.failures.len(),
        summary.report
    );
    for (path, reason) in &summary.failures {
        error!("{}: {}", path.display(), reason);
    }

    if !summary.is_success() {
        anyhow::bail!("{} corpus files could not be enriched", summary.failures.len());
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
