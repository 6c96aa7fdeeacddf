use std::path::PathBuf;

use clap::Args;

use crate::cli::{print_events, OutputFormat};
use crate::extraction::{ExtractionConfig, ExtractionEngine, DEFAULT_MAX_COUNT_DELETION_LENGTH};
use crate::parsing::fasta::FastaReference;

#[derive(Args)]
pub struct VariantArgs {
    /// gDNA fragment with its chromosome, e.g. chr17:g.41201160dupA
    #[arg(required = true)]
    pub gdna: String,

    /// Indexed reference FASTA (requires a .fai next to it)
    #[arg(short, long, required = true)]
    pub reference: PathBuf,

    /// Gene to attach to the event
    #[arg(long, default_value = ".")]
    pub gene: String,

    /// Transcript to attach to range events
    #[arg(long, default_value = ".")]
    pub transcript: String,

    /// Skip count-style deletions (e.g. del25) longer than this
    #[arg(long, default_value_t = DEFAULT_MAX_COUNT_DELETION_LENGTH)]
    pub max_deletion_length: u64,
}

/// Execute variant subcommand
///
/// # Errors
///
/// Returns an error if the reference cannot be opened.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: VariantArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reference = FastaReference::from_path(&args.reference)?;
    let config = ExtractionConfig {
        max_count_deletion_length: args.max_deletion_length,
    };
    let engine = ExtractionEngine::with_config(&reference, config);

    let events: Vec<_> = engine
        .extract_variant(&args.gene, &args.transcript, &args.gdna)
        .into_iter()
        .collect();

    if verbose && events.is_empty() {
        eprintln!("No event could be reconstructed from {}", args.gdna);
    }

    print_events(&events, format)
}
