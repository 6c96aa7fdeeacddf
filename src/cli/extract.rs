use std::path::PathBuf;

use clap::Args;

use crate::cli::{print_events, OutputFormat};
use crate::extraction::{ExtractionConfig, ExtractionEngine, DEFAULT_MAX_COUNT_DELETION_LENGTH};
use crate::parsing::fasta::FastaReference;
use crate::parsing::transvar::{self, TransvarRecord};

#[derive(Args)]
pub struct ExtractArgs {
    /// Annotation output (tab-delimited, optionally gzipped)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Indexed reference FASTA (requires a .fai next to it)
    #[arg(short, long, required = true)]
    pub reference: PathBuf,

    /// Skip count-style deletions (e.g. del25) longer than this
    #[arg(long, default_value_t = DEFAULT_MAX_COUNT_DELETION_LENGTH)]
    pub max_deletion_length: u64,

    /// Number of worker threads (0 = all cores)
    #[arg(short, long, default_value = "0")]
    pub threads: usize,
}

/// Execute extract subcommand
///
/// # Errors
///
/// Returns an error if the input or reference cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ExtractArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let records = parse_input(&args)?;
    let reference = FastaReference::from_path(&args.reference)?;

    if verbose {
        eprintln!(
            "Parsed {} records; reference {}",
            records.len(),
            reference.path().display()
        );
    }

    let config = ExtractionConfig {
        max_count_deletion_length: args.max_deletion_length,
    };
    let engine = ExtractionEngine::with_config(&reference, config);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build()?;
    let events = pool.install(|| engine.extract_all(&records));

    if verbose {
        eprintln!("Extracted {} events", events.len());
    }

    print_events(&events, format)
}

fn parse_input(args: &ExtractArgs) -> anyhow::Result<Vec<TransvarRecord>> {
    if args.input.to_string_lossy() == "-" {
        return Ok(transvar::read_transvar(std::io::stdin().lock())?);
    }
    Ok(transvar::parse_transvar_file(&args.input)?)
}
