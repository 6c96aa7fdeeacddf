//! Command-line interface for gdna-extract.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **extract**: Extract events from an annotation output file
//! - **variant**: Reconstruct a single standalone gDNA fragment
//!
//! ## Usage
//!
//! ```text
//! # Extract all events from annotation output
//! gdna-extract extract annotations.tsv --reference GRCh37.fa
//!
//! # Pipe from the annotation tool
//! transvar panno -l queries.txt --ensembl | gdna-extract extract - --reference GRCh37.fa
//!
//! # JSON output for scripting
//! gdna-extract --format json extract annotations.tsv --reference GRCh37.fa
//!
//! # A single fragment
//! gdna-extract variant chr17:g.41201160dupA --reference GRCh37.fa --gene BRCA1
//! ```

use clap::{Parser, Subcommand};

use crate::core::types::ActionableEvent;

pub mod extract;
pub mod variant;

#[derive(Parser)]
#[command(name = "gdna-extract")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Reconstruct position-resolved variants from gDNA annotation notation")]
#[command(
    long_about = "gdna-extract turns compact gDNA notation from annotation-tool output (e.g. 133738357T>C, 41201160dupA, 55152095_55152106del12) into position-resolved variants.\n\nElided reference bases are looked up in an indexed FASTA, and insertions, deletions and duplications are reported VCF-style on their anchor base."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract events from annotation-tool output
    Extract(extract::ExtractArgs),

    /// Reconstruct a single gDNA fragment such as chr7:g.140453136A>T
    Variant(variant::VariantArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Print events in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print_events(events: &[ActionableEvent], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for event in events {
                println!("{event}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(events)?),
        OutputFormat::Tsv => {
            println!("type\tgene\ttranscript\tchromosome\tposition\tend\tref\talt");
            for event in events {
                println!("{}", tsv_row(event));
            }
        }
    }
    Ok(())
}

fn tsv_row(event: &ActionableEvent) -> String {
    match event {
        ActionableEvent::SomaticVariant(v) => format!(
            "somatic_variant\t{}\t.\t{}\t{}\t.\t{}\t{}",
            v.gene, v.chromosome, v.position, v.ref_allele, v.alt_allele
        ),
        ActionableEvent::GenomicRange(r) => format!(
            "genomic_range\t{}\t{}\t{}\t{}\t{}\t.\t.",
            r.gene, r.transcript, r.chromosome, r.start_position, r.end_position
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{GenomicRangeEvent, SomaticVariantEvent};

    #[test]
    fn test_tsv_row() {
        let snv = SomaticVariantEvent::new("BRAF", "7", 140_453_136, "A", "T").into();
        assert_eq!(
            tsv_row(&snv),
            "somatic_variant\tBRAF\t.\t7\t140453136\t.\tA\tT"
        );

        let range = GenomicRangeEvent::new("EGFR", "ENST1", "7", 10, 20).into();
        assert_eq!(tsv_row(&range), "genomic_range\tEGFR\tENST1\t7\t10\t20\t.\t.");
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "gdna-extract",
            "--format",
            "json",
            "extract",
            "in.tsv",
            "--reference",
            "ref.fa",
        ])
        .unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Extract(_)));
    }
}
