use clap::Parser;
use gdna_extract::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag; stdout carries the events
    let filter = if cli.verbose {
        EnvFilter::new("gdna_extract=debug,info")
    } else {
        EnvFilter::new("gdna_extract=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Extract(args) => {
            cli::extract::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Variant(args) => {
            cli::variant::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
