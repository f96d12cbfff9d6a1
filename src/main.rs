use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use git_testament::{git_testament, render_testament};

mod commands;
mod utils;

git_testament!(TESTAMENT);

/// Parse Illumina read metadata and bin quality scores.
#[derive(Parser)]
#[command(name = "illumina", propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    subcommand: Subcommands,

    /// Only errors are printed to the stderr stream.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// All available information, including debug information, is printed to
    /// stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Subcommands {
    /// Parses the metadata carried in the read names of a FASTQ file.
    Parse(commands::parse::ParseArgs),

    /// Bins the quality scores of a FASTQ file.
    Bin(commands::bin::BinArgs),
}

fn main() -> anyhow::Result<()> {
    let version = render_testament!(TESTAMENT);
    let matches = Cli::command().version(version).get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let mut level = tracing::Level::INFO;
    if cli.quiet {
        level = tracing::Level::ERROR;
    } else if cli.verbose {
        level = tracing::Level::DEBUG;
    }

    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match cli.subcommand {
        Subcommands::Parse(args) => commands::parse::parse(args),
        Subcommands::Bin(args) => commands::bin::bin(args),
    }
}
