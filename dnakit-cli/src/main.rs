//! dnakit CLI
//!
//! Runs one DNA sequence analysis from the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dnakit_cli::{execute, execute_json, load_sequence, write_result, Source};
use dnakit_seq::{enzyme_table, AnalysisKind, AnalysisOptions};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "dnakit")]
#[command(version)]
#[command(about = "DNA sequence analysis toolkit", long_about = None)]
struct Cli {
    /// Analysis to run: transcribe, complement, reverseComplement, translate,
    /// translateReadingFrame, restrictionSites, restrictionSitePositions, orf,
    /// sixFrame, gcContent, nucleotideFreq, meltingTemp, annealingTemp,
    /// analyzeAll
    analysis: AnalysisKind,

    /// DNA sequence text (any case, whitespace ignored)
    #[arg(short, long, conflicts_with = "input")]
    sequence: Option<String>,

    /// FASTA or plain sequence file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Reading frame (1, 2 or 3) for translateReadingFrame
    #[arg(short, long)]
    frame: Option<usize>,

    /// Primer for annealingTemp and analyzeAll
    #[arg(short, long)]
    primer: Option<String>,

    /// Restriction enzyme table: default, common, or NAME=SITE,NAME=SITE
    #[arg(short, long, default_value = "default")]
    enzymes: String,

    /// Save the result document to this file instead of printing it
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the JSON envelope instead of text
    #[arg(long, conflicts_with = "output")]
    json: bool,

    /// Wrap sequence results at this many characters per line
    #[arg(short, long)]
    wrap: Option<usize>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let source = Source::from_args(cli.sequence, cli.input)?;
    let raw = load_sequence(&source)?;
    let options = AnalysisOptions {
        frame: cli.frame,
        primer: cli.primer,
        enzymes: Some(enzyme_table(&cli.enzymes)?),
    };
    debug!(analysis = %cli.analysis, "dispatching");

    if cli.json {
        let (envelope, succeeded) = execute_json(cli.analysis, &raw, &options);
        println!("{envelope}");
        if !succeeded {
            anyhow::bail!("{} failed", cli.analysis);
        }
        return Ok(());
    }

    let result = execute(cli.analysis, &raw, &options, cli.wrap)?;
    match cli.output {
        Some(path) => write_result(&path, cli.analysis, &result)?,
        None => println!("{result}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
