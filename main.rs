use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use wordfreq::logging::init_tracing;
use wordfreq::report::print_report;
use wordfreq::{FilterSpec, OutputFormat, Result, SortOrder, run, source};

/// Count the words in a file and report them sorted by frequency
#[derive(Parser, Debug)]
#[command(name = "wordfreq", version, about)]
struct Args {
    /// Text file to read
    filename: String,

    /// Minimum count of words (positive integer)
    #[arg(long, allow_hyphen_values = true)]
    minimum: Option<String>,

    /// Comma-separated list of words to be excluded from the report.
    /// If a word contains an apostrophe, escape it for your shell, e.g. let\'s
    #[arg(long, allow_hyphen_values = true)]
    exclude: Option<String>,

    /// Sort order for word frequencies: 'desc' or 'asc'
    #[arg(long, default_value = "desc", allow_hyphen_values = true)]
    order: String,

    /// Report format: 'table', 'json' or 'csv'
    #[arg(long, default_value = "table")]
    format: String,
}

fn count_words(args: &Args) -> Result<()> {
    info!(file = %args.filename, "counting words");

    // Validate every option before touching the file
    let spec = FilterSpec::from_options(args.minimum.as_deref(), args.exclude.as_deref())?;
    let order: SortOrder = args.order.parse()?;
    let format: OutputFormat = args.format.parse()?;

    let text = source::load_text(&args.filename)?;
    let rows = run(&text, &spec, order);
    info!(file = %args.filename, rows = rows.len(), %order, "report ready");

    print_report(&mut io::stdout().lock(), &rows, format)
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match count_words(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.error_code(), %e, "run failed");
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
