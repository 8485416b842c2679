//! tabular-preview CLI - preview and classify tabular datasets

use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;
use std::time::Duration;
use tabular_preview::{
    AnalysisView, Classifier, ColumnClassification, Ingestor, SampleSize, Source, Table,
    enabled_views,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Widest cell shown in text output before truncation.
const MAX_CELL_WIDTH: usize = 32;

/// Preview CSV, TSV and Excel datasets and classify their columns.
///
/// Inputs may be local files or http(s) URLs. Only a bounded sample of
/// rows is read.
#[derive(Parser, Debug)]
#[command(name = "tabular-preview")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file(s) or URL(s) to preview
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Number of data rows to sample (default: 20)
    #[arg(short = 'n', long, default_value = "20")]
    rows: usize,

    /// Read every row instead of sampling
    #[arg(short = 'a', long)]
    all: bool,

    /// Largest accepted input in MiB
    #[arg(long, default_value = "10")]
    max_size_mb: u64,

    /// Length above which a first value counts as free text
    #[arg(long, default_value = "50")]
    text_threshold: usize,

    /// URL fetch timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Output format: text (default) or json
    #[arg(short = 'f', long, default_value = "text")]
    format: OutputFormat,

    /// Show column classification and enabled analysis views
    #[arg(short = 'c', long)]
    classify: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    source: &'a str,
    #[serde(flatten)]
    table: &'a Table,
    #[serde(skip_serializing_if = "Option::is_none")]
    classification: Option<&'a ColumnClassification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    views: Option<Vec<AnalysisView>>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let mut ingestor = Ingestor::new();
    ingestor
        .sample_size(if args.all {
            SampleSize::All
        } else {
            SampleSize::Records(args.rows)
        })
        .max_bytes(args.max_size_mb.saturating_mul(1024 * 1024))
        .timeout(Duration::from_secs(args.timeout));

    let mut classifier = Classifier::new();
    classifier.text_threshold(args.text_threshold);

    let mut exit_code = ExitCode::SUCCESS;

    for input in &args.inputs {
        if let Err(e) = preview_input(input, &ingestor, &classifier, &args) {
            eprintln!("Error processing {input}: {e}");
            exit_code = ExitCode::FAILURE;
        }
    }

    exit_code
}

fn preview_input(
    input: &str,
    ingestor: &Ingestor,
    classifier: &Classifier,
    args: &Args,
) -> Result<(), Box<dyn std::error::Error>> {
    // Local files are size-checked on disk before being read
    let table = if Source::is_url(input) {
        ingestor.parse(&Source::url(input))?
    } else {
        ingestor.parse_path(input)?
    };
    let classification = args.classify.then(|| classifier.classify(&table));

    match args.format {
        OutputFormat::Text => print_text_output(input, &table, classification.as_ref()),
        OutputFormat::Json => {
            let report = Report {
                source: input,
                table: &table,
                classification: classification.as_ref(),
                views: classification.as_ref().map(enabled_views),
            };
            println!("{}", serde_json::to_string(&report)?);
        }
    }

    Ok(())
}

fn print_text_output(input: &str, table: &Table, classification: Option<&ColumnClassification>) {
    println!("Source: {input}");
    println!("  Columns: {}", table.num_columns());
    println!("  Sampled rows: {}", table.num_rows());

    println!("  {}", table.columns().join(" | "));
    for row in table.rows() {
        let cells: Vec<String> = row
            .values()
            .iter()
            .map(|v| truncate_cell(&v.to_string()))
            .collect();
        println!("  {}", cells.join(" | "));
    }

    if let Some(classes) = classification {
        println!("  Column types:");
        for name in table.columns() {
            if let Some(kind) = classes.kind_of(name) {
                println!("    {name}: {kind}");
            }
        }
        let views: Vec<&str> = enabled_views(classes).iter().map(|v| v.label()).collect();
        println!("  Enabled views: {}", views.join(", "));
    }

    println!();
}

fn truncate_cell(cell: &str) -> String {
    if cell.chars().count() > MAX_CELL_WIDTH {
        let head: String = cell.chars().take(MAX_CELL_WIDTH - 3).collect();
        format!("{head}...")
    } else {
        cell.to_string()
    }
}
