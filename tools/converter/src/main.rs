//! CLI tool for converting BAI2 statement files into CSV tables.
//!
//! # Usage
//!
//! ```bash
//! # Writes /data/statement/{file_header,accounts,transactions}.csv
//! bai2-converter --input /data/statement.bai2
//!
//! # Read from stdin, keep going past malformed amounts, also emit groups.csv
//! cat statement.bai2 | bai2-converter -o out/ --skip-malformed --include-groups
//!
//! # Per-record tracing
//! RUST_LOG=bai2=debug bai2-converter -i statement.bai2
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write, stdin};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use bai2::prelude::*;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Convert a BAI2 bank statement into CSV tables.
///
/// Writes one CSV file per record kind into the output directory:
/// `file_header.csv`, `accounts.csv` and `transactions.csv`.
#[derive(Parser, Debug)]
#[command(name = "bai2-converter")]
#[command(version, about)]
struct Args {
    /// Input BAI2 file. If not specified, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory. Defaults to a directory named after the input file,
    /// next to it. Required when reading from stdin.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Skip transaction records with a malformed amount instead of aborting.
    #[arg(long)]
    skip_malformed: bool,

    /// Also write group headers to `groups.csv`.
    #[arg(long)]
    include_groups: bool,
}

/// What to do with a record whose amount cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MalformedPolicy {
    Abort,
    Skip,
}

/// Outcome of a conversion run.
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    rows: Vec<(RecordKind, usize)>,
    skipped: usize,
}

impl Summary {
    fn rows(&self, kind: RecordKind) -> usize {
        self.rows.iter().find(|(k, _)| *k == kind).map_or(0, |(_, n)| *n)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let output_dir = output_dir(args.input.as_deref(), args.output_dir.as_deref())?;

    // Open input source
    let input: Box<dyn Read> = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(stdin().lock()),
    };

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;
    info!(dir = %output_dir.display(), "writing tables");

    let mut kinds = OUTPUT_KINDS.to_vec();
    if args.include_groups {
        kinds.insert(1, RecordKind::GroupHeader);
    }
    let mut writers = kinds
        .iter()
        .map(|kind| -> Result<TableWriter<BufWriter<File>>> {
            let path = output_dir.join(format!("{}.csv", kind.table_name()));
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(TableWriter::new(BufWriter::new(file), *kind))
        })
        .collect::<Result<Vec<_>>>()?;

    let policy = if args.skip_malformed { MalformedPolicy::Skip } else { MalformedPolicy::Abort };
    let summary = convert(input, &mut writers, policy)?;

    // Report to stderr, stdout stays clean
    eprintln!("Headers      : {} row(s)", summary.rows(RecordKind::FileHeader));
    if args.include_groups {
        eprintln!("Groups       : {} row(s)", summary.rows(RecordKind::GroupHeader));
    }
    eprintln!("Accounts     : {} row(s)", summary.rows(RecordKind::AccountIdentifier));
    eprintln!("Transactions : {} row(s)", summary.rows(RecordKind::TransactionDetail));
    if summary.skipped > 0 {
        eprintln!("Skipped      : {} malformed record(s)", summary.skipped);
    }
    eprintln!("Conversion complete: {}", output_dir.display());

    Ok(())
}

/// Resolves the output directory: explicit flag, else `<parent>/<stem>` of the input.
fn output_dir(input: Option<&Path>, explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    let Some(input) = input else {
        bail!("--output-dir is required when reading from stdin");
    };
    let stem = input
        .file_stem()
        .with_context(|| format!("Cannot derive output directory from {}", input.display()))?;
    Ok(input.parent().unwrap_or(Path::new("")).join(stem))
}

/// Streams records from `input` into the writer of their kind.
///
/// Every table gets its header row, even when it stays empty. Records of
/// kinds without a writer are dropped. On failure the writers are still
/// flushed, so rows already converted remain in the output; the parse error
/// wins over a flush error, which is only logged.
fn convert<R: Read, W: Write>(
    input: R,
    writers: &mut [TableWriter<W>],
    policy: MalformedPolicy,
) -> Result<Summary> {
    for writer in writers.iter_mut() {
        writer.write_header().context("Failed to write table header")?;
    }

    let result = route_records(input, writers, policy);
    let flushed = flush_all(writers);
    let skipped = match result {
        Ok(skipped) => {
            flushed?;
            skipped
        }
        Err(e) => {
            if let Err(flush_err) = flushed {
                warn!("{flush_err:#}");
            }
            return Err(e);
        }
    };

    Ok(Summary {
        rows: writers.iter().map(|w| (w.kind(), w.records_written())).collect(),
        skipped,
    })
}

/// Flushes every writer, even after one of them fails; reports the first failure.
fn flush_all<W: Write>(writers: &mut [TableWriter<W>]) -> Result<()> {
    let mut first = None;
    for writer in writers.iter_mut() {
        if let Err(e) = writer.flush() {
            let e = anyhow::Error::new(e)
                .context(format!("Failed to flush {}.csv", writer.kind().table_name()));
            first.get_or_insert(e);
        }
    }
    first.map_or(Ok(()), Err)
}

fn route_records<R: Read, W: Write>(
    input: R,
    writers: &mut [TableWriter<W>],
    policy: MalformedPolicy,
) -> Result<usize> {
    let mut skipped = 0;
    for result in parse(input) {
        let record = match result {
            Ok(record) => record,
            Err(e @ ParseError::MalformedAmount { .. }) if policy == MalformedPolicy::Skip => {
                warn!(line = ?e.line(), "{e}");
                skipped += 1;
                continue;
            }
            Err(e) => return Err(e).context("Failed to read BAI2 input"),
        };

        if let Some(writer) = writers.iter_mut().find(|w| w.kind() == record.kind()) {
            writer.write(&record).context("Failed to write record")?;
        }
    }
    Ok(skipped)
}
