use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sutsilvan_converter::{
    write_table, Converter, OutputFormat, Report, SourceDocument, Vocabulary,
};

#[derive(Parser)]
#[command(name = "sutsilvan-converter")]
#[command(about = "Convert the Sutsilvan dictionary source into a delimited table - one row per entry")]
struct Args {
    /// Dictionary source file (plain text or .bz2)
    input: PathBuf,

    /// Output table file
    output: PathBuf,

    /// Column delimiter; `\t` means a tab
    #[arg(short, long, default_value = r"\t")]
    delimiter: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Delimited)]
    format: OutputFormat,

    /// YAML file with genus and grammar marker lists (built-in lists otherwise)
    #[arg(long)]
    vocabulary: Option<PathBuf>,

    /// Compose the source to Unicode NFC before parsing
    #[arg(long)]
    nfc: bool,

    /// Quiet mode - minimal output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.quiet);

    let vocabulary = match &args.vocabulary {
        Some(path) => Vocabulary::load(path)?,
        None => Vocabulary::default(),
    };
    let converter = Converter::new(&vocabulary)?;
    let delimiter = unescape_delimiter(&args.delimiter);

    if !args.quiet {
        println!("Parsing: {}", args.input.display());
        println!("Output: {}", args.output.display());
        println!("Format: {:?}", args.format);
        println!();
    }

    let start_time = Instant::now();

    let source = SourceDocument::read(&args.input, args.nfc)?;
    info!(
        lines = source.lines.len(),
        encoding = source.encoding,
        "read {}",
        args.input.display()
    );

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(source.lines.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{bar:40}] {pos}/{len} lines ({per_sec})")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    };

    let conversion = converter.convert(&source.lines, &pb);
    pb.finish_and_clear();

    write_table(&args.output, &conversion.table, args.format, &delimiter)?;

    if !args.quiet {
        print_stats(&conversion.report, source.encoding, start_time.elapsed());
    }

    Ok(())
}

fn init_tracing(quiet: bool) {
    let default = if quiet { "warn" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

// Shells make a literal tab awkward to pass, so accept the usual escapes.
fn unescape_delimiter(raw: &str) -> String {
    match raw {
        r"\t" => "\t".to_string(),
        r"\n" => "\n".to_string(),
        other => other.to_string(),
    }
}

fn print_stats(report: &Report, encoding: &str, elapsed: Duration) {
    println!();
    println!("============================================================");
    println!("Source encoding: {}", encoding);
    println!("Lines read: {}", report.lines_read);
    println!("Entries extracted: {}", report.entries_extracted);
    println!("------------------------------------------------------------");
    println!("References resolved: {}", report.references_resolved);
    println!("References dropped: {}", report.references_dropped);
    println!("Residual markers dropped: {}", report.residue_dropped);
    println!("------------------------------------------------------------");
    println!("Rows written (incl. header): {}", report.rows_written);
    println!("Errors: {}", report.errors);
    println!("Warnings: {}", report.warnings);
    println!("Time: {}m {}s", elapsed.as_secs() / 60, elapsed.as_secs() % 60);
    println!(
        "Rate: {:.0} lines/sec",
        report.lines_read as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );
    println!("============================================================");
}
