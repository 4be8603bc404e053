use anyhow::Result;
use clap::Parser;
use std::fs::File;
use std::time::Instant;

use csvnorm::diagnostics::ConsoleSink;
use csvnorm::normalizer::{self, StreamStats};
use csvnorm::output;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input csv file
    #[arg(value_name = "FILE")]
    file: String,

    #[arg(short, long, default_value = "stdout")]
    output: String,

    /// Where detailed row-failure diagnostics are appended
    #[arg(long, default_value = "csvnorm.log")]
    log_file: String,

    #[arg(long)]
    benchmark: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.log_file)?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let start_time = Instant::now();
    tracing::debug!(input = %args.file, "starting normalization");

    // missing or unreadable input is run-fatal
    let input = File::open(&args.file)?;
    let mut writer = output::create_writer(&args.output)?;
    let mut sink = ConsoleSink;

    let stats = normalizer::normalize_stream(input, &mut writer, &mut sink)?;
    writer.finish()?;

    tracing::debug!(
        rows = stats.rows_read,
        emitted = stats.rows_emitted,
        dropped = stats.rows_dropped,
        "finished normalization"
    );

    if args.benchmark {
        print_run_summary(&stats, start_time.elapsed());
    }

    Ok(())
}

fn print_run_summary(stats: &StreamStats, duration: std::time::Duration) {
    let duration_secs = duration.as_secs_f64();
    eprintln!("\n=== RUN SUMMARY ===");
    eprintln!("Rows read: {}", stats.rows_read);
    eprintln!("Rows emitted: {}", stats.rows_emitted);
    eprintln!("Rows dropped: {}", stats.rows_dropped);
    eprintln!("Processing time: {:.3}s", duration_secs);
    eprintln!(
        "Throughput: {:.0} rows/s",
        stats.rows_read as f64 / duration_secs
    );
    if stats.rows_read > 0 {
        eprintln!(
            "Normalization success rate: {:.1}%",
            (stats.rows_emitted as f64 / stats.rows_read as f64) * 100.0
        );
    }
}
