//! # chatstats CLI
//!
//! Command-line interface for chatstats library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatstats::ChatstatsError;
use chatstats::cli::Args;
use chatstats::paths::collect_inputs;
use chatstats::pipeline::{ChatReport, process_all};

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when at least one chat failed.
fn run() -> Result<bool, ChatstatsError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    let config = args.to_config();
    config.validate()?;
    let inputs = collect_inputs(&args.inputs)?;

    println!("📦 chatstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Inputs:  {} chat(s)", inputs.len());
    println!("💾 Output:  {}", args.output.display());
    println!();

    let outcome = process_all(&inputs, &args.output, &config);

    for report in &outcome.reports {
        print_report(report);
    }
    for (path, err) in &outcome.failures {
        println!("❌ {}: {}", path.display(), err);
    }

    println!();
    println!(
        "✅ Done! {} processed, {} failed ({:.2}s)",
        outcome.reports.len(),
        outcome.failures.len(),
        total_start.elapsed().as_secs_f64()
    );

    Ok(outcome.is_success())
}

fn print_report(report: &ChatReport) {
    let stats = &report.stats;
    println!("💬 {}", report.input.display());
    println!(
        "   {} lines, {} messages, {} senders",
        stats.total_lines,
        stats.valid_messages,
        report.analysis.sender_count
    );
    println!(
        "   {} continuations, {} system lines, {} orphans, {} placeholders",
        stats.continuation_lines,
        stats.misattributed_headers,
        stats.orphan_lines,
        stats.ignored_messages
    );
    if let Some(top) = report.analysis.top_by_messages.first() {
        println!("   Most active: {} ({})", top.name, top.value);
    }
    println!("   📁 {}", report.output_dir.display());
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
