//! secnum CLI - Markdown header numbering tool

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use secnum::{renumber_file_with_options, RenumberOptions, ReportFormat};

#[derive(Parser)]
#[command(name = "secnum")]
#[command(author = "iyulab")]
#[command(version)]
#[command(
    about = "Number Markdown headers hierarchically and rewrite section references",
    long_about = None
)]
struct Cli {
    /// Markdown file to process
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write the result back to the input file
    #[arg(short, long)]
    write: bool,

    /// Skip numbering the topmost heading level
    #[arg(short = '1', long)]
    ignore_top_level: bool,

    /// Write a JSON report with the label mapping and statistics to FILE
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = RenumberOptions::new().with_ignore_top_level(cli.ignore_top_level);
    let result = renumber_file_with_options(&cli.input, &options)?;

    log::debug!(
        "Processed {} lines, {} headers from {}",
        result.stats.line_count,
        result.stats.header_count,
        cli.input.display()
    );

    // -w takes precedence over -o: write back in place.
    let destination = if cli.write {
        Some(cli.input.clone())
    } else {
        cli.output
    };

    if let Some(path) = &destination {
        fs::write(path, &result.content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", result.content);
    }

    if let Some(path) = &cli.report {
        let report = result.report_json(ReportFormat::Pretty)?;
        fs::write(path, report)?;
        log::debug!("Report written to {}", path.display());
    }

    Ok(())
}
