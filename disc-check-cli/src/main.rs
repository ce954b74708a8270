//! disc-check CLI
//!
//! Command-line interface for verifying the EDC/ECC integrity of raw
//! CD-ROM sector images.

mod error;

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use disc_check_lib::{EccTables, ScanOptions, ScanReport, scan_image};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "disc-check")]
#[command(version)]
#[command(about = "Verify EDC/ECC integrity of raw CD-ROM sector images", long_about = None)]
struct Cli {
    /// Path to the disc image (raw 2352-byte sectors)
    image: PathBuf,

    /// Print the report as JSON instead of the summary table
    #[arg(long)]
    json: bool,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,
}

fn main() -> ExitCode {
    // Message-only stderr logging; RUST_LOG overrides the level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version exit cleanly; anything else is a usage
            // error and exits 1.
            let failed = e.use_stderr();
            let _ = e.print();
            return if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run_check(&cli) {
        Ok(report) => match print_report(&cli, &report) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("{}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            log::error!("{}: {}", cli.image.display(), e);
            ExitCode::FAILURE
        }
    }
}

/// Open the image and run the scan, driving a progress bar from the
/// scanner's megabyte-bucketed callback.
fn run_check(cli: &Cli) -> Result<ScanReport, CliError> {
    let tables = EccTables::new();
    let mut file = File::open(&cli.image)?;
    let total = file.metadata()?.len();

    log::info!("Checking {}...", cli.image.display());

    let bar = if cli.no_progress {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template("Analyzing [{bar:40}] {percent:>3}%")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    };

    let progress: &dyn Fn(u64, u64) = &|done, _total| bar.set_position(done);
    let report = scan_image(
        &tables,
        &mut file,
        &ScanOptions::default(),
        Some(progress),
    );
    bar.finish_and_clear();

    Ok(report?)
}

/// Print the final report to stdout.
fn print_report(cli: &Cli, report: &ScanReport) -> Result<(), CliError> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!();
    print!("{report}");
    if report.has_errors() {
        println!(
            "{}",
            format!("{} sectors with errors", report.total_errors)
                .if_supports_color(Stdout, |t| t.red()),
        );
    } else {
        println!(
            "{}",
            "No errors found".if_supports_color(Stdout, |t| t.green()),
        );
    }
    println!("Done");
    Ok(())
}
