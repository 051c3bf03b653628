use anyhow::Context;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use mapfolders_core::{
    artifact_file_name, format_output, FolderScanner, OutputFormat, ProgressSink, ScanConfig,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mapfolders")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Summarize a directory tree as nested JSON grouped by folder")]
#[command(long_about = "Scans a directory tree and saves a compact summary of its files grouped \
    by folder. Folders with nested structure are collapsed to two tiers, with deeper subpaths \
    kept as slash-joined keys; loose files directly under the target land under the key 'root'.\n\n\
    The result is written to <folder>_<timestamp>.json in the current directory by default; \
    a progress bar on stderr tracks the scan file by file.")]
pub struct Args {
    /// Target directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormatArg::Json)]
    pub format: OutputFormatArg,

    /// Output file (defaults to <folder>_<timestamp>.<ext> in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Additional folder names excluded from the subfolder check
    #[arg(long, action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Show verbose diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Summary,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Summary => OutputFormat::Summary,
        }
    }
}

/// Progress sink backed by the terminal bar
struct BarProgress(ProgressBar);

impl ProgressSink for BarProgress {
    fn advance(&self) {
        self.0.inc(1);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ScanConfig::new(args.path.clone()).with_ignore_names(args.ignore.clone());
    let scanner = FolderScanner::new(config);

    // Counting pre-pass: surfaces the fatal conditions and sizes the bar.
    // Runs silently; only the main scan drives the progress display.
    let total = scanner.prepare()?;

    if args.verbose {
        eprintln!("Counted {} files under {}", total, args.path.display());
    }

    let bar = build_bar(total, args.no_progress);
    let report = scanner.scan(&BarProgress(bar.clone()))?;
    bar.finish();

    let format: OutputFormat = args.format.into();
    let rendered = format_output(&report, format)?;

    let out_path = match args.output {
        Some(path) => path,
        None => PathBuf::from(artifact_file_name(
            &target_basename(&args.path),
            chrono::Utc::now(),
            format,
        )),
    };

    fs::write(&out_path, &rendered).context("Failed to write output file")?;
    println!("Saved to {}", out_path.display());

    if args.verbose {
        eprintln!(
            "Visited {} files in {}ms",
            report.stats.files_seen, report.metadata.scan_duration_ms
        );
    }

    Ok(())
}

fn build_bar(total: u64, no_progress: bool) -> ProgressBar {
    if no_progress || !atty::is(atty::Stream::Stderr) {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("Progress |{bar:40}| {percentage}% ({pos}/{len})")
            .unwrap()
            .progress_chars("█░"),
    );
    bar
}

/// Folder name used in the default artifact file name
fn target_basename(path: &Path) -> String {
    path.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .or_else(|| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "scan".to_string())
}
