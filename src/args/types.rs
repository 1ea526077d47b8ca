use crate::controller::expand::ExpansionMode;
use crate::controller::strokes_gained::{AnnotatorConfig, DEFAULT_CALCULATOR_URL, DEFAULT_WAIT};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Per-hole round CSV
    #[arg(
        short = 'r',
        long,
        value_name = "ROUND_CSV",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub round_file: PathBuf,
    /// Course distance table CSV, keyed on course_name and hole_number
    #[arg(
        short = 'd',
        long,
        value_name = "DISTANCE_CSV",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub distance_file: PathBuf,
    /// Where the processed and gap files are written
    #[arg(
        short = 'o',
        long,
        value_name = "OUTPUT_DIR",
        default_value = ".",
        value_parser = crate::args::validation::check_writable_dir
    )]
    pub output_dir: PathBuf,
    #[arg(short = 'm', long, value_enum, default_value_t = ExpansionMode::LandingTracking)]
    pub mode: ExpansionMode,
    /// Strokes-gained calculator page
    #[arg(long, value_name = "URL", default_value = DEFAULT_CALCULATOR_URL)]
    pub lookup_url: String,
    /// Don't call the calculator; strokes_gained stays empty
    #[arg(long)]
    pub skip_lookup: bool,
    /// Seconds to wait on each calculator page stage
    #[arg(long, value_name = "SECONDS", default_value = "10")]
    pub lookup_timeout_secs: u64,
    /// Lookups allowed in flight at once
    #[arg(short = 'w', long, value_name = "WORKERS", default_value = "4")]
    pub workers: usize,
    /// Don't write the {player}_{date}_gaps.csv file
    #[arg(long)]
    pub no_gaps_file: bool,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub round_file: PathBuf,
    pub distance_file: PathBuf,
    pub output_dir: PathBuf,
    pub mode: ExpansionMode,
    /// `None` when lookups are disabled.
    pub lookup_url: Option<String>,
    pub lookup_wait: Duration,
    pub annotator: AnnotatorConfig,
    pub write_gaps: bool,
}

impl CleanArgs {
    /// Defaults for a run over the two given files, without lookups.
    #[must_use]
    pub fn new(round_file: PathBuf, distance_file: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            round_file,
            distance_file,
            output_dir,
            mode: ExpansionMode::default(),
            lookup_url: None,
            lookup_wait: DEFAULT_WAIT,
            annotator: AnnotatorConfig::default(),
            write_gaps: true,
        }
    }
}
