// microcut-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Microcut: micro-episode segment planner",
    long_about = "Turns detector change points or scenes into contiguous, duration-bounded segments via microcut-core."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// TOML file with segmentation defaults
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Write logs to a timestamped file in this directory instead of stderr
    #[arg(long, global = true, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Selects boundaries near a target length from change points
    Select(SelectArgs),
    /// Merges contiguous scenes into segments within a duration range
    Merge(MergeArgs),
    /// Checks a previously written manifest
    Verify(VerifyArgs),
}

impl Commands {
    /// Name used in log file names.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Select(_) => "select",
            Commands::Merge(_) => "merge",
            Commands::Verify(_) => "verify",
        }
    }

    /// Whether stdout is reserved for manifest JSON.
    pub fn json_output(&self) -> bool {
        match self {
            Commands::Select(args) => args.output.json,
            Commands::Merge(args) => args.output.json,
            Commands::Verify(_) => false,
        }
    }
}

/// Output options shared by `select` and `merge`.
#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Write the segment manifest to this file
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Print the manifest JSON to stdout instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Total video duration in seconds
    #[arg(short, long, value_name = "SECONDS")]
    pub duration: f64,

    /// File with change points; repeat for several detectors (stdin if omitted)
    #[arg(short, long = "points", value_name = "FILE")]
    pub points: Vec<PathBuf>,

    /// Target segment length in seconds
    #[arg(short, long, value_name = "SECONDS", env = "MICROCUT_TARGET_DURATION")]
    pub target: Option<f64>,

    /// Snapping tolerance as a fraction of the target
    #[arg(long, value_name = "RATIO", env = "MICROCUT_SNAP_TOLERANCE")]
    pub snap_tolerance: Option<f64>,

    /// Change points closer than this collapse into one
    #[arg(long, value_name = "SECONDS")]
    pub epsilon: Option<f64>,

    /// Let the final segment run past the total duration
    #[arg(long, default_value_t = false)]
    pub no_clip: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct MergeArgs {
    /// File with scene intervals (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub intervals: Option<PathBuf>,

    /// Minimum segment length in seconds
    #[arg(long, value_name = "SECONDS", env = "MICROCUT_MIN_DURATION")]
    pub min: Option<f64>,

    /// Maximum segment length in seconds
    #[arg(long, value_name = "SECONDS", env = "MICROCUT_MAX_DURATION")]
    pub max: Option<f64>,

    /// Keep a short final group as its own segment
    #[arg(long, default_value_t = false)]
    pub keep_short_remainder: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Manifest file to check
    #[arg(short, long, value_name = "FILE")]
    pub manifest: PathBuf,

    /// Minimum segment length in seconds
    #[arg(long, value_name = "SECONDS", env = "MICROCUT_MIN_DURATION")]
    pub min: Option<f64>,

    /// Maximum segment length in seconds
    #[arg(long, value_name = "SECONDS", env = "MICROCUT_MAX_DURATION")]
    pub max: Option<f64>,

    /// Fail when any segment is outside the duration range
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}
