// microcut-cli/src/output.rs
//
// Human-readable terminal output. Styling goes through `console`, which drops
// colors when stdout is not a terminal.

use console::style;
use microcut_core::{SegmentManifest, SegmentStatus, format_timestamp};
use std::fmt::Display;

/// Print a heading with clear separation
pub fn print_heading(text: &str) {
    let line = "=".repeat(50);
    println!("{}", style(&line).blue().bright());
    println!(" {}", style(text).bold().white().bright());
    println!("{}", style(&line).blue().bright());
}

/// Print a section heading (smaller than main heading)
pub fn print_section(text: &str) {
    println!("\n{}", style(format!("----- {text} -----")).bold());
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", style(label).cyan().bright(), value);
}

/// Print an error message with red styling
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("Error:").for_stderr().red().bright().bold(), message);
}

pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", style("⚠").yellow().bold(), style(message).yellow());
}

/// Prints one row per segment and a totals line.
///
/// Status is `OK` inside `[min_duration, max_duration]`, `WARNING` outside.
pub fn print_segment_table(manifest: &SegmentManifest, min_duration: f64, max_duration: f64) {
    println!(
        "{}",
        style(format!(
            "{:>4}  {:>12}  {:>12}  {:>10}  {}",
            "#", "start", "end", "duration", "status"
        ))
        .dim()
    );

    for entry in &manifest.segments {
        let status = match entry.status(min_duration, max_duration) {
            SegmentStatus::Ok => style(SegmentStatus::Ok.to_string()).green(),
            SegmentStatus::Warning => style(SegmentStatus::Warning.to_string()).yellow().bold(),
        };
        println!(
            "{:>4}  {:>12}  {:>12}  {:>9.3}s  {}",
            entry.segment,
            format_timestamp(entry.start),
            format_timestamp(entry.end),
            entry.duration,
            status
        );
    }

    let warnings = manifest.out_of_range(min_duration, max_duration).count();
    println!(
        "\nTotal: {} segment(s), {:.3}s, {} outside {:.1}s-{:.1}s",
        manifest.segments.len(),
        manifest.total_duration(),
        warnings,
        min_duration,
        max_duration
    );
}
