// ============================================================================
// microcut-cli/src/logging.rs
// ============================================================================
//
// LOGGING UTILITIES: Console and file logger setup
//
// The core only emits records through the `log` facade. The binary installs
// exactly one backend: a log4rs file appender when `--log-dir` is given,
// otherwise env_logger on stderr.

use log::LevelFilter;
use owo_colors::OwoColorize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// # Example
/// ```
/// let name = format!("microcut_select_{}.log", microcut_cli::logging::get_timestamp());
/// assert!(name.ends_with(".log"));
/// ```
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Log file for one run of `command` inside `log_dir`.
pub fn log_file_path(log_dir: &Path, command: &str) -> PathBuf {
    log_dir.join(format!("microcut_{}_{}.log", command, get_timestamp()))
}

/// Console level: debug when verbose, warnings only when stdout carries JSON.
pub fn console_level(verbose: bool, json_output: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if json_output {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Installs env_logger on stderr with colored level tags.
pub fn init_console_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .format(|buf, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR".bright_red().to_string(),
                log::Level::Warn => "WARN ".yellow().to_string(),
                log::Level::Info => "INFO ".green().to_string(),
                log::Level::Debug => "DEBUG".blue().to_string(),
                log::Level::Trace => "TRACE".magenta().to_string(),
            };
            writeln!(buf, "{} {}", level_str, record.args())
        })
        .filter(None, level)
        .target(env_logger::Target::Stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_shape() {
        let stamp = get_timestamp();
        assert_eq!(stamp.len(), 15);
        assert_eq!(stamp.as_bytes()[8], b'_');
    }

    #[test]
    fn log_file_is_named_after_command() {
        let path = log_file_path(Path::new("/tmp/logs"), "merge");
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("microcut_merge_"));
        assert!(name.ends_with(".log"));
    }

    #[test]
    fn json_output_quiets_console() {
        assert_eq!(console_level(false, false), LevelFilter::Info);
        assert_eq!(console_level(false, true), LevelFilter::Warn);
        assert_eq!(console_level(true, true), LevelFilter::Debug);
    }
}
