use anyhow::Result;
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::path::Path;

/// Log line layout for planning run logs.
pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} [{l}] {m}{n}";

/// Routes all `log` output at or above `log_level` into `log_file`.
///
/// Must be called at most once per process; a second logger cannot be
/// installed.
pub fn setup_file_logging(log_file: &Path, log_level: LevelFilter) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .append(false)
        .build(log_file)?;

    let config = Config::builder()
        .appender(Appender::builder().build("plan_file", Box::new(file_appender)))
        .build(Root::builder().appender("plan_file").build(log_level))?;

    log4rs::init_config(config)?;

    Ok(())
}
