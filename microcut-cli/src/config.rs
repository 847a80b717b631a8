// microcut-cli/src/config.rs
//
// Loads segmentation defaults from an optional TOML file and layers the
// command-line (and environment) overrides on top.
//
// Precedence: flag, then environment variable (both resolved by clap), then
// the `--config` file, then the core defaults.

use microcut_core::{CoreError, RemainderPolicy, SegmentationConfig, SegmentationConfigBuilder};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::cli::{MergeArgs, SelectArgs, VerifyArgs};
use crate::error::CliResult;

/// Values accepted in a `--config` file. Every key is optional.
///
/// ```toml
/// target_duration = 90.0
/// min_duration = 30.0
/// max_duration = 75.0
/// snap_tolerance_ratio = 0.25
/// remainder_policy = "keep-short"
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub target_duration: Option<f64>,
    pub min_duration: Option<f64>,
    pub max_duration: Option<f64>,
    pub snap_tolerance_ratio: Option<f64>,
    pub change_point_epsilon: Option<f64>,
    pub clip_to_duration: Option<bool>,
    pub remainder_policy: Option<RemainderPolicy>,
}

impl FileConfig {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> CliResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            CoreError::PathError(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&text).map_err(|e| {
            CoreError::OperationFailed(format!(
                "Invalid config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Applies the values present in the file to `config`.
    pub fn apply(self, config: SegmentationConfig) -> SegmentationConfig {
        let mut builder = SegmentationConfigBuilder::from_config(config);
        if let Some(value) = self.target_duration {
            builder = builder.target_duration(value);
        }
        if let Some(value) = self.min_duration {
            builder = builder.min_duration(value);
        }
        if let Some(value) = self.max_duration {
            builder = builder.max_duration(value);
        }
        if let Some(value) = self.snap_tolerance_ratio {
            builder = builder.snap_tolerance_ratio(value);
        }
        if let Some(value) = self.change_point_epsilon {
            builder = builder.change_point_epsilon(value);
        }
        if let Some(value) = self.clip_to_duration {
            builder = builder.clip_to_duration(value);
        }
        if let Some(value) = self.remainder_policy {
            builder = builder.remainder_policy(value);
        }
        builder.build()
    }
}

/// Defaults, overlaid with the config file when one is given.
pub fn base_config(config_file: Option<&Path>) -> CliResult<SegmentationConfig> {
    let config = SegmentationConfig::default();
    match config_file {
        Some(path) => Ok(FileConfig::load(path)?.apply(config)),
        None => Ok(config),
    }
}

pub fn select_config(base: SegmentationConfig, args: &SelectArgs) -> SegmentationConfig {
    let mut builder = SegmentationConfigBuilder::from_config(base);
    if let Some(target) = args.target {
        builder = builder.target_duration(target);
    }
    if let Some(ratio) = args.snap_tolerance {
        builder = builder.snap_tolerance_ratio(ratio);
    }
    if let Some(epsilon) = args.epsilon {
        builder = builder.change_point_epsilon(epsilon);
    }
    if args.no_clip {
        builder = builder.clip_to_duration(false);
    }
    builder.build()
}

pub fn merge_config(base: SegmentationConfig, args: &MergeArgs) -> SegmentationConfig {
    let builder = with_bounds(SegmentationConfigBuilder::from_config(base), args.min, args.max);
    if args.keep_short_remainder {
        builder.remainder_policy(RemainderPolicy::KeepShort).build()
    } else {
        builder.build()
    }
}

pub fn verify_config(base: SegmentationConfig, args: &VerifyArgs) -> SegmentationConfig {
    with_bounds(SegmentationConfigBuilder::from_config(base), args.min, args.max).build()
}

fn with_bounds(
    mut builder: SegmentationConfigBuilder,
    min: Option<f64>,
    max: Option<f64>,
) -> SegmentationConfigBuilder {
    if let Some(min) = min {
        builder = builder.min_duration(min);
    }
    if let Some(max) = max {
        builder = builder.max_duration(max);
    }
    builder
}
