// ============================================================================
// microcut-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for SegmentationConfig
//
// This module implements the builder pattern for SegmentationConfig,
// providing a fluent API over the defaults. Values are not checked here;
// call `SegmentationConfig::validate` (or let the planner do it) once the
// configuration is complete.

// ---- Internal crate imports ----
use super::{RemainderPolicy, SegmentationConfig};

/// Builder for creating SegmentationConfig instances.
///
/// # Examples
///
/// ```rust
/// use microcut_core::config::{RemainderPolicy, SegmentationConfigBuilder};
///
/// let config = SegmentationConfigBuilder::new()
///     .target_duration(120.0)
///     .snap_tolerance_ratio(0.1)
///     .remainder_policy(RemainderPolicy::KeepShort)
///     .build();
/// assert_eq!(config.snap_tolerance_ratio, 0.1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SegmentationConfigBuilder {
    config: SegmentationConfig,
}

impl SegmentationConfigBuilder {
    /// Creates a new builder populated with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration instead of the defaults.
    pub fn from_config(config: SegmentationConfig) -> Self {
        Self { config }
    }

    /// Sets the target segment duration for boundary selection.
    pub fn target_duration(mut self, seconds: f64) -> Self {
        self.config.target_duration = seconds;
        self
    }

    /// Sets the minimum merged group duration.
    pub fn min_duration(mut self, seconds: f64) -> Self {
        self.config.min_duration = seconds;
        self
    }

    /// Sets the maximum merged group duration.
    pub fn max_duration(mut self, seconds: f64) -> Self {
        self.config.max_duration = seconds;
        self
    }

    /// Sets the snapping tolerance as a fraction of the target duration.
    pub fn snap_tolerance_ratio(mut self, ratio: f64) -> Self {
        self.config.snap_tolerance_ratio = ratio;
        self
    }

    /// Sets the distance at which change points are considered duplicates.
    pub fn change_point_epsilon(mut self, seconds: f64) -> Self {
        self.config.change_point_epsilon = seconds;
        self
    }

    /// Enables or disables clipping of the final boundary.
    pub fn clip_to_duration(mut self, clip: bool) -> Self {
        self.config.clip_to_duration = clip;
        self
    }

    /// Sets the policy for a short trailing scene group.
    pub fn remainder_policy(mut self, policy: RemainderPolicy) -> Self {
        self.config.remainder_policy = policy;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> SegmentationConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_only_given_fields() {
        let config = SegmentationConfigBuilder::new()
            .min_duration(10.0)
            .clip_to_duration(false)
            .build();

        assert_eq!(config.min_duration, 10.0);
        assert!(!config.clip_to_duration);
        assert_eq!(config.max_duration, super::super::DEFAULT_MAX_DURATION);
    }

    #[test]
    fn from_config_keeps_existing_values() {
        let base = SegmentationConfigBuilder::new().target_duration(30.0).build();
        let config = SegmentationConfigBuilder::from_config(base)
            .max_duration(100.0)
            .build();
        assert_eq!(config.target_duration, 30.0);
        assert_eq!(config.max_duration, 100.0);
    }
}
