//! Pipeline configuration.
//!
//! Defaults mirror the survey editor UI: a 300 mV on/off jump threshold, a
//! 5 mV DCVG threshold, and a -850 mV protection reference line. All values
//! can be overridden from a TOML document, with missing keys falling back to
//! the defaults.
//!
//! ```toml
//! [report]
//! split_width = 1000
//! constant_voltage = -850.0
//!
//! [scan]
//! on_off_threshold = 250.0
//! dcvg_threshold = 5.0
//! missing_policy = "skip"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{SurveyError, SurveyResult};
use crate::units::Millivolts;

/// Split widths below this many meters disable segmentation entirely; the
/// resulting charts would be too narrow to read.
pub const MIN_SPLIT_WIDTH: u32 = 100;

/// How the jump-detection scans treat an absent voltage reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingValuePolicy {
    /// Substitute 0.0 V for the missing operand before subtracting. A
    /// genuinely absent reading can then flag a large spurious jump against
    /// a healthy neighbor.
    #[default]
    TreatAsZero,
    /// Leave pairs with a missing operand unflagged.
    Skip,
}

/// Configuration for the graph and map report pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Segment width in meters. Values below [`MIN_SPLIT_WIDTH`] yield empty
    /// report output.
    pub split_width: u32,
    /// The constant cathodic-protection reference drawn across every graph.
    pub constant_voltage: Millivolts,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            split_width: 500,
            constant_voltage: Millivolts::new(-850.0),
        }
    }
}

impl ReportConfig {
    /// Check that this configuration can produce report output.
    ///
    /// The compute entry points degrade to empty output on an unusable
    /// width; this is for callers that want the condition as an error, e.g.
    /// to prompt for a new width.
    pub fn validate(&self) -> SurveyResult<()> {
        if self.split_width < MIN_SPLIT_WIDTH {
            return Err(SurveyError::invalid_configuration(format!(
                "split width {} m is below the {} m floor",
                self.split_width, MIN_SPLIT_WIDTH
            )));
        }
        Ok(())
    }
}

/// Configuration for the error scans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// On/off voltage jump threshold.
    pub on_off_threshold: Millivolts,
    /// DCVG magnitude threshold.
    pub dcvg_threshold: Millivolts,
    /// Treatment of absent readings in the jump scans.
    pub missing_policy: MissingValuePolicy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            on_off_threshold: Millivolts::new(300.0),
            dcvg_threshold: Millivolts::new(5.0),
            missing_policy: MissingValuePolicy::default(),
        }
    }
}

/// Top-level configuration bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub report: ReportConfig,
    pub scan: ScanConfig,
}

impl CoreConfig {
    /// Parse a configuration from a TOML string. Missing keys keep their
    /// defaults.
    pub fn from_toml_str(input: &str) -> SurveyResult<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Load a configuration from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> SurveyResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
