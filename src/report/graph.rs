//! Graph report data structures.

use serde::{Deserialize, Serialize};

use crate::units::Millivolts;

/// A single chart point on the continuous integer distance axis.
///
/// Measurement fields are `None` where no row covered the distance; a gap
/// point differs from a 0 mV reading, and the chart leaves it blank instead
/// of drawing a line to zero. The reference line is present on every point
/// so it spans the whole chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint {
    pub distance: u32,
    #[serde(rename = "onVoltage", default, skip_serializing_if = "Option::is_none")]
    pub on_voltage: Option<Millivolts>,
    #[serde(rename = "offVoltage", default, skip_serializing_if = "Option::is_none")]
    pub off_voltage: Option<Millivolts>,
    #[serde(rename = "constantVoltage")]
    pub constant_voltage: Millivolts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dcvg: Option<Millivolts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// One chart-ready slice of the survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSegment {
    pub title: String,
    #[serde(rename = "startDistance")]
    pub start_distance: u32,
    #[serde(rename = "endDistance")]
    pub end_distance: u32,
    #[serde(rename = "data")]
    pub points: Vec<GraphPoint>,
}
