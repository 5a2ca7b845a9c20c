//! Public API surface for the survey report core.
//!
//! This file consolidates the types a hosting application needs: domain
//! models, report DTOs, configuration, and the voltage units, so consumers
//! can `use cis_rust::api::*` without tracking the module layout.

pub use crate::config::{
    CoreConfig, MissingValuePolicy, ReportConfig, ScanConfig, MIN_SPLIT_WIDTH,
};
pub use crate::error::{SurveyError, SurveyResult};
pub use crate::models::columns::{Column, ColumnKind};
pub use crate::models::survey::{
    parse_survey_json_str, DcpRow, EditedSurvey, Survey, SurveyHeader, SurveyRow,
};
pub use crate::report::flags::{can_open_editor, is_flagged, ErrorFlag};
pub use crate::report::graph::{GraphPoint, GraphSegment};
pub use crate::report::map::{GeoFix, MapLocation, MapPoint, MapSegment};
pub use crate::services::error_scan::{scan_dcvg_magnitude, scan_on_off_jumps, scan_station_gaps};
pub use crate::services::focus::FocusCell;
pub use crate::services::graphs::compute_graph_segments;
pub use crate::services::maps::compute_map_segments;
pub use crate::services::suggestions::{
    suggested_stations, suggestions_for_cell, SuggestedStations,
};
pub use crate::units::{Millivolt, Millivolts, Volt, Volts};
