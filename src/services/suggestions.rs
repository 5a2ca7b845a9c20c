//! Comment and anomaly suggestions from the DCP sheet.
//!
//! DCP/feature rows are keyed by station; when the technician edits a
//! comment or anomaly cell, the entries recorded at the same station are
//! offered as suggestions. Station equality is plain `f64` equality, so a
//! NaN station (non-numeric source cell) never matches anything.

use crate::models::columns::Column;
use crate::models::survey::{non_empty, DcpRow, Survey};

/// Stations that have at least one non-empty DCP entry, used by the grid to
/// mark cells with available suggestions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestedStations {
    pub comments: Vec<f64>,
    pub anomalies: Vec<f64>,
}

impl SuggestedStations {
    pub fn has_comment_suggestions(&self, station: f64) -> bool {
        self.comments.iter().any(|s| *s == station)
    }

    pub fn has_anomaly_suggestions(&self, station: f64) -> bool {
        self.anomalies.iter().any(|s| *s == station)
    }
}

fn dcp_value(row: &DcpRow, column: Column) -> Option<&str> {
    match column {
        Column::Comment => non_empty(&row.comment),
        Column::AnomalyNote => non_empty(&row.anomaly_note),
        _ => None,
    }
}

fn dcp_suggestions(dcp_rows: &[DcpRow], station: f64, column: Column) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();
    for row in dcp_rows.iter().filter(|row| row.station == station) {
        if let Some(value) = dcp_value(row, column) {
            if !suggestions.iter().any(|s| s == value) {
                suggestions.push(value.to_string());
            }
        }
    }
    suggestions
}

/// Edit suggestions for a cell.
///
/// Comment and anomaly cells collect the DCP entries recorded at the row's
/// station, deduplicated in first-seen order, with the cell's current value
/// appended last when non-empty. Every other column has no suggestions.
pub fn suggestions_for_cell(survey: &Survey, column: Column, row_index: usize) -> Vec<String> {
    if !matches!(column, Column::Comment | Column::AnomalyNote) {
        return Vec::new();
    }
    let Some(row) = survey.rows.get(row_index) else {
        return Vec::new();
    };

    let mut suggestions = dcp_suggestions(&survey.dcp_rows, row.station, column);

    let current = match column {
        Column::Comment => non_empty(&row.comment),
        Column::AnomalyNote => non_empty(&row.anomaly_note),
        _ => None,
    };
    if let Some(value) = current {
        if !suggestions.iter().any(|s| s == value) {
            suggestions.push(value.to_string());
        }
    }

    suggestions
}

/// Collect the stations owning non-empty DCP comments and anomaly notes.
pub fn suggested_stations(dcp_rows: &[DcpRow]) -> SuggestedStations {
    let comments = dcp_rows
        .iter()
        .filter(|row| non_empty(&row.comment).is_some())
        .map(|row| row.station)
        .collect();
    let anomalies = dcp_rows
        .iter()
        .filter(|row| non_empty(&row.anomaly_note).is_some())
        .map(|row| row.station)
        .collect();
    SuggestedStations {
        comments,
        anomalies,
    }
}
