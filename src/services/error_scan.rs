//! Error scans over the edited row sequence.
//!
//! Three independent sweeps flag cells whose values look wrong enough to
//! need technician review. Each scan is a pure function returning a fresh
//! flag list; a new scan replaces the previous list, flags never accumulate
//! across runs and rows are never mutated.
//!
//! Thresholds arrive in millivolts from the error panel; readings are
//! stored in volts, so the comparison happens in volts after converting the
//! threshold down.

use crate::config::MissingValuePolicy;
use crate::models::columns::Column;
use crate::models::survey::SurveyRow;
use crate::report::flags::ErrorFlag;
use crate::units::{Millivolts, Volt, Volts};

fn voltage_channel(row: &SurveyRow, column: Column) -> Option<Volts> {
    match column {
        Column::OnVoltage => row.on_voltage,
        Column::OffVoltage => row.off_voltage,
        Column::DcvgVoltage => row.dcvg_voltage,
        _ => None,
    }
}

fn position_value(row: &SurveyRow, column: Column) -> f64 {
    match column {
        Column::DistanceFromStart => f64::from(row.distance),
        Column::StationNo => row.station,
        _ => f64::NAN,
    }
}

/// Resolve an adjacent pair of optional readings under the missing-value
/// policy. `None` means the pair does not participate in the scan.
fn resolve_pair(
    current: Option<Volts>,
    previous: Option<Volts>,
    policy: MissingValuePolicy,
) -> Option<(Volts, Volts)> {
    match policy {
        MissingValuePolicy::TreatAsZero => Some((
            current.unwrap_or(Volts::new(0.0)),
            previous.unwrap_or(Volts::new(0.0)),
        )),
        MissingValuePolicy::Skip => Some((current?, previous?)),
    }
}

/// Flag adjacent-row jumps on the on/off voltage channels.
///
/// For each adjacent pair and each of the two channels independently, both
/// rows are flagged on that channel when the absolute difference exceeds
/// the threshold.
pub fn scan_on_off_jumps(
    rows: &[SurveyRow],
    threshold: Millivolts,
    policy: MissingValuePolicy,
) -> Vec<ErrorFlag> {
    let threshold = threshold.to::<Volt>();
    let mut flags = Vec::new();

    for index in 1..rows.len() {
        for column in [Column::OnVoltage, Column::OffVoltage] {
            let current = voltage_channel(&rows[index], column);
            let previous = voltage_channel(&rows[index - 1], column);
            let Some((current, previous)) = resolve_pair(current, previous, policy) else {
                continue;
            };
            if (current - previous).abs() > threshold {
                flags.push(ErrorFlag::new(index - 1, column));
                flags.push(ErrorFlag::new(index, column));
            }
        }
    }

    flags
}

/// Flag rows whose DCVG magnitude exceeds the threshold.
///
/// The anomaly-note column is flagged alongside the reading to prompt the
/// technician to annotate the spot.
pub fn scan_dcvg_magnitude(
    rows: &[SurveyRow],
    threshold: Millivolts,
    policy: MissingValuePolicy,
) -> Vec<ErrorFlag> {
    let threshold = threshold.to::<Volt>();
    let mut flags = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let value = match policy {
            MissingValuePolicy::TreatAsZero => row.dcvg_voltage.unwrap_or(Volts::new(0.0)),
            MissingValuePolicy::Skip => match row.dcvg_voltage {
                Some(value) => value,
                None => continue,
            },
        };
        if value.abs() > threshold {
            flags.push(ErrorFlag::new(index, Column::DcvgVoltage));
            flags.push(ErrorFlag::new(index, Column::AnomalyNote));
        }
    }

    flags
}

/// Flag adjacent-row jumps greater than one unit in either position column.
///
/// A distance or station jump is a data-integrity problem rather than a
/// single bad reading, so each offending pair yields six flags: both rows
/// across the position column, the comment column, and the anomaly column.
/// NaN stations never compare greater than the limit and are never flagged.
pub fn scan_station_gaps(rows: &[SurveyRow]) -> Vec<ErrorFlag> {
    let mut flags = Vec::new();

    for index in 1..rows.len() {
        for column in [Column::DistanceFromStart, Column::StationNo] {
            let current = position_value(&rows[index], column);
            let previous = position_value(&rows[index - 1], column);
            if (current - previous).abs() > 1.0 {
                for flagged in [column, Column::Comment, Column::AnomalyNote] {
                    flags.push(ErrorFlag::new(index - 1, flagged));
                }
                for flagged in [column, Column::Comment, Column::AnomalyNote] {
                    flags.push(ErrorFlag::new(index, flagged));
                }
            }
        }
    }

    flags
}
