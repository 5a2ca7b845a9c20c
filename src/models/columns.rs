//! Grid column identities and capabilities.
//!
//! The survey sheet is addressed by a closed set of column identifiers
//! rather than header strings, so editability and scan-rule membership are
//! checked exhaustively at compile time. Serialized form uses the
//! spreadsheet header text, which is also what the grid collaborator keys
//! its cells by.

use serde::{Deserialize, Serialize};

/// One column of the survey sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "Data No")]
    DataNo,
    #[serde(rename = "Dist From Start")]
    DistanceFromStart,
    #[serde(rename = "Station No")]
    StationNo,
    #[serde(rename = "On Voltage")]
    OnVoltage,
    #[serde(rename = "Off Voltage")]
    OffVoltage,
    #[serde(rename = "DCVG Voltage")]
    DcvgVoltage,
    #[serde(rename = "Comment")]
    Comment,
    #[serde(rename = "DCP/Feature/DCVG Anomaly")]
    AnomalyNote,
    #[serde(rename = "On Time")]
    OnTime,
    #[serde(rename = "Off Time")]
    OffTime,
    #[serde(rename = "Latitude")]
    Latitude,
    #[serde(rename = "Longitude")]
    Longitude,
    #[serde(rename = "Altitude")]
    Altitude,
}

/// Value kind of a column, used by the edit popover to pick an input widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Integer,
    Decimal,
    Text,
    Time,
}

impl Column {
    /// All columns in sheet order.
    pub const ALL: [Column; 13] = [
        Column::DataNo,
        Column::DistanceFromStart,
        Column::StationNo,
        Column::OnVoltage,
        Column::OffVoltage,
        Column::DcvgVoltage,
        Column::Comment,
        Column::AnomalyNote,
        Column::OnTime,
        Column::OffTime,
        Column::Latitude,
        Column::Longitude,
        Column::Altitude,
    ];

    /// Spreadsheet header text for this column.
    pub fn header(self) -> &'static str {
        match self {
            Column::DataNo => "Data No",
            Column::DistanceFromStart => "Dist From Start",
            Column::StationNo => "Station No",
            Column::OnVoltage => "On Voltage",
            Column::OffVoltage => "Off Voltage",
            Column::DcvgVoltage => "DCVG Voltage",
            Column::Comment => "Comment",
            Column::AnomalyNote => "DCP/Feature/DCVG Anomaly",
            Column::OnTime => "On Time",
            Column::OffTime => "Off Time",
            Column::Latitude => "Latitude",
            Column::Longitude => "Longitude",
            Column::Altitude => "Altitude",
        }
    }

    /// Value kind of the column.
    pub fn kind(self) -> ColumnKind {
        match self {
            Column::DataNo | Column::DistanceFromStart => ColumnKind::Integer,
            Column::StationNo
            | Column::OnVoltage
            | Column::OffVoltage
            | Column::DcvgVoltage
            | Column::Latitude
            | Column::Longitude
            | Column::Altitude => ColumnKind::Decimal,
            Column::Comment | Column::AnomalyNote => ColumnKind::Text,
            Column::OnTime | Column::OffTime => ColumnKind::Time,
        }
    }

    /// Whether the technician may edit this column in the grid.
    pub fn is_editable(self) -> bool {
        matches!(
            self,
            Column::OnVoltage
                | Column::OffVoltage
                | Column::DcvgVoltage
                | Column::Comment
                | Column::AnomalyNote
        )
    }

    /// Whether the on/off voltage jump scan sweeps this column.
    pub fn in_on_off_rule(self) -> bool {
        matches!(self, Column::OnVoltage | Column::OffVoltage)
    }

    /// Whether the DCVG magnitude scan sweeps this column.
    pub fn in_dcvg_rule(self) -> bool {
        matches!(self, Column::DcvgVoltage)
    }

    /// Whether the station-gap scan sweeps this column as a position key.
    pub fn in_station_gap_rule(self) -> bool {
        matches!(self, Column::DistanceFromStart | Column::StationNo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_round_trips_through_serde() {
        for column in Column::ALL {
            let json = serde_json::to_string(&column).unwrap();
            assert_eq!(json, format!("\"{}\"", column.header()));
            let back: Column = serde_json::from_str(&json).unwrap();
            assert_eq!(back, column);
        }
    }

    #[test]
    fn editable_columns_are_the_measurement_and_annotation_ones() {
        let editable: Vec<Column> = Column::ALL
            .into_iter()
            .filter(|c| c.is_editable())
            .collect();
        assert_eq!(
            editable,
            vec![
                Column::OnVoltage,
                Column::OffVoltage,
                Column::DcvgVoltage,
                Column::Comment,
                Column::AnomalyNote,
            ]
        );
    }

    #[test]
    fn rule_membership_is_disjoint_between_voltage_rules() {
        for column in Column::ALL {
            assert!(!(column.in_on_off_rule() && column.in_dcvg_rule()));
        }
        assert!(Column::DistanceFromStart.in_station_gap_rule());
        assert!(Column::StationNo.in_station_gap_rule());
        assert!(!Column::Comment.in_station_gap_rule());
    }

    #[test]
    fn kinds_cover_every_column() {
        assert_eq!(Column::DataNo.kind(), ColumnKind::Integer);
        assert_eq!(Column::StationNo.kind(), ColumnKind::Decimal);
        assert_eq!(Column::Comment.kind(), ColumnKind::Text);
        assert_eq!(Column::OnTime.kind(), ColumnKind::Time);
    }
}
