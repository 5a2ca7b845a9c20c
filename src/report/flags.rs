//! Error flag data structures and cell gating.

use serde::{Deserialize, Serialize};

use crate::models::columns::Column;

/// Identifies one flagged grid cell.
///
/// Flags are matched purely by `(row_index, column)` equality. A scan may
/// flag the same cell more than once; the list is not deduplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorFlag {
    #[serde(rename = "rowIndex")]
    pub row_index: usize,
    #[serde(rename = "columnName")]
    pub column: Column,
}

impl ErrorFlag {
    pub fn new(row_index: usize, column: Column) -> Self {
        Self { row_index, column }
    }
}

/// Whether any flag in the list targets the given cell.
pub fn is_flagged(flags: &[ErrorFlag], row_index: usize, column: Column) -> bool {
    flags
        .iter()
        .any(|flag| flag.row_index == row_index && flag.column == column)
}

/// Whether a cell opens the edit popover: editable columns always do, and a
/// flagged cell does regardless of column.
pub fn can_open_editor(flags: &[ErrorFlag], row_index: usize, column: Column) -> bool {
    column.is_editable() || is_flagged(flags, row_index, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_matches_by_row_and_column() {
        let flags = vec![
            ErrorFlag::new(2, Column::OnVoltage),
            ErrorFlag::new(3, Column::OnVoltage),
        ];
        assert!(is_flagged(&flags, 2, Column::OnVoltage));
        assert!(!is_flagged(&flags, 2, Column::OffVoltage));
        assert!(!is_flagged(&flags, 4, Column::OnVoltage));
    }

    #[test]
    fn editable_cell_opens_editor_without_flags() {
        assert!(can_open_editor(&[], 0, Column::Comment));
        assert!(!can_open_editor(&[], 0, Column::Latitude));
    }

    #[test]
    fn flagged_readonly_cell_opens_editor() {
        let flags = vec![ErrorFlag::new(5, Column::StationNo)];
        assert!(can_open_editor(&flags, 5, Column::StationNo));
        assert!(!can_open_editor(&flags, 6, Column::StationNo));
    }

    #[test]
    fn serializes_with_grid_field_names() {
        let flag = ErrorFlag::new(1, Column::DcvgVoltage);
        let json = serde_json::to_value(flag).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "rowIndex": 1, "columnName": "DCVG Voltage" })
        );
    }
}
