//! Graph report computation.
//!
//! Projects distributed survey rows into chart-ready voltage points:
//! readings convert from volts to millivolts, gaps stay blank, and every
//! point carries the constant protection-reference line.

use log::debug;

use crate::config::{ReportConfig, MIN_SPLIT_WIDTH};
use crate::models::survey::SurveyRow;
use crate::report::graph::{GraphPoint, GraphSegment};
use crate::services::segmentation::{allocate, distribute, Projector};
use crate::units::{Millivolt, Millivolts};

struct GraphProjector {
    constant_voltage: Millivolts,
}

impl Projector for GraphProjector {
    type Point = GraphPoint;

    fn placeholder(&self, distance: u32) -> GraphPoint {
        GraphPoint {
            distance,
            on_voltage: None,
            off_voltage: None,
            constant_voltage: self.constant_voltage,
            dcvg: None,
            comment: None,
        }
    }

    fn gap(&self, distance: u32) -> GraphPoint {
        self.placeholder(distance)
    }

    fn row(&self, row: &SurveyRow) -> GraphPoint {
        GraphPoint {
            distance: row.distance,
            on_voltage: row.on_voltage.map(|v| v.to::<Millivolt>()),
            off_voltage: row.off_voltage.map(|v| v.to::<Millivolt>()),
            constant_voltage: self.constant_voltage,
            dcvg: row.dcvg_voltage.map(|v| v.to::<Millivolt>()),
            comment: row.comment_or_anomaly().map(str::to_owned),
        }
    }
}

/// Compute the chart segments for a survey.
///
/// Returns an empty list when there are no rows or the split width is below
/// the usability floor; the caller renders nothing until a usable width is
/// configured.
pub fn compute_graph_segments(rows: &[SurveyRow], config: &ReportConfig) -> Vec<GraphSegment> {
    if rows.is_empty() || config.split_width < MIN_SPLIT_WIDTH {
        debug!(
            "graph segmentation skipped: {} rows, split width {}m",
            rows.len(),
            config.split_width
        );
        return Vec::new();
    }

    let max_distance = rows.iter().map(|row| row.distance).max().unwrap_or(0);
    let projector = GraphProjector {
        constant_voltage: config.constant_voltage,
    };

    let mut set = allocate(max_distance, config.split_width, &projector);
    distribute(rows, &mut set, &projector);

    set.into_segments()
        .into_iter()
        .filter_map(|segment| {
            let start = segment.points.first()?.distance;
            let end = segment.points.last()?.distance;
            Some(GraphSegment {
                title: format!("Graph: {start}m - {end}m"),
                start_distance: start,
                end_distance: end,
                points: segment.points,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Volts;

    fn create_test_row(distance: u32, on: Option<f64>, off: Option<f64>) -> SurveyRow {
        SurveyRow {
            data_no: distance,
            distance,
            station: distance as f64,
            on_voltage: on.map(Volts::new),
            off_voltage: off.map(Volts::new),
            dcvg_voltage: None,
            comment: None,
            anomaly_note: None,
            on_time: None,
            off_time: None,
            latitude: None,
            longitude: None,
            altitude: None,
        }
    }

    fn config(split_width: u32) -> ReportConfig {
        ReportConfig {
            split_width,
            ..ReportConfig::default()
        }
    }

    #[test]
    fn empty_rows_produce_no_graphs() {
        assert!(compute_graph_segments(&[], &config(500)).is_empty());
    }

    #[test]
    fn narrow_split_width_produces_no_graphs() {
        let rows = vec![create_test_row(0, Some(-0.85), None)];
        assert!(compute_graph_segments(&rows, &config(99)).is_empty());
        assert!(!compute_graph_segments(&rows, &config(100)).is_empty());
    }

    #[test]
    fn converts_volts_to_millivolts_and_keeps_gaps_blank() {
        let rows = vec![
            create_test_row(0, Some(-0.85), Some(-0.78)),
            create_test_row(2, None, Some(-0.80)),
        ];
        let graphs = compute_graph_segments(&rows, &config(100));
        assert_eq!(graphs.len(), 1);

        let points = &graphs[0].points;
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].on_voltage, Some(Millivolts::new(-850.0)));
        assert_eq!(points[0].off_voltage, Some(Millivolts::new(-780.0)));
        // The gap at distance 1 stays blank rather than reading 0 mV.
        assert_eq!(points[1].on_voltage, None);
        assert_eq!(points[1].off_voltage, None);
        // A row with a partial reading keeps the absent channel blank.
        assert_eq!(points[2].on_voltage, None);
        assert_eq!(points[2].off_voltage, Some(Millivolts::new(-800.0)));
    }

    #[test]
    fn reference_line_spans_every_point() {
        let rows = vec![create_test_row(0, Some(-0.9), None), create_test_row(5, None, None)];
        let graphs = compute_graph_segments(&rows, &config(100));
        assert!(graphs[0]
            .points
            .iter()
            .all(|p| p.constant_voltage == Millivolts::new(-850.0)));
    }

    #[test]
    fn titles_and_ranges_come_from_first_and_last_point() {
        let rows: Vec<SurveyRow> = (0..=250)
            .map(|d| create_test_row(d, Some(-0.85), None))
            .collect();
        let graphs = compute_graph_segments(&rows, &config(100));
        assert_eq!(graphs.len(), 3);

        assert_eq!(graphs[0].title, "Graph: 0m - 99m");
        assert_eq!(graphs[0].start_distance, 0);
        assert_eq!(graphs[0].end_distance, 99);
        assert_eq!(graphs[1].title, "Graph: 100m - 199m");
        // The final segment truncates at the last observed distance.
        assert_eq!(graphs[2].title, "Graph: 200m - 250m");
        assert_eq!(graphs[2].end_distance, 250);
        assert_eq!(graphs[2].points.len(), 51);
    }

    #[test]
    fn comment_carries_through_with_anomaly_fallback() {
        let mut with_comment = create_test_row(0, None, None);
        with_comment.comment = Some("rectifier".to_string());

        let mut with_anomaly = create_test_row(1, None, None);
        with_anomaly.anomaly_note = Some("sidedrain".to_string());

        let graphs =
            compute_graph_segments(&[with_comment, with_anomaly], &config(100));
        let points = &graphs[0].points;
        assert_eq!(points[0].comment.as_deref(), Some("rectifier"));
        assert_eq!(points[1].comment.as_deref(), Some("sidedrain"));
    }

    #[test]
    fn recomputation_yields_identical_output() {
        let rows = vec![
            create_test_row(0, Some(-0.85), Some(-0.78)),
            create_test_row(7, None, None),
            create_test_row(150, Some(-0.92), None),
        ];
        let first = compute_graph_segments(&rows, &config(100));
        let second = compute_graph_segments(&rows, &config(100));
        assert_eq!(first, second);
    }
}
