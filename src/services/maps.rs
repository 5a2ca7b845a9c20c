//! Map report computation.
//!
//! Projects distributed survey rows into GPS path points. Gaps become
//! explicit path breaks so the renderer starts a new disconnected polyline
//! instead of drawing a straight line across missing readings; rows without
//! a fix yield a point with no location, which the renderer skips without
//! breaking the path.

use log::debug;

use crate::config::{ReportConfig, MIN_SPLIT_WIDTH};
use crate::models::survey::SurveyRow;
use crate::report::map::{GeoFix, MapLocation, MapPoint, MapSegment};
use crate::services::segmentation::{allocate, distribute, Projector};

struct MapProjector;

impl Projector for MapProjector {
    type Point = MapPoint;

    fn placeholder(&self, distance: u32) -> MapPoint {
        MapPoint {
            distance,
            location: None,
        }
    }

    fn gap(&self, distance: u32) -> MapPoint {
        MapPoint {
            distance,
            location: Some(MapLocation::Break),
        }
    }

    fn row(&self, row: &SurveyRow) -> MapPoint {
        let location = match (row.latitude, row.longitude) {
            (Some(latitude), Some(longitude)) => Some(MapLocation::Fix(GeoFix {
                latitude,
                longitude,
                altitude: row.altitude,
            })),
            _ => None,
        };
        MapPoint {
            distance: row.distance,
            location,
        }
    }
}

/// Compute the map segments for a survey.
///
/// Returns an empty list when there are no rows or the split width is below
/// the usability floor.
pub fn compute_map_segments(rows: &[SurveyRow], config: &ReportConfig) -> Vec<MapSegment> {
    if rows.is_empty() || config.split_width < MIN_SPLIT_WIDTH {
        debug!(
            "map segmentation skipped: {} rows, split width {}m",
            rows.len(),
            config.split_width
        );
        return Vec::new();
    }

    let max_distance = rows.iter().map(|row| row.distance).max().unwrap_or(0);
    let projector = MapProjector;

    let mut set = allocate(max_distance, config.split_width, &projector);
    distribute(rows, &mut set, &projector);

    set.into_segments()
        .into_iter()
        .filter_map(|segment| {
            let start = segment.points.first()?.distance;
            let end = segment.points.last()?.distance;
            Some(MapSegment {
                title: format!("Map: {start}m - {end}m"),
                start_distance: start,
                end_distance: end,
                points: segment.points,
            })
        })
        .collect()
}
