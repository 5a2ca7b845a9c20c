//! Map report data structures.

use serde::{Deserialize, Serialize};

/// A GPS fix carried by a survey row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoFix {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

/// Where a map point sits on the rendered path.
///
/// `Break` marks a data gap: the renderer starts a new disconnected path
/// instead of interpolating a straight line across the missing readings.
/// Serializes as the string `"break"` or as the fix object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "LocationRepr", try_from = "LocationRepr")]
pub enum MapLocation {
    Break,
    Fix(GeoFix),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum LocationRepr {
    Sentinel(String),
    Fix(GeoFix),
}

impl From<MapLocation> for LocationRepr {
    fn from(location: MapLocation) -> Self {
        match location {
            MapLocation::Break => LocationRepr::Sentinel("break".to_string()),
            MapLocation::Fix(fix) => LocationRepr::Fix(fix),
        }
    }
}

impl TryFrom<LocationRepr> for MapLocation {
    type Error = String;

    fn try_from(repr: LocationRepr) -> Result<Self, Self::Error> {
        match repr {
            LocationRepr::Sentinel(s) if s == "break" => Ok(MapLocation::Break),
            LocationRepr::Sentinel(s) => Err(format!("unknown location sentinel `{s}`")),
            LocationRepr::Fix(fix) => Ok(MapLocation::Fix(fix)),
        }
    }
}

/// One point of a map segment.
///
/// `location: None` means the row carried no GPS fix; the renderer skips the
/// point without breaking the path, which is distinct from an explicit
/// [`MapLocation::Break`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub distance: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<MapLocation>,
}

/// One map-ready slice of the survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSegment {
    pub title: String,
    #[serde(rename = "startDistance")]
    pub start_distance: u32,
    #[serde(rename = "endDistance")]
    pub end_distance: u32,
    #[serde(rename = "data")]
    pub points: Vec<MapPoint>,
}
