//! Service layer: the report pipeline and scans.
//!
//! Every service is a pure, synchronous function over the caller-owned row
//! sequence; derived data is recomputed from scratch whenever the rows or
//! the configuration change, and nothing is retained between invocations.

pub mod error_scan;
pub mod focus;
pub mod graphs;
pub mod maps;
pub mod segmentation;
pub mod suggestions;

pub use error_scan::{scan_dcvg_magnitude, scan_on_off_jumps, scan_station_gaps};
pub use focus::FocusCell;
pub use graphs::compute_graph_segments;
pub use maps::compute_map_segments;
pub use segmentation::{allocate, distribute, Projector, Segment, SegmentSet};
pub use suggestions::{suggested_stations, suggestions_for_cell, SuggestedStations};
